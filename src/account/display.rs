use std::fmt::{Display, Formatter};

use crate::account::state::{Account, AccountKind};

/// Monetary amount rendered as `$` followed by exactly two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub f64);

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Renders the account details block, one line per field.
impl Display for Account {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Account Details for {} (ID: {}):",
            self.kind().label(),
            self.account_number()
        )?;
        writeln!(f, "   Holder: {}", self.account_holder())?;
        writeln!(f, "   Balance: {}", Money(self.balance()))?;

        match self.kind() {
            AccountKind::Basic => Ok(()),
            AccountKind::Savings { interest_rate, .. } => writeln!(f, "   Interest Rate: {:.2}%", interest_rate * 100.0),
            AccountKind::Current { overdraft_limit } => writeln!(f, "   Overdraft Limit: {}", Money(*overdraft_limit)),
        }
    }
}

pub fn format_account(account: &Account) -> String {
    account.to_string()
}
