/// Floor a savings account balance must not drop below after a withdrawal.
pub const MINIMUM_BALANCE: f64 = 100.0;

/// The kind of an account and the data only that kind carries.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    Basic,
    Savings { interest_rate: f64, minimum_balance: f64 },
    Current { overdraft_limit: f64 },
}

impl AccountKind {
    /// Label used in the account details header.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Account",
            Self::Savings { .. } => "Savings Account",
            Self::Current { .. } => "Current Account",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: String,
    account_holder: String,
    balance: f64,
    kind: AccountKind,
}

impl Account {
    /// A generic account with no withdrawal allowance beyond its balance.
    pub fn new(account_number: impl Into<String>, account_holder: impl Into<String>, balance: f64) -> Self {
        Self::with_kind(account_number, account_holder, balance, AccountKind::Basic)
    }

    /// A savings account. `interest_rate` is a fraction, `0.02` meaning 2%.
    pub fn savings(
        account_number: impl Into<String>,
        account_holder: impl Into<String>,
        balance: f64,
        interest_rate: f64,
    ) -> Self {
        let kind = AccountKind::Savings {
            interest_rate,
            minimum_balance: MINIMUM_BALANCE,
        };
        Self::with_kind(account_number, account_holder, balance, kind)
    }

    pub fn current(
        account_number: impl Into<String>,
        account_holder: impl Into<String>,
        balance: f64,
        overdraft_limit: f64,
    ) -> Self {
        let kind = AccountKind::Current { overdraft_limit };
        Self::with_kind(account_number, account_holder, balance, kind)
    }

    fn with_kind(
        account_number: impl Into<String>,
        account_holder: impl Into<String>,
        balance: f64,
        kind: AccountKind,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            account_holder: account_holder.into(),
            balance,
            kind,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn account_holder(&self) -> &str {
        &self.account_holder
    }

    pub const fn balance(&self) -> f64 {
        self.balance
    }

    pub const fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub const fn interest_rate(&self) -> Option<f64> {
        match self.kind {
            AccountKind::Savings { interest_rate, .. } => Some(interest_rate),
            _ => None,
        }
    }

    pub const fn overdraft_limit(&self) -> Option<f64> {
        match self.kind {
            AccountKind::Current { overdraft_limit } => Some(overdraft_limit),
            _ => None,
        }
    }

    pub fn add_amount(self, amount: f64) -> Self {
        Self {
            balance: self.balance + amount,
            ..self
        }
    }

    pub fn sub_amount(self, amount: f64) -> Self {
        Self {
            balance: self.balance - amount,
            ..self
        }
    }
}
