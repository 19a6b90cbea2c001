use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::account::display::Money;

/// `balance` is the account balance once the event has been applied.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum AccountEvent {
    Deposited { amount: f64, balance: f64 },
    Withdrawn { amount: f64, balance: f64 },
}

impl AccountEvent {
    pub const fn amount(&self) -> f64 {
        match self {
            Self::Deposited { amount, .. } | Self::Withdrawn { amount, .. } => *amount,
        }
    }

    pub const fn balance(&self) -> f64 {
        match self {
            Self::Deposited { balance, .. } | Self::Withdrawn { balance, .. } => *balance,
        }
    }
}

impl Display for AccountEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposited { balance, .. } => write!(f, "Deposit successful. New balance: {}", Money(*balance)),
            Self::Withdrawn { balance, .. } => write!(f, "Withdrawal successful. New balance: {}", Money(*balance)),
        }
    }
}
