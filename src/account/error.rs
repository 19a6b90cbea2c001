use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    #[error("Invalid deposit amount. Please enter a positive value.")]
    InvalidDeposit,

    #[error("Invalid withdrawal amount or insufficient balance.")]
    InsufficientFunds,

    #[error("Invalid withdrawal amount or insufficient balance (must maintain a minimum balance of ${minimum}).")]
    MinimumBalance { minimum: f64 },

    #[error("Invalid withdrawal amount or overdraft limit exceeded.")]
    OverdraftExceeded,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransferError {
    #[error("Insufficient balance in the savings account for the transfer.")]
    InsufficientSavings,

    #[error("Account {0} is not a current account.")]
    NotCurrent(String),

    #[error("Account {0} is not a savings account.")]
    NotSavings(String),

    #[error(transparent)]
    Account(#[from] AccountError),
}
