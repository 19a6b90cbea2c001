#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountCommand {
    Deposit { amount: f64 },
    Withdraw { amount: f64 },
}
