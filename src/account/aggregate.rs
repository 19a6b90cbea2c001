use crate::account::command::AccountCommand;
use crate::account::error::AccountError;
use crate::account::event::AccountEvent;
use crate::account::state::{Account, AccountKind};
use crate::Aggregate;

const ACCOUNT: &str = "account";

pub struct AccountAggregate;

impl AccountAggregate {
    fn validate_withdraw(account: &Account, amount: f64) -> Result<(), AccountError> {
        let balance: f64 = account.balance();
        let positive: bool = amount > 0.0;

        match account.kind() {
            AccountKind::Basic if positive && balance >= amount => Ok(()),
            AccountKind::Basic => Err(AccountError::InsufficientFunds),
            AccountKind::Savings { minimum_balance, .. } if positive && balance - amount >= *minimum_balance => Ok(()),
            AccountKind::Savings { minimum_balance, .. } => Err(AccountError::MinimumBalance {
                minimum: *minimum_balance,
            }),
            AccountKind::Current { overdraft_limit } if positive && balance + *overdraft_limit >= amount => Ok(()),
            AccountKind::Current { .. } => Err(AccountError::OverdraftExceeded),
        }
    }
}

impl Aggregate for AccountAggregate {
    const NAME: &'static str = ACCOUNT;
    type State = Account;
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = AccountError;

    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::Deposit { amount } if amount > 0.0 => Ok(vec![AccountEvent::Deposited {
                amount,
                balance: state.balance() + amount,
            }]),
            AccountCommand::Deposit { .. } => Err(AccountError::InvalidDeposit),
            AccountCommand::Withdraw { amount } => {
                Self::validate_withdraw(state, amount)?;
                Ok(vec![AccountEvent::Withdrawn {
                    amount,
                    balance: state.balance() - amount,
                }])
            }
        }
    }

    fn apply_event(state: Self::State, payload: &Self::Event) -> Self::State {
        match payload {
            AccountEvent::Deposited { amount, .. } => state.add_amount(*amount),
            AccountEvent::Withdrawn { amount, .. } => state.sub_amount(*amount),
        }
    }
}
