use crate::account::aggregate::AccountAggregate;
use crate::account::command::AccountCommand;
use crate::account::config::TransferPolicy;
use crate::account::error::TransferError;
use crate::account::state::{Account, AccountKind};
use crate::{Aggregate, AggregateManager, AggregateState};

/// Moves the policy amount from `savings` into `current`. Both states are updated in place.
///
/// The savings withdrawal is validated before the current account is credited, so a withdrawal that
/// would break the savings minimum balance fails the whole transfer and leaves both accounts as they were.
#[tracing::instrument(skip_all, fields(from = %savings.inner().account_number(), to = %current.inner().account_number()), err)]
pub fn transfer(
    manager: &AggregateManager<AccountAggregate>,
    policy: &TransferPolicy,
    current: &mut AggregateState<Account>,
    savings: &mut AggregateState<Account>,
) -> Result<(), TransferError> {
    if !matches!(current.inner().kind(), AccountKind::Current { .. }) {
        return Err(TransferError::NotCurrent(current.inner().account_number().to_string()));
    }

    if !matches!(savings.inner().kind(), AccountKind::Savings { .. }) {
        return Err(TransferError::NotSavings(savings.inner().account_number().to_string()));
    }

    let amount: f64 = policy.amount();

    if savings.inner().balance() < amount {
        return Err(TransferError::InsufficientSavings);
    }

    let withdraw = AccountCommand::Withdraw { amount };
    AccountAggregate::handle_command(savings.inner(), withdraw)?;

    manager.handle_command(current, AccountCommand::Deposit { amount })?;
    manager.handle_command(savings, withdraw)?;

    Ok(())
}
