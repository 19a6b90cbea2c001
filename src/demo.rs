//! The fixed demonstration scenario run by the binary.

use std::io::Write;

use thiserror::Error;

use crate::account::{
    transfer, Account, AccountCommand, AccountManager, AccountState, ConsoleReporter, Output, TransferPolicy,
};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Runs the scenario writing everything to `output`, and returns the final `(savings, current)` states.
///
/// A rejected operation is reported by writing its error message; it never stops the scenario.
pub fn run<W: Write + 'static>(output: &Output<W>) -> Result<(AccountState, AccountState), DemoError> {
    let manager: AccountManager = AccountManager::new().with_event_handler(ConsoleReporter::new(output.clone()));

    let mut savings: AccountState = AccountState::new(Account::savings("S123", "John Doe", 1000.0, 0.02));
    let mut current: AccountState = AccountState::new(Account::current("C456", "Jane Doe", 2000.0, 500.0));

    output.write(savings.inner())?;
    output.write(current.inner())?;

    if let Err(error) = manager.handle_command(&mut savings, AccountCommand::Deposit { amount: 500.0 }) {
        output.line(error)?;
    }

    if let Err(error) = manager.handle_command(&mut current, AccountCommand::Withdraw { amount: 1000.0 }) {
        output.line(error)?;
    }

    output.write(savings.inner())?;
    output.write(current.inner())?;

    if let Err(error) = transfer(&manager, &TransferPolicy::default(), &mut current, &mut savings) {
        output.line(error)?;
    }

    output.write(savings.inner())?;
    output.write(current.inner())?;
    output.flush()?;

    Ok((savings, current))
}
