pub mod aggregate;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod reporter;
pub mod state;
pub mod transfer;

pub use aggregate::AccountAggregate;
pub use command::AccountCommand;
pub use config::TransferPolicy;
pub use display::{format_account, Money};
pub use error::{AccountError, TransferError};
pub use event::AccountEvent;
pub use reporter::{ConsoleReporter, Output};
pub use state::{Account, AccountKind};
pub use transfer::transfer;

use crate::{AggregateManager, AggregateState};

pub type AccountState = AggregateState<Account>;
pub type AccountManager = AggregateManager<AccountAggregate>;
