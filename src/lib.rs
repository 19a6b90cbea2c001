//! Bank accounts (basic, savings and current) modelled as event-sourced aggregates.
//!
//! Commands are validated by the [`Aggregate`] into events, events are applied to the
//! [`AggregateState`] by the [`AggregateManager`] and handed to the registered [`EventHandler`]s.
//! Nothing is persisted: the state lives as long as the caller keeps it.

pub use crate::aggregate::Aggregate;
pub use crate::event::{Event, EventEnvelope};
pub use crate::handler::EventHandler;
pub use crate::manager::AggregateManager;
pub use crate::state::AggregateState;

mod aggregate;
mod event;
mod handler;
mod manager;
mod state;

pub mod account;
pub mod demo;

pub mod types {
    pub use crate::state::SequenceNumber;
}
