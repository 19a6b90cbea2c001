use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::state::SequenceNumber;

/// Marker trait for every aggregate event.
pub trait Event: Serialize + DeserializeOwned {}

impl<T> Event for T where T: Serialize + DeserializeOwned {}

/// An `EventEnvelope` contains the payload (the original event) alongside the event's metadata.
#[derive(Debug, Clone)]
pub struct EventEnvelope<E> {
    /// Uniquely identifies an event among all events emitted from all aggregates.
    pub id: Uuid,
    /// The aggregate instance that emitted the event.
    pub aggregate_id: Uuid,
    /// The original, emitted, event.
    pub payload: E,
    /// The timestamp of when the event is applied.
    pub occurred_on: DateTime<Utc>,
    /// The sequence number of the event, within its specific aggregate instance.
    pub sequence_number: SequenceNumber,
}

impl<E> EventEnvelope<E> {
    pub fn new(aggregate_id: Uuid, sequence_number: SequenceNumber, payload: E) -> Self {
        Self {
            id: Uuid::new_v4(),
            aggregate_id,
            payload,
            occurred_on: Utc::now(),
            sequence_number,
        }
    }

    /// Returns the sequence number of the event, within its specific aggregate instance.
    pub const fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    /// Returns the original, emitted, event.
    pub const fn payload(&self) -> &E {
        &self.payload
    }
}
