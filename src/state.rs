use uuid::Uuid;

use crate::event::EventEnvelope;

pub type SequenceNumber = i32;

/// The internal state for an Aggregate.
///
/// It contains an id representing the aggregate id, an incremental sequence number and a state
/// defined by the user of this library.
#[derive(Debug, Clone)]
pub struct AggregateState<S> {
    id: Uuid,
    sequence_number: SequenceNumber,
    inner: S,
}

impl<S> AggregateState<S> {
    /// Creates a new instance of an [`AggregateState`] with a new unique id.
    pub fn new(inner: S) -> Self {
        Self::with_id(Uuid::new_v4(), inner)
    }

    /// Creates a new instance of an [`AggregateState`] with the given aggregate id.
    pub fn with_id(id: impl Into<Uuid>, inner: S) -> Self {
        Self {
            id: id.into(),
            sequence_number: 0,
            inner,
        }
    }

    /// Returns an Uuid representing the aggregate id
    pub const fn id(&self) -> &Uuid {
        &self.id
    }

    /// Returns the internal state
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the internal sequence number incremented by 1.
    pub fn next_sequence_number(&self) -> SequenceNumber {
        self.sequence_number + 1
    }

    /// Returns the internal sequence number
    pub const fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    /// Folds the envelope payload into the inner state and moves the sequence number forward.
    pub(crate) fn apply_envelope<E>(&mut self, envelope: &EventEnvelope<E>, function: fn(S, &E) -> S)
    where
        S: Clone,
    {
        self.inner = function(self.inner.clone(), envelope.payload());
        self.sequence_number = *envelope.sequence_number();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: i32, payload: &i32) -> i32 {
        state + payload
    }

    #[test]
    fn apply_envelope_moves_sequence_number() {
        let mut state: AggregateState<i32> = AggregateState::new(1);
        assert_eq!(*state.sequence_number(), 0);

        let envelope = EventEnvelope::new(*state.id(), state.next_sequence_number(), 41);
        state.apply_envelope(&envelope, add);

        assert_eq!(*state.inner(), 42);
        assert_eq!(*state.sequence_number(), 1);
        assert_eq!(state.next_sequence_number(), 2);
    }

    #[test]
    fn with_id_keeps_the_given_id() {
        let id = Uuid::new_v4();
        let state = AggregateState::with_id(id, ());
        assert_eq!(state.id(), &id);
    }
}
