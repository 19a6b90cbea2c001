use crate::event::EventEnvelope;
use crate::handler::EventHandler;
use crate::{Aggregate, AggregateState};

/// The AggregateManager is responsible for coupling the Aggregate with its event handlers, so that
/// the events are applied to the state and handed to the side effects when a command is handled.
pub struct AggregateManager<A>
where
    A: Aggregate,
{
    event_handlers: Vec<Box<dyn EventHandler<A>>>,
}

impl<A> AggregateManager<A>
where
    A: Aggregate,
{
    /// Creates a new instance of an [`AggregateManager`] without event handlers.
    pub fn new() -> Self {
        Self {
            event_handlers: vec![],
        }
    }

    /// Registers an event handler, run after every applied event in registration order.
    pub fn with_event_handler(mut self, event_handler: impl EventHandler<A> + 'static) -> Self {
        self.event_handlers.push(Box::new(event_handler));
        self
    }

    /// Validates and handles the command onto the given state, applies the resulting events and
    /// then passes them to the event handlers.
    ///
    /// A rejected command leaves the state untouched and runs no handler.
    #[tracing::instrument(skip_all, fields(aggregate = A::NAME, aggregate_id = %aggregate_state.id()), err)]
    pub fn handle_command(
        &self,
        aggregate_state: &mut AggregateState<A::State>,
        command: A::Command,
    ) -> Result<Vec<EventEnvelope<A::Event>>, A::Error> {
        let events: Vec<A::Event> = A::handle_command(aggregate_state.inner(), command)?;

        let mut envelopes: Vec<EventEnvelope<A::Event>> = Vec::with_capacity(events.len());

        for event in events {
            let envelope = EventEnvelope::new(
                *aggregate_state.id(),
                aggregate_state.next_sequence_number(),
                event,
            );

            aggregate_state.apply_envelope(&envelope, A::apply_event);
            tracing::debug!(sequence_number = envelope.sequence_number, "event applied");

            for event_handler in self.event_handlers.iter() {
                let span = tracing::debug_span!("event_handler", name = event_handler.name());
                let _enter = span.enter();
                event_handler.handle(&envelope);
            }

            envelopes.push(envelope);
        }

        Ok(envelopes)
    }
}

impl<A> Default for AggregateManager<A>
where
    A: Aggregate,
{
    fn default() -> Self {
        Self::new()
    }
}
