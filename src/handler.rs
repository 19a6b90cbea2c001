use crate::event::EventEnvelope;
use crate::Aggregate;

/// This trait is used to implement an `EventHandler`. An event handler is intended to be an entity
/// which can perform side effects once an event has been applied to the aggregate state.
pub trait EventHandler<A>
where
    A: Aggregate,
{
    /// Handle an event and perform an action.
    /// All the errors should be handled from within the `EventHandler` and shouldn't panic.
    fn handle(&self, event: &EventEnvelope<A::Event>);

    /// The name of the event handler. By default, this is the type name of the event handler,
    /// but it can be overridden to provide a custom name. This name is used as
    /// part of tracing spans, to identify the event handler being run.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
