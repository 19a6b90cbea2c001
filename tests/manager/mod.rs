use bank_accounts::{AggregateManager, AggregateState};

use crate::aggregate::{TestAggregate, TestAggregateState, TestCommand, TestError, TestEventHandler};

#[test]
fn handle_command_test() {
    let manager: AggregateManager<TestAggregate> = AggregateManager::new();
    let mut aggregate_state: AggregateState<TestAggregateState> = AggregateState::new(TestAggregateState::default());

    let envelopes = manager
        .handle_command(&mut aggregate_state, TestCommand::Single)
        .unwrap();
    assert_eq!(envelopes.len(), 1);
    assert_eq!(aggregate_state.inner().count, 2);
    assert_eq!(aggregate_state.sequence_number(), &1);

    manager
        .handle_command(&mut aggregate_state, TestCommand::Multi)
        .unwrap();
    assert_eq!(aggregate_state.inner().count, 4);
    assert_eq!(aggregate_state.sequence_number(), &3);
}

#[test]
fn envelopes_carry_aggregate_id_and_sequence_numbers_test() {
    let manager: AggregateManager<TestAggregate> = AggregateManager::new();
    let mut aggregate_state: AggregateState<TestAggregateState> = AggregateState::new(TestAggregateState::default());
    let aggregate_id = *aggregate_state.id();

    let envelopes = manager
        .handle_command(&mut aggregate_state, TestCommand::Multi)
        .unwrap();

    let sequence_numbers: Vec<i32> = envelopes.iter().map(|envelope| *envelope.sequence_number()).collect();
    assert_eq!(sequence_numbers, vec![1, 2]);
    assert!(envelopes.iter().all(|envelope| envelope.aggregate_id == aggregate_id));
    assert_ne!(envelopes[0].id, envelopes[1].id);
    assert!(envelopes[0].occurred_on <= envelopes[1].occurred_on);
}

#[test]
fn rejected_command_leaves_state_untouched_test() {
    let event_handler = TestEventHandler::default();
    let manager: AggregateManager<TestAggregate> = AggregateManager::new().with_event_handler(event_handler.clone());
    let mut aggregate_state: AggregateState<TestAggregateState> = AggregateState::new(TestAggregateState::default());

    let result = manager.handle_command(&mut aggregate_state, TestCommand::Reject);

    assert!(matches!(result, Err(TestError::Rejected)));
    assert_eq!(aggregate_state.inner().count, 1);
    assert_eq!(aggregate_state.sequence_number(), &0);
    assert_eq!(*event_handler.total.borrow(), 0);
}

#[test]
fn event_handlers_run_once_per_event_test() {
    let first = TestEventHandler::default();
    let second = TestEventHandler::default();
    let manager: AggregateManager<TestAggregate> = AggregateManager::new()
        .with_event_handler(first.clone())
        .with_event_handler(second.clone());
    let mut aggregate_state: AggregateState<TestAggregateState> = AggregateState::new(TestAggregateState::default());

    manager
        .handle_command(&mut aggregate_state, TestCommand::Multi)
        .unwrap();
    manager
        .handle_command(&mut aggregate_state, TestCommand::Single)
        .unwrap();

    assert_eq!(*first.total.borrow(), 3);
    assert_eq!(*first.seen.borrow(), vec![1, 2, 3]);
    assert_eq!(*second.seen.borrow(), vec![1, 2, 3]);
}
