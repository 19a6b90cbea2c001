use std::cell::RefCell;
use std::rc::Rc;

use bank_accounts::types::SequenceNumber;
use bank_accounts::{EventEnvelope, EventHandler};

use crate::aggregate::{TestAggregate, TestEvent};

#[derive(Clone, Default)]
pub struct TestEventHandler {
    pub total: Rc<RefCell<i32>>,
    pub seen: Rc<RefCell<Vec<SequenceNumber>>>,
}

impl EventHandler<TestAggregate> for TestEventHandler {
    fn handle(&self, event: &EventEnvelope<TestEvent>) {
        *self.total.borrow_mut() += event.payload.add;
        self.seen.borrow_mut().push(event.sequence_number);
    }
}
