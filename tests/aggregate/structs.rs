use serde::{Deserialize, Serialize};
use thiserror::Error;

pub enum TestCommand {
    Single,
    Multi,
    Reject,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TestEvent {
    pub add: i32,
}

#[derive(Debug, Error)]
pub enum TestError {
    #[error("test error")]
    Rejected,
}
