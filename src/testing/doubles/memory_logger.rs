use std::cell::RefCell;

use crate::ports::Logger;

/// Logger that keeps messages for assertions.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    pub messages: RefCell<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Logger for MemoryLogger {
    fn log_message(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
