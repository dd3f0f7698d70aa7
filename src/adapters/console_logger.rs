use crate::ports::Logger;

/// Prints progress messages to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log_message(&self, message: &str) {
        println!("{}", message);
    }
}
