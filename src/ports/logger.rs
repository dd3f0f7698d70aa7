/// Port for user-facing progress messages.
pub trait Logger {
    fn log_message(&self, message: &str);
}
