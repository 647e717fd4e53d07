use console_kit::prelude::*;

/// Mock ProgressReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_command(&self, index: usize, total: usize, name: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Command {}/{}: {}", index + 1, total, name));
    }

    fn report_completion(&self, return_code: i32) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", return_code));
    }
}
