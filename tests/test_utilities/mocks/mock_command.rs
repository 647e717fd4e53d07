use console_kit::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock Command that records every input it runs with
#[derive(Clone)]
pub struct MockCommand {
    name: String,
    return_code: i32,
    pub calls: Arc<Mutex<Vec<Input>>>,
}

impl MockCommand {
    pub fn new(name: &str, return_code: i32) -> Self {
        Self {
            name: name.to_string(),
            return_code,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_calls(&self) -> Vec<Input> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Command for MockCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "mock command"
    }

    fn execute(&self, input: &Input, output: &mut dyn Output) -> Result<i32> {
        self.calls.lock().unwrap().push(input.clone());
        output.writeln(&format!("{} {}", self.name, input.arguments().join(" ")))?;
        Ok(self.return_code)
    }
}

/// Mock Command that always fails
pub struct FailingCommand;

impl Command for FailingCommand {
    fn name(&self) -> &str {
        "fail"
    }

    fn execute(&self, _input: &Input, _output: &mut dyn Output) -> Result<i32> {
        anyhow::bail!("command failed on purpose")
    }
}
