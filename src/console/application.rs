use crate::ports::inbound::Command;
use crate::shared::error::ConsoleError;
use std::collections::BTreeMap;

/// Hosting application: an explicit registry from command name to handler.
#[derive(Default)]
pub struct Application {
    name: String,
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a command under its own name, replacing any previous one.
    pub fn register<C: Command + 'static>(&mut self, command: C) -> &mut Self {
        let name = command.name().to_string();
        if self.commands.insert(name.clone(), Box::new(command)).is_some() {
            tracing::debug!(command = %name, "replaced previously registered command");
        }
        self
    }

    /// Looks a command up by name.
    ///
    /// # Errors
    /// Returns `ConsoleError::CommandNotFound` listing the known names.
    pub fn find(&self, name: &str) -> Result<&dyn Command, ConsoleError> {
        self.commands
            .get(name)
            .map(|command| &**command)
            .ok_or_else(|| ConsoleError::CommandNotFound {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    pub fn has(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|command| &**command)
    }
}
