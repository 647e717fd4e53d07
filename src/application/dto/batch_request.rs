use super::OutputTarget;
use crate::console::Verbosity;
use serde_json::Value;

/// BatchRequest - Parameters for one batch run
///
/// Entries are kept as loosely-typed JSON values so string and object
/// forms from batch files, config files and the command line share one
/// validation path.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// Entries in execution order
    pub entries: Vec<Value>,
    /// Destination of the batch's output
    pub target: OutputTarget,
    /// Raw write mode name, resolved only when a file target is opened
    pub mode_name: String,
    /// Verbosity applied to the output
    pub verbosity: Verbosity,
}

impl BatchRequest {
    pub fn new(entries: Vec<Value>, target: OutputTarget) -> Self {
        Self {
            entries,
            target,
            mode_name: "append".to_string(),
            verbosity: Verbosity::Normal,
        }
    }

    /// Builds a request from plain command lines.
    pub fn from_command_lines<I, S>(lines: I, target: OutputTarget) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            lines.into_iter().map(|line| Value::String(line.into())).collect(),
            target,
        )
    }

    pub fn with_mode_name(mut self, mode_name: impl Into<String>) -> Self {
        self.mode_name = mode_name.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = BatchRequest::new(vec![], OutputTarget::Stdout);
        assert_eq!(request.mode_name, "append");
        assert_eq!(request.verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_from_command_lines() {
        let request = BatchRequest::from_command_lines(["echo a", "exit 1"], OutputTarget::Stdout)
            .with_mode_name("reset")
            .with_verbosity(Verbosity::Verbose);

        assert_eq!(
            request.entries,
            vec![Value::from("echo a"), Value::from("exit 1")]
        );
        assert_eq!(request.mode_name, "reset");
        assert_eq!(request.verbosity, Verbosity::Verbose);
    }
}
