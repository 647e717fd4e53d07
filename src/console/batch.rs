use crate::console::{Application, Input};
use crate::ports::inbound::Command;
use crate::ports::outbound::{Output, ProgressReporter};
use crate::shared::error::ConsoleError;
use crate::shared::Result;
use serde_json::Value;

/// Keys an object-form entry must carry, in this order.
const OBJECT_ENTRY_KEYS: [&str; 2] = ["command", "input"];

/// A command reference held by a queued invocation.
pub enum CommandHandle<'app> {
    /// A command owned by the hosting application
    Registered(&'app dyn Command),
    /// A command built by the caller and handed to the batch
    Owned(Box<dyn Command + 'app>),
}

impl CommandHandle<'_> {
    pub fn get(&self) -> &dyn Command {
        match self {
            CommandHandle::Registered(command) => *command,
            CommandHandle::Owned(command) => &**command,
        }
    }
}

/// One queued command invocation, resolved when it was enqueued.
pub enum Invocation<'app> {
    /// Parsed from a raw command line
    Signature {
        signature: String,
        command: &'app dyn Command,
        input: Input,
    },
    /// A pre-built command with its exact input
    Object {
        command: CommandHandle<'app>,
        input: Input,
    },
}

impl Invocation<'_> {
    pub fn command(&self) -> &dyn Command {
        match self {
            Invocation::Signature { command, .. } => *command,
            Invocation::Object { command, .. } => command.get(),
        }
    }

    pub fn input(&self) -> &Input {
        match self {
            Invocation::Signature { input, .. } | Invocation::Object { input, .. } => input,
        }
    }

    fn execute(&self, output: &mut dyn Output) -> Result<i32> {
        self.command().execute(self.input(), output)
    }
}

impl std::fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Invocation::Signature { signature, .. } => {
                f.debug_tuple("Signature").field(signature).finish()
            }
            Invocation::Object { command, input } => f
                .debug_struct("Object")
                .field("command", &command.get().name())
                .field("input", input)
                .finish(),
        }
    }
}

/// Runs a sequence of commands against one application and one output.
///
/// Entries are resolved to commands as they are added; `run` executes
/// them in FIFO order and combines their return codes with bitwise AND.
pub struct Batch<'app, O: Output> {
    application: &'app Application,
    output: O,
    entries: Vec<Invocation<'app>>,
}

impl<'app, O: Output> Batch<'app, O> {
    pub fn new(application: &'app Application, output: O) -> Self {
        Self {
            application,
            output,
            entries: Vec::new(),
        }
    }

    /// Moves the queued entries onto another output.
    ///
    /// Lets a caller validate every entry before the real output is opened.
    pub fn with_output<P: Output>(self, output: P) -> Batch<'app, P> {
        Batch {
            application: self.application,
            output,
            entries: self.entries,
        }
    }

    /// Queues a raw command line such as `cache:clear --env=prod`.
    ///
    /// The command name is everything before the first space; the whole
    /// line is parsed as the command's input.
    ///
    /// # Errors
    /// Returns `ConsoleError::CommandNotFound` if the name is not
    /// registered, or `ConsoleError::MalformedSignature` if the line cannot
    /// be tokenized.
    pub fn add(&mut self, signature: &str) -> std::result::Result<&mut Self, ConsoleError> {
        let name = signature.split(' ').next().unwrap_or_default();
        let command = self.application.find(name)?;
        let input = Input::parse(signature)?;

        self.entries.push(Invocation::Signature {
            signature: signature.to_string(),
            command,
            input,
        });
        Ok(self)
    }

    /// Queues a pre-built command that runs with exactly `input`.
    pub fn add_object<C: Command + 'app>(&mut self, command: C, input: Input) -> &mut Self {
        self.entries.push(Invocation::Object {
            command: CommandHandle::Owned(Box::new(command)),
            input,
        });
        self
    }

    /// Queues a registered command by name with a pre-built input.
    ///
    /// # Errors
    /// Returns `ConsoleError::CommandNotFound` if the name is not registered.
    pub fn add_registered(
        &mut self,
        name: &str,
        input: Input,
    ) -> std::result::Result<&mut Self, ConsoleError> {
        let command = self.application.find(name)?;
        self.entries.push(Invocation::Object {
            command: CommandHandle::Registered(command),
            input,
        });
        Ok(self)
    }

    /// Queues an entry read from a batch file or config.
    ///
    /// A string is a command line (see [`Batch::add`]). An object must be
    /// exactly `{"command": <name>, "input": <string | [string]>}`.
    ///
    /// # Errors
    /// - `ConsoleError::BatchSignatureExpected` for numbers, booleans, null
    ///   and arrays
    /// - `ConsoleError::CommandArrayFormatMismatch` for objects with other
    ///   keys, keys out of order, or values of the wrong type
    /// - `ConsoleError::InputMustNotBeNull` when `input` is null
    pub fn add_value(&mut self, value: &Value) -> std::result::Result<&mut Self, ConsoleError> {
        match value {
            Value::String(signature) => self.add(signature),
            Value::Object(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                let mismatch = || ConsoleError::CommandArrayFormatMismatch {
                    keys: keys
                        .iter()
                        .map(|key| format!("\"{}\"", key))
                        .collect::<Vec<_>>()
                        .join(", "),
                };

                if keys != OBJECT_ENTRY_KEYS {
                    return Err(mismatch());
                }
                let name = map["command"].as_str().ok_or_else(mismatch)?;
                let input = match &map["input"] {
                    Value::Null => {
                        return Err(ConsoleError::InputMustNotBeNull {
                            command: name.to_string(),
                        })
                    }
                    Value::String(arguments) => Input::parse_arguments(arguments)?,
                    Value::Array(tokens) => Input::new(
                        tokens
                            .iter()
                            .map(|token| token.as_str().map(str::to_string))
                            .collect::<Option<Vec<_>>>()
                            .ok_or_else(mismatch)?,
                    ),
                    _ => return Err(mismatch()),
                };

                self.add_registered(name, input.with_command(name))
            }
            other => Err(ConsoleError::BatchSignatureExpected {
                found: describe(other),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Invocation<'app>] {
        &self.entries
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs every queued command and returns the AND of their codes.
    ///
    /// # Errors
    /// The first command error aborts the run; the remaining entries are
    /// discarded.
    pub fn run(&mut self) -> Result<i32> {
        self.run_with_progress(&())
    }

    /// Same as [`Batch::run`], reporting each step to `reporter`.
    pub fn run_with_progress<R: ProgressReporter + ?Sized>(&mut self, reporter: &R) -> Result<i32> {
        let entries = std::mem::take(&mut self.entries);
        let total = entries.len();

        if self.output.is_verbose() {
            self.output.writeln(&format!("Running {} commands", total))?;
        }

        let mut aggregate: Option<i32> = None;
        for (index, invocation) in entries.iter().enumerate() {
            let name = invocation.command().name();
            reporter.report_command(index, total, name);
            tracing::debug!(command = %name, index, total, "running batch entry");

            let code = invocation.execute(&mut self.output)?;
            tracing::debug!(command = %name, code, "batch entry finished");

            aggregate = Some(aggregate.map_or(code, |acc| acc & code));
        }

        let return_code = aggregate.unwrap_or(0);
        reporter.report_completion(return_code);
        Ok(return_code)
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean ({})", b),
        Value::Number(n) => format!("number ({})", n),
        Value::String(s) => format!("string ({})", s),
        Value::Array(items) => format!("array of {} item(s)", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}
