use crate::shared::error::ConsoleError;

/// Structured input handed to a command.
///
/// Holds the command name the input was parsed for (if any) and the
/// argument tokens that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    command: Option<String>,
    arguments: Vec<String>,
}

impl Input {
    /// Creates an input from argument tokens, without a command name.
    pub fn new<I, S>(arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: None,
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a full command line: the first token is the command name.
    ///
    /// # Errors
    /// Returns `ConsoleError::MalformedSignature` on an unterminated quote
    /// or a trailing escape.
    pub fn parse(signature: &str) -> Result<Self, ConsoleError> {
        let mut tokens = tokenize(signature)?.into_iter();
        let command = tokens.next();
        Ok(Self {
            command,
            arguments: tokens.collect(),
        })
    }

    /// Parses an argument string; every token is an argument.
    ///
    /// # Errors
    /// Same as [`Input::parse`].
    pub fn parse_arguments(arguments: &str) -> Result<Self, ConsoleError> {
        Ok(Self::new(tokenize(arguments)?))
    }

    /// Returns the same input bound to the given command name.
    pub fn with_command(mut self, name: impl Into<String>) -> Self {
        self.command = Some(name.into());
        self
    }

    pub fn command_name(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Whether a flag such as `--force` or `-f` appears before any `--`.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.options_section().any(|token| token == flag)
    }

    /// Value of a long option, given as `--name=value` or `--name value`.
    pub fn option(&self, name: &str) -> Option<&str> {
        let long = format!("--{}", name.trim_start_matches('-'));
        let mut tokens = self.options_section();
        while let Some(token) = tokens.next() {
            if token == &long {
                return tokens.next().map(String::as_str);
            }
            if let Some(value) = token
                .strip_prefix(long.as_str())
                .and_then(|rest| rest.strip_prefix('='))
            {
                return Some(value);
            }
        }
        None
    }

    /// Argument vector suitable for `clap::Parser::try_parse_from`.
    ///
    /// The first element is the command name, falling back to `program`.
    pub fn argv(&self, program: &str) -> Vec<String> {
        let name = self.command.as_deref().unwrap_or(program);
        std::iter::once(name.to_string())
            .chain(self.arguments.iter().cloned())
            .collect()
    }

    fn options_section(&self) -> impl Iterator<Item = &String> {
        self.arguments.iter().take_while(|token| token.as_str() != "--")
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for token in self.command.iter().chain(self.arguments.iter()) {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            let needs_quotes = token
                .chars()
                .any(|c| c.is_whitespace() || c == '"' || c == '\'');
            if token.is_empty() || needs_quotes {
                write!(f, "'{}'", token.replace('\'', "'\\''"))?;
            } else {
                write!(f, "{}", token)?;
            }
        }
        Ok(())
    }
}

/// Splits a command line into tokens.
///
/// Whitespace separates tokens. Single quotes are literal, double quotes
/// allow `\"` and `\\`, and a backslash outside quotes escapes the next
/// character.
pub fn tokenize(line: &str) -> Result<Vec<String>, ConsoleError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let malformed = |offset: usize| ConsoleError::MalformedSignature {
        signature: line.to_string(),
        near: line[offset..].chars().take(10).collect(),
    };

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote = Quote::None;
    let mut quote_start = 0;
    let mut chars = line.char_indices();

    while let Some((offset, c)) = chars.next() {
        match (quote, c) {
            (Quote::None, c) if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (Quote::None, '\'') => {
                quote = Quote::Single;
                quote_start = offset;
                in_token = true;
            }
            (Quote::None, '"') => {
                quote = Quote::Double;
                quote_start = offset;
                in_token = true;
            }
            (Quote::None, '\\') => match chars.next() {
                Some((_, escaped)) => {
                    current.push(escaped);
                    in_token = true;
                }
                None => return Err(malformed(offset)),
            },
            (Quote::Single, '\'') | (Quote::Double, '"') => quote = Quote::None,
            (Quote::Double, '\\') => match chars.next() {
                Some((_, escaped @ ('"' | '\\'))) => current.push(escaped),
                Some((_, other)) => {
                    current.push('\\');
                    current.push(other);
                }
                None => return Err(malformed(offset)),
            },
            (_, c) => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote != Quote::None {
        return Err(malformed(quote_start));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
