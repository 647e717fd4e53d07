use crate::console::Verbosity;
use crate::ports::outbound::Output;
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, Write};

/// StreamOutput adapter writing to any `Write` implementor
///
/// Each write is flushed immediately so console output interleaves with
/// whatever else the process prints.
pub struct StreamOutput<W: Write> {
    stream: W,
    verbosity: Verbosity,
}

impl<W: Write> StreamOutput<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            verbosity: Verbosity::Normal,
        }
    }

    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl StreamOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Output for StreamOutput<W> {
    fn do_write(&mut self, message: &str, newline: bool) -> Result<()> {
        self.stream
            .write_all(message.as_bytes())
            .context("Failed to write to output stream")?;
        if newline {
            self.stream
                .write_all(b"\n")
                .context("Failed to write to output stream")?;
        }
        self.stream.flush().context("Failed to flush output stream")?;
        Ok(())
    }

    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }
}

/// BufferedOutput adapter collecting output in memory
#[derive(Debug, Default)]
pub struct BufferedOutput {
    buffer: String,
    verbosity: Verbosity,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far and empties the buffer.
    pub fn fetch(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

impl Output for BufferedOutput {
    fn do_write(&mut self, message: &str, newline: bool) -> Result<()> {
        self.buffer.push_str(message);
        if newline {
            self.buffer.push('\n');
        }
        Ok(())
    }

    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }
}
