//! # Log Sinks
//!
//! Where finished log lines go. The journal hands a sink one complete line at
//! a time while holding the log lock, so implementations never see partial or
//! interleaved output.
//!
//! - [`FileSink`] writes to a file and flushes after each line, so the file is
//!   complete up to the last event even if the process is killed.
//! - [`MemorySink`] keeps lines in memory and can be cloned and read back,
//!   which is what the tests use.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for formatted log lines (without trailing newline).
pub trait LogSink: Send + 'static {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Appends lines to a file, flushing each one.
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self { writer: BufWriter::new(file) })
    }
}

impl LogSink for FileSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

/// In-memory sink; clones share the same buffer.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl LogSink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
        Ok(())
    }
}
