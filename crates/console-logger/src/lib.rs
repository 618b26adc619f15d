//! Console Logger
//!
//! `tracing` subscriber for the browser:
//! - each formatted event goes to `console.{debug,log,warn,error}` by level
//! - the most recent lines stay in memory so feedback reports can attach them
//!
//! Off wasm32 the lines go to stderr instead, which keeps the crate testable.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Lines kept for `recent_lines`
pub const RING_CAPACITY: usize = 200;

static RING: Mutex<LogRing> = Mutex::new(LogRing::new(RING_CAPACITY));

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Install the console subscriber as the global default
pub fn init(level: Level) -> Result<(), LoggerError> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(ConsoleMakeWriter)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInstalled(e.to_string()))
}

/// Snapshot of the buffered lines, oldest first
pub fn recent_lines() -> Vec<String> {
    match RING.lock() {
        Ok(ring) => ring.lines(),
        Err(poisoned) => poisoned.into_inner().lines(),
    }
}

fn remember(line: &str) {
    let mut ring = match RING.lock() {
        Ok(ring) => ring,
        Err(poisoned) => poisoned.into_inner(),
    };
    ring.push(line.to_string());
}

/// Bounded FIFO of log lines
#[derive(Debug)]
pub struct LogRing {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogRing {
    pub const fn new(capacity: usize) -> Self {
        Self { lines: VecDeque::new(), capacity }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Hands out one `ConsoleWriter` per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it when dropped
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }

    fn emit(&self, line: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let value = wasm_bindgen::JsValue::from_str(line);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&value),
                Level::WARN => web_sys::console::warn_1(&value),
                Level::INFO => web_sys::console::log_1(&value),
                _ => web_sys::console::debug_1(&value),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = self.level;
            eprintln!("{line}");
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        remember(line);
        self.emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_drops_oldest() {
        let mut ring = LogRing::new(3);
        for i in 0..5 {
            ring.push(format!("line {i}"));
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_ring_stays_empty() {
        let mut ring = LogRing::new(0);
        ring.push("ignored".into());
        assert!(ring.is_empty());
    }

    #[test]
    fn test_writer_records_line_on_drop() {
        {
            let mut writer = ConsoleMakeWriter.make_writer();
            writer.write_all(b"INFO skate: unique-marker-7f3a\n").unwrap();
        }
        assert!(recent_lines().iter().any(|l| l == "INFO skate: unique-marker-7f3a"));
    }

    #[test]
    fn test_blank_writes_are_not_recorded() {
        {
            let mut writer = ConsoleMakeWriter.make_writer();
            writer.write_all(b"\n").unwrap();
        }
        assert!(!recent_lines().iter().any(String::is_empty));
    }

    #[test]
    fn test_subscriber_captures_events() {
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_writer(ConsoleMakeWriter)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(visits = 4, "install banner marker-91c2");
        });
        let lines = recent_lines();
        let line = lines.iter().find(|l| l.contains("marker-91c2")).expect("event recorded");
        assert!(line.contains("WARN"));
        assert!(line.contains("visits=4"));
    }
}
