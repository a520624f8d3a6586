use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner currently on screen, if any. Log output pauses it while writing.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Shows a spinner for the duration of the scanner run. Nothing is drawn in quiet mode.
pub fn start_scan_spinner(target: &str, q_level: u8) -> Option<ProgressBar> {
    if q_level > 0 {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS);

    pb.set_style(style);
    pb.set_message(format!("Scanning {}", target.green().bold()));
    pb.enable_steady_tick(Duration::from_millis(100));

    if let Ok(mut active) = ACTIVE.lock() {
        *active = Some(pb.clone());
    }
    Some(pb)
}

pub fn stop(spinner: Option<ProgressBar>) {
    if let Ok(mut active) = ACTIVE.lock() {
        active.take();
    }
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
}

enum Stream {
    Stdout,
    Stderr,
}

/// Writer handed to the tracing subscriber so log lines don't tear the spinner.
pub struct SpinnerWriter {
    stream: Stream,
}

pub fn stdout_writer() -> SpinnerWriter {
    SpinnerWriter { stream: Stream::Stdout }
}

pub fn stderr_writer() -> SpinnerWriter {
    SpinnerWriter { stream: Stream::Stderr }
}

impl SpinnerWriter {
    fn write_through(&self, buf: &[u8]) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(buf),
            Stream::Stderr => io::stderr().lock().write_all(buf),
        }
    }
}

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let active: Option<ProgressBar> = ACTIVE.lock().ok().and_then(|guard| guard.clone());
        match active {
            Some(pb) => pb.suspend(|| self.write_through(buf))?,
            None => self.write_through(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush(),
            Stream::Stderr => io::stderr().flush(),
        }
    }
}
