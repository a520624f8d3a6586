use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::{error, info};

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target bypass level filtering and are printed without a prefix.
pub const RAW_TARGET: &str = "scanrun::print";

pub fn print(msg: &str) {
    info!(target: RAW_TARGET, "{msg}");
}

pub fn print_err(msg: &str) {
    error!(target: RAW_TARGET, "{msg}");
}

/// Repeats captured process output, dropping the final newline the formatter adds back.
pub fn echo_stdout(captured: &str) {
    print(captured.strip_suffix('\n').unwrap_or(captured));
}

pub fn echo_stderr(captured: &str) {
    print_err(captured.strip_suffix('\n').unwrap_or(captured));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator(q_level: u8) {
    if q_level > 0 {
        return;
    }
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn aligned_line<V: Display>(key: &str, value: V, key_width: usize) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.to_string().color(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}
