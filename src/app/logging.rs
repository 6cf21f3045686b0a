//! Timestamped console log lines.

use chrono::{SecondsFormat, Utc};

const RELAY_INDENT: &str = "    ";

/// Render a single log line with a UTC timestamp prefix.
pub fn format_line(message: &str) -> String {
    format!("[{}] {}", Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true), message)
}

/// Indent every line of externally produced output.
pub fn indent(text: &str) -> String {
    text.lines().map(|line| format!("{RELAY_INDENT}{line}")).collect::<Vec<_>>().join("\n")
}

pub fn info(message: &str) {
    println!("{}", format_line(message));
}

/// Error records go to stderr; continuation lines are indented like relayed output.
pub fn error(message: &str) {
    let (first, rest) = message.split_once('\n').unwrap_or((message, ""));
    eprintln!("{}", format_line(first));
    relay_error(rest);
}

/// Relay output of an external tool under the preceding log line.
pub fn relay(text: &str) {
    if !text.trim().is_empty() {
        println!("{}", indent(text));
    }
}

/// Relay tool output under an error record.
pub fn relay_error(text: &str) {
    if !text.trim().is_empty() {
        eprintln!("{}", indent(text));
    }
}
