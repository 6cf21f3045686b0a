pub mod helm_command;
pub mod rctl_command;

pub use helm_command::HelmCommandAdapter;
pub use rctl_command::RctlCommandAdapter;

use std::process::Output;

/// Stdout followed by stderr, trimmed.
fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut text = stdout.trim_end().to_string();
    if !stderr.trim().is_empty() {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(stderr.trim_end());
    }
    text
}
