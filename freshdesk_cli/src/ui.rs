//! Styled terminal messages. Everything goes to stderr since stdout carries MCP traffic.

use console::style;

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

pub fn error_with_details(message: &str, details: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
    eprintln!("  {}", style(details).dim());
}

pub fn info(message: &str) {
    eprintln!("{} {}", style("•").cyan(), message);
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

pub fn debug(message: &str) {
    log::debug!("{}", message);
}
