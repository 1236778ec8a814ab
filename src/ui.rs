//! Status-line helpers for installer output.

use colored::Colorize;

const BANNER_WIDTH: usize = 60;

/// Print a section banner: a 60-column `=` rule above and below the
/// centered title.
pub fn header(title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!("\n{}", rule.magenta().bold());
    println!("{}", format!("{:^width$}", title, width = BANNER_WIDTH).magenta().bold());
    println!("{}\n", rule.magenta().bold());
}

pub fn success(text: &str) {
    println!("{} {}", "✓".green().bold(), text);
}

pub fn info(text: &str) {
    println!("{} {}", "ℹ".cyan(), text);
}

pub fn warn(text: &str) {
    println!("{} {}", "⚠".yellow().bold(), text);
}
