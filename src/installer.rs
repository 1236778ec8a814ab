//! End-to-end install flow: repository-marker gate, directory pass, literal
//! files, placeholder files, generated docs, closing summary.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::manifest;
use crate::scaffold::Scaffold;
use crate::ui;

pub struct InstallOptions {
    /// Directory the project tree is rooted at.
    pub root: PathBuf,
    /// Skip the confirmation prompt when no repository marker is found.
    pub assume_yes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    Cancelled,
}

/// Run the installer against real stdin.
pub fn execute(options: &InstallOptions) -> Result<Outcome> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run(options, &mut input)
}

/// Full install sequence. Returns `Cancelled` without touching the
/// filesystem when the user declines the confirmation prompt.
pub fn run(options: &InstallOptions, input: &mut impl BufRead) -> Result<Outcome> {
    ui::header("AI Infrastructure Projects Installer");

    // Heuristic precondition: a missing .git usually means the user is in
    // the wrong directory. One chance to back out, nothing written yet.
    if !options.root.join(".git").exists() {
        ui::warn("Not in a git repository. Initialize one first:");
        ui::info("  git init");
        ui::info(
            "  git remote add origin https://github.com/YOUR_USERNAME/ai-infrastructure-projects",
        );
        println!();
        if !options.assume_yes && !confirm(input)? {
            return Ok(Outcome::Cancelled);
        }
    }

    let scaffold = Scaffold::new(&options.root);

    ui::info("Creating project structure...");
    scaffold.ensure_directories(manifest::DIRECTORIES)?;
    ui::success("Created directory structure");
    println!();

    ui::info("Creating essential files...");
    for (path, content) in manifest::LITERAL_FILES {
        scaffold.write_file(path, content)?;
    }
    println!();

    ui::info("Creating placeholder files with instructions...");
    for (path, description) in manifest::PLACEHOLDERS {
        scaffold.write_placeholder(path, description)?;
    }
    println!();

    scaffold.write_file("docs/SETUP_INSTRUCTIONS.md", manifest::SETUP_INSTRUCTIONS)?;
    scaffold.write_file("docs/QUICK_REFERENCE.md", manifest::QUICK_REFERENCE)?;

    ui::header("Installation Complete!");
    print_next_steps();

    Ok(Outcome::Installed)
}

/// Blocking yes/no question; only `y`/`Y` proceeds.
fn confirm(input: &mut impl BufRead) -> Result<bool> {
    print!("Continue anyway? (y/n): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn print_next_steps() {
    println!("{}", "Next steps:".green().bold());
    println!("  1. Read: {}", "docs/SETUP_INSTRUCTIONS.md".bold());
    println!("  2. Copy artifact contents into placeholder files");
    println!("  3. Configure: terraform/*/terraform.tfvars");
    println!("  4. Deploy: ./scripts/quick-start.sh");
    println!();
    println!("{}", "Documentation:".cyan());
    println!("  • Setup Guide: docs/SETUP_INSTRUCTIONS.md");
    println!("  • Quick Reference: docs/QUICK_REFERENCE.md");
    println!("  • Architecture: docs/ARCHITECTURE.md");
    println!("  • Troubleshooting: docs/TROUBLESHOOTING.md");
    println!();
    println!("{}", "⚠ Don't forget to:".yellow().bold());
    println!("  • Copy all artifact contents");
    println!("  • Configure AWS and GCP credentials");
    println!("  • Update terraform.tfvars files");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirm_accepts_y_in_either_case() {
        assert!(confirm(&mut Cursor::new("y\n")).unwrap());
        assert!(confirm(&mut Cursor::new("Y\n")).unwrap());
        assert!(confirm(&mut Cursor::new("  y  \n")).unwrap());
    }

    #[test]
    fn test_confirm_rejects_everything_else() {
        assert!(!confirm(&mut Cursor::new("n\n")).unwrap());
        assert!(!confirm(&mut Cursor::new("yes\n")).unwrap());
        assert!(!confirm(&mut Cursor::new("\n")).unwrap());
        // EOF with no answer counts as a decline
        assert!(!confirm(&mut Cursor::new("")).unwrap());
    }
}
