//! User input utilities for interactive prompts.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Prompts the user for a string input, trimmed.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_string(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush prompt")?;
    read_trimmed_line(&mut io::stdin().lock())
}

/// Prompts the user for a string input with a default value.
///
/// An empty answer returns the default (or an empty string when there is
/// none).
pub fn prompt_string_with_default(prompt: &str, default: Option<&str>) -> Result<String> {
    match default {
        Some(default_val) if !default_val.is_empty() => print!("{prompt} [{default_val}]: "),
        _ => print!("{prompt}: "),
    }
    io::stdout().flush().context("Failed to flush prompt")?;

    let answer = read_trimmed_line(&mut io::stdin().lock())?;
    Ok(with_default(answer, default))
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive). Empty input is 'no'.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => eprintln!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

fn read_trimmed_line(reader: &mut impl BufRead) -> Result<String> {
    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    Ok(input.trim().to_string())
}

fn with_default(answer: String, default: Option<&str>) -> String {
    if answer.is_empty() {
        default.unwrap_or_default().to_string()
    } else {
        answer
    }
}

fn parse_confirmation(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}
