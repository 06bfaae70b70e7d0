use colored::Colorize;
use std::fmt::Display;

/// Prints the generated command, and nothing else, to stdout.
pub fn print_command(command: &str) {
    println!("{}", command);
}

/// Prints an error to stderr.
pub fn print_error(err: &impl Display) {
    eprintln!("{} {}", "error:".red().bold(), err);
}
