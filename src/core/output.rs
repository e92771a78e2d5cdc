//! Unified output formatting for messages printed outside the interactive UI.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, blue for commands
//! - **Errors on stderr**: Success and info lines go to stdout
//! - **Printed after the UI is torn down**: Nothing here writes to the alternate screen

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Prints the git command about to run, so it shows above git's own output
pub fn print_command(command: &str) {
    println!("\n{} {}", "$".bright_black(), command.blue());
}
