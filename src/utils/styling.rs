//! Terminal styling for the messages printed on standard output

use console::style;

use crate::cli::Outcome;

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), style(message).green());
}

/// Print a usage or flag problem
pub fn print_warning(message: &str) {
    println!("{}", style(message).yellow());
}

/// Print the message for a finished invocation
pub fn print_outcome(outcome: &Outcome) {
    if outcome.is_success() {
        print_success(&outcome.message());
    } else {
        print_warning(&outcome.message());
    }
}
