//! About command implementation.

use console::style;

use bloch_core::ABOUT;

/// Execute the about command.
pub fn execute() {
    println!("{}", style("About").cyan().bold());
    println!();
    print!("{ABOUT}");
}
