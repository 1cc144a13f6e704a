//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - single-qubit gate sequences on the Bloch sphere",
        style("Bloch").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  bloch-ir     Single-qubit circuit model");
    println!("  bloch-qasm3  OpenQASM 3 emitter");
    println!("  bloch-core   Gate sequence session");
    println!("  bloch-cli    Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/bloch").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
