//! Installer generator - builds Windows installers with Inno Setup and WiX.
//!
//! This binary renders an installer build script for each requested format
//! and runs the matching compiler on it.

use std::process;

use installer_generator::cli;

#[tokio::main]
async fn main() {
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
