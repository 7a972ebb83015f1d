//! Godot MuJoCo runtime bundle check.
//!
//! Verifies that `example/bin` and `godot_demo/bin` contain the native
//! libraries for the current platform. Exit code 0 = every expected file exists.

use godot_mujoco_bundle_check::cli;
use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
