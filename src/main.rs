//! Anchor chain resolver binary

use anchor_chain::{AnchorCli, LayoutError};
use std::process;

fn main() {
    let mut cli = AnchorCli::new();

    match cli.run() {
        Ok(()) => {}
        Err(LayoutError::Io(e)) => {
            eprintln!("IO Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
