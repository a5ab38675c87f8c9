use crate::domain::ports::ApprovalPrompt;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Reads approval responses from the terminal. Blocks until a line arrives;
/// there is deliberately no timeout.
pub struct StdinPrompt;

impl ApprovalPrompt for StdinPrompt {
    fn ask(&mut self) -> Result<String> {
        print!("\tapproved? ");
        io::stdout().flush()?;

        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
        Ok(buffer.trim().to_string())
    }
}
