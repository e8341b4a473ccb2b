//! Interactive input seam
//!
//! The session prompts for credentials it cannot find in the
//! environment. Keeping the prompt behind a trait keeps terminal
//! handling out of this crate and lets tests script the answers.

use crate::error::Result;

/// Line-oriented interactive input
pub trait Prompt {
    /// Print `prompt` and read one line, echoing the input
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print `prompt` and read one line with echo suppressed
    fn read_hidden(&mut self, prompt: &str) -> Result<String>;
}
