//! Line dispatch
//!
//! One typed line in, one outcome out. Lookup failures and handler
//! errors are printed here and never terminate the session; the only
//! quit paths are the quit command and end of input, both owned by the
//! caller's read loop.

use crate::command::{render_group_help, CommandTree, Selection};
use crate::error::Error;
use crate::handlers::Outcome;
use crate::session::Session;

/// Resolve and execute one command line
pub async fn process_line(tree: &CommandTree, session: &mut Session, line: &str) -> Outcome {
    let selection = match tree.lookup(line) {
        Ok(selection) => selection,
        Err(e @ (Error::CommandNotFound | Error::CommandAmbiguous)) => {
            println!("{e}");
            return Outcome::Continue;
        }
        Err(e) => {
            println!("Error: {e}");
            return Outcome::Continue;
        }
    };

    match selection {
        Selection::None => Outcome::Continue,
        Selection::Group(group) => {
            print!("{}", render_group_help(group));
            Outcome::Continue
        }
        Selection::Command { command, args } => {
            match command.handler().execute(command, tree, session, &args).await {
                Ok(outcome) => outcome,
                Err(e @ Error::MissingCredential { .. }) => {
                    // Printed bare: "CLOUDFLARE_KEY not set."
                    println!("{e}");
                    Outcome::Continue
                }
                Err(e) => {
                    println!("Error: {e}");
                    Outcome::Continue
                }
            }
        }
    }
}
