//! # cf-core
//!
//! Core library for the cf DNS tool: the command registry and its
//! prefix-matching lookup, help rendering, session state, and the
//! command handlers. Everything provider- or terminal-specific sits
//! behind the traits in [`traits`]: the Cloudflare HTTP client lives in
//! the `cf-cloudflare` crate and the terminal prompt in the `cf-cli`
//! binary.

pub mod command;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod record;
pub mod registry;
pub mod session;
pub mod traits;

// Re-export the types most callers need.
pub use command::{CommandSpec, CommandTree, Selection};
pub use dispatch::process_line;
pub use error::{Error, Result};
pub use handlers::{Handler, Outcome};
pub use record::{DnsRecord, NewRecord, RecordFilter, RecordUpdate, TTL_AUTOMATIC};
pub use registry::command_tree;
pub use session::{ActiveZone, Credentials, Session};
pub use traits::{ApiFactory, DnsApi, Prompt};
