//! Trait seams between the command layer and its collaborators

mod dns_api;
mod prompt;

pub use dns_api::{ApiFactory, DnsApi};
pub use prompt::Prompt;
