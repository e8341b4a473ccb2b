//! Command handlers
//!
//! Each registered command carries one variant of the closed [`Handler`]
//! enum; dispatch is an ordinary `match`, not a dynamic cast. Every
//! handler validates its argument count first and prints the usage line
//! on a mismatch, so no remote call can happen on malformed input.

use crate::command::{render_command_help, render_group_help, Command, CommandTree, Selection};
use crate::error::{Error, Result};
use crate::record::{DnsRecord, NewRecord, RecordFilter, RecordUpdate};
use crate::session::Session;

/// Signal returned by a handler to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands
    Continue,
    /// Terminate the interactive session
    Quit,
}

/// The closed set of command handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handler {
    #[default]
    Help,
    List,
    Ip4,
    Ip6,
    Cname,
    Txt,
    Add,
    Delete,
    Zone,
    Quit,
}

impl Handler {
    /// Execute the handler for `command` with its residual arguments
    pub async fn execute(
        self,
        command: &Command,
        tree: &CommandTree,
        session: &mut Session,
        args: &[String],
    ) -> Result<Outcome> {
        match self {
            Handler::Help => help(command, tree, args),
            Handler::List => list(command, session, args).await,
            Handler::Ip4 => convenience(command, session, args, "A").await,
            Handler::Ip6 => convenience(command, session, args, "AAAA").await,
            Handler::Cname => convenience(command, session, args, "CNAME").await,
            Handler::Txt => convenience(command, session, args, "TXT").await,
            Handler::Add => add(command, session, args).await,
            Handler::Delete => delete(command, session, args).await,
            Handler::Zone => zone(command, session, args).await,
            Handler::Quit => Ok(Outcome::Quit),
        }
    }
}

fn print_usage(command: &Command) {
    println!("Usage: {}", command.usage());
}

/// `help [<command>]`
fn help(command: &Command, tree: &CommandTree, args: &[String]) -> Result<Outcome> {
    if args.len() > 1 {
        print_usage(command);
        return Ok(Outcome::Continue);
    }
    if args.is_empty() {
        print!("{}", render_group_help(tree.root()));
        return Ok(Outcome::Continue);
    }
    match tree.lookup(&args[0]) {
        Ok(Selection::Command { command, .. }) => print!("{}", render_command_help(command)),
        Ok(Selection::Group(group)) => print!("{}", render_group_help(group)),
        Ok(Selection::None) => {}
        Err(e @ (Error::CommandNotFound | Error::CommandAmbiguous)) => println!("{e}"),
        Err(e) => return Err(e),
    }
    Ok(Outcome::Continue)
}

/// `list [<type>]`
async fn list(command: &Command, session: &mut Session, args: &[String]) -> Result<Outcome> {
    if args.len() > 1 {
        print_usage(command);
        return Ok(Outcome::Continue);
    }

    let filter = RecordFilter {
        record_type: args.first().map(|t| t.to_uppercase()),
        name: None,
    };

    let api = session.api()?;
    let zone = session.zone().await?;
    let records = api.list_records(&zone.id, &filter).await?;

    for line in format_records(&records) {
        println!("{line}");
    }
    Ok(Outcome::Continue)
}

/// Column-align type and name to the widest value in the result set
pub fn format_records(records: &[DnsRecord]) -> Vec<String> {
    let width_type = records.iter().map(|r| r.record_type.len()).max().unwrap_or(0);
    let width_name = records.iter().map(|r| r.name.len()).max().unwrap_or(0);

    records
        .iter()
        .map(|r| {
            format!(
                "{:<width_type$} {:<width_name$} {}",
                r.record_type, r.name, r.content
            )
        })
        .collect()
}

/// Shared path for `ip4`, `ip6`, `cname`, and `txt`
async fn convenience(
    command: &Command,
    session: &mut Session,
    args: &[String],
    record_type: &str,
) -> Result<Outcome> {
    if args.len() != 2 {
        print_usage(command);
        return Ok(Outcome::Continue);
    }
    add_or_update(session, record_type, &args[0], &args[1]).await?;
    println!("DNS record updated.");
    Ok(Outcome::Continue)
}

/// Update the first matching record in place, or create one
///
/// Known limitation: when several records already exist for the same
/// type and name, the first record the API returns is treated as
/// canonical and the rest are ignored.
/// The update is skipped entirely when the content already matches, so
/// repeating the same command performs no write.
async fn add_or_update(
    session: &mut Session,
    record_type: &str,
    name: &str,
    content: &str,
) -> Result<()> {
    let api = session.api()?;
    let zone = session.zone().await?;

    let filter = RecordFilter::type_and_name(record_type, name);
    let existing = api.list_records(&zone.id, &filter).await?;

    match existing.first() {
        Some(record) => {
            if record.content == content {
                tracing::debug!(record_type, name, "record content unchanged");
                return Ok(());
            }
            let update = RecordUpdate {
                record_type: record.record_type.clone(),
                name: name.to_string(),
                content: content.to_string(),
                ttl: record.ttl,
            };
            api.update_record(&zone.id, &record.id, &update).await?;
        }
        None => {
            let record = NewRecord::new(record_type, name, content);
            api.create_record(&zone.id, &record).await?;
        }
    }
    Ok(())
}

/// `add <type> <name> <content>`
///
/// Always creates a new record, even when one with the same name and
/// type already exists.
async fn add(command: &Command, session: &mut Session, args: &[String]) -> Result<Outcome> {
    if args.len() != 3 {
        print_usage(command);
        return Ok(Outcome::Continue);
    }

    let api = session.api()?;
    let zone = session.zone().await?;

    let record = NewRecord::new(args[0].as_str(), args[1].as_str(), args[2].as_str());
    api.create_record(&zone.id, &record).await?;
    println!("DNS record added.");
    Ok(Outcome::Continue)
}

/// `delete <type> <name>`
///
/// Deletes every matching record independently; a failure on one record
/// is reported and does not stop the remaining deletions.
async fn delete(command: &Command, session: &mut Session, args: &[String]) -> Result<Outcome> {
    if args.len() != 2 {
        print_usage(command);
        return Ok(Outcome::Continue);
    }

    let record_type = &args[0];
    let name = &args[1];
    if record_type.is_empty() {
        println!("Must provide valid DNS record type.");
        return Ok(Outcome::Continue);
    }

    let api = session.api()?;
    let zone = session.zone().await?;

    let filter = RecordFilter::type_and_name(record_type.as_str(), name.as_str());
    let records = api.list_records(&zone.id, &filter).await?;
    if records.is_empty() {
        println!("No matching record(s) found.");
        return Ok(Outcome::Continue);
    }

    for record in &records {
        let result = api.delete_record(&zone.id, &record.id).await;
        println!("{}", delete_report_line(record, &result));
    }
    Ok(Outcome::Continue)
}

/// One user-visible line per deletion attempt
fn delete_report_line(record: &DnsRecord, result: &Result<()>) -> String {
    match result {
        Ok(()) => format!("Deleted {} record {}.", record.record_type, record.name),
        Err(e) => format!("Error deleting {}: {e}", record.name),
    }
}

/// `zone <name>`
async fn zone(command: &Command, session: &mut Session, args: &[String]) -> Result<Outcome> {
    if args.len() != 1 {
        print_usage(command);
        return Ok(Outcome::Continue);
    }

    let zone = session.set_zone(&args[0]).await?;
    println!("Active zone set to {}.", zone.name);
    Ok(Outcome::Continue)
}
