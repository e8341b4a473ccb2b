//! # cf
//!
//! The cf tool allows you to view and manipulate DNS records stored in
//! your Cloudflare account.
//!
//! Invoked with no arguments it enters an interactive loop reading
//! commands from a `cf> ` prompt; invoked with arguments it treats them
//! as one command line, processes it, and exits.
//!
//! ## Configuration
//!
//! All configuration is via environment variables:
//!
//! - `CLOUDFLARE_EMAIL`: account email
//! - `CLOUDFLARE_KEY`: account API key
//! - `CLOUDFLARE_ZONE`: default zone name
//! - `CF_LOG_LEVEL`: log verbosity (trace, debug, info, warn, error)
//!
//! Missing credential values are prompted for interactively; in
//! non-interactive mode a missing value fails the command naming the
//! variable.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cf_cloudflare::CloudflareFactory;
use cf_core::error::Result as CfResult;
use cf_core::session::Credentials;
use cf_core::traits::Prompt;
use cf_core::{command_tree, process_line, Outcome, Session};

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = env::args().skip(1).collect();

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    rt.block_on(run(args));
    ExitCode::SUCCESS
}

/// Initialize tracing from `CF_LOG_LEVEL`, writing to stderr so command
/// output on stdout stays clean
fn init_tracing() -> Result<()> {
    let level = match env::var("CF_LOG_LEVEL")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn run(args: Vec<String>) {
    let interactive = args.is_empty();
    let tree = command_tree();
    let mut session = Session::new(
        interactive,
        Credentials::from_env(),
        Box::new(CloudflareFactory),
        Box::new(TerminalPrompt),
    );

    if interactive {
        run_interactive(&tree, &mut session).await;
    } else {
        process_line(&tree, &mut session, &fixup_args(&args)).await;
    }
}

/// Read and process commands until quit or end of input
async fn run_interactive(tree: &cf_core::CommandTree, session: &mut Session) {
    loop {
        let line = match read_line("cf> ") {
            Ok(Some(line)) => line,
            // EOF or a broken input stream ends the session.
            Ok(None) | Err(_) => break,
        };
        if process_line(tree, session, &line).await == Outcome::Quit {
            break;
        }
    }
}

/// Rejoin process arguments into one command line
///
/// Arguments containing whitespace are re-quoted so the tokenizer sees
/// them as single tokens again: `cf add TXT foo 'a b c'` behaves like
/// typing `add TXT foo "a b c"` at the prompt.
fn fixup_args(args: &[String]) -> String {
    args.iter()
        .map(|a| {
            if a.contains(' ') || a.contains('\t') {
                format!("\"{a}\"")
            } else {
                a.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print `prompt` and read one line; `None` on end of input
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Terminal-backed credential prompt
///
/// The API key prompt suppresses echo; everything else echoes normally.
struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> CfResult<String> {
        match read_line(prompt)? {
            Some(line) => Ok(line),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input").into()),
        }
    }

    fn read_hidden(&mut self, prompt: &str) -> CfResult<String> {
        Ok(rpassword::prompt_password(prompt)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixup_args_requotes_whitespace() {
        let args = vec![
            "add".to_string(),
            "TXT".to_string(),
            "foo".to_string(),
            "a b c".to_string(),
        ];
        assert_eq!(fixup_args(&args), "add TXT foo \"a b c\"");
    }

    #[test]
    fn test_fixup_args_plain() {
        let args = vec!["delete".to_string(), "A".to_string(), "host".to_string()];
        assert_eq!(fixup_args(&args), "delete A host");
    }

    #[test]
    fn test_fixup_args_empty() {
        assert_eq!(fixup_args(&[]), "");
    }
}
