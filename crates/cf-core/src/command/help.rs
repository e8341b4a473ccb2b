//! Help text rendering
//!
//! Group help lists each direct child that carries a brief description,
//! one per line with the name in a fixed-width column. Command help
//! prints the usage line, the long description word-wrapped to an
//! 80-column budget with a fixed indent, and the shortcut list.

use std::fmt::Write as _;

use super::{Command, Group, Node};

/// Column budget for wrapped help text
pub const LINE_WIDTH: usize = 80;

/// Left indent applied to wrapped description lines
pub const HELP_INDENT: usize = 4;

/// Width of the name column in group listings
const NAME_COLUMN: usize = 12;

/// Render the one-line-per-command listing for a group
///
/// Children with an empty brief are omitted, which is how commands like
/// `help` stay out of their own listing.
pub fn render_group_help(group: &Group) -> String {
    let mut out = String::new();
    if !group.title().is_empty() {
        let _ = writeln!(out, "{} commands:", group.title());
    }
    for child in group.children() {
        if child.brief().is_empty() {
            continue;
        }
        let name = match child {
            Node::Group(g) => g.name(),
            Node::Command(c) => c.name(),
        };
        let _ = writeln!(out, "    {name:<NAME_COLUMN$} {}", child.brief());
    }
    out
}

/// Render the usage, description, and shortcuts of a single command
pub fn render_command_help(command: &Command) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Usage: {}", command.usage());

    let text = if !command.description().is_empty() {
        command.description()
    } else {
        command.brief()
    };
    if !text.is_empty() {
        for line in wrap(text, LINE_WIDTH, HELP_INDENT) {
            let _ = writeln!(out, "{line}");
        }
    }

    let shortcuts = command.shortcuts();
    if !shortcuts.is_empty() {
        let label = if shortcuts.len() == 1 {
            "Shortcut"
        } else {
            "Shortcuts"
        };
        let _ = writeln!(out, "{label}: {}", shortcuts.join(", "));
    }
    out
}

/// Greedy word wrap
///
/// Words are packed onto a line until appending the next one would meet
/// or exceed `width` (counting the indent and one joining space); a word
/// that alone meets the budget still gets a line of its own.
pub fn wrap(text: &str, width: usize, indent: usize) -> Vec<String> {
    let pad = " ".repeat(indent);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(&pad);
            line.push_str(word);
            continue;
        }
        if line.len() + 1 + word.len() >= width {
            lines.push(std::mem::take(&mut line));
            line.push_str(&pad);
            line.push_str(word);
        } else {
            line.push(' ');
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
