//! Hierarchical command registry and lookup
//!
//! The registry is a static tree of groups and leaf commands, built once
//! at startup and read-only thereafter. Lookup resolves a typed line
//! against the tree using case-sensitive unambiguous prefix matching
//! over names and shortcut aliases, descending through groups until a
//! leaf is reached; the remaining tokens become the leaf's arguments.
//!
//! Registration failures (a name colliding with a sibling, a shortcut
//! colliding with any shortcut in the tree) are programming errors and
//! panic at build time. No registration happens after startup.

mod help;
mod tokenize;

pub use help::{render_command_help, render_group_help, wrap, HELP_INDENT, LINE_WIDTH};
pub use tokenize::tokenize;

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::handlers::Handler;

/// A node in the command tree: a named subtree or a leaf command
#[derive(Debug)]
pub enum Node {
    Group(Group),
    Command(Command),
}

impl Node {
    fn name(&self) -> &str {
        match self {
            Node::Group(g) => &g.name,
            Node::Command(c) => &c.name,
        }
    }

    pub(crate) fn brief(&self) -> &str {
        match self {
            Node::Group(g) => &g.brief,
            Node::Command(c) => &c.brief,
        }
    }

    fn shortcuts(&self) -> &[String] {
        match self {
            Node::Group(_) => &[],
            Node::Command(c) => &c.shortcuts,
        }
    }
}

/// A named group of commands (and possibly nested groups)
#[derive(Debug)]
pub struct Group {
    name: String,
    /// Title shown above the group's help listing
    title: String,
    /// One-line description used when the group is listed by its parent
    brief: String,
    children: Vec<Node>,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn children(&self) -> &[Node] {
        &self.children
    }

    /// Resolve one token against this group's children
    ///
    /// An exact name or shortcut match wins outright; otherwise the token
    /// must be a non-empty prefix of exactly one child's name or
    /// shortcut. Matching is case sensitive.
    fn resolve(&self, token: &str) -> Result<&Node> {
        if token.is_empty() {
            return Err(Error::CommandNotFound);
        }

        for child in &self.children {
            if child.name() == token || child.shortcuts().iter().any(|s| s == token) {
                return Ok(child);
            }
        }

        // A name and its own shortcut count as one match; each child
        // contributes at most one hit here, so two hits means two
        // distinct children.
        let mut matched: Option<&Node> = None;
        for child in &self.children {
            let hit = child.name().starts_with(token)
                || child.shortcuts().iter().any(|s| s.starts_with(token));
            if hit {
                if matched.is_some() {
                    return Err(Error::CommandAmbiguous);
                }
                matched = Some(child);
            }
        }
        matched.ok_or(Error::CommandNotFound)
    }
}

/// A leaf command
#[derive(Debug)]
pub struct Command {
    name: String,
    brief: String,
    description: String,
    usage: String,
    shortcuts: Vec<String>,
    handler: Handler,
}

impl Command {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brief(&self) -> &str {
        &self.brief
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn shortcuts(&self) -> &[String] {
        &self.shortcuts
    }

    pub fn handler(&self) -> Handler {
        self.handler
    }
}

/// Declarative description of a command to register
///
/// Registration copies the borrowed strings; commands are static data
/// declared once at startup.
#[derive(Debug, Default)]
pub struct CommandSpec {
    pub name: &'static str,
    pub brief: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub shortcuts: &'static [&'static str],
    pub handler: Handler,
}

/// The result of resolving a typed line against the tree
#[derive(Debug)]
pub enum Selection<'a> {
    /// Empty or whitespace-only input; a no-op, not an error
    None,
    /// The tokens stopped at a group
    Group(&'a Group),
    /// A leaf command with its residual argument tokens
    Command {
        command: &'a Command,
        args: Vec<String>,
    },
}

/// The command registry: an owned tree of groups and commands
#[derive(Debug)]
pub struct CommandTree {
    root: Group,
    /// All shortcuts registered anywhere in the tree, for the global
    /// uniqueness invariant.
    shortcuts: HashSet<String>,
}

impl CommandTree {
    /// Create a tree with an empty root group
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            root: Group {
                name: String::new(),
                title: title.into(),
                brief: String::new(),
                children: Vec::new(),
            },
            shortcuts: HashSet::new(),
        }
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Register a command in the root group
    ///
    /// Panics on a sibling name collision or a shortcut collision
    /// anywhere in the tree; both are build-time programming errors.
    pub fn add_command(&mut self, spec: CommandSpec) {
        self.add_command_at(&[], spec);
    }

    /// Register a command in the group at `path`
    pub fn add_command_at(&mut self, path: &[&str], spec: CommandSpec) {
        assert!(!spec.name.is_empty(), "command name cannot be empty");
        for shortcut in spec.shortcuts {
            assert!(
                self.shortcuts.insert((*shortcut).to_string()),
                "duplicate shortcut registration: {shortcut}"
            );
        }
        let group = Self::group_at_mut(&mut self.root, path);
        assert!(
            !group.children.iter().any(|c| c.name() == spec.name),
            "duplicate command registration: {}",
            spec.name
        );
        group.children.push(Node::Command(Command {
            name: spec.name.to_string(),
            brief: spec.brief.to_string(),
            description: spec.description.to_string(),
            usage: spec.usage.to_string(),
            shortcuts: spec.shortcuts.iter().map(|s| s.to_string()).collect(),
            handler: spec.handler,
        }));
    }

    /// Register a subgroup in the group at `path`
    pub fn add_group_at(&mut self, path: &[&str], name: &str, title: &str, brief: &str) {
        assert!(!name.is_empty(), "group name cannot be empty");
        let group = Self::group_at_mut(&mut self.root, path);
        assert!(
            !group.children.iter().any(|c| c.name() == name),
            "duplicate group registration: {name}"
        );
        group.children.push(Node::Group(Group {
            name: name.to_string(),
            title: title.to_string(),
            brief: brief.to_string(),
            children: Vec::new(),
        }));
    }

    fn group_at_mut<'a>(mut group: &'a mut Group, path: &[&str]) -> &'a mut Group {
        for segment in path {
            let child = group
                .children
                .iter_mut()
                .find(|c| c.name() == *segment)
                .unwrap_or_else(|| panic!("no such group: {segment}"));
            match child {
                Node::Group(g) => group = g,
                Node::Command(_) => panic!("not a group: {segment}"),
            }
        }
        group
    }

    /// Resolve a typed line to a selection
    ///
    /// Tokenizes the line, then walks the tree one token at a time.
    /// Exhausting the tokens at a group selects the group itself.
    pub fn lookup(&self, line: &str) -> Result<Selection<'_>> {
        let tokens = tokenize(line)?;
        if tokens.is_empty() {
            return Ok(Selection::None);
        }

        let mut group = &self.root;
        let mut index = 0;
        loop {
            let node = group.resolve(&tokens[index])?;
            index += 1;
            match node {
                Node::Command(command) => {
                    tracing::debug!(command = command.name(), "resolved command");
                    return Ok(Selection::Command {
                        command,
                        args: tokens[index..].to_vec(),
                    });
                }
                Node::Group(g) => {
                    if index == tokens.len() {
                        return Ok(Selection::Group(g));
                    }
                    group = g;
                }
            }
        }
    }
}
