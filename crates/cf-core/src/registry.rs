//! The cf command set
//!
//! Builds the full command tree eagerly, before any input is processed.
//! The registry is static: nothing registers commands during a session.

use crate::command::{CommandSpec, CommandTree};
use crate::handlers::Handler;

/// Build the command tree for the cf tool
pub fn command_tree() -> CommandTree {
    let mut tree = CommandTree::new("Primary");

    // help carries no brief on purpose: it stays out of its own listing.
    tree.add_command(CommandSpec {
        name: "help",
        description: "Display help for a command.",
        usage: "help [<command>]",
        shortcuts: &["?"],
        handler: Handler::Help,
        ..Default::default()
    });
    tree.add_command(CommandSpec {
        name: "list",
        brief: "List all DNS records",
        description: "List all DNS records in the currently active zone.",
        usage: "list [<type>]",
        shortcuts: &["l"],
        handler: Handler::List,
        ..Default::default()
    });
    tree.add_command(CommandSpec {
        name: "ip4",
        brief: "Add or modify an IPv4 Address (type A) record",
        description: "Add or modify an IPv4 address (type A) DNS record in the \
            currently active zone.",
        usage: "ip4 <name> <address>",
        shortcuts: &["ip"],
        handler: Handler::Ip4,
        ..Default::default()
    });
    tree.add_command(CommandSpec {
        name: "ip6",
        brief: "Add or modify an IPv6 Address (type AAAA) record",
        description: "Add or modify an IPv6 address (type AAAA) DNS record in the \
            currently active zone.",
        usage: "ip6 <name> <address>",
        handler: Handler::Ip6,
        ..Default::default()
    });
    tree.add_command(CommandSpec {
        name: "cname",
        brief: "Add or modify a CNAME record",
        description: "Add or modify a CNAME DNS record in the currently active zone.",
        usage: "cname <name> <address>",
        handler: Handler::Cname,
        ..Default::default()
    });
    tree.add_command(CommandSpec {
        name: "txt",
        brief: "Add or modify a text (type TXT) record",
        description: "Add or modify a text (type TXT) DNS record in the currently \
            active zone.",
        usage: "txt <name> <content>",
        handler: Handler::Txt,
        ..Default::default()
    });
    tree.add_command(CommandSpec {
        name: "add",
        brief: "Add a DNS record",
        description: "Add a DNS record of the requested type in the currently active \
            zone. The type must be one of the allowed DNS record types (A, AAAA, \
            CNAME, etc.). If the content string has spaces, it must be enclosed in \
            quotes. This command always adds a new record if it succeeds, even if \
            there is already another record with the same name and type.",
        usage: "add <type> <name> \"<content>\"",
        handler: Handler::Add,
        ..Default::default()
    });
    tree.add_command(CommandSpec {
        name: "delete",
        brief: "Delete DNS record(s)",
        description: "Delete all DNS records matching the requested type and name in \
            the currently active zone. The type must be one of the allowed DNS \
            record types (A, AAAA, CNAME, etc.).",
        usage: "delete <type> <name>",
        handler: Handler::Delete,
        ..Default::default()
    });
    tree.add_command(CommandSpec {
        name: "zone",
        brief: "Set active zone",
        description: "Set the active zone used by all future commands.",
        usage: "zone <name>",
        handler: Handler::Zone,
        ..Default::default()
    });
    tree.add_command(CommandSpec {
        name: "quit",
        brief: "Quit the application",
        usage: "quit",
        handler: Handler::Quit,
        ..Default::default()
    });

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Selection;

    fn resolved(tree: &CommandTree, line: &str) -> String {
        match tree.lookup(line).unwrap() {
            Selection::Command { command, .. } => command.name().to_string(),
            other => panic!("expected a command for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_registered_shortcuts() {
        let tree = command_tree();
        assert_eq!(resolved(&tree, "?"), "help");
        assert_eq!(resolved(&tree, "l"), "list");
        assert_eq!(resolved(&tree, "ip"), "ip4");
    }

    #[test]
    fn test_every_command_resolves_by_full_name() {
        let tree = command_tree();
        for name in [
            "help", "list", "ip4", "ip6", "cname", "txt", "add", "delete", "zone", "quit",
        ] {
            assert_eq!(resolved(&tree, name), name);
        }
    }

    #[test]
    fn test_known_ambiguous_prefixes() {
        let tree = command_tree();
        // "i" hits ip4 and ip6.
        assert!(tree.lookup("i").is_err());
    }
}
