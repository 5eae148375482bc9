//! Help text listing every available command.

use super::definition::Command;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Name of the built-in command that prints this help.
pub const HELP_COMMAND: &str = "help";

const HELP_DESCRIPTION: &str = "Show a list of all available commands and their descriptions.";

/// Render commands grouped by namespace.
///
/// Root commands come first, followed by one section per namespace in
/// sorted order. The built-in `help` command is always listed; a file-backed
/// command named `help` is hidden because it can never be invoked.
pub fn format_help(commands: &[Command]) -> String {
    let mut grouped: BTreeMap<&str, Vec<(&str, &str, &str, &str)>> = BTreeMap::new();

    grouped
        .entry("")
        .or_default()
        .push((HELP_COMMAND, "", HELP_DESCRIPTION, ""));

    for cmd in commands.iter().filter(|c| c.name != HELP_COMMAND) {
        grouped.entry(cmd.namespace.as_str()).or_default().push((
            cmd.name.as_str(),
            cmd.argument_hint.as_str(),
            cmd.description.as_str(),
            cmd.source.as_str(),
        ));
    }

    let mut output = String::from("Available Commands:\n\n");

    for (namespace, entries) in grouped.iter_mut() {
        entries.sort_by(|a, b| a.0.cmp(b.0));

        if namespace.is_empty() {
            output.push_str("Root Commands:\n\n");
        } else {
            let _ = write!(output, "{} Commands:\n\n", capitalize(namespace));
        }

        for &(name, hint, description, source) in entries.iter() {
            output.push_str("  `\\");
            output.push_str(name);
            if !hint.is_empty() {
                output.push(' ');
                output.push_str(hint);
            }
            output.push('`');
            if !description.is_empty() {
                let _ = write!(output, " - {}", description);
            }
            if !source.is_empty() {
                let _ = write!(output, " ({})", source);
            }
            output.push_str("\n\n");
        }
    }

    output
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn command(name: &str, namespace: &str, hint: &str, desc: &str, source: &str) -> Command {
        Command {
            name: name.to_string(),
            namespace: namespace.to_string(),
            description: desc.to_string(),
            argument_hint: hint.to_string(),
            allowed_tools: vec![],
            content: String::new(),
            source_path: PathBuf::from(format!("/cmds/{}.md", name)),
            source: source.to_string(),
        }
    }

    #[test]
    fn test_empty_registry_lists_help() {
        let output = format_help(&[]);
        assert_eq!(
            output,
            "Available Commands:\n\nRoot Commands:\n\n  `\\help` - Show a list of all available commands and their descriptions.\n\n"
        );
    }

    #[test]
    fn test_grouping_and_order() {
        let commands = vec![
            command("review-pr", "", "[pr-number]", "Review a PR", "project"),
            command("frontend:review-pr", "frontend", "[pr] [prio]", "Frontend review", "project:frontend"),
            command("backend:deploy", "backend", "", "", "user:backend"),
            command("frontend:components:button", "frontend:components", "", "Button", "user:frontend:components"),
        ];
        let output = format_help(&commands);

        let root = output.find("Root Commands:").unwrap();
        let backend = output.find("Backend Commands:").unwrap();
        let frontend = output.find("Frontend Commands:").unwrap();
        let components = output.find("Frontend:components Commands:").unwrap();
        assert!(root < backend && backend < frontend && frontend < components);

        assert!(output.contains("  `\\review-pr [pr-number]` - Review a PR (project)\n\n"));
        assert!(output.contains("  `\\frontend:review-pr [pr] [prio]` - Frontend review (project:frontend)\n\n"));
        assert!(output.contains("  `\\backend:deploy` (user:backend)\n\n"));

        let help = output.find("`\\help`").unwrap();
        let review = output.find("`\\review-pr").unwrap();
        assert!(help < review);
    }

    #[test]
    fn test_file_backed_help_is_hidden() {
        let commands = vec![command("help", "", "", "Shadowed", "project")];
        let output = format_help(&commands);
        assert!(!output.contains("Shadowed"));
        assert_eq!(output.matches("`\\help`").count(), 1);
    }
}
