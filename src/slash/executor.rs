//! Turns an invocation into a resolved prompt for the agent runtime.

use super::agent::{AgentCoordinator, AgentRun, MessageService, NewMessage};
use super::arguments::{self, RequiredArguments};
use super::attachment::{build_attachments, Attachment};
use super::definition::Command;
use super::fileref::{extract_references, read_all, resolve_paths};
use super::help::{format_help, HELP_COMMAND};
use super::registry::CommandRegistry;
use crate::error::{Result, SlashError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Prepended to every prompt sent to the agent.
pub const EXECUTE_DIRECTLY: &str = "Execute this directly - do not analyze or search:\n\n";

/// What a successful execution did.
#[derive(Debug)]
pub enum ExecutionOutcome {
    /// Help text was posted as an assistant message.
    Help { message_id: String },
    /// The resolved prompt was handed to the agent.
    Invoked {
        command: Arc<Command>,
        run: AgentRun,
        attachments: Vec<PathBuf>,
        /// Tools the command is limited to. Not enforced by the agent yet.
        allowed_tools: Vec<String>,
    },
}

pub struct Executor {
    registry: Arc<CommandRegistry>,
    agent: Arc<dyn AgentCoordinator>,
    messages: Arc<dyn MessageService>,
    working_dir: PathBuf,
}

impl Executor {
    pub fn new(
        registry: Arc<CommandRegistry>,
        agent: Arc<dyn AgentCoordinator>,
        messages: Arc<dyn MessageService>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            agent,
            messages,
            working_dir: working_dir.into(),
        }
    }

    /// Execute `name` with `args` in `session_id`.
    ///
    /// Nothing is sent to the agent unless every step before the call
    /// succeeds.
    pub async fn execute(
        &self,
        cancel: &CancellationToken,
        session_id: &str,
        name: &str,
        args: &[String],
    ) -> Result<ExecutionOutcome> {
        if name == HELP_COMMAND {
            return self.show_help(cancel, session_id).await;
        }

        let command = self.registry.find_with_suggestions(name)?;

        let required = RequiredArguments::extract(&command.content, &command.argument_hint);
        required.validate(&command.name, args.len())?;

        let prompt = resolve_content(&command, &required, args);

        let references = extract_references(&prompt);
        let paths = resolve_paths(&references, &self.working_dir)?;
        let contents = read_all(&paths).await;

        let unreadable: Vec<PathBuf> = contents
            .iter()
            .filter(|file| !file.is_readable())
            .map(|file| file.path.clone())
            .collect();
        if !unreadable.is_empty() {
            return Err(SlashError::UnreadableFiles { paths: unreadable });
        }

        let attachments = build_attachments(contents);
        let attachment_paths = attachments.iter().map(|a| a.path.clone()).collect();
        let allowed_tools = self.registry.catalog().filtered(&command.allowed_tools);
        let wrapped = format!("{}{}", EXECUTE_DIRECTLY, prompt);

        tracing::info!(
            command = %command.name,
            session = %session_id,
            args = args.len(),
            attachments = attachments.len(),
            "Executing command"
        );

        let run = self
            .invoke_agent(cancel, &command, session_id, &wrapped, attachments)
            .await?;

        Ok(ExecutionOutcome::Invoked {
            command,
            run,
            attachments: attachment_paths,
            allowed_tools,
        })
    }

    async fn show_help(&self, cancel: &CancellationToken, session_id: &str) -> Result<ExecutionOutcome> {
        let text = format_help(&self.registry.list_commands());
        let message_id = self
            .messages
            .create(cancel, session_id, NewMessage::assistant_text(text))
            .await
            .map_err(|source| SlashError::MessageCreation { source })?;

        tracing::debug!(session = %session_id, message = %message_id, "posted help message");
        Ok(ExecutionOutcome::Help { message_id })
    }

    async fn invoke_agent(
        &self,
        cancel: &CancellationToken,
        command: &Command,
        session_id: &str,
        prompt: &str,
        attachments: Vec<Attachment>,
    ) -> Result<AgentRun> {
        if cancel.is_cancelled() {
            return Err(SlashError::Cancelled {
                command: command.name.clone(),
            });
        }

        self.agent
            .run(cancel, session_id, prompt, attachments)
            .await
            .map_err(|source| SlashError::Execution {
                command: command.name.clone(),
                source,
            })
    }
}

/// Substitute arguments and append any the body never references.
fn resolve_content(command: &Command, required: &RequiredArguments, args: &[String]) -> String {
    let mut content = arguments::substitute(&command.content, args);

    let referenced_all = required
        .required_count()
        .map_or(true, |count| arguments::has_all_required(&command.content, count));

    if !args.is_empty() && !required.has_all_arguments && !referenced_all {
        content.push_str("\n\nArguments: ");
        content.push_str(&args.join(" "));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(content: &str, hint: &str) -> Command {
        Command {
            name: "cmd".to_string(),
            namespace: String::new(),
            description: String::new(),
            argument_hint: hint.to_string(),
            allowed_tools: vec![],
            content: content.to_string(),
            source_path: PathBuf::from("/cmds/cmd.md"),
            source: "project".to_string(),
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn resolve(content: &str, hint: &str, values: &[&str]) -> String {
        let cmd = command(content, hint);
        let required = RequiredArguments::extract(&cmd.content, &cmd.argument_hint);
        resolve_content(&cmd, &required, &args(values))
    }

    #[test]
    fn test_all_referenced_no_trailer() {
        assert_eq!(resolve("Fix $1 in $2", "", &["bug", "core"]), "Fix bug in core");
    }

    #[test]
    fn test_gap_appends_trailer() {
        assert_eq!(
            resolve("Use $1 and $3", "", &["a", "b", "c"]),
            "Use a and c\n\nArguments: a b c"
        );
    }

    #[test]
    fn test_hint_only_requirement_appends_trailer() {
        assert_eq!(
            resolve("Review the PR", "[pr-number]", &["42"]),
            "Review the PR\n\nArguments: 42"
        );
    }

    #[test]
    fn test_all_arguments_never_appends() {
        assert_eq!(resolve("Run $ARGS", "", &["x", "y"]), "Run x y");
    }

    #[test]
    fn test_no_args_no_trailer() {
        assert_eq!(resolve("Static", "", &[]), "Static");
    }
}
