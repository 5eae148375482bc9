use crate::config::Config;
use crate::error::{CollaboratorError, Result, SlashError};
use crate::project::Project;
use crate::slash::{
    parse_invocation, AgentCoordinator, AgentRun, Attachment, ExecutionOutcome, Executor,
    MessageService, NewMessage,
};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Prints the resolved prompt instead of calling a model.
struct PreviewAgent;

#[async_trait]
impl AgentCoordinator for PreviewAgent {
    async fn run(
        &self,
        _cancel: &CancellationToken,
        session_id: &str,
        prompt: &str,
        attachments: Vec<Attachment>,
    ) -> std::result::Result<AgentRun, CollaboratorError> {
        println!("Session: {}", session_id);
        println!();
        println!("{}", prompt);

        if !attachments.is_empty() {
            println!();
            println!("{:<40} {:<28} {:>10}", "ATTACHMENT", "TYPE", "BYTES");
            for attachment in &attachments {
                println!(
                    "{:<40} {:<28} {:>10}",
                    attachment.path.display(),
                    attachment.mime_type,
                    attachment.size()
                );
            }
        }

        Ok(AgentRun::default())
    }
}

/// Prints messages to stdout instead of storing them.
struct PreviewMessages;

#[async_trait]
impl MessageService for PreviewMessages {
    async fn create(
        &self,
        _cancel: &CancellationToken,
        _session_id: &str,
        message: NewMessage,
    ) -> std::result::Result<String, CollaboratorError> {
        print!("{}", message.text());
        Ok("preview".to_string())
    }
}

pub fn execute(
    project: &Project,
    config: &Config,
    working_dir: &Path,
    session: &str,
    input: &[String],
) -> Result<()> {
    let line = input.join(" ");
    let line = if line.trim_start().starts_with('\\') {
        line
    } else {
        format!("\\{}", line.trim_start())
    };

    let invocation = parse_invocation(&line).ok_or_else(|| SlashError::InvalidArguments {
        command: String::new(),
        message: format!("not a slash command: {}", line),
    })?;

    let registry = super::helpers::load_registry(project, config)?;
    let executor = Executor::new(
        registry,
        Arc::new(PreviewAgent),
        Arc::new(PreviewMessages),
        working_dir,
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let cancel = CancellationToken::new();

    let outcome = runtime.block_on(executor.execute(
        &cancel,
        session,
        &invocation.name,
        &invocation.args,
    ))?;

    if let ExecutionOutcome::Invoked { allowed_tools, command, .. } = outcome {
        if !command.allowed_tools.is_empty() {
            println!();
            println!("Allowed tools: {}", allowed_tools.join(", "));
        }
    }

    Ok(())
}
