//! Slash command resolution pipeline.
//!
//! Commands are markdown files discovered under three roots and merged by name
//! into a [`CommandRegistry`]. The [`Executor`] turns an invocation such as
//! `\frontend:review-pr 123 high` into a fully resolved prompt and hands it to
//! an external agent runtime.
//!
//! # Sources
//!
//! Roots are loaded from lowest to highest precedence; later commands replace
//! earlier ones with the same name:
//! - **shared**: system-wide config directory (tagged `user`)
//! - **user**: personal directory in the home folder (tagged `user`)
//! - **project**: directory inside the current project (tagged `project`)
//!
//! # Example
//!
//! ```markdown
//! ---
//! description: Review a pull request
//! argument-hint: "[pr-number] [priority]"
//! allowed-tools: view, grep
//! ---
//! Review PR $1 with priority $2.
//!
//! Check @docs/review-guide.md before starting.
//! ```
//!
//! Stored as `frontend/review-pr.md`, this becomes `frontend:review-pr`.

pub mod agent;
pub mod arguments;
pub mod attachment;
pub mod completion;
pub mod definition;
pub mod executor;
pub mod fileref;
pub mod frontmatter;
pub mod help;
pub mod input;
pub mod loader;
pub mod registry;
pub mod roots;
pub mod tools;

pub use agent::{AgentCoordinator, AgentRun, ContentPart, MessageRole, MessageService, NewMessage};
pub use arguments::{ArgumentCount, RequiredArguments};
pub use attachment::Attachment;
pub use completion::{CompletionItem, CompletionProvider};
pub use definition::{Command, CommandSource};
pub use executor::{ExecutionOutcome, Executor};
pub use fileref::{FileContent, FileReadError, FileReadErrorKind};
pub use frontmatter::Frontmatter;
pub use input::{parse_invocation, Invocation};
pub use loader::{DirectoryLoader, LoadReport, Origin, SkippedEntry};
pub use registry::{CommandRegistry, Snapshot};
pub use roots::{CommandRoots, RootResolver};
pub use tools::ToolCatalog;
