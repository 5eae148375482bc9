use crate::config::{Config, ConfigRootResolver};
use crate::error::Result;
use crate::project::Project;
use crate::slash::CommandRegistry;
use std::sync::Arc;

/// Build a registry for the project and load it from disk.
pub fn load_registry(project: &Project, config: &Config) -> Result<Arc<CommandRegistry>> {
    let resolver = ConfigRootResolver::new(config.clone(), project.root());
    let registry = CommandRegistry::new(resolver, config.tool_catalog());
    registry.load()?;

    let snapshot = registry.snapshot();
    for skipped in snapshot.skipped() {
        eprintln!(
            "Warning: skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    Ok(Arc::new(registry))
}
