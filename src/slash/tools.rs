//! Catalog of tool names a command may restrict itself to.

/// Tools known to the agent runtime.
pub const BUILTIN_TOOLS: &[&str] = &[
    "agent",
    "bash",
    "download",
    "edit",
    "multiedit",
    "lsp_diagnostics",
    "lsp_references",
    "fetch",
    "glob",
    "grep",
    "ls",
    "sourcegraph",
    "view",
    "write",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCatalog {
    tools: Vec<String>,
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl ToolCatalog {
    /// Built-in tools followed by `extra`, without duplicates.
    pub fn new<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tools: Vec<String> = BUILTIN_TOOLS.iter().map(|t| t.to_string()).collect();
        for tool in extra {
            let tool = tool.into();
            if !tool.is_empty() && !tools.contains(&tool) {
                tools.push(tool);
            }
        }
        Self { tools }
    }

    pub fn contains(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }

    pub fn names(&self) -> &[String] {
        &self.tools
    }

    /// Keep only known tools, warning about the rest.
    pub fn validate(&self, tools: Vec<String>, command: &str) -> Vec<String> {
        let (valid, invalid): (Vec<String>, Vec<String>) =
            tools.into_iter().partition(|t| self.contains(t));

        if !invalid.is_empty() {
            tracing::warn!(
                command = %command,
                invalid = ?invalid,
                "dropping unknown tools from allowed-tools"
            );
        }

        valid
    }

    /// Tools available to a command: every catalog entry when `allowed` is
    /// empty, otherwise the catalog entries listed in `allowed`.
    pub fn filtered(&self, allowed: &[String]) -> Vec<String> {
        if allowed.is_empty() {
            return self.tools.clone();
        }
        self.tools
            .iter()
            .filter(|t| allowed.contains(t))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_extra_tools_are_appended_once() {
        let catalog = ToolCatalog::new(["my_tool", "bash", "my_tool"]);
        assert!(catalog.contains("my_tool"));
        assert_eq!(catalog.names().len(), BUILTIN_TOOLS.len() + 1);
        assert_eq!(catalog.names().last().unwrap(), "my_tool");
    }

    #[test]
    fn test_validate_drops_unknown() {
        let catalog = ToolCatalog::default();
        let valid = catalog.validate(strings(&["view", "teleport", "grep"]), "review");
        assert_eq!(valid, strings(&["view", "grep"]));
    }

    #[test]
    fn test_filtered_uses_catalog_order() {
        let catalog = ToolCatalog::default();
        assert_eq!(catalog.filtered(&[]).len(), BUILTIN_TOOLS.len());
        assert_eq!(
            catalog.filtered(&strings(&["view", "bash"])),
            strings(&["bash", "view"])
        );
    }
}
