use slashcmd::slash::{CommandRegistry, CommandRoots, ToolCatalog};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn roots(dir: &TempDir) -> CommandRoots {
    CommandRoots {
        shared: dir.path().join("shared"),
        user: dir.path().join("home"),
        project: dir.path().join("project"),
    }
}

#[test]
fn test_project_wins_over_user_and_shared() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("shared/frontend/review.md"), "shared review");
    write(&dir.path().join("home/frontend/review.md"), "home review");
    write(&dir.path().join("project/frontend/review.md"), "project review");

    let registry = CommandRegistry::new(roots(&dir), ToolCatalog::default());
    registry.load().unwrap();

    let review = registry.find_command("frontend:review").unwrap();
    assert_eq!(review.content, "project review");
    assert_eq!(review.source, "project:frontend");
    assert_eq!(review.source_path, dir.path().join("project/frontend/review.md"));
}

#[test]
fn test_home_wins_over_shared() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("shared/deploy.md"), "shared deploy");
    write(&dir.path().join("home/deploy.md"), "home deploy");

    let registry = CommandRegistry::new(roots(&dir), ToolCatalog::default());
    registry.load().unwrap();

    let deploy = registry.find_command("deploy").unwrap();
    assert_eq!(deploy.content, "home deploy");
    assert_eq!(deploy.source, "user");
}

#[test]
fn test_namespace_derivation() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("project/frontend/components/button.md"), "Button");
    write(&dir.path().join("project/review-pr.md"), "Review");

    let registry = CommandRegistry::new(roots(&dir), ToolCatalog::default());
    registry.load().unwrap();

    let button = registry.find_command("frontend:components:button").unwrap();
    assert_eq!(button.namespace, "frontend:components");
    assert_eq!(button.leaf_name(), "button");

    let review = registry.find_command("review-pr").unwrap();
    assert_eq!(review.namespace, "");
    assert_eq!(review.source, "project");
}

#[test]
fn test_reload_without_changes_is_identical() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("project/a.md"),
        "---\ndescription: A\nallowed-tools: [view, grep]\n---\nBody A $1",
    );
    write(&dir.path().join("home/ns/b.md"), "Body B");
    write(&dir.path().join("shared/c.md"), "Body C");

    let registry = CommandRegistry::new(roots(&dir), ToolCatalog::default());
    registry.load().unwrap();
    let first = registry.list_commands();

    registry.reload().unwrap();
    let second = registry.list_commands();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_invalid_frontmatter_keeps_command() {
    let dir = TempDir::new().unwrap();
    let doc = "---\ndescription: [broken\n---\nStill usable";
    write(&dir.path().join("project/broken.md"), doc);

    let registry = CommandRegistry::new(roots(&dir), ToolCatalog::default());
    registry.load().unwrap();

    let broken = registry.find_command("broken").unwrap();
    assert_eq!(broken.description, "");
    assert_eq!(broken.content, doc);
}

#[test]
fn test_partial_loader_failure_still_loads() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("shared"), "a file where a directory should be").unwrap();
    write(&dir.path().join("project/ok.md"), "ok");

    let registry = CommandRegistry::new(roots(&dir), ToolCatalog::default());
    registry.load().unwrap();
    assert!(registry.find_command("ok").is_ok());
}

#[test]
fn test_find_unknown_is_not_found() {
    let dir = TempDir::new().unwrap();
    let registry = CommandRegistry::new(roots(&dir), ToolCatalog::default());
    registry.load().unwrap();

    let err = registry.find_command("missing").unwrap_err();
    assert_eq!(err.kind(), "not_found");
    assert_eq!(err.to_string(), "command 'missing' not found");
}

#[test]
fn test_extra_tools_from_catalog() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("project/custom.md"),
        "---\nallowed-tools: my_tool, view, bogus\n---\nBody",
    );

    let registry = CommandRegistry::new(roots(&dir), ToolCatalog::new(["my_tool"]));
    registry.load().unwrap();

    let custom = registry.find_command("custom").unwrap();
    assert_eq!(custom.allowed_tools, vec!["my_tool", "view"]);
}

#[test]
fn test_find_with_suggestions() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("project/review-pr.md"), "Review");
    write(&dir.path().join("project/review-code.md"), "Review code");
    write(&dir.path().join("project/deploy.md"), "Deploy");

    let registry = CommandRegistry::new(roots(&dir), ToolCatalog::default());
    registry.load().unwrap();

    assert_eq!(registry.find_with_suggestions("deploy").unwrap().content, "Deploy");

    let err = registry.find_with_suggestions("revie").unwrap_err();
    assert_eq!(err.kind(), "not_found");
    let message = err.to_string();
    assert!(message.starts_with("command 'revie' not found. Did you mean: "));
    assert!(message.contains("review-pr"));
    assert!(message.contains("review-code"));
    assert!(!message.contains("deploy"));

    // exact lookup never suggests
    let err = registry.find_command("revie").unwrap_err();
    assert_eq!(err.to_string(), "command 'revie' not found");
}
