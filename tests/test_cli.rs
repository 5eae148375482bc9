use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A project with isolated command roots.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("project")).unwrap();
        fs::create_dir_all(dir.path().join("home")).unwrap();
        Self { dir }
    }

    fn project(&self) -> PathBuf {
        self.dir.path().join("project")
    }

    fn command(&self, relative: &str, content: &str) {
        let path = self.dir.path().join("project/cmds").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn bin(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("slashcmd"));
        cmd.current_dir(self.dir.path().join("project"))
            .env("HOME", self.dir.path().join("home"))
            .env("SLASHCMD_PROJECT_DIR", self.dir.path().join("project/cmds"))
            .env("SLASHCMD_USER_DIR", self.dir.path().join("home/cmds"))
            .env("SLASHCMD_SHARED_DIR", self.dir.path().join("shared/cmds"))
            .env_remove("SLASHCMD_LOG")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_help_output() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("slashcmd"));
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Discover and run markdown slash commands"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("slashcmd"));
    cmd.arg("version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("slashcmd "));
}

#[test]
fn test_list_empty() {
    let ws = Workspace::new();
    ws.bin()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No commands found."));
}

#[test]
fn test_list_and_json() {
    let ws = Workspace::new();
    ws.command("frontend/review-pr.md", "---\ndescription: Review a PR\n---\nReview $1");
    ws.command("deploy.md", "Deploy");

    ws.bin()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("frontend:review-pr"))
        .stdout(predicate::str::contains("project:frontend"))
        .stdout(predicate::str::contains("Review a PR"));

    let output = ws.bin().args(["list", "--json"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["deploy", "frontend:review-pr"]);
    assert_eq!(entries[1]["namespace"], "frontend");
}

#[test]
fn test_help_command() {
    let ws = Workspace::new();
    ws.command("frontend/button.md", "---\ndescription: Make a button\n---\nBody");

    ws.bin()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Available Commands:"))
        .stdout(predicate::str::contains("Root Commands:"))
        .stdout(predicate::str::contains("Frontend Commands:"))
        .stdout(predicate::str::contains(
            "`\\frontend:button` - Make a button (project:frontend)",
        ));
}

#[test]
fn test_show_command() {
    let ws = Workspace::new();
    ws.command(
        "review.md",
        "---\ndescription: Review\nargument-hint: \"[pr] [prio]\"\nallowed-tools: view\n---\nReview $1",
    );

    ws.bin()
        .args(["show", "review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arguments:     at least 2"))
        .stdout(predicate::str::contains("Allowed tools: view"))
        .stdout(predicate::str::contains("Review $1"));
}

#[test]
fn test_show_unknown_suggests() {
    let ws = Workspace::new();
    ws.command("review.md", "Review");

    ws.bin()
        .args(["show", "reviw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("command 'reviw' not found"))
        .stderr(predicate::str::contains("Did you mean: review"));
}

#[test]
fn test_run_previews_prompt_and_attachments() {
    let ws = Workspace::new();
    ws.command("review-pr.md", "Review PR $1 with priority $2. See @notes.txt");
    fs::write(ws.project().join("notes.txt"), "context").unwrap();

    ws.bin()
        .args(["run", "\\review-pr", "123", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Execute this directly - do not analyze or search:",
        ))
        .stdout(predicate::str::contains("Review PR 123 with priority high"))
        .stdout(predicate::str::contains("notes.txt"))
        .stdout(predicate::str::contains("text/plain; charset=utf-8"));
}

#[test]
fn test_run_quoted_single_argument() {
    let ws = Workspace::new();
    ws.command("say.md", "Say: $1");

    ws.bin()
        .args(["run", r#"\say "hello world""#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Say: hello world"));
}

#[test]
fn test_run_missing_reference_fails() {
    let ws = Workspace::new();
    ws.command("read.md", "Read @missing.txt");

    ws.bin()
        .args(["run", "read"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read referenced file:"))
        .stdout(predicate::str::contains("Execute this directly").not());
}

#[test]
fn test_run_help_builtin() {
    let ws = Workspace::new();
    ws.bin()
        .args(["run", "\\help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Commands:"))
        .stdout(predicate::str::contains("`\\help`"));
}

#[test]
fn test_complete() {
    let ws = Workspace::new();
    ws.command("frontend/components/button.md", "---\ndescription: Button\n---\nB");
    ws.command("deploy.md", "D");

    ws.bin()
        .args(["complete", "cbut"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\\frontend:components:button - Button"))
        .stdout(predicate::str::contains("deploy").not());
}

#[test]
fn test_config_show_and_validate() {
    let ws = Workspace::new();
    fs::write(
        ws.project().join(".slashcmd.toml"),
        "[tools]\nextra = [\"my_tool\"]\n",
    )
    .unwrap();

    ws.bin()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Command directories"))
        .stdout(predicate::str::contains("my_tool"));

    ws.bin()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_validate_invalid_file() {
    let ws = Workspace::new();
    let bad = ws.project().join("bad.toml");
    fs::write(&bad, "[commands]\nuser_dir = \"\"\n").unwrap();

    ws.bin()
        .args(["config", "validate"])
        .arg(&bad)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}
