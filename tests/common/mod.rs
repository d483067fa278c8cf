//! Shared testing utilities for pit-maint CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("remotes")).expect("Failed to create remotes dir");
        fs::create_dir_all(root.path().join("sources")).expect("Failed to create sources dir");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default pit log location under the emulated home.
    pub fn log_path(&self) -> PathBuf {
        self.home().join(".pit").join("log.txt")
    }

    /// Build a command for invoking the compiled `pit-maint` binary within the default workspace.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `pit-maint` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("pit-maint").expect("Failed to locate pit-maint binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.home()).env_remove("RUST_LOG");
        for (key, value) in git_env() {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run git in `dir` with a fixed identity and assert success.
    pub fn git(&self, dir: &Path, args: &[&str]) {
        let output = process::Command::new("git")
            .args(args)
            .current_dir(dir)
            .env("HOME", self.home())
            .envs(git_env())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Create a bare repository `remotes/<name>.git` with one commit and
    /// return its `file://` URL.
    pub fn create_remote(&self, name: &str) -> String {
        let source = self.source_path(name);
        fs::create_dir_all(&source).expect("Failed to create source repo dir");
        self.git(&source, &["init", "--initial-branch=main"]);
        fs::write(source.join("README.md"), format!("# {name}\n")).expect("Failed to seed repo");
        self.git(&source, &["add", "."]);
        self.git(&source, &["commit", "-m", "Initial commit"]);

        let bare = self.remote_path(name);
        let remotes = self.home().join("remotes");
        self.git(&remotes, &["clone", "--bare", source.to_str().unwrap(), bare.to_str().unwrap()]);

        format!("file://{}", bare.display())
    }

    /// Commit `content` to `file` in the source of `name` and push it to the remote.
    pub fn push_change(&self, name: &str, file: &str, content: &str) {
        let source = self.source_path(name);
        fs::write(source.join(file), content).expect("Failed to write change");
        self.git(&source, &["add", "."]);
        let message = format!("Update {file}");
        self.git(&source, &["commit", "-m", message.as_str()]);
        let remote = self.remote_path(name);
        self.git(&source, &["push", remote.to_str().unwrap(), "main"]);
    }

    /// Write a manifest with one group into the work directory and return its path.
    pub fn write_manifest(&self, group: &str, urls: &[&str]) -> PathBuf {
        let entries = urls.iter().map(|url| format!("\"{url}\"")).collect::<Vec<_>>().join(", ");
        let path = self.work_dir.join("repos.toml");
        fs::write(&path, format!("[[group]]\nname = \"{group}\"\nrepositories = [{entries}]\n"))
            .expect("Failed to write manifest");
        path
    }

    /// Write `version.go` into the work directory.
    pub fn write_version_file(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("version.go");
        fs::write(&path, content).expect("Failed to write version.go");
        path
    }

    fn source_path(&self, name: &str) -> PathBuf {
        self.home().join("sources").join(name)
    }

    fn remote_path(&self, name: &str) -> PathBuf {
        self.home().join("remotes").join(format!("{name}.git"))
    }
}

fn git_env() -> [(&'static str, &'static str); 5] {
    [
        ("GIT_AUTHOR_NAME", "Test User"),
        ("GIT_AUTHOR_EMAIL", "test@example.com"),
        ("GIT_COMMITTER_NAME", "Test User"),
        ("GIT_COMMITTER_EMAIL", "test@example.com"),
        ("GIT_CONFIG_NOSYSTEM", "1"),
    ]
}
