//! Shared fixtures for driving the `ccfmt` binary

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch project directory plus a `bin/` directory for stub formatters
///
/// The recording stub appends each path it is given to `calls.log` and
/// overwrites the file (when it exists) with a marker, standing in for
/// `clang-format -i`.
pub struct TestProject {
    tmp: TempDir,
    pub bin: PathBuf,
    pub log: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&bin).expect("create bin dir");
        fs::create_dir_all(tmp.path().join("project")).expect("create project dir");
        let log = tmp.path().join("calls.log");

        Self { tmp, bin, log }
    }

    pub fn root(&self) -> PathBuf {
        self.tmp.path().join("project")
    }

    /// Create an unformatted source file relative to the project root
    pub fn touch(&self, relative: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, "int  main( ) {}\n").expect("write fixture file");
    }

    pub fn write(&self, relative: &str, content: &str) {
        fs::write(self.root().join(relative), content).expect("write file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).expect("read file")
    }

    /// Install the recording stub in `bin/` under `name` and return its path
    pub fn install_formatter(&self, name: &str) -> PathBuf {
        let body = format!(
            "#!/bin/sh\n\
             [ \"$1\" = \"-i\" ] || exit 64\n\
             printf '%s\\n' \"$2\" >> '{log}'\n\
             if [ -f \"$2\" ]; then printf 'formatted\\n' > \"$2\"; fi\n",
            log = self.log.display()
        );
        self.install_script(name, &body)
    }

    /// Install a stub that records the call and then exits with `code`
    pub fn install_failing_formatter(&self, name: &str, code: i32) -> PathBuf {
        let body = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$2\" >> '{log}'\nexit {code}\n",
            log = self.log.display()
        );
        self.install_script(name, &body)
    }

    fn install_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.bin.join(name);
        fs::write(&path, body).expect("write stub formatter");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("make stub executable");
        path
    }

    /// Paths the stub formatter was called with, in call order
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// `ccfmt` running inside the project with only `bin/` on PATH
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ccfmt").expect("binary built");
        cmd.current_dir(self.root())
            .env("PATH", &self.bin)
            .env_remove("RUST_LOG")
            .args(["--color", "never"]);
        cmd
    }
}
