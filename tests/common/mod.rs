use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated fixture for driving the binary: a build directory with
/// artifacts, a project root with the auxiliary directories, and a stub
/// `zip` executable placed first on PATH that appends its argument
/// vector to a log file instead of archiving anything.
pub struct TestEnv {
    _tmp: TempDir,
    pub build_dir: PathBuf,
    pub project_root: PathBuf,
    pub workdir: PathBuf,
    bin_dir: PathBuf,
    zip_log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_archiver_exit(0)
    }

    /// Fixture whose stub archiver terminates with the given exit code
    pub fn with_archiver_exit(code: i32) -> Self {
        let tmp = TempDir::new().expect("create temp dir");

        let build_dir = tmp.path().join("build");
        let project_root = tmp.path().join("project");
        let workdir = tmp.path().join("work");
        let bin_dir = tmp.path().join("bin");
        for dir in [&build_dir, &project_root, &workdir, &bin_dir] {
            fs::create_dir_all(dir).expect("create fixture dir");
        }
        fs::create_dir_all(project_root.join("tests")).expect("create tests dir");
        fs::create_dir_all(project_root.join("rules")).expect("create rules dir");

        let zip_log = tmp.path().join("zip-invocations.log");
        let stub = bin_dir.join("zip");
        fs::write(
            &stub,
            format!(
                "#!/bin/sh\nprintf '%s\\n' \"$*\" >> {}\nexit {}\n",
                zip_log.display(),
                code
            ),
        )
        .expect("write stub archiver");
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755))
            .expect("mark stub executable");

        Self {
            _tmp: tmp,
            build_dir,
            project_root,
            workdir,
            bin_dir,
            zip_log,
        }
    }

    pub fn artifact(&self, name: &str) -> PathBuf {
        let path = self.build_dir.join(name);
        fs::write(&path, name.as_bytes()).expect("write artifact");
        path
    }

    /// Bare command with the stub archiver on PATH and the working
    /// directory set, but no arguments
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("distpack").expect("binary under test");
        let path = format!(
            "{}:{}",
            self.bin_dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.current_dir(&self.workdir).env("PATH", path);
        cmd
    }

    /// Command pre-populated with the fixture's directories
    pub fn pack(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--build_dir")
            .arg(&self.build_dir)
            .arg("--project_root")
            .arg(&self.project_root);
        cmd
    }

    /// One entry per stub archiver invocation, in invocation order
    pub fn invocations(&self) -> Vec<String> {
        if !self.zip_log.exists() {
            return Vec::new();
        }
        fs::read_to_string(&self.zip_log)
            .expect("read stub log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn write_manifest(&self, contents: &str) {
        fs::write(self.project_root.join("distpack.toml"), contents).expect("write manifest");
    }
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
