use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (show command execution details)
    pub verbose: bool,

    /// Directory whose top-level files are packaged
    pub build_dir: PathBuf,

    /// Project root containing the auxiliary directories
    pub project_root: PathBuf,
}

impl Context {
    pub fn new(build_dir: PathBuf, project_root: PathBuf, verbose: bool) -> Self {
        Self {
            verbose,
            build_dir,
            project_root,
        }
    }
}
