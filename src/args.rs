use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the distpack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Directory containing the built artifacts to package
    pub build_dir: PathBuf,

    /// Project root containing the auxiliary directories to bundle
    pub project_root: PathBuf,

    /// Path to alternative manifest file for packaging configuration
    pub manifest: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("distpack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages build artifacts with the project's auxiliary directories")
            .arg(
                Arg::new("build_dir")
                    .long("build_dir")
                    .value_name("DIR")
                    .required(true)
                    .help("Directory containing the built artifacts to package")
            )
            .arg(
                Arg::new("project_root")
                    .long("project_root")
                    .value_name("DIR")
                    .required(true)
                    .help("Project root containing the auxiliary directories to bundle")
            )
            .arg(
                Arg::new("manifest")
                    .short('m')
                    .long("manifest")
                    .value_name("FILE")
                    .help("Path to alternative manifest file (e.g., DISTPACK.toml) for packaging configuration")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            build_dir: matches.get_one::<String>("build_dir").map(PathBuf::from).unwrap(),
            project_root: matches.get_one::<String>("project_root").map(PathBuf::from).unwrap(),
            manifest: matches.get_one::<String>("manifest").map(PathBuf::from),
        }
    }
}
