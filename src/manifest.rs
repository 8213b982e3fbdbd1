use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the optional packaging manifest, looked up in the project root
pub const MANIFEST_FILE: &str = "distpack.toml";

/// Auxiliary directories bundled into every archive when the manifest
/// does not override them
pub const DEFAULT_INCLUDE: [&str; 2] = ["tests", "rules"];

const DEFAULT_FILENAME: &str = "$FILE";

/// Raw `distpack.toml` contents
#[derive(Debug, Deserialize, Default)]
pub struct PackConfig {
    #[serde(default)]
    pub include: Option<Vec<String>>,

    #[serde(rename = "output-folder", default)]
    pub output_folder: Option<String>,

    #[serde(default)]
    pub filename: Option<String>,
}

/// Parsed and processed packaging configuration
#[derive(Debug)]
pub struct Manifest {
    /// Directories bundled into each archive, resolved against the project root
    pub include: Vec<PathBuf>,

    /// Where archives are written, resolved against the working directory
    pub output_folder: PathBuf,

    /// Archive name template; ".zip" is appended after expansion
    pub filename: String,
}

impl Manifest {
    /// Load the manifest from `distpack.toml` in the project root, falling
    /// back to the default layout when the file does not exist
    pub fn load(ctx: &Context) -> Result<Self> {
        let path = ctx.project_root.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::from_config(ctx, PackConfig::default()));
        }
        Self::load_file(ctx, &path)
    }

    /// Load the manifest from an explicitly named file
    pub fn load_with_manifest_file(ctx: &Context, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.display().to_string()));
        }
        Self::load_file(ctx, path)
    }

    fn load_file(ctx: &Context, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PackConfig = toml::from_str(&content)?;
        let manifest = Self::from_config(ctx, config);

        if manifest.filename.is_empty() {
            return Err(Error::InvalidManifest(
                "filename template must not be empty".to_string(),
            ));
        }
        if manifest.include.is_empty() {
            return Err(Error::InvalidManifest(
                "include must name at least one directory".to_string(),
            ));
        }

        Ok(manifest)
    }

    fn from_config(ctx: &Context, config: PackConfig) -> Self {
        let include = config
            .include
            .unwrap_or_else(|| DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect())
            .iter()
            .map(|dir| ctx.project_root.join(dir))
            .collect();

        let output_folder = config
            .output_folder
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let filename = config
            .filename
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

        Self {
            include,
            output_folder,
            filename,
        }
    }
}
