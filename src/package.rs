use crate::cmd;
use crate::context::Context;
use crate::manifest::Manifest;
use crate::result::Result;
use crate::tpl::Tpl;
use crate::utils;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// External archiving utility the tool delegates to
pub const ARCHIVER: &str = "zip";

/// Collect the build artifacts to package: the top-level files of the
/// build directory, sorted by path. Subdirectories and hidden entries
/// are skipped; nothing is recursed into.
pub fn collect_artifacts(build_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut artifacts = Vec::new();

    for entry in fs::read_dir(build_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        artifacts.push(entry.path());
    }

    artifacts.sort();
    Ok(artifacts)
}

/// Create the archive for a single artifact by invoking the external
/// archiver once. The archiver's own failures are not treated as errors;
/// only failing to run it at all is.
pub fn archive(ctx: &Context, manifest: &Manifest, artifact: &Path) -> Result<PathBuf> {
    utils::ensure_dir(&manifest.output_folder)?;

    let output = manifest.output_folder.join(archive_name(manifest, artifact));
    let args = archive_args(&output, artifact, &manifest.include);

    cmd::invoke(ctx, ARCHIVER, &args)?;

    Ok(output)
}

/// Archive file name for an artifact after template expansion
pub fn archive_name(manifest: &Manifest, artifact: &Path) -> String {
    let file = artifact
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = artifact
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut tpl = Tpl::new();
    tpl.register("FILE", file);
    tpl.register("STEM", stem);
    tpl.register("PLATFORM", utils::platform_string());

    format!("{}.zip", tpl.parse(&manifest.filename))
}

/// Argument vector for one archiver invocation: recursive, the output
/// archive, the artifact, then each bundled directory.
fn archive_args(output: &Path, artifact: &Path, include: &[PathBuf]) -> Vec<OsString> {
    let mut args = vec![
        OsString::from("-r"),
        output.as_os_str().to_os_string(),
        artifact.as_os_str().to_os_string(),
    ];
    for dir in include {
        args.push(dir.as_os_str().to_os_string());
    }
    args
}

/// One line per bundled directory for verbose output, with a file count
/// for directories that exist
pub fn include_summary(manifest: &Manifest) -> Vec<String> {
    manifest
        .include
        .iter()
        .map(|dir| {
            if dir.is_dir() {
                let files = WalkDir::new(dir)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file())
                    .count();
                format!("{} ({} files)", dir.display(), files)
            } else {
                format!("{} (missing)", dir.display())
            }
        })
        .collect()
}
