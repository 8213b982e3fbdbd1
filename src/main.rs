mod args;
mod cmd;
mod context;
mod error;
mod manifest;
mod package;
mod result;
mod tpl;
mod utils;

use args::Args;
use context::Context;
use manifest::Manifest;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        build_dir,
        project_root,
        manifest: manifest_path,
    } = Args::parse();

    // Both directories must exist before anything is enumerated
    utils::require_dir(&build_dir)?;
    utils::require_dir(&project_root)?;

    // Create context
    let ctx = Context::new(build_dir, project_root, verbose);

    // Use cliclack for nice UI
    cliclack::intro("distpack")?;

    // Load manifest
    let manifest = {
        let spinner = cliclack::spinner();
        spinner.start("Loading manifest...");
        let result = if let Some(path) = manifest_path {
            Manifest::load_with_manifest_file(&ctx, &path)
        } else {
            Manifest::load(&ctx)
        };
        match result {
            Ok(m) => {
                spinner.stop(format!(
                    "Bundling {} auxiliary directories per artifact",
                    m.include.len()
                ));
                m
            }
            Err(e) => {
                spinner.error("Failed to load manifest");
                return Err(e);
            }
        }
    };

    if ctx.verbose {
        for line in package::include_summary(&manifest) {
            println!("Bundling {}", line);
        }
    }

    let artifacts = package::collect_artifacts(&ctx.build_dir)?;
    if artifacts.is_empty() {
        cliclack::outro(format!(
            "No artifacts found in {}",
            ctx.build_dir.display()
        ))?;
        return Ok(());
    }

    for artifact in &artifacts {
        let name = package::archive_name(&manifest, artifact);
        let spinner = cliclack::spinner();
        spinner.start(format!("Packaging {}...", name));

        match package::archive(&ctx, &manifest, artifact) {
            Ok(output) => {
                spinner.stop(format!("Created {}", output.display()));
            }
            Err(e) => {
                spinner.error(format!("Failed to package {}", name));
                return Err(e);
            }
        }
    }

    cliclack::outro(format!("Packaged {} artifact(s)", artifacts.len()))?;
    Ok(())
}
