use crate::context::Context;
use crate::result::Result;
use std::ffi::OsString;
use std::io::{BufRead, BufReader};
use std::process::{Command, ExitStatus, Stdio};

/// Run an external command to completion and stream its output to the
/// console if verbose mode is enabled. The command's exit status is
/// returned but never treated as a failure; only being unable to spawn
/// or wait on the child is an error.
pub fn invoke(ctx: &Context, program: &str, args: &[OsString]) -> Result<ExitStatus> {
    if ctx.verbose {
        println!("Executing: {} {}", program, display_args(args));
    }

    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Stream stdout
    if let Some(stdout) = child.stdout.take() {
        let reader = BufReader::new(stdout);
        for line in reader.lines().map_while(|l| l.ok()) {
            if ctx.verbose {
                println!("{}", line);
            }
        }
    }

    // Stream stderr
    if let Some(stderr) = child.stderr.take() {
        let reader = BufReader::new(stderr);
        for line in reader.lines().map_while(|l| l.ok()) {
            if ctx.verbose {
                eprintln!("{}", line);
            }
        }
    }

    let status = child.wait()?;
    Ok(status)
}

fn display_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
