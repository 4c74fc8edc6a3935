//! External LaTeX compiler adapter.
//!
//! Runs the configured compiler (pdflatex by default) on a rendered `.tex`
//! source, retries up to the configured attempt count, then polls for the
//! output PDF. LaTeX in nonstopmode can exit non-zero while still producing
//! a usable PDF, so the artifact counts as success even when the exit
//! status does not.

use crate::error::{MillError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

/// Number of compiler log lines surfaced when a compile fails.
const LOG_TAIL_LINES: usize = 15;

/// Sleep between output-file polls after the compiler runs.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of compiling one booklet source.
#[derive(Debug)]
pub struct CompileOutcome {
    /// Whether a usable PDF was produced.
    pub succeeded: bool,
    /// Path where the PDF is expected. Present on disk when `succeeded`.
    pub pdf_path: PathBuf,
    /// Number of compiler runs performed.
    pub attempts: u32,
    /// Tail of the last compiler run's stdout, for diagnostics.
    pub log_tail: String,
}

/// Parse the configured compiler command line into an argv array.
///
/// Uses shell-words so quoting behaves like a shell without invoking one.
pub fn parse_compiler_command(compiler: &str) -> Result<Vec<String>> {
    let args = shell_words::split(compiler).map_err(|e| {
        MillError::UserError(format!(
            "failed to parse compiler command '{}': {}.\n\
             Fix: check for unmatched quotes or invalid escape sequences in the config compiler setting.",
            compiler, e
        ))
    })?;

    if args.is_empty() {
        return Err(MillError::UserError(
            "compiler command is empty.\n\
             Fix: provide a command line such as 'pdflatex -interaction=nonstopmode' in the config."
                .to_string(),
        ));
    }

    Ok(args)
}

/// Check that the compiler binary can be spawned.
///
/// Runs `<program> --version` and succeeds as long as the process starts;
/// the exit status is ignored because not every binary supports the flag.
pub fn probe_compiler(compiler_args: &[String]) -> Result<()> {
    let program = &compiler_args[0];
    Command::new(program)
        .arg("--version")
        .output()
        .map_err(|e| {
            MillError::UserError(format!(
                "failed to execute compiler '{}': {}.\n\
                 Fix: ensure the compiler is installed and in PATH.",
                program, e
            ))
        })?;
    Ok(())
}

/// Compile one `.tex` source into a PDF next to it.
///
/// The compiler runs with the source's directory as its working directory
/// and the bare filename as its final argument, so auxiliary files land
/// beside the output. Runs up to `max_attempts` times, stopping early on
/// exit status 0, then polls for the PDF up to `poll_budget` times.
///
/// # Returns
///
/// * `Ok(CompileOutcome)` - The compiler ran; inspect `succeeded`
/// * `Err(MillError::UserError)` - The compiler binary could not be spawned (exit code 1)
pub fn compile_booklet(
    compiler_args: &[String],
    tex_path: &Path,
    max_attempts: u32,
    poll_budget: u32,
) -> Result<CompileOutcome> {
    let tex_dir = match tex_path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let tex_file = tex_path.file_name().ok_or_else(|| {
        MillError::UserError(format!(
            "'{}' has no filename component.\n\
             Fix: pass the path of a .tex source file.",
            tex_path.display()
        ))
    })?;
    let pdf_path = tex_path.with_extension("pdf");

    let program = &compiler_args[0];
    let fixed_args = &compiler_args[1..];

    let mut compiled_ok = false;
    let mut attempts = 0;
    let mut last_stdout = String::new();

    while attempts < max_attempts {
        let output = Command::new(program)
            .args(fixed_args)
            .arg(tex_file)
            .current_dir(&tex_dir)
            .output()
            .map_err(|e| {
                MillError::UserError(format!(
                    "failed to execute compiler '{}': {}.\n\
                     Fix: ensure the compiler is installed and in PATH.",
                    program, e
                ))
            })?;

        attempts += 1;
        last_stdout = String::from_utf8_lossy(&output.stdout).to_string();

        if output.status.success() {
            compiled_ok = true;
            break;
        }
    }

    // The PDF can lag the compiler's exit on some filesystems, and
    // nonstopmode produces one for many recoverable errors.
    let mut pdf_present = false;
    for _ in 0..poll_budget {
        if pdf_path.exists() {
            pdf_present = true;
            break;
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    Ok(CompileOutcome {
        succeeded: compiled_ok || pdf_present,
        pdf_path,
        attempts,
        log_tail: tail_lines(&last_stdout, LOG_TAIL_LINES),
    })
}

/// Take the last `max_lines` lines of compiler output.
fn tail_lines(output: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = output.lines().collect();
    if lines.len() > max_lines {
        lines[lines.len() - max_lines..].join("\n")
    } else {
        lines.join("\n")
    }
}
