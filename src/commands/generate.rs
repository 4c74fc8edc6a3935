//! Implementation of the `papermill generate` command.
//!
//! This is the batch workhorse: it renders one personalized .tex booklet
//! per roster record, compiles each with the configured LaTeX compiler,
//! and leaves the output directory holding only the final PDFs and the
//! run's event log.
//!
//! # What `papermill generate` does
//!
//! 1. Resolves the config and applies `--roster`/`--output` overrides
//! 2. Reads the template and the roster
//! 3. Stages the logo next to the sources so `\includegraphics` resolves
//! 4. Renders and atomically writes one .tex per record
//! 5. Compiles each source, polling for the PDF after the last attempt
//! 6. Sweeps auxiliary files, collects stray PDFs, prunes empty directories
//! 7. Prints a summary and records the whole run in the event log

use crate::cli::GenerateArgs;
use crate::compile;
use crate::context::BatchContext;
use crate::error::{MillError, Result};
use crate::events::{append_event, RunAction, RunEvent};
use crate::fs::atomic_write_file;
use crate::fs::cleanup::{self, AUX_EXTENSIONS, SOURCE_EXTENSION};
use crate::render;
use crate::roster;
use crate::template;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the `papermill generate` command.
///
/// Render or spawn failures abort the batch; a booklet whose compiler
/// runs but produces no PDF is counted and reported at the end instead,
/// so one bad record does not sink the rest of the class.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let start = Instant::now();

    let mut ctx = BatchContext::resolve(&args.config)?;
    if let Some(output) = args.output {
        ctx.output_dir = output;
    }
    if args.keep_sources {
        ctx.config.keep_sources = true;
    }

    let template_text = render::load_template(&ctx.template_path())?;

    let roster_path = args.roster.clone().unwrap_or_else(|| ctx.roster_path());
    let mut records = roster::load(&roster_path, ctx.config.roster_skip_rows)?;
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }
    if records.is_empty() {
        println!("Roster has no records; nothing to do.");
        return Ok(());
    }

    // Reject an unusable compiler line before any booklet is written.
    let compiler_args = if args.no_compile {
        None
    } else {
        Some(compile::parse_compiler_command(&ctx.config.compiler)?)
    };

    fs::create_dir_all(&ctx.output_dir).map_err(|e| {
        MillError::UserError(format!(
            "failed to create output directory '{}': {}",
            ctx.output_dir.display(),
            e
        ))
    })?;

    let events_file = ctx.events_file();
    append_event(
        &events_file,
        &RunEvent::new(RunAction::RunStarted).with_details(json!({
            "assessment": ctx.config.assessment_type,
            "question_set": ctx.config.question_set.to_string(),
            "records": records.len(),
        })),
    )?;

    let staged_logo = stage_logo(&ctx)?;

    let total = records.len();
    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for (index, record) in records.iter().enumerate() {
        println!("[{}/{}] Processing: {}", index + 1, total, record.name);

        let rendered = render::render_paper(&template_text, &ctx.config, record)?;
        // Every record renders from the same template with the same key
        // set, so one leftover scan covers the whole batch.
        if index == 0 {
            for token in template::unresolved_tokens(&rendered) {
                eprintln!(
                    "Warning: placeholder '@{}@' has no value and is left verbatim.",
                    token
                );
            }
        }

        let tex_path = ctx.booklet_tex_path(&record.identifier, &record.name);
        atomic_write_file(&tex_path, &format!("{}\n", rendered))?;
        append_event(
            &events_file,
            &RunEvent::new(RunAction::PaperWritten)
                .with_record(record.identifier.as_str())
                .with_details(json!({ "file": file_label(&tex_path) })),
        )?;

        let Some(compiler_args) = &compiler_args else {
            succeeded += 1;
            continue;
        };

        let outcome = compile::compile_booklet(
            compiler_args,
            &tex_path,
            ctx.config.compile_attempts,
            ctx.config.poll_budget,
        )?;
        if outcome.succeeded {
            succeeded += 1;
            println!("Generated: {}", file_label(&outcome.pdf_path));
            append_event(
                &events_file,
                &RunEvent::new(RunAction::CompileSucceeded)
                    .with_record(record.identifier.as_str())
                    .with_details(json!({
                        "file": file_label(&outcome.pdf_path),
                        "attempts": outcome.attempts,
                    })),
            )?;
        } else {
            failed += 1;
            println!("Failed: {}", file_label(&tex_path));
            println!("Log tail:\n{}", outcome.log_tail);
            append_event(
                &events_file,
                &RunEvent::new(RunAction::CompileFailed)
                    .with_record(record.identifier.as_str())
                    .with_details(json!({
                        "file": file_label(&tex_path),
                        "attempts": outcome.attempts,
                        "log_tail": outcome.log_tail,
                    })),
            )?;
        }
    }

    if !args.no_compile {
        println!();
        println!("Performing cleanup...");
        let report = run_cleanup(&ctx, staged_logo.as_deref())?;
        for (path, reason) in &report.skipped {
            println!("Skipped {}: {}", path.display(), reason);
        }
        append_event(
            &events_file,
            &RunEvent::new(RunAction::Cleanup).with_details(json!({
                "collected_pdfs": report.collected_pdfs,
                "removed_files": report.removed_files,
                "pruned_dirs": report.pruned_dirs,
            })),
        )?;
    }

    let elapsed = start.elapsed().as_secs_f64();
    println!();
    if args.no_compile {
        println!("All done! {} booklet sources written.", succeeded);
    } else {
        println!(
            "All done! {} PDFs generated successfully, {} failed.",
            succeeded, failed
        );
    }
    println!("Clean folder ready at: {}", ctx.output_dir.display());
    println!("Finished in {:.2}s", elapsed);

    append_event(
        &events_file,
        &RunEvent::new(RunAction::RunFinished).with_details(json!({
            "succeeded": succeeded,
            "failed": failed,
            "elapsed_seconds": elapsed,
        })),
    )?;

    if failed > 0 {
        return Err(MillError::CompileError(format!(
            "{} of {} booklets failed to compile",
            failed, total
        )));
    }
    Ok(())
}

/// Copy the configured logo into the output directory.
///
/// A missing logo is reported and skipped, matching how a missing
/// graphic degrades a booklet rather than sinking the batch.
fn stage_logo(ctx: &BatchContext) -> Result<Option<PathBuf>> {
    let Some(source) = ctx.logo_path() else {
        return Ok(None);
    };
    if !source.is_file() {
        println!("Logo not found: '{}' (skipped)", source.display());
        return Ok(None);
    }
    let Some(file_name) = source.file_name() else {
        return Ok(None);
    };
    let dest = ctx.output_dir.join(file_name);
    fs::copy(&source, &dest).map_err(|e| {
        MillError::UserError(format!(
            "failed to copy logo '{}' into '{}': {}",
            source.display(),
            ctx.output_dir.display(),
            e
        ))
    })?;
    println!("Copied logo -> {}", dest.display());
    Ok(Some(dest))
}

/// Sweep build residue so the output directory ends up holding only the
/// PDFs and the event log.
fn run_cleanup(ctx: &BatchContext, staged_logo: Option<&Path>) -> Result<cleanup::CleanupReport> {
    let mut extensions: Vec<&str> = AUX_EXTENSIONS.to_vec();
    if !ctx.config.keep_sources {
        extensions.push(SOURCE_EXTENSION);
    }
    let report = cleanup::clean_output_tree(&ctx.output_dir, &extensions)?;
    if let Some(logo) = staged_logo {
        // The staged copy is residue once compilation is done.
        let _ = fs::remove_file(logo);
    }
    Ok(report)
}

/// File name shown in progress output.
fn file_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
