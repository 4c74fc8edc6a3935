//! Implementation of the `papermill clean` command.
//!
//! Standalone sweep of an output directory, for runs that were
//! interrupted or compiled by hand. Auxiliary files are removed, stray
//! PDFs are collected to the top level, and empty directories are
//! pruned. Unlike the sweep at the end of `generate`, this never touches
//! .tex sources.

use crate::cli::CleanArgs;
use crate::context::BatchContext;
use crate::error::Result;
use crate::events::{append_event, RunAction, RunEvent};
use crate::fs::cleanup::{clean_output_tree, AUX_EXTENSIONS};
use serde_json::json;

/// Execute the `papermill clean` command.
pub fn cmd_clean(args: CleanArgs) -> Result<()> {
    let mut ctx = BatchContext::resolve(&args.config)?;
    if let Some(output) = args.output {
        ctx.output_dir = output;
    }

    if !ctx.output_dir.is_dir() {
        println!(
            "Output directory '{}' does not exist; nothing to clean.",
            ctx.output_dir.display()
        );
        return Ok(());
    }

    let report = clean_output_tree(&ctx.output_dir, AUX_EXTENSIONS)?;

    for (path, reason) in &report.skipped {
        println!("Skipped {}: {}", path.display(), reason);
    }
    println!(
        "Removed {} auxiliary files, collected {} nested PDFs, pruned {} empty directories.",
        report.removed_files, report.collected_pdfs, report.pruned_dirs
    );

    append_event(
        &ctx.events_file(),
        &RunEvent::new(RunAction::Cleanup).with_details(json!({
            "collected_pdfs": report.collected_pdfs,
            "removed_files": report.removed_files,
            "pruned_dirs": report.pruned_dirs,
        })),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_batch_fixture, SUCCESS_COMPILER};
    use std::path::Path;
    use tempfile::TempDir;

    fn args_for(config: &Path) -> CleanArgs {
        CleanArgs {
            config: config.to_path_buf(),
            output: None,
        }
    }

    #[test]
    fn test_clean_sweeps_aux_and_keeps_sources() {
        let temp = TempDir::new().unwrap();
        let config = write_batch_fixture(temp.path(), SUCCESS_COMPILER);
        let out = temp.path().join("out");
        std::fs::create_dir_all(out.join("nested")).unwrap();
        std::fs::write(out.join("booklet.tex"), "kept").unwrap();
        std::fs::write(out.join("booklet.aux"), "swept").unwrap();
        std::fs::write(out.join("booklet.log"), "swept").unwrap();
        std::fs::write(out.join("nested").join("stray.pdf"), "pdf").unwrap();

        cmd_clean(args_for(&config)).unwrap();

        assert!(out.join("booklet.tex").is_file());
        assert!(!out.join("booklet.aux").exists());
        assert!(!out.join("booklet.log").exists());
        assert!(out.join("stray.pdf").is_file());
        assert!(!out.join("nested").exists());

        let events = std::fs::read_to_string(out.join("papermill.events.ndjson")).unwrap();
        assert!(events.contains("\"cleanup\""));
        assert!(events.contains("\"collected_pdfs\":1"));
    }

    #[test]
    fn test_clean_missing_output_dir_is_noop() {
        let temp = TempDir::new().unwrap();
        let config = write_batch_fixture(temp.path(), SUCCESS_COMPILER);

        cmd_clean(args_for(&config)).unwrap();

        assert!(!temp.path().join("out").exists());
    }

    #[test]
    fn test_clean_output_override() {
        let temp = TempDir::new().unwrap();
        let config = write_batch_fixture(temp.path(), SUCCESS_COMPILER);
        let elsewhere = temp.path().join("elsewhere");
        std::fs::create_dir_all(&elsewhere).unwrap();
        std::fs::write(elsewhere.join("old.aux"), "swept").unwrap();

        let mut args = args_for(&config);
        args.output = Some(elsewhere.clone());
        cmd_clean(args).unwrap();

        assert!(!elsewhere.join("old.aux").exists());
        assert!(elsewhere.join("papermill.events.ndjson").is_file());
    }
}
