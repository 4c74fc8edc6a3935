//! CLI argument parsing for papermill.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "papermill.yaml";

/// Papermill: batch generator for individualized LaTeX question booklets.
///
/// Every student on the roster gets their own variant of the assessment:
/// question parameters are derived deterministically from the student's
/// identifier, substituted into a LaTeX template, and compiled to PDF.
#[derive(Parser, Debug)]
#[command(name = "papermill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for papermill.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full batch: roster -> per-student .tex -> PDF -> cleanup.
    ///
    /// Renders one booklet per roster record, compiles each with the
    /// configured compiler, and reduces the output directory to the
    /// deliverable PDFs.
    Generate(GenerateArgs),

    /// Render every student's paper into one combined .tex document.
    ///
    /// Splits the template at \begin{document}/\end{document}, writes the
    /// preamble once and one filled body per student. Does not compile.
    Combine(CombineArgs),

    /// Render a single student's paper without compiling.
    ///
    /// Useful for eyeballing one variant before running the batch.
    Preview(PreviewArgs),

    /// Print the derived parameter table for one identifier.
    ///
    /// Shows every question parameter the identifier produces, for
    /// auditing how variants are distributed.
    Params(ParamsArgs),

    /// Validate the environment without writing anything.
    ///
    /// Checks the config, template, roster, and compiler, reporting each
    /// as pass or fail.
    Check(CheckArgs),

    /// Remove auxiliary compiler artifacts from the output directory.
    ///
    /// Sweeps .aux/.log/... files and prunes emptied subdirectories.
    /// Keeps PDFs and booklet sources.
    Clean(CleanArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the batch config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the roster path from the config.
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Override the output directory from the config.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Stop after writing the .tex sources; skip compilation and cleanup.
    #[arg(long)]
    pub no_compile: bool,

    /// Keep the .tex sources after compilation.
    #[arg(long)]
    pub keep_sources: bool,

    /// Process at most this many roster records.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `combine` command.
#[derive(Parser, Debug)]
pub struct CombineArgs {
    /// Path to the batch config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the roster path from the config.
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Override the output directory from the config.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Process at most this many roster records.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `preview` command.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Roster identifier to render (e.g., a student ID).
    pub identifier: String,

    /// Student name for the booklet header.
    #[arg(default_value = "Unknown")]
    pub name: String,

    /// Path to the batch config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Write the rendered paper to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `params` command.
#[derive(Parser, Debug)]
pub struct ParamsArgs {
    /// Roster identifier to derive parameters for.
    pub identifier: String,

    /// Path to the batch config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the batch config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Path to the batch config file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the output directory from the config.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
