//! Implementation of the `papermill check` command.
//!
//! Dry-runs the batch setup without writing anything: the config must
//! load, the template must be a complete document whose placeholders all
//! have values, the roster must parse, and the compiler binary must
//! spawn. Issues are collected and reported together so one run surfaces
//! everything that needs fixing.

use crate::cli::CheckArgs;
use crate::compile;
use crate::context::BatchContext;
use crate::error::{MillError, Result};
use crate::render;
use crate::roster::{self, RosterRecord};
use crate::template;
use std::collections::HashSet;

use super::combine::split_template;

/// A failed readiness check.
struct Issue {
    category: &'static str,
    description: String,
}

/// Accumulated results of all readiness checks.
struct CheckReport {
    passed: Vec<String>,
    issues: Vec<Issue>,
}

impl CheckReport {
    fn new() -> Self {
        Self {
            passed: Vec::new(),
            issues: Vec::new(),
        }
    }

    fn pass(&mut self, line: String) {
        self.passed.push(line);
    }

    fn issue(&mut self, category: &'static str, description: String) {
        self.issues.push(Issue {
            category,
            description,
        });
    }

    fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Execute the `papermill check` command.
///
/// A config that fails to load is fatal; everything else is collected
/// into the report. Exit status is non-zero when any check fails.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let ctx = BatchContext::resolve(&args.config)?;

    println!("Checking batch setup from '{}'...", args.config.display());
    println!();

    let mut report = CheckReport::new();
    report.pass(format!(
        "config: question set '{}', output directory '{}'",
        ctx.config.question_set,
        ctx.output_dir.display()
    ));

    check_template(&ctx, &mut report);
    check_roster(&ctx, &mut report);
    check_compiler(&ctx, &mut report);

    print_report(&report);

    if report.has_issues() {
        return Err(MillError::UserError(format!(
            "found {} issue(s) in the batch setup.",
            report.issues.len()
        )));
    }
    Ok(())
}

/// Template is readable, splits at its document markers, and references
/// only placeholders the configured question set can fill.
fn check_template(ctx: &BatchContext, report: &mut CheckReport) {
    let template_text = match render::load_template(&ctx.template_path()) {
        Ok(text) => text,
        Err(e) => return report.issue("template", e.to_string()),
    };
    if let Err(e) = split_template(&template_text) {
        return report.issue("template", e.to_string());
    }

    // Any identifier exercises the catalog; the probe only has to build.
    let probe = RosterRecord {
        identifier: "0".to_string(),
        name: "Probe".to_string(),
    };
    let placements = match render::paper_placements(&ctx.config, &probe) {
        Ok(placements) => placements,
        Err(e) => return report.issue("questions", e.to_string()),
    };

    let known: HashSet<&str> = placements.keys().collect();
    let referenced = template::unresolved_tokens(&template_text);
    let unknown: Vec<String> = referenced
        .iter()
        .filter(|token| !known.contains(token.as_str()))
        .map(|token| format!("@{}@", token))
        .collect();
    if !unknown.is_empty() {
        return report.issue(
            "template",
            format!(
                "references placeholders with no value: {}.\n\
                 Fix: correct the spelling, or pick a question_set whose catalog fills them.",
                unknown.join(", ")
            ),
        );
    }

    report.pass(format!(
        "template: {} placeholders referenced, all known",
        referenced.len()
    ));
}

/// Roster file parses; the record count goes in the report.
fn check_roster(ctx: &BatchContext, report: &mut CheckReport) {
    match roster::load(&ctx.roster_path(), ctx.config.roster_skip_rows) {
        Ok(records) => report.pass(format!("roster: {} records", records.len())),
        Err(e) => report.issue("roster", e.to_string()),
    }
}

/// Compiler command parses and its binary spawns.
fn check_compiler(ctx: &BatchContext, report: &mut CheckReport) {
    let compiler_args = match compile::parse_compiler_command(&ctx.config.compiler) {
        Ok(args) => args,
        Err(e) => return report.issue("compiler", e.to_string()),
    };
    match compile::probe_compiler(&compiler_args) {
        Ok(()) => report.pass(format!("compiler: '{}' responds", compiler_args[0])),
        Err(e) => report.issue("compiler", e.to_string()),
    }
}

/// Print passed checks, then numbered issues with their fix hints.
fn print_report(report: &CheckReport) {
    for line in &report.passed {
        println!("  ok: {}", line);
    }

    if !report.has_issues() {
        println!();
        println!("Batch setup looks good.");
        return;
    }

    println!();
    println!("Issues detected ({}):", report.issues.len());
    println!();
    for (i, issue) in report.issues.iter().enumerate() {
        let mut lines = issue.description.lines();
        if let Some(first) = lines.next() {
            println!("  {}. [{}] {}", i + 1, issue.category, first);
        }
        for line in lines {
            println!("     {}", line);
        }
        println!();
    }
}
