//! Implementation of the `papermill combine` command.
//!
//! Instead of one .tex per student, this produces a single document that
//! repeats the template body once per roster record under one shared
//! preamble. Useful for print shops that want one file, and for proofing
//! a whole batch with a single compile.

use crate::cli::CombineArgs;
use crate::context::BatchContext;
use crate::error::{MillError, Result};
use crate::fs::atomic_write_file;
use crate::render;
use crate::roster;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(.*?\\begin\{document\})").expect("Invalid template header regex")
});

static BODY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\begin\{document\}(.*?)\\end\{document\}").expect("Invalid template body regex")
});

/// Preamble and repeatable body of a booklet template.
#[derive(Debug)]
pub(super) struct TemplateParts {
    /// Everything through `\begin{document}`, ready to head the output.
    pub(super) header: String,
    /// The per-student material between the document markers.
    pub(super) body: String,
}

/// Split a template at its document markers.
pub(super) fn split_template(template: &str) -> Result<TemplateParts> {
    let header = HEADER_REGEX.captures(template).and_then(|c| c.get(1));
    let body = BODY_REGEX.captures(template).and_then(|c| c.get(1));
    let (Some(header), Some(body)) = (header, body) else {
        return Err(MillError::UserError(
            "template is missing \\begin{document} or \\end{document}.\n\
             Fix: point the config template at a complete LaTeX document."
                .to_string(),
        ));
    };
    Ok(TemplateParts {
        header: format!("{}\n\n", header.as_str().trim()),
        body: body.as_str().trim().to_string(),
    })
}

/// Execute the `papermill combine` command.
pub fn cmd_combine(args: CombineArgs) -> Result<()> {
    let mut ctx = BatchContext::resolve(&args.config)?;
    if let Some(output) = args.output {
        ctx.output_dir = output;
    }

    let template_text = render::load_template(&ctx.template_path())?;
    let parts = split_template(&template_text)?;

    let roster_path = args.roster.clone().unwrap_or_else(|| ctx.roster_path());
    let mut records = roster::load(&roster_path, ctx.config.roster_skip_rows)?;
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }
    if records.is_empty() {
        println!("Roster has no records; nothing to do.");
        return Ok(());
    }

    let mut document = String::new();
    document.push_str(&parts.header);
    for record in &records {
        println!("Processing: {}", record.name);
        let body = render::render_paper(&parts.body, &ctx.config, record)?;
        document.push_str(&body);
        document.push_str("\n\n");
    }
    document.push_str("\n\n\\end{document}\n");

    let out_path = ctx.combined_tex_path();
    atomic_write_file(&out_path, &document)?;

    println!();
    println!(
        "Combined {} papers into {}",
        records.len(),
        out_path.display()
    );
    Ok(())
}
