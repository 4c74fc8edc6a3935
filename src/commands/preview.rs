//! Implementation of the `papermill preview` command.
//!
//! Renders a single booklet for one identifier without touching the
//! roster and without compiling. Handy for eyeballing question wording
//! and derived numbers before committing to a batch run.

use crate::cli::PreviewArgs;
use crate::context::BatchContext;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::render;
use crate::roster::RosterRecord;

/// Execute the `papermill preview` command.
pub fn cmd_preview(args: PreviewArgs) -> Result<()> {
    let ctx = BatchContext::resolve(&args.config)?;
    let template_text = render::load_template(&ctx.template_path())?;

    let record = RosterRecord {
        identifier: args.identifier,
        name: args.name,
    };
    let rendered = render::render_paper(&template_text, &ctx.config, &record)?;

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &format!("{}\n", rendered))?;
            println!("Wrote preview to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
