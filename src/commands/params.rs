//! Implementation of the `papermill params` command.
//!
//! Prints the derived parameter table for one identifier so a grader can
//! reconstruct exactly which numbers a student's booklet used.

use crate::bank::{self, QuestionSet};
use crate::cli::ParamsArgs;
use crate::context::BatchContext;
use crate::error::Result;

/// Execute the `papermill params` command.
pub fn cmd_params(args: ParamsArgs) -> Result<()> {
    let ctx = BatchContext::resolve(&args.config)?;
    let set = ctx.config.question_set;
    let values = bank::parameter_values(set, &args.identifier)?;
    print!("{}", format_table(&args.identifier, set, &values));
    Ok(())
}

/// Table text: one line per parameter, blank line between questions.
fn format_table(identifier: &str, set: QuestionSet, values: &[(&'static str, i64)]) -> String {
    let mut out = format!("Parameter table for {} ({} set):\n\n", identifier, set);
    let mut current_question = "";
    for (label, value) in values {
        let question = label.split('_').next().unwrap_or(label);
        if question != current_question {
            if !current_question.is_empty() {
                out.push('\n');
            }
            current_question = question;
        }
        out.push_str(&format!("  {:<8} = {}\n", label, value));
    }
    out
}
