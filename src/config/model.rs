//! Config struct definition and default implementation.

use super::types::*;
use crate::bank::QuestionSet;
use serde::{Deserialize, Serialize};

/// Configuration for one assessment batch.
///
/// This struct represents the contents of `papermill.yaml`. Unknown
/// fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Document fields (substituted into the template verbatim)
    // =========================================================================
    /// Assessment title, e.g. "Assignment - 01". Also names the output
    /// directory unless `output_dir` overrides it.
    #[serde(default = "default_assessment_type")]
    pub assessment_type: String,

    /// Semester label, e.g. "Fall 2025".
    #[serde(default = "default_semester")]
    pub semester: String,

    /// Course code, e.g. "MAT 215".
    #[serde(default = "default_course_code")]
    pub course_code: String,

    /// Course title.
    #[serde(default = "default_course_name")]
    pub course_name: String,

    /// Section label.
    #[serde(default = "default_section")]
    pub section: String,

    /// Total points, kept textual because it lands in the template as-is.
    #[serde(default = "default_total_points")]
    pub total_points: String,

    // =========================================================================
    // Generation settings
    // =========================================================================
    /// Which question catalog to draw from.
    #[serde(default = "default_question_set")]
    pub question_set: QuestionSet,

    /// Path to the LaTeX document template.
    #[serde(default = "default_template")]
    pub template: String,

    /// Path to the roster CSV.
    #[serde(default = "default_roster")]
    pub roster: String,

    /// Header rows to skip at the top of the roster.
    #[serde(default = "default_roster_skip_rows")]
    pub roster_skip_rows: usize,

    /// Output directory. Defaults to the assessment type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,

    /// Logo file copied beside the sources before compiling, for templates
    /// that include one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    // =========================================================================
    // Compiler settings
    // =========================================================================
    /// Compiler command line (shell-words parsed; no shell). The source
    /// file name is appended.
    #[serde(default = "default_compiler")]
    pub compiler: String,

    /// How many times to run the compiler per booklet. Two passes settle
    /// cross-references.
    #[serde(default = "default_compile_attempts")]
    pub compile_attempts: u32,

    /// How many 100ms polls to wait for the PDF to appear after the
    /// compiler exits.
    #[serde(default = "default_poll_budget")]
    pub poll_budget: u32,

    /// Keep the generated .tex sources instead of removing them during
    /// cleanup.
    #[serde(default)]
    pub keep_sources: bool,
}

impl Config {
    /// The effective output directory for this assessment.
    pub fn output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(&self.assessment_type)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assessment_type: default_assessment_type(),
            semester: default_semester(),
            course_code: default_course_code(),
            course_name: default_course_name(),
            section: default_section(),
            total_points: default_total_points(),
            question_set: default_question_set(),
            template: default_template(),
            roster: default_roster(),
            roster_skip_rows: default_roster_skip_rows(),
            output_dir: None,
            logo: None,
            compiler: default_compiler(),
            compile_attempts: default_compile_attempts(),
            poll_budget: default_poll_budget(),
            keep_sources: false,
        }
    }
}
