//! Default value functions for the Config struct.

use crate::bank::QuestionSet;

// Default value functions for serde
pub(crate) fn default_assessment_type() -> String {
    "Assignment - 01".to_string()
}
pub(crate) fn default_semester() -> String {
    "Fall 2025".to_string()
}
pub(crate) fn default_course_code() -> String {
    "MAT 215".to_string()
}
pub(crate) fn default_course_name() -> String {
    "Complex Variables and Laplace Transformations".to_string()
}
pub(crate) fn default_section() -> String {
    "12".to_string()
}
pub(crate) fn default_total_points() -> String {
    "150".to_string()
}
pub(crate) fn default_question_set() -> QuestionSet {
    QuestionSet::Complex
}
pub(crate) fn default_template() -> String {
    "assignment_template.tex".to_string()
}
pub(crate) fn default_roster() -> String {
    "roster.csv".to_string()
}
pub(crate) fn default_roster_skip_rows() -> usize {
    1
}
pub(crate) fn default_compiler() -> String {
    "pdflatex -interaction=nonstopmode".to_string()
}
pub(crate) fn default_compile_attempts() -> u32 {
    2
}
pub(crate) fn default_poll_budget() -> u32 {
    10
}
