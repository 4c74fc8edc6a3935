//! Per-student paper rendering.
//!
//! Glues the catalog and the template together: assembles the placeholder
//! map for one roster record (identity fields plus the rendered question
//! bodies) and applies it to the booklet template. Used by the batch
//! driver, the combined-document writer, and the single-paper preview.

use crate::bank;
use crate::config::Config;
use crate::error::{MillError, Result};
use crate::latex;
use crate::roster::RosterRecord;
use crate::template::Placements;
use std::path::Path;

/// Load the booklet template, normalizing CRLF line endings.
pub fn load_template(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        MillError::UserError(format!(
            "cannot read template '{}': {}.\nFix: check the template path in the config.",
            path.display(),
            e
        ))
    })?;
    Ok(text.replace("\r\n", "\n"))
}

/// Build the full placeholder map for one student.
///
/// Identity fields come from the config and the roster record; the name is
/// LaTeX-escaped because rosters contain characters TeX treats specially.
/// Question bodies are generated from the student's identifier, so the map
/// is deterministic per (config, record) pair.
pub fn paper_placements(config: &Config, record: &RosterRecord) -> Result<Placements> {
    let mut placements = Placements::new();

    placements.insert("Name", latex::escape_text(&record.name))?;
    placements.insert("ID", record.identifier.clone())?;
    placements.insert("Section", config.section.clone())?;
    placements.insert("CourseName", config.course_name.clone())?;
    placements.insert("CourseCode", config.course_code.clone())?;
    placements.insert("SemesterName", config.semester.clone())?;
    placements.insert("AssessmentType", config.assessment_type.clone())?;
    placements.insert("TotalPoints", config.total_points.clone())?;

    for question in bank::questions(config.question_set, &record.identifier)? {
        placements.insert(question.key, question.text)?;
    }

    Ok(placements)
}

/// Render one student's paper from the template text.
pub fn render_paper(template: &str, config: &Config, record: &RosterRecord) -> Result<String> {
    Ok(paper_placements(config, record)?.apply(template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionSet;

    fn record(identifier: &str, name: &str) -> RosterRecord {
        RosterRecord {
            identifier: identifier.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn complex_placements_cover_identity_and_questions() {
        let config = Config::default();
        let placements = paper_placements(&config, &record("12345", "Alice")).unwrap();

        let keys: Vec<&str> = placements.keys().collect();
        assert_eq!(keys.len(), 8 + 15);
        for key in [
            "Name",
            "ID",
            "Section",
            "CourseName",
            "CourseCode",
            "SemesterName",
            "AssessmentType",
            "TotalPoints",
            "Q1",
            "Q15",
        ] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
    }

    #[test]
    fn laplace_placements_have_ten_questions() {
        let config = Config {
            question_set: QuestionSet::Laplace,
            ..Config::default()
        };
        let placements = paper_placements(&config, &record("12345", "Alice")).unwrap();

        let keys: Vec<&str> = placements.keys().collect();
        assert_eq!(keys.len(), 8 + 10);
        assert!(keys.contains(&"Q10"));
        assert!(!keys.contains(&"Q11"));
    }

    #[test]
    fn name_is_latex_escaped() {
        let config = Config::default();
        let placements =
            paper_placements(&config, &record("12345", "O'Connor & Sons_Jr")).unwrap();

        let rendered = placements.apply("@Name@");
        assert_eq!(rendered, "O'Connor \\& Sons\\_Jr");
    }

    #[test]
    fn render_paper_fills_known_template() {
        let config = Config::default();
        let template = "\\title{@AssessmentType@ (@CourseCode@)}\n@Name@ / @ID@\n@Q1@\n";

        let rendered = render_paper(template, &config, &record("12345", "Alice")).unwrap();

        assert!(rendered.contains("Assignment - 01"));
        assert!(rendered.contains("MAT 215"));
        assert!(rendered.contains("Alice / 12345"));
        assert!(rendered.contains("z^{"));
        assert!(!rendered.contains('@'));
    }

    #[test]
    fn render_paper_is_deterministic() {
        let config = Config::default();
        let template = "@ID@: @Q1@ @Q7@ @Q14@";

        let first = render_paper(template, &config, &record("221-15-4023", "Ayşe")).unwrap();
        let second = render_paper(template, &config, &record("221-15-4023", "Ayşe")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn render_paper_leaves_unknown_tokens() {
        let config = Config::default();
        let template = "@Name@ @NotAKey@";

        let rendered = render_paper(template, &config, &record("12345", "Alice")).unwrap();

        assert_eq!(rendered, "Alice @NotAKey@");
    }

    #[test]
    fn load_template_normalizes_crlf() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("tpl.tex");
        std::fs::write(&path, "line one\r\nline two\r\n").unwrap();

        let text = load_template(&path).unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn load_template_missing_is_user_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = load_template(&temp_dir.path().join("absent.tex"));

        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("cannot read template"));
        assert!(message.contains("Fix:"));
    }
}
