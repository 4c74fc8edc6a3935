//! Parameterized question catalogs.
//!
//! Each catalog is an ordered list of question builders keyed by template
//! placeholder. The wording is course material and is kept verbatim; only
//! the derived numbers and the values computed from them vary between
//! booklets.

pub mod complex;
pub mod laplace;

use serde::{Deserialize, Serialize};

use crate::derive::derive_value;
use crate::error::{MillError, Result};

/// Which question catalog a booklet draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSet {
    Complex,
    Laplace,
}

impl std::fmt::Display for QuestionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionSet::Complex => write!(f, "complex"),
            QuestionSet::Laplace => write!(f, "laplace"),
        }
    }
}

/// One rendered question, keyed by its template placeholder.
#[derive(Debug, Clone)]
pub struct Question {
    pub key: &'static str,
    pub text: String,
}

impl Question {
    pub(crate) fn new(key: &'static str, text: String) -> Self {
        Self { key, text }
    }
}

/// Derives labeled parameters for one identifier, recording each value so
/// a single catalog walk can both fill a booklet and report its parameter
/// table.
pub(crate) struct ParamTrace<'a> {
    identifier: &'a str,
    values: Vec<(&'static str, i64)>,
}

impl<'a> ParamTrace<'a> {
    pub(crate) fn new(identifier: &'a str) -> Self {
        Self {
            identifier,
            values: Vec::new(),
        }
    }

    pub(crate) fn value(&mut self, label: &'static str, low: i64, high: i64) -> Result<i64> {
        let value = derive_value(self.identifier, label, low, high)?;
        self.values.push((label, value));
        Ok(value)
    }

    pub(crate) fn into_values(self) -> Vec<(&'static str, i64)> {
        self.values
    }
}

pub(crate) fn bad_selector(question: &'static str, selector: i64, max: i64) -> MillError {
    MillError::InvalidVariantSelector {
        question,
        selector,
        max,
    }
}

/// Builds every question for one student, in placeholder order.
pub fn questions(set: QuestionSet, identifier: &str) -> Result<Vec<Question>> {
    match set {
        QuestionSet::Complex => complex::questions(identifier),
        QuestionSet::Laplace => laplace::questions(identifier),
    }
}

/// The labeled parameter values one student's booklet derives, in
/// derivation order.
pub fn parameter_values(set: QuestionSet, identifier: &str) -> Result<Vec<(&'static str, i64)>> {
    match set {
        QuestionSet::Complex => complex::parameter_values(identifier),
        QuestionSet::Laplace => laplace::parameter_values(identifier),
    }
}
