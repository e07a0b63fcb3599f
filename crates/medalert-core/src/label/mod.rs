//! Prescription label interpretation.

mod parser;
pub mod rules;

pub use parser::{parse_label, ExtractionResult, RuleLabelParser};

use crate::error::ExtractionError;
use crate::models::label::ParsedLabel;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for label parsing.
pub trait LabelParser {
    /// Interpret label text, reporting why nothing could be produced.
    fn interpret(&self, text: &str) -> Result<ExtractionResult>;

    /// Interpret label text; `None` means "ask the user to retake or type it in".
    fn parse(&self, text: &str) -> Option<ParsedLabel> {
        self.interpret(text).ok().map(|result| result.label)
    }
}
