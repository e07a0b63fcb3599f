//! Core library for MedAlert prescription label interpretation.
//!
//! This crate provides:
//! - Line normalization of raw OCR text
//! - Rule-based field extraction (patient, directions, drug line, Rx number)
//! - Drug name cleaning and dosing frequency normalization
//! - Label and medication data models for the reminder scheduler

pub mod error;
pub mod label;
pub mod models;

pub use error::{ExtractionError, MedAlertError, Result};
pub use label::{parse_label, ExtractionResult, LabelParser, RuleLabelParser};
pub use label::rules::{EmptyDirectionsPolicy, FrequencyMatch, FrequencyRule};
pub use models::config::{ExtractionConfig, MedAlertConfig};
pub use models::label::ParsedLabel;
pub use models::medication::Medication;
