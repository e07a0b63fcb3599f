//! Data models for interpreted labels, scheduler hand-off and configuration.

pub mod config;
pub mod label;
pub mod medication;
