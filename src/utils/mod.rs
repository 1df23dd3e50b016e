//! Utility functions shared across the application.
//!
//! - [`receipt_code`] - Purchase receipt code generation and shape checks
//! - [`content_type`] - Download content type detection

pub mod content_type;
pub mod receipt_code;
