//! DDS Conventie Export - Convert the naming convention workbook to JSON rules.
//!
//! This crate reads the DDS naming-convention workbook (.xlsx) and exports
//! its rules as a JSON document for downstream validators. One sheet carries
//! the latest toetsingsregel version marker; the conventions sheet carries
//! one rule per row (identifier suffix, ja/nee flag, AAS regex, and the
//! descriptive columns).
//!
//! # Example
//!
//! ```
//! use dds_conventie_export::config;
//!
//! // Validate a base IRI before exporting
//! assert!(config::validate_base_iri("https://dds.schiphol.nl/asset/").is_ok());
//! ```
//!
//! # Architecture
//!
//! The exporter is organized into several modules:
//!
//! - [`config`]: Sheet layout constants and validation
//! - [`types`]: Core data types (RuleSet, RuleRecord)
//! - [`error`]: Error types and Result alias
//! - [`workbook`]: Workbook access built on calamine
//! - [`version`]: Rule-version marker extraction
//! - [`conventions`]: Convention rule extraction
//! - [`json`]: JSON output generation
//! - [`cli`]: Command-line interface
//! - [`exporter`]: Main exporter service

pub mod cli;
pub mod config;
pub mod conventions;
pub mod error;
pub mod exporter;
pub mod json;
pub mod types;
pub mod version;
pub mod workbook;

// Re-export main functions
pub use exporter::export_rules;

// Re-export commonly used items
pub use config::{validate_base_iri, DEFAULT_BASE_IRI};
pub use error::{ExportError, Result};
pub use types::{RuleRecord, RuleSet};
