//! knxdoc - documentation reports for parsed KNX projects
//!
//! Loads the JSON document emitted by the upstream project parser and renders
//! it into four artifacts: a full-fidelity JSON snapshot, a device report
//! with resolved spatial context, a human-readable group-address report, and
//! an ETS-import-compatible group-address file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # fn main() -> Result<(), knxdoc::error::ReportError> {
//! use std::path::PathBuf;
//!
//! use knxdoc::config::ReportConfig;
//! use knxdoc::pipeline;
//!
//! let config = ReportConfig {
//!     project_file: PathBuf::from("project.json"),
//!     json_file: PathBuf::from("project_snapshot.json"),
//!     devices_file: PathBuf::from("devices.csv"),
//!     group_addresses_file: PathBuf::from("group_addresses.csv"),
//!     ets_file: PathBuf::from("group_addresses_ets.csv"),
//! };
//! let summary = pipeline::run(&config)?;
//! println!("exported {} devices", summary.devices);
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Typed project document and loader
pub mod model;

// Tree flattening (spatial context, group hierarchy)
pub mod flatten;

// Report artifact serialization
pub mod export;

// Run configuration and orchestration
pub mod config;
pub mod pipeline;

pub use config::ReportConfig;
pub use error::ReportError;
pub use pipeline::{run, ReportSummary};
