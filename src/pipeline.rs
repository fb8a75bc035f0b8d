//! End-to-end report generation.
//!
//! Control flow: load project document → dump snapshot → flatten locations →
//! export devices → flatten group hierarchy → export both group-address
//! reports. Single-threaded and synchronous; the whole document is resident
//! before any step runs.

use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::export;
use crate::flatten::{flatten_group_ranges, flatten_locations};
use crate::model::{ProjectDocument, ProjectInfo};

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub info: ProjectInfo,
    /// Device rows exported.
    pub devices: usize,
    /// Flattened group hierarchy rows exported (ranges plus leaves).
    pub group_entries: usize,
}

/// Run the full report pipeline for one project document.
///
/// Each artifact is either fully written or the run aborts with the first
/// error; partially written artifacts are not cleaned up.
pub fn run(config: &ReportConfig) -> Result<ReportSummary, ReportError> {
    let document = ProjectDocument::from_path(&config.project_file)?;
    let project = &document.project;
    info!(
        project = %project.info.name,
        devices = project.devices.len(),
        group_addresses = project.group_addresses.len(),
        "project document loaded"
    );

    export::json::write_project_snapshot(artifact(&config.json_file)?, &document.raw)?;
    debug!(path = %config.json_file.display(), "snapshot written");

    let locations = flatten_locations(&project.locations);
    export::devices::write_device_report(
        artifact(&config.devices_file)?,
        &project.devices,
        &locations,
    )?;
    debug!(
        path = %config.devices_file.display(),
        rows = project.devices.len(),
        "device report written"
    );

    let entries = flatten_group_ranges(&project.group_ranges, &project.group_addresses);
    export::group_addresses::write_group_address_report(
        artifact(&config.group_addresses_file)?,
        &entries,
        &project.group_addresses,
    )?;
    export::ets::write_ets_import_report(
        artifact(&config.ets_file)?,
        &entries,
        &project.group_addresses,
    )?;
    debug!(
        path = %config.group_addresses_file.display(),
        ets_path = %config.ets_file.display(),
        rows = entries.len(),
        "group address reports written"
    );

    Ok(ReportSummary {
        info: project.info.clone(),
        devices: project.devices.len(),
        group_entries: entries.len(),
    })
}

fn artifact(path: &Path) -> Result<File, ReportError> {
    File::create(path).map_err(|source| ReportError::WriteArtifact {
        path: path.to_path_buf(),
        source,
    })
}
