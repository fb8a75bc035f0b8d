//! CLI for generating documentation reports from a parsed KNX project.
//!
//! Usage:
//!   knxdoc project.json                          # Default artifact names
//!   knxdoc project.json --devices-file out.csv   # Override one artifact
//!   RUST_LOG=debug knxdoc project.json           # Verbose progress

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use knxdoc::config::ReportConfig;
use knxdoc::pipeline;

#[derive(Parser)]
#[command(name = "knxdoc")]
#[command(about = "Generate documentation reports from a parsed KNX project document")]
struct Args {
    /// Parsed project document (JSON) produced by the upstream parser
    #[arg(env = "KNXDOC_PROJECT")]
    project_file: PathBuf,

    /// Output path for the pretty-printed project snapshot
    #[arg(long, default_value = "project_snapshot.json")]
    json_file: PathBuf,

    /// Output path for the device report
    #[arg(long, default_value = "devices.csv")]
    devices_file: PathBuf,

    /// Output path for the group-address report
    #[arg(long, default_value = "group_addresses.csv")]
    group_addresses_file: PathBuf,

    /// Output path for the ETS-import group-address file
    #[arg(long, default_value = "group_addresses_ets.csv")]
    ets_file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = ReportConfig {
        project_file: args.project_file,
        json_file: args.json_file,
        devices_file: args.devices_file,
        group_addresses_file: args.group_addresses_file,
        ets_file: args.ets_file,
    };

    let summary = pipeline::run(&config).with_context(|| {
        format!(
            "failed to generate reports from {}",
            config.project_file.display()
        )
    })?;

    println!("Project Name: {}", summary.info.name);
    if let Some(modified) = summary.info.last_modified_display() {
        println!("Last Modified: {}", modified);
    }
    println!("Tool Version: {}", summary.info.tool_version);
    println!("XKNXProject Version: {}", summary.info.xknxproject_version);
    println!(
        "Exported {} devices and {} group address rows",
        summary.devices, summary.group_entries
    );
    Ok(())
}
