//! ETS-import group-address file.
//!
//! Same flattened hierarchy as the plain report, serialized against the
//! import schema of the ETS tool: fixed 9-column layout, every field quoted,
//! Windows-1252 encoded.

use std::collections::BTreeMap;
use std::io::Write;

use encoding_rs::WINDOWS_1252;

use crate::error::ReportError;
use crate::flatten::{GroupEntry, GroupLevel};
use crate::model::GroupAddress;

const HEADER: [&str; 9] = [
    "Main",
    "Middle",
    "Sub",
    "Address",
    "Central",
    "Unfiltered",
    "Description",
    "DatapointType",
    "Security",
];

/// Write the flattened group hierarchy in the ETS import schema.
///
/// Exactly one of Main/Middle/Sub carries the entry name, selected by key
/// depth. Address is padded with `/-` segments so every row presents a
/// three-segment path. DatapointType is `"DPST-<main>-<sub>"` for leaf rows
/// with a known datapoint, empty otherwise. Security is always `"Auto"`;
/// Central, Unfiltered and Description are reserved columns with no source
/// data.
pub fn write_ets_import_report<W: Write>(
    out: W,
    entries: &[GroupEntry],
    group_addresses: &BTreeMap<String, GroupAddress>,
) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out);
    write_encoded(&mut writer, HEADER)?;

    for entry in entries {
        let level = entry.level();
        let (main, middle, sub) = match level {
            GroupLevel::Main => (entry.name.as_str(), "", ""),
            GroupLevel::Middle => ("", entry.name.as_str(), ""),
            GroupLevel::Sub => ("", "", entry.name.as_str()),
        };
        let address = match level {
            GroupLevel::Main => format!("{}/-/-", entry.key),
            GroupLevel::Middle => format!("{}/-", entry.key),
            GroupLevel::Sub => entry.key.clone(),
        };
        let datapoint = match level {
            GroupLevel::Sub => group_addresses
                .get(entry.key.as_str())
                .and_then(|record| record.dpt)
                .map(|dpt| format!("DPST-{}-{}", dpt.main, dpt.sub))
                .unwrap_or_default(),
            _ => String::new(),
        };
        write_encoded(
            &mut writer,
            [
                main,
                middle,
                sub,
                address.as_str(),
                "",
                "",
                "",
                datapoint.as_str(),
                "Auto",
            ],
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one record with every field transcoded to Windows-1252. Encoding
/// happens per field, before quoting, so the CSV layer only ever sees the
/// target bytes.
fn write_encoded<W: Write>(
    writer: &mut csv::Writer<W>,
    fields: [&str; 9],
) -> Result<(), ReportError> {
    let mut record = csv::ByteRecord::new();
    for field in fields {
        let (encoded, _, _) = WINDOWS_1252.encode(field);
        record.push_field(&encoded);
    }
    writer.write_byte_record(&record)?;
    Ok(())
}
