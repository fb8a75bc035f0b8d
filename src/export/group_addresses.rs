//! Plain group-address report.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::ReportError;
use crate::flatten::{GroupEntry, GroupLevel};
use crate::model::GroupAddress;

/// Write the flattened group hierarchy as a three-column table.
///
/// The datapoint column is populated only for leaf rows whose record carries
/// a datapoint, rendered `"<main>.<sub>"` with the sub number zero-padded to
/// four digits (`1.0001`). Range rows and leaves without a datapoint render
/// an empty string.
pub fn write_group_address_report<W: Write>(
    out: W,
    entries: &[GroupEntry],
    group_addresses: &BTreeMap<String, GroupAddress>,
) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    writer.write_record(["address", "name", "dpt"])?;

    for entry in entries {
        let dpt = match entry.level() {
            GroupLevel::Sub => group_addresses
                .get(entry.key.as_str())
                .and_then(|record| record.dpt)
                .map(|dpt| format!("{}.{:04}", dpt.main, dpt.sub))
                .unwrap_or_default(),
            _ => String::new(),
        };
        writer.write_record([entry.key.as_str(), entry.name.as_str(), dpt.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatapointType;

    fn entry(key: &str, name: &str) -> GroupEntry {
        GroupEntry {
            key: key.to_string(),
            name: name.to_string(),
        }
    }

    fn record(address: &str, name: &str, dpt: Option<(u16, u16)>) -> (String, GroupAddress) {
        (
            address.to_string(),
            GroupAddress {
                address: address.to_string(),
                name: name.to_string(),
                dpt: dpt.map(|(main, sub)| DatapointType { main, sub }),
            },
        )
    }

    #[test]
    fn leaf_with_datapoint_renders_zero_padded_sub() {
        let entries = vec![
            entry("1", "Lighting"),
            entry("1/1", "Living Room"),
            entry("1/1/1", "Main Light"),
        ];
        let addresses: BTreeMap<String, GroupAddress> =
            [record("1/1/1", "Main Light", Some((1, 1)))].into();

        let mut out = Vec::new();
        write_group_address_report(&mut out, &entries, &addresses).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "address;name;dpt\n\
                        1;Lighting;\n\
                        1/1;Living Room;\n\
                        1/1/1;Main Light;1.0001\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn leaf_without_datapoint_renders_empty_column() {
        let entries = vec![entry("1/1/2", "Main Light Dim")];
        let addresses: BTreeMap<String, GroupAddress> =
            [record("1/1/2", "Main Light Dim", None)].into();

        let mut out = Vec::new();
        write_group_address_report(&mut out, &entries, &addresses).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "address;name;dpt\n1/1/2;Main Light Dim;\n");
    }

    #[test]
    fn leaf_missing_from_records_renders_empty_column() {
        let entries = vec![entry("9/9/9", "Unknown")];
        let mut out = Vec::new();
        write_group_address_report(&mut out, &entries, &BTreeMap::new()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "address;name;dpt\n9/9/9;Unknown;\n");
    }

    #[test]
    fn wide_datapoint_sub_is_not_truncated() {
        let entries = vec![entry("5/2/0", "Scene Control")];
        let addresses: BTreeMap<String, GroupAddress> =
            [record("5/2/0", "Scene Control", Some((17, 1)))].into();

        let mut out = Vec::new();
        write_group_address_report(&mut out, &entries, &addresses).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("5/2/0;Scene Control;17.0001"));
    }
}
