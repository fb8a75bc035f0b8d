//! Group hierarchy flattening.
//!
//! Walks the nested group-range tree (main/middle/sub) plus the leaf group
//! addresses owned by each range, and produces one flat, sorted table from
//! normalized address key to display name.

use std::collections::{BTreeMap, HashMap};

use crate::model::{GroupAddress, GroupRange};

/// Display name recorded for a leaf address that has no record in the
/// group-address table.
pub const UNKNOWN_GROUP_NAME: &str = "Unknown";

/// One row of the flattened group hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry {
    /// Normalized address key (`"1"`, `"1/2"` or `"1/2/3"`), stripped of
    /// leading and trailing separators.
    pub key: String,
    pub name: String,
}

/// Hierarchy level of a flattened entry, inferred from the separator count
/// of its key. Keys deeper than three segments still count as [`Sub`];
/// the tree walk itself is depth-agnostic.
///
/// [`Sub`]: GroupLevel::Sub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLevel {
    Main,
    Middle,
    Sub,
}

impl GroupEntry {
    pub fn level(&self) -> GroupLevel {
        match self.key.matches('/').count() {
            0 => GroupLevel::Main,
            1 => GroupLevel::Middle,
            _ => GroupLevel::Sub,
        }
    }
}

/// Flatten the group-range tree into a sorted table of address keys.
///
/// Every range node contributes `key → range name`; every leaf address
/// contributes `address → record name`, falling back to
/// [`UNKNOWN_GROUP_NAME`] when the record is missing. A key reachable via
/// two paths (malformed input) is last-write-wins in depth-first document
/// order.
///
/// Keys are ordered by interpreting each `/`-separated segment as an
/// integer, so `"1/9"` sorts before `"2/1"` and `"1/2"` before `"1/10"`. If
/// any key has a non-numeric segment the entire ordering falls back to a
/// plain string sort, not just the offending key.
pub fn flatten_group_ranges(
    ranges: &[(String, GroupRange)],
    group_addresses: &BTreeMap<String, GroupAddress>,
) -> Vec<GroupEntry> {
    let mut flat: HashMap<String, String> = HashMap::new();

    let mut stack: Vec<(&str, &GroupRange)> = ranges
        .iter()
        .rev()
        .map(|(key, range)| (key.as_str(), range))
        .collect();

    while let Some((key, range)) = stack.pop() {
        flat.insert(key.trim_matches('/').to_string(), range.name.clone());

        for address in &range.group_addresses {
            let address = address.trim_matches('/');
            let name = group_addresses
                .get(address)
                .map(|record| record.name.clone())
                .unwrap_or_else(|| UNKNOWN_GROUP_NAME.to_string());
            flat.insert(address.to_string(), name);
        }
        for (child_key, child) in range.group_ranges.iter().rev() {
            stack.push((child_key.as_str(), child));
        }
    }

    sort_entries(
        flat.into_iter()
            .map(|(key, name)| GroupEntry { key, name })
            .collect(),
    )
}

fn numeric_path(key: &str) -> Option<Vec<u32>> {
    key.split('/').map(|segment| segment.parse().ok()).collect()
}

fn sort_entries(mut entries: Vec<GroupEntry>) -> Vec<GroupEntry> {
    let paths: Option<Vec<Vec<u32>>> = entries
        .iter()
        .map(|entry| numeric_path(&entry.key))
        .collect();
    match paths {
        Some(paths) => {
            let mut keyed: Vec<(Vec<u32>, GroupEntry)> =
                paths.into_iter().zip(entries).collect();
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            keyed.into_iter().map(|(_, entry)| entry).collect()
        }
        None => {
            entries.sort_by(|a, b| a.key.cmp(&b.key));
            entries
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DatapointType;

    fn range(name: &str, addresses: &[&str], children: Vec<(&str, GroupRange)>) -> GroupRange {
        GroupRange {
            name: name.to_string(),
            group_addresses: addresses.iter().map(|a| a.to_string()).collect(),
            group_ranges: children
                .into_iter()
                .map(|(key, child)| (key.to_string(), child))
                .collect(),
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
    fn flattens_ranges_and_leaf_addresses() {
        let ranges = vec![(
            "1".to_string(),
            range(
                "Lighting",
                &["1/1/1"],
                vec![("1/1", range("Living Room", &["1/1/1"], vec![]))],
            ),
        )];
        let addresses: BTreeMap<String, GroupAddress> =
            [record("1/1/1", "Main Light", Some((1, 1)))].into();

        let entries = flatten_group_ranges(&ranges, &addresses);
        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.key.as_str(), e.name.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("1", "Lighting"),
                ("1/1", "Living Room"),
                ("1/1/1", "Main Light"),
            ]
        );
    }

    #[test]
    fn every_reachable_leaf_appears_exactly_once() {
        let ranges = vec![(
            "2".to_string(),
            range(
                "HVAC",
                &["2/0/1", "2/0/2"],
                vec![("2/0", range("Heating", &["2/0/1"], vec![]))],
            ),
        )];
        let entries = flatten_group_ranges(&ranges, &BTreeMap::new());
        let count = |key: &str| entries.iter().filter(|e| e.key == key).count();
        assert_eq!(count("2/0/1"), 1);
        assert_eq!(count("2/0/2"), 1);
    }

    #[test]
    fn numeric_sort_orders_by_segment_value() {
        let ranges = vec![
            ("1".to_string(), range("A", &["1/10", "1/2", "1/9"], vec![])),
            ("2".to_string(), range("B", &["2/1"], vec![])),
        ];
        let addresses = BTreeMap::new();
        let entries = flatten_group_ranges(&ranges, &addresses);
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "1/2", "1/9", "1/10", "2", "2/1"]);
    }

    #[test]
    fn non_numeric_segment_degrades_whole_ordering_to_lexicographic() {
        let ranges = vec![(
            "1".to_string(),
            range("A", &["1/10", "1/2", "1/x"], vec![]),
        )];
        let entries = flatten_group_ranges(&ranges, &BTreeMap::new());
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        // "1/10" < "1/2" as strings: the fallback is global, not per-key.
        assert_eq!(keys, vec!["1", "1/10", "1/2", "1/x"]);
    }

    #[test]
    fn missing_address_record_falls_back_to_unknown() {
        let ranges = vec![("3".to_string(), range("Blinds", &["3/0/1"], vec![]))];
        let entries = flatten_group_ranges(&ranges, &BTreeMap::new());
        let leaf = entries.iter().find(|e| e.key == "3/0/1").unwrap();
        assert_eq!(leaf.name, UNKNOWN_GROUP_NAME);
    }

    #[test]
    fn range_keys_are_stripped_of_stray_separators() {
        let ranges = vec![("/4/".to_string(), range("Scenes", &[], vec![]))];
        let entries = flatten_group_ranges(&ranges, &BTreeMap::new());
        assert_eq!(entries[0].key, "4");
    }

    #[test]
    fn level_is_inferred_from_separator_count() {
        let entry = |key: &str| GroupEntry {
            key: key.to_string(),
            name: String::new(),
        };
        assert_eq!(entry("1").level(), GroupLevel::Main);
        assert_eq!(entry("1/2").level(), GroupLevel::Middle);
        assert_eq!(entry("1/2/3").level(), GroupLevel::Sub);
    }
}
