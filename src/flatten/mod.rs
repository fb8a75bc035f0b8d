//! Flattening of the document's nested trees into flat tables.

pub mod groups;
pub mod locations;

pub use groups::{flatten_group_ranges, GroupEntry, GroupLevel};
pub use locations::{flatten_locations, DeviceLocation};
