//! Device report.

use std::collections::HashMap;
use std::io::Write;

use crate::error::ReportError;
use crate::flatten::DeviceLocation;
use crate::model::Device;

const HEADER: [&str; 10] = [
    "individual_address",
    "description",
    "manufacturer_name",
    "name",
    "hardware_name",
    "order_number",
    "building",
    "floor",
    "room",
    "distribution_board",
];

/// Write one row per device, joined with its flattened spatial context.
/// Rows keep the document order of the devices mapping; context levels a
/// device never acquired render as empty strings.
pub fn write_device_report<W: Write>(
    out: W,
    devices: &[(String, Device)],
    locations: &HashMap<String, DeviceLocation>,
) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    writer.write_record(HEADER)?;

    let unplaced = DeviceLocation::default();
    for (_, device) in devices {
        let location = locations
            .get(&device.individual_address)
            .unwrap_or(&unplaced);
        writer.write_record([
            device.individual_address.as_str(),
            device.description.as_str(),
            device.manufacturer_name.as_str(),
            device.name.as_str(),
            device.hardware_name.as_str(),
            device.order_number.as_str(),
            location.building.as_deref().unwrap_or(""),
            location.floor.as_deref().unwrap_or(""),
            location.room.as_deref().unwrap_or(""),
            location.distribution_board.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
