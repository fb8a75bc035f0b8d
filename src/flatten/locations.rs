//! Spatial hierarchy flattening.
//!
//! Walks the nested spatial tree (building → floor → room → distribution
//! board → further subspaces) and records, for every contained device, the
//! nearest enclosing name of each of the four context levels.

use std::collections::HashMap;

use crate::model::{Space, SpaceType};

/// Nearest enclosing spatial context of a device. Each level is
/// independently optional: a device placed directly on a floor has no room,
/// a top-level room has no building, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceLocation {
    pub building: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,
    pub distribution_board: Option<String>,
}

/// Flatten the spatial tree into a map from individual address to context.
///
/// Context is inherited downward: a node updates only the level matching its
/// own type and passes everything else through unchanged. Devices listed
/// directly under a node are recorded with that node's level already applied.
/// A device appearing under two subtrees (malformed input) resolves to the
/// subtree visited last in depth-first document order.
pub fn flatten_locations(locations: &[(String, Space)]) -> HashMap<String, DeviceLocation> {
    let mut flat = HashMap::new();

    // Explicit worklist instead of call-stack recursion; real projects nest
    // spaces arbitrarily deep. Children are pushed in reverse so siblings
    // pop in document order.
    let mut stack: Vec<(&Space, DeviceLocation)> = locations
        .iter()
        .rev()
        .map(|(_, space)| (space, DeviceLocation::default()))
        .collect();

    while let Some((space, inherited)) = stack.pop() {
        let mut context = inherited;
        match space.space_type {
            SpaceType::Building => context.building = space.name.clone(),
            SpaceType::Floor => context.floor = space.name.clone(),
            SpaceType::Room => context.room = space.name.clone(),
            SpaceType::DistributionBoard => context.distribution_board = space.name.clone(),
            SpaceType::Other => {}
        }

        for device in &space.devices {
            flat.insert(device.clone(), context.clone());
        }
        for (_, child) in space.spaces.iter().rev() {
            stack.push((child, context.clone()));
        }
    }

    flat
}
