// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-type discovery.
//!
//! A `PoolSync` hub drives a varying set of attachments (chlorinator,
//! heat pump), and the numeric id each attachment gets differs per
//! installation. The hub reports the assignment in the state tree's
//! `deviceType` mapping (id → type string); this module scans it once at
//! setup time so controls can be built against the right ids.

use serde_json::Value;

use crate::state::StateTree;

/// Kinds of `PoolSync` attachments this library exposes controls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Salt chlorinator (`chlorSync`).
    ChlorSync,
    /// Heat pump (`heatPump`).
    HeatPump,
}

impl DeviceKind {
    /// Returns the type string the API uses for this kind.
    #[must_use]
    pub fn api_type(self) -> &'static str {
        match self {
            Self::ChlorSync => "chlorSync",
            Self::HeatPump => "heatPump",
        }
    }
}

/// Device ids found by a [`discover`] scan.
///
/// A `None` field means no device of that kind is attached; the
/// corresponding controls are simply not constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredDevices {
    /// Id of the chlorinator, if one is attached.
    pub chlorinator: Option<String>,
    /// Id of the heat pump, if one is attached.
    pub heat_pump: Option<String>,
}

impl DiscoveredDevices {
    /// Returns the id found for the given kind.
    #[must_use]
    pub fn id_for(&self, kind: DeviceKind) -> Option<&str> {
        match kind {
            DeviceKind::ChlorSync => self.chlorinator.as_deref(),
            DeviceKind::HeatPump => self.heat_pump.as_deref(),
        }
    }
}

/// Scans the state tree's `deviceType` mapping for known attachment kinds.
///
/// If several ids carry the same type string, the first one in map
/// iteration order wins; that is a tie-break, not an error. A missing or
/// malformed `deviceType` mapping yields an empty result.
///
/// # Examples
///
/// ```
/// use poolsync_lib::discovery::discover;
/// use serde_json::json;
///
/// let tree = json!({"deviceType": {"5": "chlorSync", "7": "heatPump"}});
/// let devices = discover(&tree);
/// assert_eq!(devices.chlorinator.as_deref(), Some("5"));
/// assert_eq!(devices.heat_pump.as_deref(), Some("7"));
/// ```
#[must_use]
pub fn discover(tree: &StateTree) -> DiscoveredDevices {
    let Some(device_types) = tree.get("deviceType").and_then(Value::as_object) else {
        tracing::warn!("state tree has no deviceType mapping, no devices discovered");
        return DiscoveredDevices::default();
    };

    let find = |kind: DeviceKind| {
        device_types
            .iter()
            .find(|(_, value)| value.as_str() == Some(kind.api_type()))
            .map(|(id, _)| id.clone())
    };

    let devices = DiscoveredDevices {
        chlorinator: find(DeviceKind::ChlorSync),
        heat_pump: find(DeviceKind::HeatPump),
    };

    tracing::debug!(
        chlorinator = ?devices.chlorinator,
        heat_pump = ?devices.heat_pump,
        "device discovery complete"
    );

    devices
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn discovers_both_kinds() {
        let tree = json!({"deviceType": {"5": "chlorSync", "7": "heatPump"}});
        let devices = discover(&tree);
        assert_eq!(devices.chlorinator.as_deref(), Some("5"));
        assert_eq!(devices.heat_pump.as_deref(), Some("7"));
    }

    #[test]
    fn missing_kind_is_none() {
        let tree = json!({"deviceType": {"5": "chlorSync"}});
        let devices = discover(&tree);
        assert_eq!(devices.chlorinator.as_deref(), Some("5"));
        assert!(devices.heat_pump.is_none());
    }

    #[test]
    fn missing_mapping_yields_empty() {
        assert_eq!(discover(&json!({})), DiscoveredDevices::default());
        assert_eq!(
            discover(&json!({"deviceType": "oops"})),
            DiscoveredDevices::default()
        );
    }

    #[test]
    fn unknown_types_are_ignored() {
        let tree = json!({"deviceType": {"3": "coverSync", "5": "chlorSync"}});
        let devices = discover(&tree);
        assert_eq!(devices.chlorinator.as_deref(), Some("5"));
        assert!(devices.heat_pump.is_none());
    }

    #[test]
    fn duplicate_type_first_wins() {
        let tree = json!({"deviceType": {"2": "heatPump", "8": "heatPump"}});
        let devices = discover(&tree);
        assert_eq!(devices.heat_pump.as_deref(), Some("2"));
    }

    #[test]
    fn id_for_lookup() {
        let devices = DiscoveredDevices {
            chlorinator: Some("5".to_string()),
            heat_pump: None,
        };
        assert_eq!(devices.id_for(DeviceKind::ChlorSync), Some("5"));
        assert!(devices.id_for(DeviceKind::HeatPump).is_none());
    }
}
