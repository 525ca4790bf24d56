// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed paths to control values.

use serde_json::Value;

use super::resolve;

/// Location of a single control value inside the device state tree.
///
/// Every control lives at `devices.<deviceId>.<section>.<key>`. The device
/// id varies per installation (filled in after device discovery); the
/// section and key are fixed per control.
///
/// # Examples
///
/// ```
/// use poolsync_lib::state::ControlPath;
/// use serde_json::json;
///
/// let path = ControlPath::config("5", "chlorOutput");
/// assert_eq!(path.device_id(), "5");
/// assert_eq!(path.key(), "chlorOutput");
///
/// let tree = json!({"devices": {"5": {"config": {"chlorOutput": 42}}}});
/// assert_eq!(path.resolve_in(&tree), Some(&json!(42)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPath {
    device_id: String,
    section: String,
    key: String,
}

impl ControlPath {
    /// Root key under which all per-device state lives.
    pub const ROOT: &'static str = "devices";

    /// Creates a path to a value in a device's `config` section.
    ///
    /// All adjustable controls exposed by the API live under `config`.
    #[must_use]
    pub fn config(device_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(device_id, "config", key)
    }

    /// Creates a path to a value in an arbitrary device section.
    #[must_use]
    pub fn new(
        device_id: impl Into<String>,
        section: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            section: section.into(),
            key: key.into(),
        }
    }

    /// Returns the device identifier segment.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the section segment (e.g. `config`).
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Returns the terminal key segment.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the path as an ordered key sequence for the resolver.
    #[must_use]
    pub fn segments(&self) -> [&str; 4] {
        [Self::ROOT, &self.device_id, &self.section, &self.key]
    }

    /// Resolves this path inside a state tree.
    #[must_use]
    pub fn resolve_in<'a>(&self, tree: &'a Value) -> Option<&'a Value> {
        resolve(tree, &self.segments())
    }
}

impl std::fmt::Display for ControlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            Self::ROOT,
            self.device_id,
            self.section,
            self.key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn segments_order() {
        let path = ControlPath::config("7", "setpoint");
        assert_eq!(path.segments(), ["devices", "7", "config", "setpoint"]);
    }

    #[test]
    fn accessors() {
        let path = ControlPath::new("7", "status", "waterTemp");
        assert_eq!(path.device_id(), "7");
        assert_eq!(path.section(), "status");
        assert_eq!(path.key(), "waterTemp");
    }

    #[test]
    fn resolve_in_tree() {
        let tree = json!({"devices": {"7": {"config": {"setpoint": 98.6}}}});
        let path = ControlPath::config("7", "setpoint");
        assert_eq!(path.resolve_in(&tree), Some(&json!(98.6)));

        let missing = ControlPath::config("9", "setpoint");
        assert!(missing.resolve_in(&tree).is_none());
    }

    #[test]
    fn display_format() {
        let path = ControlPath::config("5", "chlorOutput");
        assert_eq!(path.to_string(), "devices.5.config.chlorOutput");
    }
}
