// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Path resolution over the device state tree.
//!
//! The API reports partial trees while devices are still coming online, so
//! lookups treat every structural surprise (missing key, non-object node,
//! null terminal) as "value not there yet" rather than an error.

use serde_json::Value;

/// Resolves a value at the given key path inside a state tree.
///
/// Traverses `path` key by key. Returns `None` if any step lands on a
/// non-object node, a missing key, or if the terminal value is null. An
/// empty path is treated as an ill-formed call and also yields `None`.
///
/// Pure function of its inputs; never panics.
///
/// # Examples
///
/// ```
/// use poolsync_lib::state::resolve;
/// use serde_json::json;
///
/// let tree = json!({"devices": {"5": {"config": {"chlorOutput": 42}}}});
/// let value = resolve(&tree, &["devices", "5", "config", "chlorOutput"]);
/// assert_eq!(value, Some(&json!(42)));
///
/// assert!(resolve(&tree, &["devices", "9"]).is_none());
/// assert!(resolve(&tree, &[]).is_none());
/// ```
#[must_use]
pub fn resolve<'a>(tree: &'a Value, path: &[&str]) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut node = tree;
    for key in path {
        node = node.as_object()?.get(*key)?;
    }

    if node.is_null() { None } else { Some(node) }
}

/// Coerces a resolved state value to a float.
///
/// Numbers pass through, numeric strings are parsed, and booleans map to
/// 1.0 / 0.0 (the API occasionally reports flags where a numeric code is
/// expected). Anything else is a coercion failure.
#[must_use]
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
