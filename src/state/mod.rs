// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tree and path resolution.
//!
//! The `PoolSync` cloud API reports the state of all attached devices as one
//! nested JSON document. The coordinator replaces this document wholesale on
//! each refresh; everything in this module only reads it.

mod path;
mod tree;

pub use path::ControlPath;
pub use tree::{coerce_number, resolve};

/// The last-known state of all devices, as returned by the `PoolSync` API.
///
/// A nested mapping of string keys to further mappings, scalars, or null.
/// Replaced wholesale on each coordinator refresh, never mutated in place.
pub type StateTree = serde_json::Value;
