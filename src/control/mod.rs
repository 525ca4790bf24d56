// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Adjustable number controls over the device state tree.
//!
//! A control pairs static [`ControlDescriptor`] metadata with a
//! [`ControlPath`](crate::state::ControlPath) into the coordinator's state
//! snapshot. Reads project and unit-convert the cached value; writes go out
//! through the API client and trigger a snapshot refresh.

mod descriptor;
mod number;
mod setup;

pub use descriptor::{
    ControlDescriptor, DisplayMode, Unit, celsius_to_fahrenheit, fahrenheit_to_celsius,
};
pub use number::NumberControl;
pub use setup::build_controls;
