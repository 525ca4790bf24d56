// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Construction of the stock controls for a hub.

use std::sync::Arc;

use crate::coordinator::Coordinator;
use crate::discovery::discover;
use crate::protocol::ApiClient;
use crate::state::ControlPath;

use super::{ControlDescriptor, NumberControl};

/// Builds the number controls for whatever devices the hub reports.
///
/// Runs device discovery on the coordinator's current snapshot and
/// constructs only the controls whose device was found: the chlorinator
/// output control for a `chlorSync` attachment, and the setpoint and mode
/// controls for a `heatPump` attachment. Missing devices are skipped, so
/// the result may be empty.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use poolsync_lib::control::build_controls;
/// use poolsync_lib::coordinator::Coordinator;
/// use poolsync_lib::protocol::HttpClient;
///
/// # fn example() -> poolsync_lib::Result<()> {
/// let coordinator = Coordinator::new("a4:e5:7c:00:11:22");
/// let client = Arc::new(HttpClient::new("192.168.1.42")?);
/// let controls = build_controls(&coordinator, &client);
/// for control in &controls {
///     println!("{}: {:?}", control.unique_id(), control.read_value());
/// }
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn build_controls<C: ApiClient>(
    coordinator: &Arc<Coordinator>,
    client: &Arc<C>,
) -> Vec<NumberControl<C>> {
    let tree = coordinator.state();
    let devices = discover(&tree);

    let mut controls = Vec::new();
    let mut push = |descriptor: ControlDescriptor, path: ControlPath| {
        let control =
            NumberControl::new(descriptor, path, Arc::clone(coordinator), Arc::clone(client));
        match control.read_value() {
            Some(value) => tracing::debug!(
                control = control.descriptor().key,
                value,
                "initial value resolved"
            ),
            None => tracing::warn!(
                control = control.descriptor().key,
                path = %control.path(),
                "initial value absent, control may start unavailable"
            ),
        }
        controls.push(control);
    };

    if let Some(chlor_id) = devices.chlorinator {
        push(
            ControlDescriptor::chlorinator_output(),
            ControlPath::config(chlor_id, "chlorOutput"),
        );
    } else {
        tracing::debug!("no chlorinator attached, skipping chlorinator controls");
    }

    if let Some(heat_pump_id) = devices.heat_pump {
        push(
            ControlDescriptor::heat_pump_setpoint(),
            ControlPath::config(heat_pump_id.clone(), "setpoint"),
        );
        push(
            ControlDescriptor::heat_pump_mode(),
            ControlPath::config(heat_pump_id, "mode"),
        );
    } else {
        tracing::debug!("no heat pump attached, skipping heat pump controls");
    }

    tracing::info!(count = controls.len(), "number controls built");
    controls
}
