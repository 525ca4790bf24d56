// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Adjustable number controls.

use std::sync::Arc;

use crate::coordinator::Coordinator;
use crate::error::{Result, WriteError};
use crate::protocol::ApiClient;
use crate::state::{ControlPath, coerce_number};

use super::ControlDescriptor;

/// One adjustable numeric control backed by the coordinator's state tree.
///
/// Holds no state of its own; reads always reflect the coordinator's
/// current snapshot, and writes go through the API client followed by a
/// refresh request so the snapshot catches up.
///
/// # Type Parameter
///
/// `C` is the API client used for writes; production code uses
/// [`HttpClient`](crate::protocol::HttpClient), tests can substitute a mock.
#[derive(Debug)]
pub struct NumberControl<C: ApiClient> {
    descriptor: ControlDescriptor,
    path: ControlPath,
    coordinator: Arc<Coordinator>,
    client: Arc<C>,
    unique_id: String,
}

impl<C: ApiClient> NumberControl<C> {
    /// Creates a control from its descriptor, path, and collaborators.
    #[must_use]
    pub fn new(
        descriptor: ControlDescriptor,
        path: ControlPath,
        coordinator: Arc<Coordinator>,
        client: Arc<C>,
    ) -> Self {
        let unique_id = format!("{}_{}", coordinator.device_identity(), descriptor.key);
        tracing::debug!(
            control = descriptor.key,
            unique_id = %unique_id,
            path = %path,
            "control initialized"
        );
        Self {
            descriptor,
            path,
            coordinator,
            client,
            unique_id,
        }
    }

    /// Returns the static metadata for this control.
    #[must_use]
    pub fn descriptor(&self) -> &ControlDescriptor {
        &self.descriptor
    }

    /// Returns the state-tree path this control projects.
    #[must_use]
    pub fn path(&self) -> &ControlPath {
        &self.path
    }

    /// Returns the stable unique id (`{hub identity}_{control key}`).
    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Returns the current value in display units.
    ///
    /// Resolves the control's path in the coordinator's snapshot, coerces
    /// the result to a number, and applies the inbound unit conversion
    /// (API Fahrenheit to display Celsius for temperature controls).
    ///
    /// Returns `None` when the value is absent or not coercible; the
    /// coercion failure is logged but never propagated, so the control
    /// degrades to "unavailable" rather than erroring.
    #[must_use]
    pub fn read_value(&self) -> Option<f64> {
        let tree = self.coordinator.state();
        let value = self.path.resolve_in(&tree)?;

        let Some(number) = coerce_number(value) else {
            tracing::error!(
                control = self.descriptor.key,
                path = %self.path,
                value = %value,
                "could not convert state value to a number"
            );
            return None;
        };

        Some(self.descriptor.unit.to_display(number))
    }

    /// Writes a new value, given in display units.
    ///
    /// Applies the outbound unit conversion, truncates toward zero to an
    /// integer (the API accepts only integers), and patches the value
    /// through the API client using the coordinator's credential. On
    /// success a state refresh is requested (fire-and-forget) before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::CredentialUnavailable`] without touching the
    /// network if the coordinator holds no credential; API failures are
    /// surfaced to the caller unretried.
    #[allow(clippy::cast_possible_truncation)]
    pub async fn write_value(&self, value: f64) -> Result<()> {
        let native = self.descriptor.unit.to_native(value);
        // The API accepts only integers; truncate, never round.
        let wire_value = native.trunc() as i64;

        tracing::info!(
            control = self.descriptor.key,
            display_value = value,
            wire_value,
            "setting control value"
        );

        let Some(credential) = self.coordinator.credential() else {
            tracing::error!(
                control = self.descriptor.key,
                "credential not available on coordinator, cannot set value"
            );
            return Err(WriteError::CredentialUnavailable.into());
        };

        if let Err(err) = self
            .client
            .patch(
                self.path.device_id(),
                self.path.key(),
                wire_value,
                &credential,
            )
            .await
        {
            tracing::error!(
                control = self.descriptor.key,
                wire_value,
                "failed to set value"
            );
            return Err(err.into());
        }

        tracing::info!(
            control = self.descriptor.key,
            wire_value,
            "value set, requesting refresh"
        );
        self.coordinator.request_refresh();

        Ok(())
    }
}
