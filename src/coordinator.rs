// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared state coordinator.
//!
//! The [`Coordinator`] owns the latest [`StateTree`] snapshot and the API
//! credential, and carries a refresh signal between controls and whatever
//! polling loop the embedding application runs. Exactly one writer replaces
//! the snapshot wholesale on each refresh cycle; controls only read it.
//! Polling scheduling itself is out of scope for this library.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Notify;

use crate::state::StateTree;

/// API credential used to authorize control writes.
///
/// The debug representation redacts the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Creates a credential from the API password.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Returns the underlying secret for use in an API call.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Holder of the shared device state snapshot.
///
/// Cheap to clone via [`Arc`]; controls keep a shared reference and always
/// reflect the current snapshot rather than caching values of their own.
///
/// # Examples
///
/// ```
/// use poolsync_lib::coordinator::{Coordinator, Credential};
/// use serde_json::json;
///
/// let coordinator = Coordinator::new("a4:e5:7c:00:11:22");
/// coordinator.set_credential(Credential::new("hunter2"));
/// coordinator.replace_state(json!({"devices": {}}));
///
/// assert_eq!(coordinator.device_identity(), "a4:e5:7c:00:11:22");
/// assert!(coordinator.credential().is_some());
/// ```
#[derive(Debug)]
pub struct Coordinator {
    /// Latest state snapshot, replaced wholesale on each refresh.
    state: RwLock<StateTree>,
    credential: RwLock<Option<Credential>>,
    /// Stable identifier (MAC address) used for unique-id construction.
    device_identity: String,
    refresh: Notify,
}

impl Coordinator {
    /// Creates a coordinator with an empty state snapshot.
    ///
    /// # Arguments
    ///
    /// * `device_identity` - Stable identifier of the `PoolSync` hub,
    ///   typically its MAC address.
    #[must_use]
    pub fn new(device_identity: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(StateTree::Null),
            credential: RwLock::new(None),
            device_identity: device_identity.into(),
            refresh: Notify::new(),
        })
    }

    /// Returns a clone of the current state snapshot.
    #[must_use]
    pub fn state(&self) -> StateTree {
        self.state.read().clone()
    }

    /// Replaces the state snapshot wholesale.
    ///
    /// Called by the embedding application's polling loop after each fetch.
    pub fn replace_state(&self, tree: StateTree) {
        *self.state.write() = tree;
    }

    /// Returns the current API credential, if one has been provided.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.credential.read().clone()
    }

    /// Sets or replaces the API credential.
    pub fn set_credential(&self, credential: Credential) {
        *self.credential.write() = Some(credential);
    }

    /// Clears the API credential.
    pub fn clear_credential(&self) {
        *self.credential.write() = None;
    }

    /// Returns the stable hub identifier.
    #[must_use]
    pub fn device_identity(&self) -> &str {
        &self.device_identity
    }

    /// Requests a refresh of the state snapshot.
    ///
    /// Fire-and-forget: wakes the polling loop (if any) and returns
    /// immediately. Called by controls after a successful write so the
    /// snapshot catches up with the new value.
    pub fn request_refresh(&self) {
        tracing::debug!("refresh requested");
        self.refresh.notify_one();
    }

    /// Waits until a refresh has been requested.
    ///
    /// Intended for the embedding application's polling loop. A request
    /// issued while nobody is waiting is remembered and completes the next
    /// call immediately.
    pub async fn refresh_requested(&self) {
        self.refresh.notified().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_coordinator_is_empty() {
        let coordinator = Coordinator::new("mac");
        assert!(coordinator.state().is_null());
        assert!(coordinator.credential().is_none());
    }

    #[test]
    fn replace_state_swaps_snapshot() {
        let coordinator = Coordinator::new("mac");
        coordinator.replace_state(json!({"devices": {"5": {}}}));
        assert!(coordinator.state()["devices"]["5"].is_object());

        coordinator.replace_state(json!({"devices": {}}));
        assert!(coordinator.state()["devices"]["5"].is_null());
    }

    #[test]
    fn credential_lifecycle() {
        let coordinator = Coordinator::new("mac");
        coordinator.set_credential(Credential::new("secret"));
        assert_eq!(coordinator.credential().unwrap().expose(), "secret");

        coordinator.clear_credential();
        assert!(coordinator.credential().is_none());
    }

    #[test]
    fn credential_debug_is_redacted() {
        let credential = Credential::new("secret");
        assert_eq!(format!("{credential:?}"), "Credential(***)");
    }

    #[tokio::test]
    async fn refresh_request_is_remembered() {
        let coordinator = Coordinator::new("mac");
        coordinator.request_refresh();
        // Request was issued before anyone waited; must complete immediately.
        coordinator.refresh_requested().await;
    }

    #[tokio::test]
    async fn refresh_wakes_waiter() {
        let coordinator = Coordinator::new("mac");
        let waiter = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move { coordinator.refresh_requested().await })
        };
        tokio::task::yield_now().await;
        coordinator.request_refresh();
        waiter.await.unwrap();
    }
}
