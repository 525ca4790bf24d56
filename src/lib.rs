// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `PoolSync` Lib - A Rust library to monitor and control `PoolSync` pool
//! equipment.
//!
//! A `PoolSync` hub reports the state of its attachments (salt chlorinator,
//! heat pump) as one nested JSON document and accepts integer config patches
//! over HTTP. This library projects adjustable values out of that document
//! and pushes edits back:
//!
//! - **State projection**: pure path resolution over the cached state tree
//! - **Number controls**: chlorinator output (%), heat-pump setpoint (°C,
//!   converted from the API's Fahrenheit on both read and write), heat-pump
//!   mode code
//! - **Device discovery**: per-installation device ids resolved from the
//!   hub's `deviceType` mapping
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use poolsync_lib::control::build_controls;
//! use poolsync_lib::coordinator::{Coordinator, Credential};
//! use poolsync_lib::protocol::HttpClient;
//!
//! #[tokio::main]
//! async fn main() -> poolsync_lib::Result<()> {
//!     let coordinator = Coordinator::new("a4:e5:7c:00:11:22");
//!     coordinator.set_credential(Credential::new("api-password"));
//!
//!     // The embedding application fetches state and installs it:
//!     // coordinator.replace_state(fetched_tree);
//!
//!     let client = Arc::new(HttpClient::new("192.168.1.42")?);
//!     let controls = build_controls(&coordinator, &client);
//!
//!     for control in &controls {
//!         println!("{}: {:?}", control.descriptor().name, control.read_value());
//!     }
//!
//!     // Set the chlorinator to 60%
//!     if let Some(chlor) = controls
//!         .iter()
//!         .find(|c| c.descriptor().key == "chlor_output_control")
//!     {
//!         chlor.write_value(60.0).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Refresh Handling
//!
//! The coordinator does not poll by itself. The embedding application owns
//! the fetch loop and installs each fetched tree with
//! [`Coordinator::replace_state`]; after a successful write, controls call
//! [`Coordinator::request_refresh`], which the fetch loop can observe via
//! [`Coordinator::refresh_requested`] to fetch ahead of schedule.

pub mod control;
pub mod coordinator;
pub mod discovery;
pub mod error;
pub mod protocol;
pub mod state;

pub use control::{ControlDescriptor, DisplayMode, NumberControl, Unit, build_controls};
pub use coordinator::{Coordinator, Credential};
pub use discovery::{DeviceKind, DiscoveredDevices, discover};
pub use error::{Error, ProtocolError, Result, WriteError};
pub use protocol::{ApiClient, HttpClient, HttpConfig, PatchResponse};
pub use state::{ControlPath, StateTree, resolve};
