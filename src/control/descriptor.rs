// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static control metadata and unit conversion.

/// Display unit of a control value.
///
/// The API reports temperatures in Fahrenheit and expects Fahrenheit back;
/// [`Unit::Celsius`] controls convert on both read and write. All other
/// units pass values through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Unitless value (opaque numeric codes).
    #[default]
    None,
    /// Percentage (0-100).
    Percentage,
    /// Temperature in degrees Celsius; the API side is Fahrenheit.
    Celsius,
}

impl Unit {
    /// Converts a value from API-native units to display units.
    #[must_use]
    pub fn to_display(self, native: f64) -> f64 {
        match self {
            Self::Celsius => fahrenheit_to_celsius(native),
            Self::None | Self::Percentage => native,
        }
    }

    /// Converts a value from display units to API-native units.
    #[must_use]
    pub fn to_native(self, display: f64) -> f64 {
        match self {
            Self::Celsius => celsius_to_fahrenheit(display),
            Self::None | Self::Percentage => display,
        }
    }

    /// Returns the unit symbol for display, if any.
    #[must_use]
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Percentage => Some("%"),
            Self::Celsius => Some("°C"),
        }
    }
}

/// Converts degrees Fahrenheit to degrees Celsius.
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Converts degrees Celsius to degrees Fahrenheit.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// How the embedding UI should render a control's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// A slider between min and max.
    #[default]
    Slider,
    /// A plain input box.
    Box,
}

/// Static metadata for one adjustable control.
///
/// Immutable once constructed. The stock `PoolSync` controls are available
/// through the associated constructors.
///
/// # Examples
///
/// ```
/// use poolsync_lib::control::{ControlDescriptor, Unit};
///
/// let desc = ControlDescriptor::chlorinator_output();
/// assert_eq!(desc.key, "chlor_output_control");
/// assert_eq!(desc.unit, Unit::Percentage);
/// assert_eq!((desc.min, desc.max, desc.step), (0.0, 100.0, 1.0));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ControlDescriptor {
    /// Stable key, combined with the hub identity into the unique id.
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// MDI icon name.
    pub icon: &'static str,
    /// Display unit.
    pub unit: Unit,
    /// Minimum accepted value, in display units.
    pub min: f64,
    /// Maximum accepted value, in display units.
    pub max: f64,
    /// Step between accepted values, in display units.
    pub step: f64,
    /// Input rendering hint.
    pub mode: DisplayMode,
}

impl ControlDescriptor {
    /// Chlorinator output percentage (0-100%, slider).
    #[must_use]
    pub fn chlorinator_output() -> Self {
        Self {
            key: "chlor_output_control",
            name: "Chlorinator Output",
            icon: "mdi:knob",
            unit: Unit::Percentage,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            mode: DisplayMode::Slider,
        }
    }

    /// Heat-pump temperature setpoint (5-40 °C, slider).
    #[must_use]
    pub fn heat_pump_setpoint() -> Self {
        Self {
            key: "temperature_output_control",
            name: "Temperature Output",
            icon: "mdi:knob",
            unit: Unit::Celsius,
            min: 5.0,
            max: 40.0,
            step: 0.5,
            mode: DisplayMode::Slider,
        }
    }

    /// Heat-pump mode code (0-2, box).
    ///
    /// The API documents only the bounds; each code is treated as an opaque
    /// enumerated value.
    #[must_use]
    pub fn heat_pump_mode() -> Self {
        Self {
            key: "heat_mode",
            name: "Heat Mode",
            icon: "mdi:knob",
            unit: Unit::None,
            min: 0.0,
            max: 2.0,
            step: 1.0,
            mode: DisplayMode::Box,
        }
    }
}
