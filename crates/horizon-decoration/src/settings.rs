//! Decoration settings: which buttons appear on which side.
//!
//! [`DecorationSettings`] is the settings provider a decoration reads its
//! button layout from. Button groups bound to a side listen to the change
//! signals and rebuild themselves when the list is replaced.
//!
//! Layouts can be loaded from TOML using window-manager style layout strings,
//! one letter per button (see [`DecorationButtonType::code`]):
//!
//! ```
//! use horizon_decoration::{ButtonLayoutConfig, DecorationButtonType, DecorationSettings};
//!
//! let config = ButtonLayoutConfig::from_toml_str(r#"
//!     left = "M"
//!     right = "IAX"
//! "#).unwrap();
//! let settings = DecorationSettings::from_config(&config).unwrap();
//! assert_eq!(
//!     settings.decoration_buttons_right(),
//!     vec![
//!         DecorationButtonType::Minimize,
//!         DecorationButtonType::Maximize,
//!         DecorationButtonType::Close,
//!     ]
//! );
//! ```

use std::sync::Arc;

use horizon_decoration_core::logging::targets;
use horizon_decoration_core::{Property, Signal};
use serde::{Deserialize, Serialize};

use crate::button::{DecorationButtonType, parse_button_layout};
use crate::error::Result;

/// Default buttons on the left side of the title bar.
pub const DEFAULT_BUTTONS_LEFT: &[DecorationButtonType] =
    &[DecorationButtonType::Menu, DecorationButtonType::OnAllDesktops];

/// Default buttons on the right side of the title bar.
pub const DEFAULT_BUTTONS_RIGHT: &[DecorationButtonType] = &[
    DecorationButtonType::ContextHelp,
    DecorationButtonType::Minimize,
    DecorationButtonType::Maximize,
    DecorationButtonType::Close,
];

/// Button layout as written in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ButtonLayoutConfig {
    /// Layout string for the left side, e.g. `"MS"`.
    pub left: String,
    /// Layout string for the right side, e.g. `"HIAX"`.
    pub right: String,
}

impl Default for ButtonLayoutConfig {
    fn default() -> Self {
        Self {
            left: DEFAULT_BUTTONS_LEFT.iter().filter_map(|ty| ty.code()).collect(),
            right: DEFAULT_BUTTONS_RIGHT.iter().filter_map(|ty| ty.code()).collect(),
        }
    }
}

impl ButtonLayoutConfig {
    /// Parse a configuration document. Missing keys fall back to the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Resolve the left layout string to button types.
    pub fn left_buttons(&self) -> Result<Vec<DecorationButtonType>> {
        parse_button_layout(&self.left)
    }

    /// Resolve the right layout string to button types.
    pub fn right_buttons(&self) -> Result<Vec<DecorationButtonType>> {
        parse_button_layout(&self.right)
    }
}

/// Settings shared by all decorations of a host.
pub struct DecorationSettings {
    buttons_left: Property<Vec<DecorationButtonType>>,
    buttons_right: Property<Vec<DecorationButtonType>>,

    /// Emitted with the new list when the left buttons are replaced.
    pub decoration_buttons_left_changed: Signal<Vec<DecorationButtonType>>,
    /// Emitted with the new list when the right buttons are replaced.
    pub decoration_buttons_right_changed: Signal<Vec<DecorationButtonType>>,
}

impl Default for DecorationSettings {
    fn default() -> Self {
        Self::with_buttons(DEFAULT_BUTTONS_LEFT.to_vec(), DEFAULT_BUTTONS_RIGHT.to_vec())
    }
}

impl DecorationSettings {
    /// Create settings with the default button layout.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create settings with explicit button lists.
    pub fn with_buttons(
        left: Vec<DecorationButtonType>,
        right: Vec<DecorationButtonType>,
    ) -> Self {
        Self {
            buttons_left: Property::new(left),
            buttons_right: Property::new(right),
            decoration_buttons_left_changed: Signal::new(),
            decoration_buttons_right_changed: Signal::new(),
        }
    }

    /// Create settings from a parsed configuration.
    pub fn from_config(config: &ButtonLayoutConfig) -> Result<Self> {
        Ok(Self::with_buttons(config.left_buttons()?, config.right_buttons()?))
    }

    /// Replace both lists from a configuration.
    ///
    /// Both strings are validated before anything is applied, so an invalid
    /// configuration leaves the settings untouched.
    pub fn apply_config(&self, config: &ButtonLayoutConfig) -> Result<()> {
        let left = config.left_buttons()?;
        let right = config.right_buttons()?;
        self.set_decoration_buttons_left(left);
        self.set_decoration_buttons_right(right);
        Ok(())
    }

    /// The ordered buttons on the left side.
    pub fn decoration_buttons_left(&self) -> Vec<DecorationButtonType> {
        self.buttons_left.get()
    }

    /// The ordered buttons on the right side.
    pub fn decoration_buttons_right(&self) -> Vec<DecorationButtonType> {
        self.buttons_right.get()
    }

    /// Replace the left buttons, notifying if the list changed.
    pub fn set_decoration_buttons_left(&self, buttons: Vec<DecorationButtonType>) {
        if self.buttons_left.set(buttons.clone()) {
            tracing::debug!(target: targets::SETTINGS, ?buttons, "left buttons changed");
            self.decoration_buttons_left_changed.emit(buttons);
        }
    }

    /// Replace the right buttons, notifying if the list changed.
    pub fn set_decoration_buttons_right(&self, buttons: Vec<DecorationButtonType>) {
        if self.buttons_right.set(buttons.clone()) {
            tracing::debug!(target: targets::SETTINGS, ?buttons, "right buttons changed");
            self.decoration_buttons_right_changed.emit(buttons);
        }
    }
}

impl std::fmt::Debug for DecorationSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecorationSettings")
            .field("buttons_left", &self.decoration_buttons_left())
            .field("buttons_right", &self.decoration_buttons_right())
            .finish()
    }
}

static_assertions::assert_impl_all!(DecorationSettings: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecorationError;
    use parking_lot::Mutex;

    #[test]
    fn test_default_layout() {
        let settings = DecorationSettings::default();
        assert_eq!(settings.decoration_buttons_left(), DEFAULT_BUTTONS_LEFT);
        assert_eq!(settings.decoration_buttons_right(), DEFAULT_BUTTONS_RIGHT);

        let config = ButtonLayoutConfig::default();
        assert_eq!(config.left, "MS");
        assert_eq!(config.right, "HIAX");
    }

    #[test]
    fn test_config_missing_keys_use_defaults() {
        let config = ButtonLayoutConfig::from_toml_str("left = \"X\"").unwrap();
        assert_eq!(config.left_buttons().unwrap(), vec![DecorationButtonType::Close]);
        assert_eq!(config.right, ButtonLayoutConfig::default().right);
    }

    #[test]
    fn test_config_rejects_malformed_toml() {
        let err = ButtonLayoutConfig::from_toml_str("left = ").unwrap_err();
        assert!(matches!(err, DecorationError::Config(_)));
    }

    #[test]
    fn test_apply_config_is_all_or_nothing() {
        let settings = DecorationSettings::default();
        let config = ButtonLayoutConfig {
            left: "X".into(),
            right: "I?".into(),
        };

        let err = settings.apply_config(&config).unwrap_err();
        assert!(matches!(err, DecorationError::UnknownButtonCode { code: '?', .. }));
        assert_eq!(settings.decoration_buttons_left(), DEFAULT_BUTTONS_LEFT);
    }

    #[test]
    fn test_setter_notifies_only_on_change() {
        let settings = DecorationSettings::default();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        settings
            .decoration_buttons_right_changed
            .connect(move |buttons| received_clone.lock().push(buttons.clone()));

        settings.set_decoration_buttons_right(DEFAULT_BUTTONS_RIGHT.to_vec());
        settings.set_decoration_buttons_right(vec![DecorationButtonType::Close]);

        assert_eq!(*received.lock(), vec![vec![DecorationButtonType::Close]]);
    }
}
