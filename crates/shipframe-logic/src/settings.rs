//! Generation settings — named numeric bounds plus the input-key pool.
//!
//! The settings are a fixed struct of named fields. External callers that
//! carry options by name (config screens, saved presets) go through
//! [`ShipSettings::set`], which rejects unknown option names; everything is
//! re-checked by [`ShipSettings::validate`] before a generation pass starts.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default symbol pool handed to the key mapper; the downstream input layer
/// binds these to physical keys.
pub const DEFAULT_KEY_POOL: [char; 12] =
    ['w', 'a', 's', 'd', 'q', 'e', 'z', 'x', 'c', 'r', 'f', 'v'];

/// All tunable bounds for one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSettings {
    /// Bounds on the number of concentric circles drawn.
    pub min_circles: u32,
    pub max_circles: u32,
    /// Bounds on each circle's distance from the origin.
    pub min_circle_distance: f64,
    pub max_circle_distance: f64,
    /// Bounds on the number of extra node increments spread over the circles.
    pub min_extra_nodes: u32,
    pub max_extra_nodes: u32,
    /// Bounds on thrusters placed beyond the primary pair.
    pub min_extra_thrusters: u32,
    pub max_extra_thrusters: u32,
    /// A near-balanced primary pair (|weight − 0.5| within this) also gets a
    /// joint key bound to both thrusters.
    pub thruster_key_join_weight_threshold: f64,
    /// Bounds on redundancy injections into the group bindings.
    pub min_thruster_key_overlap: u32,
    pub max_thruster_key_overlap: u32,
    /// Ordered symbol pool the key mapper consumes without replacement.
    pub thruster_available_keys: Vec<char>,
}

impl Default for ShipSettings {
    fn default() -> Self {
        Self {
            min_circles: 1,
            max_circles: 4,
            min_circle_distance: 1.0,
            max_circle_distance: 3.0,
            min_extra_nodes: 1,
            max_extra_nodes: 5,
            min_extra_thrusters: 0,
            max_extra_thrusters: 3,
            thruster_key_join_weight_threshold: 0.2,
            min_thruster_key_overlap: 0,
            max_thruster_key_overlap: 2,
            thruster_available_keys: DEFAULT_KEY_POOL.to_vec(),
        }
    }
}

/// A value carried into [`ShipSettings::set`] by option name.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Int(u32),
    Float(f64),
    Keys(Vec<char>),
}

impl ShipSettings {
    /// Set one option by its external (camelCase) name.
    ///
    /// Unknown names are a configuration error, as is a value of the wrong
    /// kind; integer values coerce into float options.
    pub fn set(&mut self, option: &str, value: SettingValue) -> Result<(), ConfigError> {
        match option {
            "minCircles" => self.min_circles = expect_int(option, value)?,
            "maxCircles" => self.max_circles = expect_int(option, value)?,
            "minCircleDistance" => self.min_circle_distance = expect_float(option, value)?,
            "maxCircleDistance" => self.max_circle_distance = expect_float(option, value)?,
            "minExtraNodes" => self.min_extra_nodes = expect_int(option, value)?,
            "maxExtraNodes" => self.max_extra_nodes = expect_int(option, value)?,
            "minExtraThrusters" => self.min_extra_thrusters = expect_int(option, value)?,
            "maxExtraThrusters" => self.max_extra_thrusters = expect_int(option, value)?,
            "thrusterKeyJoinWeightThreshold" => {
                self.thruster_key_join_weight_threshold = expect_float(option, value)?
            }
            "minThrusterKeyOverlap" => self.min_thruster_key_overlap = expect_int(option, value)?,
            "maxThrusterKeyOverlap" => self.max_thruster_key_overlap = expect_int(option, value)?,
            "thrusterAvailableKeys" => self.thruster_available_keys = expect_keys(option, value)?,
            _ => return Err(ConfigError::UnknownOption(option.to_string())),
        }
        Ok(())
    }

    /// Validate the whole settings block, returning all problems found.
    ///
    /// Generation aborts on the first entry of this list.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.min_circles == 0 {
            errors.push(ConfigError::NoCircles);
        }
        if self.min_circles > self.max_circles {
            errors.push(ConfigError::BoundsReversed {
                option: "circles",
                min: self.min_circles as f64,
                max: self.max_circles as f64,
            });
        }
        if self.min_circle_distance <= 0.0 {
            errors.push(ConfigError::NonPositiveDistance(self.min_circle_distance));
        }
        if self.min_circle_distance > self.max_circle_distance {
            errors.push(ConfigError::BoundsReversed {
                option: "circleDistance",
                min: self.min_circle_distance,
                max: self.max_circle_distance,
            });
        }
        if self.min_extra_nodes > self.max_extra_nodes {
            errors.push(ConfigError::BoundsReversed {
                option: "extraNodes",
                min: self.min_extra_nodes as f64,
                max: self.max_extra_nodes as f64,
            });
        }
        if self.min_extra_thrusters > self.max_extra_thrusters {
            errors.push(ConfigError::BoundsReversed {
                option: "extraThrusters",
                min: self.min_extra_thrusters as f64,
                max: self.max_extra_thrusters as f64,
            });
        }
        if self.min_thruster_key_overlap > self.max_thruster_key_overlap {
            errors.push(ConfigError::BoundsReversed {
                option: "thrusterKeyOverlap",
                min: self.min_thruster_key_overlap as f64,
                max: self.max_thruster_key_overlap as f64,
            });
        }

        // Two baseline singletons, a possible joint key, and at least one
        // group key are needed to cover every thruster.
        if self.thruster_available_keys.len() < 4 {
            errors.push(ConfigError::KeyPoolTooSmall(
                self.thruster_available_keys.len(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for &c in &self.thruster_available_keys {
            if !seen.insert(c) {
                errors.push(ConfigError::DuplicateKeySymbol(c));
            }
        }

        errors
    }
}

fn expect_int(option: &str, value: SettingValue) -> Result<u32, ConfigError> {
    match value {
        SettingValue::Int(v) => Ok(v),
        _ => Err(ConfigError::WrongKind {
            option: option.to_string(),
            expected: "integer",
        }),
    }
}

fn expect_float(option: &str, value: SettingValue) -> Result<f64, ConfigError> {
    match value {
        SettingValue::Float(v) => Ok(v),
        SettingValue::Int(v) => Ok(v as f64),
        _ => Err(ConfigError::WrongKind {
            option: option.to_string(),
            expected: "number",
        }),
    }
}

fn expect_keys(option: &str, value: SettingValue) -> Result<Vec<char>, ConfigError> {
    match value {
        SettingValue::Keys(v) => Ok(v),
        _ => Err(ConfigError::WrongKind {
            option: option.to_string(),
            expected: "key list",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(ShipSettings::default().validate().is_empty());
    }

    #[test]
    fn test_set_known_option() {
        let mut settings = ShipSettings::default();
        settings.set("maxCircles", SettingValue::Int(7)).unwrap();
        assert_eq!(settings.max_circles, 7);
        settings
            .set("minCircleDistance", SettingValue::Float(0.5))
            .unwrap();
        assert_eq!(settings.min_circle_distance, 0.5);
    }

    #[test]
    fn test_int_coerces_into_float_option() {
        let mut settings = ShipSettings::default();
        settings.set("maxCircleDistance", SettingValue::Int(5)).unwrap();
        assert_eq!(settings.max_circle_distance, 5.0);
    }

    #[test]
    fn test_unknown_option_rejected() {
        let mut settings = ShipSettings::default();
        let err = settings.set("minWheels", SettingValue::Int(2)).unwrap_err();
        assert_eq!(err, ConfigError::UnknownOption("minWheels".to_string()));
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let mut settings = ShipSettings::default();
        let err = settings
            .set("minCircles", SettingValue::Keys(vec!['a']))
            .unwrap_err();
        assert!(matches!(err, ConfigError::WrongKind { .. }));
    }

    #[test]
    fn test_reversed_bounds_caught() {
        let mut settings = ShipSettings::default();
        settings.min_circles = 5;
        settings.max_circles = 2;
        let errors = settings.validate();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::BoundsReversed { option: "circles", .. })));
    }

    #[test]
    fn test_non_positive_distance_caught() {
        let mut settings = ShipSettings::default();
        settings.min_circle_distance = 0.0;
        assert!(settings
            .validate()
            .iter()
            .any(|e| matches!(e, ConfigError::NonPositiveDistance(_))));
    }

    #[test]
    fn test_key_pool_checks() {
        let mut settings = ShipSettings::default();
        settings.thruster_available_keys = vec!['a', 'b'];
        assert!(settings
            .validate()
            .iter()
            .any(|e| matches!(e, ConfigError::KeyPoolTooSmall(2))));

        settings.thruster_available_keys = vec!['a', 'b', 'c', 'a'];
        assert!(settings
            .validate()
            .iter()
            .any(|e| matches!(e, ConfigError::DuplicateKeySymbol('a'))));
    }
}
