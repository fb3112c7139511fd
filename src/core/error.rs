//! Load-time configuration errors.
//!
//! Every runtime operation is infallible; wiring mistakes (a recipe naming a
//! texture the game never loaded, a zero duration) are caught when an
//! animation is built and reported here.

use thiserror::Error;

/// A problem found while building an animation from its recipe.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No recipe is registered under this name.
    #[error("unknown animation '{name}'")]
    UnknownAnimation { name: String },

    /// A recipe with this name is already registered.
    #[error("animation '{name}' is already registered")]
    DuplicateAnimation { name: String },

    /// The recipe references a texture missing from the asset table.
    #[error("animation '{animation}' references unknown texture '{texture}'")]
    MissingTexture { animation: String, texture: String },

    /// The recipe references a sound missing from the asset table.
    #[error("animation '{animation}' references unknown sound '{sound}'")]
    MissingSound { animation: String, sound: String },

    /// Durations and intervals must be finite and strictly positive.
    #[error("animation '{animation}': {field} must be a positive finite number, got {value}")]
    InvalidTiming {
        animation: String,
        field: &'static str,
        value: f64,
    },

    /// A burst-driven animation needs at least one burst.
    #[error("animation '{animation}': burst count must be at least 1")]
    EmptyBurst { animation: String },
}

/// Result type alias for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reject zero, negative, NaN and infinite timings.
pub(crate) fn check_timing(animation: &str, field: &'static str, value: f64) -> ConfigResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidTiming {
            animation: animation.to_string(),
            field,
            value,
        })
    }
}
