//! Raw ARGOS coordinate tokens and their sign conversion.
//!
//! A coordinate token is a decimal magnitude with a trailing hemisphere
//! letter (`"45.200N"`, `"70.100W"`).  Latitude follows the usual rule,
//! `N` positive and anything else negative.  Longitude has two policies,
//! see [`LonConvention`].
//!

use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::ArgosError;

/// Longitude sign policy.
///
/// The exports this importer was built against emit the *unnegated*
/// magnitude for `W` and a negated one for everything else, which is
/// inverted from geographic convention.  `Literal` reproduces that
/// polarity and is the default; `Standard` gives conventional signs.
///
#[derive(
    Clone, Copy, Debug, Default, Deserialize, EnumString, Eq, PartialEq, Serialize, strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum LonConvention {
    /// `W` positive, anything else negative (as observed in the source data).
    #[default]
    Literal,
    /// `W` negative, anything else positive.
    Standard,
}

/// Split a raw token into magnitude and hemisphere letter.
///
fn split_hemisphere(token: &str) -> Result<(f64, char), ArgosError> {
    let mut chars = token.chars();
    let hemi = chars
        .next_back()
        .ok_or_else(|| ArgosError::BadCoordinate(token.to_string()))?;
    if !hemi.is_ascii_alphabetic() {
        return Err(ArgosError::BadCoordinate(token.to_string()));
    }
    let magnitude = chars
        .as_str()
        .parse::<f64>()
        .map_err(|_| ArgosError::BadCoordinate(token.to_string()))?;
    Ok((magnitude, hemi))
}

/// `"45.2N"` → `45.2`, `"45.2S"` → `-45.2`.
///
pub fn parse_latitude(token: &str) -> Result<f64, ArgosError> {
    let (magnitude, hemi) = split_hemisphere(token)?;
    match hemi {
        'N' => Ok(magnitude),
        _ => Ok(-magnitude),
    }
}

/// Convert a raw longitude token according to the given policy.
///
pub fn parse_longitude(token: &str, convention: LonConvention) -> Result<f64, ArgosError> {
    let (magnitude, hemi) = split_hemisphere(token)?;
    let lon = match convention {
        LonConvention::Literal => {
            if hemi == 'W' {
                magnitude
            } else {
                -magnitude
            }
        }
        LonConvention::Standard => {
            if hemi == 'W' {
                -magnitude
            } else {
                magnitude
            }
        }
    };
    Ok(lon)
}
