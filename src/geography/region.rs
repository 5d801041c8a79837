use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Latitude (in degrees, absolute) above which a station is considered polar.
pub const POLAR_LATITUDE: f64 = 60.0;

/// Latitude (in degrees, absolute) above which a station is considered tropical.
pub const TROPICAL_LATITUDE: f64 = 30.0;

/// Geographic region of a sampling station, derived from its latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// `|latitude| > 60`
    Polar,
    /// `30 < |latitude| <= 60`
    Tropical,
    /// `|latitude| <= 30`
    Equatorial,
}

impl Region {
    /// Label of the region as used in the study's datasets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Polar => "polar",
            Region::Tropical => "tropical",
            Region::Equatorial => "equatorial",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a value cannot be interpreted as a latitude.
#[derive(Debug, Error, PartialEq, Clone, Copy)]
#[error("Invalid latitude: {0} (expected a value within [-90, 90])")]
pub struct InvalidLatitude(pub f64);

/// Returns the geographic region of a station based on its latitude.
///
/// # Arguments
/// * `latitude` - Latitude of the station in degrees, within `[-90, 90]`.
///
/// # Returns
/// * `Ok(Region)` - The region the latitude belongs to.
/// * `Err(InvalidLatitude)` - If the latitude is `NaN` or outside `[-90, 90]`.
pub fn classify_latitude(latitude: f64) -> Result<Region, InvalidLatitude> {
    let magnitude = latitude.abs();
    if !(magnitude <= 90.0) {
        return Err(InvalidLatitude(latitude));
    }

    Ok(if magnitude > POLAR_LATITUDE {
        Region::Polar
    } else if magnitude > TROPICAL_LATITUDE {
        Region::Tropical
    } else {
        Region::Equatorial
    })
}
