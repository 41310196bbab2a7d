use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// A point on the earth in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and inside [-90, 90] × [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Build an optional coordinate from the two optional CLI values.
    ///
    /// Both absent → `None` (no fix acquired). Only one of them present is an
    /// input error, never a silent `SEARCHING`.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> AppResult<Option<Self>> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Ok(Some(Self::new(lat, lon))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(AppError::InvalidCoordinate(
                "latitude given without longitude".into(),
            )),
            (None, Some(_)) => Err(AppError::InvalidCoordinate(
                "longitude given without latitude".into(),
            )),
        }
    }
}
