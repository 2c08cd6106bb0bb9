//! # bng-latlon
//!
//! Conversion des coordonnées British National Grid (OSGB36, ellipsoïde Airy 1830)
//! en latitude/longitude WGS84 (ellipsoïde GRS80), et inversement.
//!
//! ## Features
//!
//! - Latitude de pied et inversion géodésique itératives, bornées en itérations
//! - Transformation de Helmert à 7 paramètres OSGB36 → WGS84
//! - Fonctions pures, sans état : appelables en parallèle sans synchronisation
//! - Conversions vers les types `geo`
//!
//! ## Usage
//!
//! ```rust
//! let ll = bng_latlon::convert(651409.903, 313177.270)?;
//! assert!((ll.latitude - 52.65798).abs() < 1e-4);
//!
//! let grid = bng_latlon::to_grid(ll.latitude, ll.longitude)?;
//! assert!((grid.easting - 651409.903).abs() < 0.05);
//! # Ok::<(), bng_latlon::BngError>(())
//! ```

pub mod config;
pub mod error;
pub mod transform;
pub mod types;

pub use config::SolverConfig;
pub use error::BngError;
pub use transform::Converter;
pub use types::{CartesianCoordinate, GeodeticCoordinate, GridCoordinate, LatLon};

/// Convertit easting/northing OSGB36 (m) en latitude/longitude WGS84 (degrés décimaux).
///
/// # Errors
///
/// - `BngError::InvalidInput` si une coordonnée n'est pas finie
/// - `BngError::Convergence` si un solveur dépasse sa limite d'itérations
pub fn convert(easting: f64, northing: f64) -> Result<LatLon, BngError> {
    Converter::default().convert(easting, northing)
}

/// Convertit latitude/longitude WGS84 (degrés décimaux) en easting/northing OSGB36 (m).
pub fn to_grid(latitude: f64, longitude: f64) -> Result<GridCoordinate, BngError> {
    Converter::default().to_grid(latitude, longitude)
}
