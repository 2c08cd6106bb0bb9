//! Conversion British National Grid (OSGB36) ↔ WGS84 en Rust pur
//!
//! Chaîne grille → WGS84 :
//! 1. Latitude de pied (itératif, arc méridien Airy 1830)
//! 2. Série de Redfearn → géodésique Airy 1830
//! 3. Cartésien Airy 1830 + Helmert 7 paramètres → cartésien GRS80
//! 4. Inversion itérative → géodésique GRS80
//!
//! La chaîne inverse (WGS84 → grille) réutilise les mêmes briques.

mod airy;
mod datum;
mod ellipsoid;
mod footpoint;
mod inversion;

pub use airy::{airy_geodetic, airy_to_grid};
pub use datum::{datum_shift, HelmertParameters, OSGB36_TO_WGS84};
pub use ellipsoid::{Ellipsoid, AIRY_1830, GRS80};
pub use footpoint::footpoint_latitude;
pub use inversion::geodetic_inversion;

use tracing::trace;

use crate::types::{GeodeticCoordinate, GridCoordinate, LatLon};
use crate::{BngError, SolverConfig};

/// Paramètres de l'origine vraie d'une projection Transverse Mercator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOrigin {
    /// Latitude de l'origine vraie (radians)
    pub origin_latitude: f64,
    /// Longitude de l'origine vraie et du méridien central (radians)
    pub origin_longitude: f64,
    /// False northing (m)
    pub false_northing: f64,
    /// False easting (m)
    pub false_easting: f64,
    /// Facteur d'échelle sur le méridien central
    pub scale_factor: f64,
}

/// Origine du National Grid : 49°N 2°W
pub const NATIONAL_GRID: GridOrigin = GridOrigin {
    origin_latitude: 49.0 * std::f64::consts::PI / 180.0,
    origin_longitude: -2.0 * std::f64::consts::PI / 180.0,
    false_northing: -100000.0,
    false_easting: 400000.0,
    scale_factor: 0.9996012717,
};

/// sin(angle)^exponent
pub fn pow_of_sin(angle: f64, exponent: i32) -> f64 {
    angle.sin().powi(exponent)
}

/// tan(angle)^exponent
pub fn pow_of_tan(angle: f64, exponent: i32) -> f64 {
    angle.tan().powi(exponent)
}

/// Convertisseur National Grid ↔ WGS84
///
/// Sans état : seule la configuration des solveurs est conservée.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: SolverConfig,
}

impl Converter {
    /// Crée un convertisseur avec la configuration par défaut
    pub fn new() -> Self {
        Self::default()
    }

    /// Crée un convertisseur avec une configuration personnalisée
    pub fn with_config(config: SolverConfig) -> Result<Self, BngError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Convertit easting/northing (m, OSGB36) en latitude/longitude WGS84 (degrés)
    pub fn convert(&self, easting: f64, northing: f64) -> Result<LatLon, BngError> {
        let grid = GridCoordinate::new(
            BngError::ensure_finite("easting", easting)?,
            BngError::ensure_finite("northing", northing)?,
        );

        // Étape 1 : latitude de pied
        let foot_lat = footpoint_latitude(grid.northing, &self.config)?;

        // Étape 2 : géodésique Airy 1830
        let airy = airy_geodetic(grid, foot_lat);
        trace!(
            easting,
            northing,
            latitude = airy.latitude.to_degrees(),
            longitude = airy.longitude.to_degrees(),
            "OSGB36 geodetic"
        );

        // Étape 3 : cartésien GRS80
        let cart = datum_shift(airy);

        // Étape 4 : géodésique GRS80
        let wgs84 = geodetic_inversion(cart, &self.config)?;

        Ok(wgs84.to_degrees())
    }

    /// Convertit latitude/longitude WGS84 (degrés) en easting/northing OSGB36 (m)
    pub fn to_grid(&self, latitude: f64, longitude: f64) -> Result<GridCoordinate, BngError> {
        let wgs84 = GeodeticCoordinate::from_degrees(
            BngError::ensure_finite("latitude", latitude)?,
            BngError::ensure_finite("longitude", longitude)?,
        );

        let cart = GRS80.geodetic_to_cartesian(wgs84, 0.0);
        let shifted = OSGB36_TO_WGS84.inverse().apply(cart);
        let airy = AIRY_1830.cartesian_to_geodetic(shifted, &self.config)?;

        Ok(airy_to_grid(airy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_helpers() {
        let angle = 0.7_f64;
        assert!((pow_of_sin(angle, 2) - angle.sin() * angle.sin()).abs() < 1e-15);
        assert!((pow_of_tan(angle, 3) - angle.tan().powi(3)).abs() < 1e-15);
        assert_eq!(pow_of_sin(angle, 0), 1.0);
    }

    #[test]
    fn test_caister_to_wgs84() {
        let ll = Converter::new().convert(651409.903, 313177.270).unwrap();
        assert!((ll.latitude - 52.657979).abs() < 1e-5, "lat={}", ll.latitude);
        assert!((ll.longitude - 1.716052).abs() < 1e-5, "lon={}", ll.longitude);
    }

    #[test]
    fn test_greenwich_to_grid() {
        let grid = Converter::new().to_grid(51.4778, -0.0014).unwrap();
        assert!((grid.easting - 538890.1053).abs() < 0.01, "E={}", grid.easting);
        assert!((grid.northing - 177320.4965).abs() < 0.01, "N={}", grid.northing);
    }

    #[test]
    fn test_invalid_config() {
        let config = SolverConfig {
            max_iterations: 0,
            ..SolverConfig::default()
        };
        assert!(matches!(Converter::with_config(config), Err(BngError::Config(_))));

        let config = SolverConfig::from_json(r#"{"max_iterations": 20}"#).unwrap();
        let conv = Converter::with_config(config).unwrap();
        assert_eq!(conv.config().max_iterations, 20);
    }

    #[test]
    fn test_non_finite_inputs() {
        let conv = Converter::new();
        assert!(matches!(
            conv.convert(f64::NAN, 0.0),
            Err(BngError::InvalidInput { field: "easting", .. })
        ));
        assert!(matches!(
            conv.to_grid(51.0, f64::INFINITY),
            Err(BngError::InvalidInput { field: "longitude", .. })
        ));
    }
}
