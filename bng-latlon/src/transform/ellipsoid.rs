//! Définitions des ellipsoïdes

use crate::types::{CartesianCoordinate, GeodeticCoordinate};

use super::pow_of_sin;

/// Ellipsoïde défini par ses deux demi-axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Demi-grand axe (rayon équatorial) en mètres
    pub semi_major_axis: f64,
    /// Demi-petit axe (rayon polaire) en mètres
    pub semi_minor_axis: f64,
}

/// Ellipsoïde Airy 1830 (OSGB36)
pub const AIRY_1830: Ellipsoid = Ellipsoid {
    semi_major_axis: 6377563.396,
    semi_minor_axis: 6356256.909,
};

/// Ellipsoïde GRS80 (utilisé pour WGS84)
/// Note: Quasi identique à WGS84, différence < 0.1mm
pub const GRS80: Ellipsoid = Ellipsoid {
    semi_major_axis: 6378137.000,
    semi_minor_axis: 6356752.3141,
};

impl Ellipsoid {
    /// Première excentricité au carré : 1 - (b/a)²
    pub fn eccentricity_squared(&self) -> f64 {
        let (a, b) = (self.semi_major_axis, self.semi_minor_axis);
        1.0 - (b * b) / (a * a)
    }

    /// Troisième aplatissement n = (a - b) / (a + b)
    pub fn third_flattening(&self) -> f64 {
        let (a, b) = (self.semi_major_axis, self.semi_minor_axis);
        (a - b) / (a + b)
    }

    /// Grande normale (rayon de courbure dans le premier vertical)
    pub fn transverse_radius(&self, lat: f64) -> f64 {
        self.semi_major_axis / (1.0 - self.eccentricity_squared() * pow_of_sin(lat, 2)).sqrt()
    }

    /// Convertit des coordonnées géodésiques en cartésiennes géocentriques
    pub fn geodetic_to_cartesian(
        &self,
        geo: GeodeticCoordinate,
        height: f64,
    ) -> CartesianCoordinate {
        let e2 = self.eccentricity_squared();
        let nu = self.transverse_radius(geo.latitude);
        let (sin_lat, cos_lat) = geo.latitude.sin_cos();
        let (sin_lon, cos_lon) = geo.longitude.sin_cos();

        CartesianCoordinate {
            x: (nu + height) * cos_lat * cos_lon,
            y: (nu + height) * cos_lat * sin_lon,
            z: ((1.0 - e2) * nu + height) * sin_lat,
        }
    }
}
