//! Changement de datum OSGB36 → WGS84 par transformation de Helmert à 7 paramètres

use std::f64::consts::PI;

use super::ellipsoid::AIRY_1830;
use crate::types::{CartesianCoordinate, GeodeticCoordinate};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Paramètres d'une transformation de Helmert (approximation petits angles)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelmertParameters {
    /// Translations (m)
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    /// Rotations (radians)
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    /// Facteur d'échelle - 1
    pub s: f64,
}

/// Airy 1830 (OSGB36) → GRS80 (WGS84)
pub const OSGB36_TO_WGS84: HelmertParameters = HelmertParameters {
    tx: 446.448,
    ty: -125.157,
    tz: 542.060,
    rx: 0.1502 * ARCSEC_TO_RAD,
    ry: 0.2470 * ARCSEC_TO_RAD,
    rz: 0.8421 * ARCSEC_TO_RAD,
    s: -20.4894e-6,
};

impl HelmertParameters {
    /// Transformation réciproque approchée (tous les paramètres opposés)
    pub fn inverse(&self) -> Self {
        Self {
            tx: -self.tx,
            ty: -self.ty,
            tz: -self.tz,
            rx: -self.rx,
            ry: -self.ry,
            rz: -self.rz,
            s: -self.s,
        }
    }

    /// Applique la transformation à un point cartésien
    pub fn apply(&self, c: CartesianCoordinate) -> CartesianCoordinate {
        let k = 1.0 + self.s;
        CartesianCoordinate {
            x: self.tx + k * c.x - self.rz * c.y + self.ry * c.z,
            y: self.ty + self.rz * c.x + k * c.y - self.rx * c.z,
            z: self.tz - self.ry * c.x + self.rx * c.y + k * c.z,
        }
    }
}

/// Convertit une coordonnée géodésique Airy 1830 (hauteur nulle) en cartésien,
/// puis la décale vers GRS80.
pub fn datum_shift(geo: GeodeticCoordinate) -> CartesianCoordinate {
    let airy = AIRY_1830.geodetic_to_cartesian(geo, 0.0);
    OSGB36_TO_WGS84.apply(airy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotations_in_radians() {
        assert!((OSGB36_TO_WGS84.rz - 4.0826e-6).abs() < 1e-9, "rz={}", OSGB36_TO_WGS84.rz);
    }

    #[test]
    fn test_origin_is_translated() {
        let c = OSGB36_TO_WGS84.apply(CartesianCoordinate::new(0.0, 0.0, 0.0));
        assert_eq!(c, CartesianCoordinate::new(446.448, -125.157, 542.060));
    }

    #[test]
    fn test_inverse_is_close() {
        let p = CartesianCoordinate::new(3874938.849, 116218.624, 5047168.208);
        let back = OSGB36_TO_WGS84.inverse().apply(OSGB36_TO_WGS84.apply(p));
        assert!((back.x - p.x).abs() < 0.05, "x={}", back.x);
        assert!((back.y - p.y).abs() < 0.05, "y={}", back.y);
        assert!((back.z - p.z).abs() < 0.05, "z={}", back.z);
    }

    #[test]
    fn test_shift_magnitude() {
        // Caister (OSGB36) : décalage ~ 700 m entre les deux datums
        let geo = GeodeticCoordinate::from_degrees(52.657570, 1.717922);
        let airy = AIRY_1830.geodetic_to_cartesian(geo, 0.0);
        let shifted = datum_shift(geo);
        let dx = shifted.x - airy.x;
        let dy = shifted.y - airy.y;
        let dz = shifted.z - airy.z;
        let d = (dx * dx + dy * dy + dz * dz).sqrt();
        assert!(d > 500.0 && d < 1000.0, "d={}", d);
    }
}
