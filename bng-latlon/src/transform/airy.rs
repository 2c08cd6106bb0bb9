//! Projection Transverse Mercator du National Grid sur Airy 1830
//!
//! - Grille → géodésique : série de Redfearn (termes VII à XIIA)
//! - Géodésique → grille : série directe (termes I à VI)

use super::ellipsoid::AIRY_1830;
use super::footpoint::meridional_arc;
use super::{pow_of_sin, pow_of_tan, NATIONAL_GRID};
use crate::types::{GeodeticCoordinate, GridCoordinate};

/// Rayons de courbure à une latitude donnée, mis à l'échelle F0
#[derive(Debug, Clone, Copy)]
pub(crate) struct Curvature {
    /// Rayon de courbure transverse ν
    pub nu: f64,
    /// Rayon de courbure méridien ρ
    pub rho: f64,
    /// η² = ν/ρ - 1
    pub eta2: f64,
}

impl Curvature {
    pub(crate) fn at(lat: f64) -> Self {
        let e2 = AIRY_1830.eccentricity_squared();
        let af0 = AIRY_1830.semi_major_axis * NATIONAL_GRID.scale_factor;
        let w = 1.0 - e2 * pow_of_sin(lat, 2);

        let nu = af0 / w.sqrt();
        let rho = af0 * (1.0 - e2) * w.powf(-1.5);

        Self {
            nu,
            rho,
            eta2: nu / rho - 1.0,
        }
    }
}

/// Coefficients de correction de la série grille → géodésique
#[derive(Debug, Clone, Copy)]
struct SeriesCoefficients {
    vii: f64,
    viii: f64,
    ix: f64,
    x: f64,
    xi: f64,
    xii: f64,
    xiia: f64,
}

impl SeriesCoefficients {
    fn at(foot_lat: f64) -> Self {
        let Curvature { nu, rho, eta2 } = Curvature::at(foot_lat);
        let tan = foot_lat.tan();
        let tan2 = pow_of_tan(foot_lat, 2);
        let tan4 = pow_of_tan(foot_lat, 4);
        let tan6 = pow_of_tan(foot_lat, 6);
        let sec = 1.0 / foot_lat.cos();

        Self {
            vii: tan / (2.0 * rho * nu),
            viii: tan / (24.0 * rho * nu.powi(3)) * (5.0 + 3.0 * tan2 + eta2 - 9.0 * tan2 * eta2),
            ix: tan / (720.0 * rho * nu.powi(5)) * (61.0 + 90.0 * tan2 + 45.0 * tan4),
            x: sec / nu,
            xi: sec / (6.0 * nu.powi(3)) * (nu / rho + 2.0 * tan2),
            xii: sec / (120.0 * nu.powi(5)) * (5.0 + 28.0 * tan2 + 24.0 * tan4),
            xiia: sec / (5040.0 * nu.powi(7))
                * (61.0 + 662.0 * tan2 + 1320.0 * tan4 + 720.0 * tan6),
        }
    }
}

/// Convertit une coordonnée grille en géodésique Airy 1830 (radians)
/// à partir de la latitude de pied.
pub fn airy_geodetic(grid: GridCoordinate, foot_lat: f64) -> GeodeticCoordinate {
    let c = SeriesCoefficients::at(foot_lat);
    let de = grid.easting - NATIONAL_GRID.false_easting;

    let latitude = foot_lat - c.vii * de.powi(2) + c.viii * de.powi(4) - c.ix * de.powi(6);
    let longitude = NATIONAL_GRID.origin_longitude + c.x * de - c.xi * de.powi(3)
        + c.xii * de.powi(5)
        - c.xiia * de.powi(7);

    GeodeticCoordinate::new(latitude, longitude)
}

/// Projette une coordonnée géodésique Airy 1830 sur le National Grid
pub fn airy_to_grid(geo: GeodeticCoordinate) -> GridCoordinate {
    let lat = geo.latitude;
    let Curvature { nu, rho, eta2 } = Curvature::at(lat);
    let (sin_lat, cos_lat) = lat.sin_cos();
    let tan2 = pow_of_tan(lat, 2);
    let tan4 = pow_of_tan(lat, 4);

    let i = meridional_arc(lat) + NATIONAL_GRID.false_northing;
    let ii = nu * sin_lat * cos_lat / 2.0;
    let iii = nu * sin_lat * cos_lat.powi(3) * (5.0 - tan2 + 9.0 * eta2) / 24.0;
    let iiia = nu * sin_lat * cos_lat.powi(5) * (61.0 - 58.0 * tan2 + tan4) / 720.0;
    let iv = nu * cos_lat;
    let v = nu * cos_lat.powi(3) * (nu / rho - tan2) / 6.0;
    let vi = nu * cos_lat.powi(5)
        * (5.0 - 18.0 * tan2 + tan4 + 14.0 * eta2 - 58.0 * eta2 * tan2)
        / 120.0;

    let dl = geo.longitude - NATIONAL_GRID.origin_longitude;

    GridCoordinate {
        easting: NATIONAL_GRID.false_easting + iv * dl + v * dl.powi(3) + vi * dl.powi(5),
        northing: i + ii * dl.powi(2) + iii * dl.powi(4) + iiia * dl.powi(6),
    }
}
