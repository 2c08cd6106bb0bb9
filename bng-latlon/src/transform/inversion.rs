//! Inversion cartésien → géodésique (itération à point fixe)

use tracing::{debug, trace, warn};

use super::ellipsoid::{Ellipsoid, GRS80};
use super::pow_of_sin;
use crate::types::{CartesianCoordinate, GeodeticCoordinate};
use crate::{BngError, SolverConfig};

const STAGE: &str = "geodetic inversion";

impl Ellipsoid {
    /// Convertit un point cartésien géocentrique en coordonnées géodésiques
    /// (radians) sur cet ellipsoïde.
    ///
    /// La hauteur ellipsoïdale est calculée mais seulement tracée.
    ///
    /// # Errors
    ///
    /// `BngError::Convergence` si la latitude ne se stabilise pas en
    /// `max_iterations` itérations (entrée non finie notamment).
    pub fn cartesian_to_geodetic(
        &self,
        cart: CartesianCoordinate,
        config: &SolverConfig,
    ) -> Result<GeodeticCoordinate, BngError> {
        let a = self.semi_major_axis;
        let e2 = self.eccentricity_squared();
        let p = (cart.x * cart.x + cart.y * cart.y).sqrt();

        let mut lat = cart.z.atan2(p * (1.0 - e2));
        let mut older = f64::NAN;

        for iteration in 1..=config.max_iterations {
            let previous = lat;
            let nu = a / (1.0 - e2 * pow_of_sin(previous, 2)).sqrt();
            lat = (cart.z + e2 * nu * previous.sin()).atan2(p);

            // Cycle de 2 à la résolution du f64
            if (lat - previous).abs() <= config.latitude_tolerance || lat == older {
                let lon = cart.y.atan2(cart.x);
                let height = p / lat.cos() - nu;
                debug!(iterations = iteration, "Geodetic inversion converged");
                trace!(latitude = lat, longitude = lon, height, "Ellipsoidal height");
                return Ok(GeodeticCoordinate::new(lat, lon));
            }
            older = previous;
        }

        warn!(
            x = cart.x,
            y = cart.y,
            z = cart.z,
            iterations = config.max_iterations,
            "Geodetic inversion did not converge"
        );
        Err(BngError::convergence(STAGE, config.max_iterations))
    }
}

/// Inversion sur GRS80 (datum WGS84)
pub fn geodetic_inversion(
    cart: CartesianCoordinate,
    config: &SolverConfig,
) -> Result<GeodeticCoordinate, BngError> {
    GRS80.cartesian_to_geodetic(cart, config)
}
