//! Latitude de pied (footpoint latitude) depuis le northing
//!
//! Résolution itérative de l'arc méridien sur Airy 1830.

use tracing::{debug, warn};

use super::ellipsoid::AIRY_1830;
use super::NATIONAL_GRID;
use crate::{BngError, SolverConfig};

const STAGE: &str = "footpoint latitude";

/// Arc méridien (m) entre la latitude de l'origine vraie et `lat`, mis à l'échelle F0
pub(crate) fn meridional_arc(lat: f64) -> f64 {
    let n = AIRY_1830.third_flattening();
    let (n2, n3) = (n * n, n * n * n);
    let lat0 = NATIONAL_GRID.origin_latitude;
    let diff = lat - lat0;
    let sum = lat + lat0;

    let m1 = (1.0 + n + (5.0 / 4.0) * n2 + (5.0 / 4.0) * n3) * diff;
    let m2 = (3.0 * n + 3.0 * n2 + (21.0 / 8.0) * n3) * diff.sin() * sum.cos();
    let m3 = ((15.0 / 8.0) * n2 + (15.0 / 8.0) * n3) * (2.0 * diff).sin() * (2.0 * sum).cos();
    let m4 = (35.0 / 24.0) * n3 * (3.0 * diff).sin() * (3.0 * sum).cos();

    AIRY_1830.semi_minor_axis * NATIONAL_GRID.scale_factor * (m1 - m2 + m3 - m4)
}

/// Calcule la latitude (radians, Airy 1830) dont l'arc méridien depuis l'origine
/// vraie vaut `northing - N0`.
///
/// # Errors
///
/// - `BngError::InvalidInput` si le northing n'est pas fini
/// - `BngError::Convergence` si `max_iterations` est dépassé
pub fn footpoint_latitude(northing: f64, config: &SolverConfig) -> Result<f64, BngError> {
    let northing = BngError::ensure_finite("northing", northing)?;
    let target = northing - NATIONAL_GRID.false_northing;
    let step = AIRY_1830.semi_major_axis * NATIONAL_GRID.scale_factor;

    let mut lat = NATIONAL_GRID.origin_latitude;
    let mut arc = 0.0;
    let mut iterations = 0;

    while target - arc >= config.arc_tolerance {
        if iterations == config.max_iterations {
            warn!(
                northing,
                iterations,
                residual = target - arc,
                "Footpoint latitude did not converge"
            );
            return Err(BngError::convergence(STAGE, iterations));
        }
        lat += (target - arc) / step;
        arc = meridional_arc(lat);
        iterations += 1;
    }

    debug!(northing, iterations, "Footpoint latitude converged");
    Ok(lat)
}
