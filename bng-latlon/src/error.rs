//! Types d'erreurs pour le crate bng-latlon

use thiserror::Error;

/// Erreurs pouvant survenir lors d'une conversion
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BngError {
    /// Coordonnée d'entrée non finie (NaN ou infini)
    #[error("Invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// Un solveur itératif a atteint sa limite d'itérations
    #[error("{stage} did not converge after {iterations} iterations")]
    Convergence { stage: &'static str, iterations: usize },

    /// Configuration du solveur invalide
    #[error("Invalid solver configuration: {0}")]
    Config(String),
}

impl BngError {
    /// Crée une erreur d'entrée invalide
    pub fn invalid_input(field: &'static str, value: f64) -> Self {
        Self::InvalidInput { field, value }
    }

    /// Crée une erreur de non-convergence
    pub fn convergence(stage: &'static str, iterations: usize) -> Self {
        Self::Convergence { stage, iterations }
    }

    /// Vérifie qu'une valeur est finie
    pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::invalid_input(field, value))
        }
    }
}

impl From<serde_json::Error> for BngError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(BngError::ensure_finite("easting", 1.5), Ok(1.5));
        assert!(matches!(
            BngError::ensure_finite("northing", f64::INFINITY),
            Err(BngError::InvalidInput { field: "northing", .. })
        ));
    }

    #[test]
    fn test_display() {
        let err = BngError::convergence("footpoint latitude", 100);
        assert_eq!(
            err.to_string(),
            "footpoint latitude did not converge after 100 iterations"
        );
    }
}
