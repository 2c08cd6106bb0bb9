//! Configuration des solveurs itératifs

use serde::{Deserialize, Serialize};

use crate::BngError;

/// Paramètres des deux solveurs itératifs (latitude de pied et inversion)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SolverConfig {
    /// Nombre maximal d'itérations avant `BngError::Convergence`
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Tolérance sur l'arc méridien, en mètres (0.01 mm)
    #[serde(default = "default_arc_tolerance")]
    pub arc_tolerance: f64,

    /// Tolérance sur la latitude lors de l'inversion, en radians
    #[serde(default = "default_latitude_tolerance")]
    pub latitude_tolerance: f64,
}

fn default_max_iterations() -> usize {
    100
}

fn default_arc_tolerance() -> f64 {
    1e-5
}

fn default_latitude_tolerance() -> f64 {
    1e-16
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            arc_tolerance: default_arc_tolerance(),
            latitude_tolerance: default_latitude_tolerance(),
        }
    }
}

impl SolverConfig {
    /// Charge une configuration depuis du JSON (champs absents = valeurs par défaut)
    pub fn from_json(json: &str) -> Result<Self, BngError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Vérifie la cohérence des paramètres
    pub fn validate(&self) -> Result<(), BngError> {
        if self.max_iterations == 0 {
            return Err(BngError::Config("max_iterations must be at least 1".into()));
        }
        for (name, value) in [
            ("arc_tolerance", self.arc_tolerance),
            ("latitude_tolerance", self.latitude_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BngError::Config(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
