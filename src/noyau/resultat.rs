// src/noyau/resultat.rs

use num_complex::Complex64;

use super::erreur::EvalError;

/// Résultat typé d’une évaluation : réel, ou complexe (seule sortie possible de `sqrt`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EvaluationResult {
    Real(f64),
    Complex { re: f64, im: f64 },
}

impl EvaluationResult {
    /// Vrai si aucune composante n’est infinie ou NaN.
    pub fn est_fini(&self) -> bool {
        match *self {
            EvaluationResult::Real(x) => x.is_finite(),
            EvaluationResult::Complex { re, im } => re.is_finite() && im.is_finite(),
        }
    }

    /// Valeur réelle exigée par `consommateur` (opérateur ou fonction) ;
    /// un complexe est refusé.
    pub fn reel_pour(self, consommateur: &str) -> Result<f64, EvalError> {
        match self {
            EvaluationResult::Real(x) => Ok(x),
            EvaluationResult::Complex { .. } => {
                Err(EvalError::UnsupportedComplexArgument(consommateur.to_string()))
            }
        }
    }
}

impl From<Complex64> for EvaluationResult {
    fn from(z: Complex64) -> Self {
        EvaluationResult::Complex { re: z.re, im: z.im }
    }
}
