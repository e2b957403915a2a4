// src/noyau/format.rs
//
// Affichage à nombre fixe de décimales.
// Seul endroit où l’on arrondit : l’évaluation garde la pleine précision f64.

use super::reglages::DECIMALES_MAX_FORMAT;
use super::resultat::EvaluationResult;

/* ------------------------ Réels ------------------------ */

/// x avec exactement `dp` décimales ; jamais de "-0.000".
fn format_reel(x: f64, dp: usize) -> String {
    let s = format!("{x:.dp$}");
    match s.strip_prefix('-') {
        Some(abs) if abs.chars().all(|c| c == '0' || c == '.') => abs.to_string(),
        _ => s,
    }
}

/// Seuil sous lequel une composante est considérée nulle à `dp` décimales.
fn seuil(dp: usize) -> f64 {
    10f64.powi(-(dp as i32 + 1))
}

/* ------------------------ API ------------------------ */

/// Rend un résultat :
/// - Real(x)         -> "x" à `dp` décimales
/// - Complex(re, im) -> "re", "imi" ou "re ± |im|i" selon les composantes négligeables
pub fn format(result: EvaluationResult, dp: u8) -> String {
    let dp = dp.min(DECIMALES_MAX_FORMAT) as usize;

    match result {
        EvaluationResult::Real(x) => format_reel(x, dp),
        EvaluationResult::Complex { re, im } => {
            let eps = seuil(dp);
            if im.abs() < eps {
                return format_reel(re, dp);
            }
            if re.abs() < eps {
                return format!("{}i", format_reel(im, dp));
            }
            let signe = if im < 0.0 { '-' } else { '+' };
            format!(
                "{} {signe} {}i",
                format_reel(re, dp),
                format_reel(im.abs(), dp)
            )
        }
    }
}
