// src/noyau/fonctions.rs
//
// Application des fonctions nommées sur un argument DÉJÀ évalué.
// - sqrt : seule porte vers les complexes (x < 0, ou argument déjà complexe)
// - sin/cos/tan : réel seulement, mode d’angle respecté
// - log/ln : réel > 0 seulement

use num_complex::Complex64;

use super::erreur::EvalError;
use super::expr::Fonction;
use super::reglages::AngleMode;
use super::resultat::EvaluationResult;

pub fn appliquer(
    f: Fonction,
    arg: EvaluationResult,
    angle: AngleMode,
) -> Result<EvaluationResult, EvalError> {
    use EvaluationResult::*;

    match f {
        // inf / NaN ne passent pas : NaN < 0 est faux, il tomberait sur la branche complexe
        Fonction::Sqrt if !arg.est_fini() => Err(EvalError::domaine(
            "racine carrée d’une valeur non finie",
        )),
        Fonction::Sqrt => Ok(match arg {
            Real(x) if x >= 0.0 => Real(x.sqrt()),
            Real(x) => Complex {
                re: 0.0,
                im: (-x).sqrt(),
            },
            Complex { re, im } => racine_principale(Complex64::new(re, im)).into(),
        }),

        Fonction::Sin | Fonction::Cos | Fonction::Tan => {
            let x = angle.en_radians(arg.reel_pour(f.nom())?);
            let v = match f {
                Fonction::Sin => x.sin(),
                Fonction::Cos => x.cos(),
                _ => x.tan(),
            };
            Ok(Real(v))
        }

        Fonction::Log | Fonction::Ln => {
            let x = arg.reel_pour(f.nom())?;
            if x.is_nan() || x <= 0.0 {
                return Err(EvalError::domaine(format!(
                    "logarithme d’un nombre non positif ({}({x}))",
                    f.nom()
                )));
            }
            Ok(Real(if f == Fonction::Log { x.log10() } else { x.ln() }))
        }
    }
}

/// √(a+bi) = √((r+a)/2) + signe(b)·√((r−a)/2) i, r = |a+bi|, signe(0) = +1.
fn racine_principale(z: Complex64) -> Complex64 {
    let r = z.norm();
    let re = ((r + z.re) / 2.0).sqrt();
    let im = ((r - z.re) / 2.0).sqrt();
    Complex64::new(re, if z.im < 0.0 { -im } else { im })
}
