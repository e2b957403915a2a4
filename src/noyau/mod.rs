//! Noyau d’évaluation scientifique
//!
//! Organisation interne :
//! - equilibre.rs : parenthèses équilibrées (avant toute lecture)
//! - normalise.rs : π / e / glyphes × ÷ √ / espaces
//! - jetons.rs    : tokenisation
//! - expr.rs      : AST (Number, Constant, BinaryOp, UnaryMinus, FunctionCall)
//! - analyse.rs   : descente récursive jetons -> Expr
//! - reduction.rs : arithmétique réelle + réducteur pur
//! - fonctions.rs : sqrt/sin/cos/tan/log/ln (+ sortie complexe de sqrt)
//! - resultat.rs  : résultat typé réel | complexe
//! - format.rs    : affichage à décimales fixes
//! - reglages.rs  : décimales + mode d’angle
//! - eval.rs      : pipeline complet

pub mod analyse;
pub mod equilibre;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod reduction;
pub mod reglages;
pub mod resultat;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique
pub use equilibre::{count_unclosed, is_balanced};
pub use erreur::EvalError;
pub use eval::{evaluate, evaluate_avec_demarche, Demarche};
pub use format::format;
pub use normalise::normalize;
pub use reduction::reduce;
pub use reglages::{AngleMode, Reglages};
pub use resultat::EvaluationResult;
