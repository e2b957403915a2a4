// src/noyau/reduction.rs
//
// Arithmétique réelle de base (partagée par le réducteur et l’évaluateur d’arbre) :
// - division par zéro EXACT => erreur
// - puissance réelle : résultat non fini => erreur de domaine
//
// reduce() : réducteur arithmétique pur (chiffres . + - * / ( ) seulement).

use super::analyse::lire;
use super::erreur::EvalError;
use super::expr::{Expr, Op};

/// a (op) b sur des réels, avec détection des erreurs.
pub fn operation(op: Op, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        Op::Add => Ok(a + b),
        Op::Sub => Ok(a - b),
        Op::Mul => Ok(a * b),
        Op::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
        Op::Pow => puissance(a, b),
    }
}

/// base ^ exposant (réel). Ex: (-8)^(1/3) => NaN => erreur de domaine.
pub fn puissance(base: f64, exposant: f64) -> Result<f64, EvalError> {
    let v = base.powf(exposant);
    if !v.is_finite() {
        return Err(EvalError::domaine(format!(
            "puissance non finie ({base}^{exposant})"
        )));
    }
    Ok(v)
}

/// Réduit une expression purement arithmétique en réel.
///
/// Refuse (SyntaxError) tout ce qui n’est pas chiffres, `.`, `+ - * / ( )` :
/// fonctions, constantes et `^` doivent avoir été résolus avant.
pub fn reduce(expr: &str) -> Result<f64, EvalError> {
    if let Some(c) = expr
        .chars()
        .find(|c| !(c.is_ascii_digit() || c.is_whitespace() || "+-*/().".contains(*c)))
    {
        return Err(EvalError::syntaxe(format!(
            "caractère non arithmétique: '{c}'"
        )));
    }

    let arbre = lire(expr)?;
    debug_assert!(arbre.est_arithmetique_pure());
    let v = reduire_arbre(&arbre)?;
    // un littéral trop long (400 chiffres) se lit déjà en inf
    if !v.is_finite() {
        return Err(EvalError::domaine("résultat non fini"));
    }
    Ok(v)
}

fn reduire_arbre(e: &Expr) -> Result<f64, EvalError> {
    match e {
        Expr::Number(v) => Ok(*v),
        Expr::UnaryMinus(x) => Ok(-reduire_arbre(x)?),
        Expr::BinaryOp(op, a, b) => operation(*op, reduire_arbre(a)?, reduire_arbre(b)?),
        Expr::Constant(_) | Expr::FunctionCall(..) => {
            Err(EvalError::syntaxe("expression non arithmétique"))
        }
    }
}
