//! Noyau — évaluation (pipeline réel)
//!
//! équilibre -> normalise -> jetons -> Expr (descente récursive) -> évaluation de l’arbre
//!
//! Règles de l’arbre :
//! - les arguments sont évalués avant la fonction (du plus interne vers l’externe) ;
//! - un complexe ne peut sortir que de `sqrt`, et seul `sqrt` peut le consommer :
//!   tout opérateur ou autre fonction le refuse ;
//! - aucun arrondi intermédiaire : `decimal_places` ne sert qu’à l’affichage (format.rs).

use tracing::{debug, trace};

use super::analyse::parse;
use super::equilibre::is_balanced;
use super::erreur::EvalError;
use super::expr::Expr;
use super::fonctions::appliquer;
use super::jetons::{format_tokens, tokenize};
use super::normalise::normalize;
use super::reduction::operation;
use super::reglages::{AngleMode, Reglages};
use super::resultat::EvaluationResult;

/// Démarche : étapes intermédiaires lisibles (panneau UI).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub normalisee: String,
    pub jetons: String,
    pub arbre: String,
}

/// API publique : évalue une expression en résultat typé (réel ou complexe).
///
/// Parenthèses non équilibrées => `UnbalancedParentheses`, sans rien lire d’autre.
///
/// Un complexe (sortie de `sqrt`) n’est jamais combiné : il doit être la valeur de toute
/// l’expression ou l’argument d’un autre `sqrt`. `1+sqrt(-4)` donne
/// `UnsupportedComplexArgument("+")`, pas `2i`.
pub fn evaluate(
    expression: &str,
    decimal_places: u8,
    angle_mode: AngleMode,
) -> Result<EvaluationResult, EvalError> {
    let reglages = Reglages {
        decimales: decimal_places,
        angle: angle_mode,
    };
    evaluate_avec_demarche(expression, &reglages).map(|(r, _d)| r)
}

/// Comme `evaluate`, avec la démarche en plus.
pub fn evaluate_avec_demarche(
    expression: &str,
    reglages: &Reglages,
) -> Result<(EvaluationResult, Demarche), EvalError> {
    debug!(
        expression,
        decimales = reglages.decimales,
        angle = ?reglages.angle,
        "évaluation"
    );

    let r = pipeline(expression, reglages.angle);
    if let Err(e) = &r {
        debug!(expression, erreur = %e, "évaluation rejetée");
    }
    r
}

fn pipeline(
    expression: &str,
    angle: AngleMode,
) -> Result<(EvaluationResult, Demarche), EvalError> {
    // 1) Équilibre (avant toute lecture)
    if !is_balanced(expression) {
        return Err(EvalError::UnbalancedParentheses);
    }
    if expression.trim().is_empty() {
        return Err(EvalError::syntaxe("entrée vide"));
    }

    // 2) Constantes + glyphes
    let normalisee = normalize(expression);
    trace!(%normalisee);

    // 3) Jetons + arbre
    let jetons = tokenize(&normalisee)?;
    let arbre = parse(&jetons)?;
    trace!(arbre = %arbre);

    // 4) Évaluation
    let resultat = evaluer_arbre(&arbre, angle)?;
    if !resultat.est_fini() {
        return Err(EvalError::domaine("résultat non fini"));
    }

    let d = Demarche {
        jetons: format_tokens(&jetons),
        arbre: arbre.to_string(),
        normalisee,
    };
    Ok((resultat, d))
}

/// Évaluation récursive ; profondeur bornée par la longueur de l’entrée.
fn evaluer_arbre(e: &Expr, angle: AngleMode) -> Result<EvaluationResult, EvalError> {
    use EvaluationResult::Real;

    match e {
        Expr::Number(v) => Ok(Real(*v)),
        Expr::Constant(k) => Ok(Real(k.valeur())),

        Expr::UnaryMinus(x) => {
            let v = evaluer_arbre(x, angle)?.reel_pour("-")?;
            Ok(Real(-v))
        }

        Expr::BinaryOp(op, a, b) => {
            let nom = op.symbole().to_string();
            let va = evaluer_arbre(a, angle)?.reel_pour(&nom)?;
            let vb = evaluer_arbre(b, angle)?.reel_pour(&nom)?;
            Ok(Real(operation(*op, va, vb)?))
        }

        Expr::FunctionCall(f, x) => {
            let arg = evaluer_arbre(x, angle)?;
            appliquer(*f, arg, angle)
        }
    }
}
