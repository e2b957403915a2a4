// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau (liste fermée).
///
/// Le `Display` est en français : c’est lui que la vue affiche tel quel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Rejet AVANT toute lecture : parenthèses non équilibrées.
    #[error("parenthèses non équilibrées")]
    UnbalancedParentheses,

    /// Une parenthèse ouverte n’a pas trouvé sa fermante pendant la lecture
    /// (ou l’inverse). Inatteignable via `evaluate` si l’équilibre est vérifié.
    #[error("parenthèses mal appariées")]
    MismatchedParentheses,

    #[error("erreur de domaine : {0}")]
    DomainError(String),

    /// Un complexe donné à autre chose que `sqrt`.
    #[error("argument complexe non supporté par {0}")]
    UnsupportedComplexArgument(String),

    #[error("division par zéro")]
    DivisionByZero,

    #[error("erreur de syntaxe : {0}")]
    SyntaxError(String),
}

impl EvalError {
    pub(crate) fn domaine(msg: impl Into<String>) -> Self {
        EvalError::DomainError(msg.into())
    }

    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        EvalError::SyntaxError(msg.into())
    }
}
