// src/noyau/expr.rs
//
// AST flottant (f64).
// - Number      : littéral décimal
// - Constant    : π ou e
// - BinaryOp    : + - * / ^
// - UnaryMinus  : -x
// - FunctionCall: sqrt/sin/cos/tan/log/ln (un seul argument)
//
// Aucune évaluation ici : voir eval.rs.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}

impl fmt::Display for Constante {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constante::Pi => write!(f, "π"),
            Constante::E => write!(f, "e"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Pow => '^',
        }
    }
}

/// Fonctions reconnues, dans l’ordre historique de résolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
}

impl Fonction {
    pub const TOUTES: [Fonction; 6] = [
        Fonction::Sqrt,
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Log,
        Fonction::Ln,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sqrt => "sqrt",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Self::TOUTES.into_iter().find(|f| f.nom() == nom)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(Constante),
    BinaryOp(Op, Box<Expr>, Box<Expr>),
    UnaryMinus(Box<Expr>),
    FunctionCall(Fonction, Box<Expr>),
}

impl Expr {
    pub fn binaire(op: Op, a: Expr, b: Expr) -> Expr {
        Expr::BinaryOp(op, Box::new(a), Box::new(b))
    }

    /// Vrai si l’arbre ne contient ni fonction, ni puissance, ni constante
    /// (domaine du réducteur arithmétique).
    pub fn est_arithmetique_pure(&self) -> bool {
        match self {
            Expr::Number(_) => true,
            Expr::Constant(_) | Expr::FunctionCall(..) => false,
            Expr::BinaryOp(Op::Pow, _, _) => false,
            Expr::BinaryOp(_, a, b) => a.est_arithmetique_pure() && b.est_arithmetique_pure(),
            Expr::UnaryMinus(x) => x.est_arithmetique_pure(),
        }
    }
}

/// Rendu entièrement parenthésé (démarche) : aucune ambiguïté de priorité.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(v) => write!(f, "{v}"),
            Expr::Constant(k) => write!(f, "{k}"),
            Expr::BinaryOp(op, a, b) => write!(f, "({a}{}{b})", op.symbole()),
            Expr::UnaryMinus(x) => write!(f, "-{x}"),
            Expr::FunctionCall(fonc, x) => write!(f, "{}({x})", fonc.nom()),
        }
    }
}
