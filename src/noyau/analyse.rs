// src/noyau/analyse.rs
//
// Descente récursive : jetons -> Expr
//
// Grammaire (priorité croissante) :
//   expr      := terme (('+' | '-') terme)*
//   terme     := unaire (('*' | '/') unaire)*
//   unaire    := ('-' | '+') unaire | puissance
//   puissance := primaire ('^' exposant)*          (associatif à GAUCHE : 2^3^2 = 64)
//   exposant  := ('-' | '+') exposant | primaire   (2^-1 autorisé)
//   primaire  := nombre | constante | '(' expr ')' | fonction '(' expr ')'
//
// Conséquence voulue : -2^2 = -(2^2) = -4.

use super::erreur::EvalError;
use super::expr::{Expr, Fonction, Op};
use super::jetons::{tokenize, Tok};

struct Lecteur<'a> {
    jetons: &'a [Tok],
    pos: usize,
}

impl<'a> Lecteur<'a> {
    fn peek(&self) -> Option<&'a Tok> {
        self.jetons.get(self.pos)
    }

    fn avance(&mut self) -> Option<&'a Tok> {
        let t = self.jetons.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn expr(&mut self) -> Result<Expr, EvalError> {
        let mut gauche = self.terme()?;
        loop {
            let op = match self.peek() {
                Some(Tok::Plus) => Op::Add,
                Some(Tok::Minus) => Op::Sub,
                _ => return Ok(gauche),
            };
            self.avance();
            let droite = self.terme()?;
            gauche = Expr::binaire(op, gauche, droite);
        }
    }

    fn terme(&mut self) -> Result<Expr, EvalError> {
        let mut gauche = self.unaire()?;
        loop {
            let op = match self.peek() {
                Some(Tok::Star) => Op::Mul,
                Some(Tok::Slash) => Op::Div,
                _ => return Ok(gauche),
            };
            self.avance();
            let droite = self.unaire()?;
            gauche = Expr::binaire(op, gauche, droite);
        }
    }

    fn unaire(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Tok::Minus) => {
                self.avance();
                Ok(Expr::UnaryMinus(Box::new(self.unaire()?)))
            }
            Some(Tok::Plus) => {
                self.avance();
                self.unaire()
            }
            _ => self.puissance(),
        }
    }

    fn puissance(&mut self) -> Result<Expr, EvalError> {
        let mut base = self.primaire()?;
        while let Some(Tok::Caret) = self.peek() {
            self.avance();
            let exposant = self.exposant()?;
            base = Expr::binaire(Op::Pow, base, exposant);
        }
        Ok(base)
    }

    fn exposant(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Tok::Minus) => {
                self.avance();
                Ok(Expr::UnaryMinus(Box::new(self.exposant()?)))
            }
            Some(Tok::Plus) => {
                self.avance();
                self.exposant()
            }
            _ => self.primaire(),
        }
    }

    fn primaire(&mut self) -> Result<Expr, EvalError> {
        let tok = self
            .avance()
            .ok_or_else(|| EvalError::syntaxe("expression incomplète"))?;

        match tok {
            Tok::Num(v) => Ok(Expr::Number(*v)),
            Tok::Constante(k) => Ok(Expr::Constant(*k)),
            Tok::LPar => self.groupe(),
            Tok::Ident(nom) => {
                let f = Fonction::depuis_nom(nom)
                    .ok_or_else(|| EvalError::syntaxe(format!("fonction inconnue: '{nom}'")))?;
                match self.avance() {
                    Some(Tok::LPar) => {}
                    _ => {
                        return Err(EvalError::syntaxe(format!(
                            "'(' attendue après {}",
                            f.nom()
                        )))
                    }
                }
                let arg = self.groupe()?;
                Ok(Expr::FunctionCall(f, Box::new(arg)))
            }
            Tok::RPar => Err(EvalError::syntaxe("opérande manquant avant ')'")),
            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => Err(
                EvalError::syntaxe("opérateur sans opérande"),
            ),
        }
    }

    /// Contenu d’un groupe après '(' : expr puis ')' obligatoire.
    fn groupe(&mut self) -> Result<Expr, EvalError> {
        let e = self.expr()?;
        match self.avance() {
            Some(Tok::RPar) => Ok(e),
            None => Err(EvalError::MismatchedParentheses),
            Some(_) => Err(EvalError::syntaxe("')' attendue")),
        }
    }
}

/// Construit une Expr à partir d’une suite de jetons complète.
pub fn parse(jetons: &[Tok]) -> Result<Expr, EvalError> {
    if jetons.is_empty() {
        return Err(EvalError::syntaxe("entrée vide"));
    }

    let mut l = Lecteur { jetons, pos: 0 };
    let e = l.expr()?;

    match l.peek() {
        None => Ok(e),
        Some(Tok::RPar) => Err(EvalError::MismatchedParentheses),
        Some(_) => Err(EvalError::syntaxe("jeton inattendu après l’expression")),
    }
}

/// Raccourci : tokenize + parse.
pub fn lire(s: &str) -> Result<Expr, EvalError> {
    parse(&tokenize(s)?)
}
