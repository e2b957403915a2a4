// src/noyau/normalise.rs
//
// Substitution des constantes + glyphes, une seule fois, avant la lecture.
// Les littéraux sont parenthésés pour rester un seul opérande : "2*π" -> "2*(3.14…)".

/// π avec assez de chiffres pour qu’aucun affichage à 15 décimales ne tronque.
pub const PI_LITTERAL: &str = "3.14159265358979323846";

/// e (Euler), même règle.
pub const E_LITTERAL: &str = "2.71828182845904523536";

/// Normalise une saisie brute :
/// - `π` -> (π décimal), `e` -> (e décimal)
/// - `×` -> `*`, `÷` -> `/`, `−` -> `-`, `√` -> `sqrt`
/// - supprime tous les espaces
///
/// `e` est remplacé partout : aucun nom de fonction reconnu ne contient de `e`.
/// `pi` (ASCII) reste un identifiant, lu plus tard comme constante.
pub fn normalize(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() + 16);
    for c in expr.chars() {
        match c {
            c if c.is_whitespace() => {}
            'π' => {
                out.push('(');
                out.push_str(PI_LITTERAL);
                out.push(')');
            }
            'e' => {
                out.push('(');
                out.push_str(E_LITTERAL);
                out.push(')');
            }
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            '√' => out.push_str("sqrt"),
            _ => out.push(c),
        }
    }
    out
}
