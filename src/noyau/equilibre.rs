// src/noyau/equilibre.rs
//
// Équilibre des parenthèses : vérifié AVANT toute évaluation.
// La vue utilise aussi count_unclosed() pour son invite "il manque N ')'".

/// Vrai si chaque `)` ferme un `(` déjà ouvert et qu’il n’en reste aucun ouvert.
pub fn is_balanced(expr: &str) -> bool {
    let mut profondeur: i64 = 0;
    for c in expr.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur -= 1;
                if profondeur < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    profondeur == 0
}

/// Nombre net de `(` encore ouvertes en fin de chaîne (jamais négatif).
pub fn count_unclosed(expr: &str) -> usize {
    let net = expr.chars().fold(0i64, |acc, c| match c {
        '(' => acc + 1,
        ')' => acc - 1,
        _ => acc,
    });
    net.max(0) as usize
}
