//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, domaine, complexe refusé)
//! - invariant clé : une expression générée bien formée ne donne JAMAIS d’erreur de syntaxe

use std::time::{Duration, Instant};

use super::{evaluate, format, is_balanced, AngleMode, EvalError, EvaluationResult};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &EvalError) -> bool {
    // Liste blanche : erreurs *normales* pour un fuzz bien formé.
    matches!(
        e,
        EvalError::DivisionByZero
            | EvalError::DomainError(_)
            | EvalError::UnsupportedComplexArgument(_)
    )
}

fn check_invariant_format(r: EvaluationResult, dp: u8) {
    // aucune composante inf / NaN ne doit sortir en Ok, complexe compris
    assert!(r.est_fini(), "résultat non fini accepté: {r:?}");
    let une = format(r, dp);
    // relecture exacte seulement si le texte tient dans ~15 chiffres significatifs
    if let EvaluationResult::Real(x) = r {
        if x.abs() >= 1e4 {
            return;
        }
        let relu: f64 = une
            .parse()
            .unwrap_or_else(|_| panic!("format illisible: {une:?}"));
        assert_eq!(format(EvaluationResult::Real(relu), dp), une);
    } else {
        assert!(!une.is_empty());
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits nombres, 0 inclus (utile pour division par zéro / log(0))
    let n = rng.pick(10);
    if rng.pick(4) == 0 {
        format!("{n}.5")
    } else {
        format!("{n}")
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(8) {
        0 => "π".to_string(),
        1 => "e".to_string(),
        2 => format!("(-{})", gen_nombre(rng)),
        // débordements : inf, -inf ou NaN en cours de route
        3 => "sqrt(0-10^300*10^300)".to_string(),
        4 => "(10^300*10^300)".to_string(),
        _ => gen_nombre(rng),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}*{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}/{})", gen_expr(rng, depth - 1)),
        // exposant entier borné : reste fini
        5 => format!("({a})^{}", rng.pick(4)),
        6 => format!("sqrt({a})"),
        7 => format!("sin({a})"),
        8 => format!("cos({a})"),
        9 => format!("tan({a})"),
        10 => format!("log({a})"),
        _ => format!("ln({a})"),
    }
}

/// Retire une parenthèse au hasard (pour fabriquer du déséquilibré).
fn casse_parentheses(rng: &mut Rng, s: &str) -> Option<String> {
    let positions: Vec<usize> = s
        .char_indices()
        .filter(|(_, c)| *c == '(' || *c == ')')
        .map(|(i, _)| i)
        .collect();
    if positions.is_empty() {
        return None;
    }
    let i = positions[rng.pick(positions.len() as u32) as usize];
    let mut out = s.to_string();
    out.remove(i);
    Some(out)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_invariant_format() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let angle = if rng.coin() {
            AngleMode::Degrees
        } else {
            AngleMode::Radians
        };
        let dp = rng.pick(11) as u8;

        let r1 = evaluate(&expr, dp, angle);
        // Même entrée => même sortie (déterminisme)
        assert_eq!(r1, evaluate(&expr, dp, angle), "expr={expr:?}");

        match r1 {
            Ok(r) => {
                check_invariant_format(r, dp);
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 5, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_desequilibre_toujours_rejete() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let Some(casse) = casse_parentheses(&mut rng, &expr) else {
            continue;
        };
        assert!(!is_balanced(&casse));
        assert_eq!(
            evaluate(&casse, 4, AngleMode::Radians),
            Err(EvalError::UnbalancedParentheses),
            "expr={casse:?}"
        );
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // arbre équilibré de 800 termes : profondeur ~10, pas de risque de pile
    let mut items: Vec<String> = (0..800).map(|_| "1/2".to_string()).collect();
    while items.len() > 1 {
        items = items
            .chunks(2)
            .map(|c| match c {
                [a, b] => format!("({a}+{b})"),
                [a] => a.clone(),
                _ => unreachable!(),
            })
            .collect();
    }
    let expr = items.pop().unwrap_or_else(|| "0".to_string());
    budget(t0, max);

    let r = evaluate(&expr, 0, AngleMode::Radians).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400
    assert_eq!(format(r, 0), "400");
}
