//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//! - comparaisons flottantes à tolérance explicite
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - Pleine précision f64 pendant l’évaluation ; l’arrondi n’existe qu’au format.
//! - Un complexe n’est jamais combiné : il doit être la valeur de toute l’expression
//!   (ou l’argument d’un autre sqrt).

use std::time::{Duration, Instant};

use num_complex::Complex64;

use super::{evaluate, format, AngleMode, EvalError, EvaluationResult};

const TOL: f64 = 1e-9;

fn reel(expr: &str, angle: AngleMode) -> f64 {
    match evaluate(expr, 10, angle) {
        Ok(EvaluationResult::Real(x)) => x,
        autre => panic!("expr={expr:?} : attendu un réel, obtenu {autre:?}"),
    }
}

fn assert_proche(expr: &str, angle: AngleMode, attendu: f64) {
    let v = reel(expr, angle);
    assert!(
        (v - attendu).abs() < TOL,
        "expr={expr:?} valeur={v} attendu={attendu}"
    );
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants trig ------------------------ */

#[test]
fn sci_pythagore_trig() {
    for a in [0, 15, 30, 45, 60, 90, 135, 210, 333, -720] {
        let expr = format!("sin({a})^2 + cos({a})^2");
        assert_proche(&expr, AngleMode::Degrees, 1.0);
    }
}

#[test]
fn sci_degres_equivaut_radians() {
    for a in [10.0_f64, 45.0, 90.0, 180.0, 270.0] {
        for f in ["sin", "cos"] {
            let deg = reel(&format!("{f}({a})"), AngleMode::Degrees);
            let rad = reel(&format!("{f}({a}*π/180)"), AngleMode::Radians);
            assert!((deg - rad).abs() < TOL, "{f}({a}) deg={deg} rad={rad}");
        }
    }
}

#[test]
fn sci_periodicite() {
    assert_proche("sin(30+360) - sin(30)", AngleMode::Degrees, 0.0);
    assert_proche("cos(2*π + 1) - cos(1)", AngleMode::Radians, 0.0);
    assert_proche("tan(45+180)", AngleMode::Degrees, 1.0);
}

/* ------------------------ Logarithmes / puissances ------------------------ */

#[test]
fn sci_log_puissances_de_dix() {
    for k in -3..=6 {
        assert_proche(&format!("log(10^{k})"), AngleMode::Radians, k as f64);
    }
    assert_proche("ln(e^3)", AngleMode::Radians, 3.0);
    assert_proche("ln(2*3) - ln(2) - ln(3)", AngleMode::Radians, 0.0);
}

#[test]
fn sci_racine_puis_carre() {
    for x in ["2", "3.5", "1000", "0.01"] {
        let v: f64 = x.parse().unwrap();
        assert_proche(&format!("sqrt({x})^2"), AngleMode::Radians, v);
    }
}

#[test]
fn sci_racine_complexe_principale() {
    // (√z)² = z pour z = √(-a) avec a > 0, et Re(√z) >= 0
    for a in [1.0_f64, 2.0, 9.0, 50.0] {
        let r = evaluate(&format!("sqrt(sqrt(-{a}))"), 4, AngleMode::Radians).unwrap();
        let EvaluationResult::Complex { re, im } = r else {
            panic!("attendu un complexe pour a={a}: {r:?}");
        };
        assert!(re >= 0.0);
        let carre = Complex64::new(re, im) * Complex64::new(re, im);
        assert!((carre - Complex64::new(0.0, a.sqrt())).norm() < TOL, "a={a}");
    }
}

/* ------------------------ Équilibre avant tout ------------------------ */

#[test]
fn sci_desequilibre_ne_lit_rien() {
    // même avec des caractères illisibles, le rejet est l’équilibre
    for s in ["(#", "sqrt(((", "2+3)", "@)(", "log(100))"] {
        assert_eq!(
            evaluate(s, 4, AngleMode::Radians),
            Err(EvalError::UnbalancedParentheses),
            "expr={s:?}"
        );
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_profondeur_sqrt_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // On alterne sqrt et ^2 : la valeur reste 4 à chaque aller-retour
    let mut expr = "4".to_string();
    for k in 0..60 {
        expr = if k % 2 == 0 {
            format!("sqrt({expr})")
        } else {
            format!("({expr})^2")
        };
        budget(t0, max);
    }

    assert_proche(&expr, AngleMode::Radians, 4.0);
}

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..200 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("1/2");
        budget(t0, max);
    }

    // 200*(1/2)=100
    assert_eq!(format(evaluate(&expr, 2, AngleMode::Radians).unwrap(), 2), "100.00");
}

#[test]
fn sci_stress_grands_nombres() {
    let big = "9".repeat(100);
    let r = evaluate(&format!("{big}/{big}"), 4, AngleMode::Radians).unwrap();
    assert_eq!(format(r, 4), "1.0000");

    assert!(matches!(
        evaluate(&"9".repeat(400), 4, AngleMode::Radians),
        Err(EvalError::DomainError(_))
    ));
}
