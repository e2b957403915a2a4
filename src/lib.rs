//! Calculatrice scientifique — bibliothèque
//!
//! Le noyau (`noyau`) est indépendant de l’UI : une chaîne + deux réglages
//! (décimales, mode d’angle) en entrée, un résultat typé ou une erreur typée en sortie.

pub mod noyau;
