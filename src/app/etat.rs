//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, réglages, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Seuls les réglages sont persistés (décimales + mode d’angle).

use tracing::info;

use calculatrice_scientifique::noyau::{AngleMode, Demarche, Reglages};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // résultat formaté (réel ou complexe)
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)
    pub invite: String,   // invite "parenthèses" : on n’évalue pas, on demande

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres (persistés) ---
    pub reglages: Reglages,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            invite: String::new(),
            demarche: Demarche::default(),
            reglages,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /// Restaure les réglages sauvegardés (sinon défauts).
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let reglages: Reglages = cc
            .storage
            .and_then(|s| eframe::get_value(s, eframe::APP_KEY))
            .unwrap_or_default();
        info!(?reglages, "réglages chargés");
        // la borne UI s’applique aussi à une valeur sauvegardée à la main
        Self::avec_reglages(reglages.avec_decimales(reglages.decimales))
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.reglages = Reglages::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.invite.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + invite + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.invite.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE l’entrée pour correction.
    /// - On efface le résultat : jamais de résultat partiel à l’écran.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.invite.clear();
        self.resultat.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Parenthèses non équilibrées : on invite à compléter au lieu d’évaluer.
    pub fn set_invite(&mut self, ouvertes: usize) {
        self.erreur.clear();
        self.invite = if ouvertes > 0 {
            format!("Il manque {ouvertes} parenthèse(s) fermante(s).")
        } else {
            "Parenthèse fermante sans ouvrante.".to_string()
        };
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (formaté + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.invite.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : décimales bornées à [0, 10].
    pub fn set_decimales(&mut self, decimales: u8) {
        self.reglages = self.reglages.avec_decimales(decimales);
        info!(decimales = self.reglages.decimales, "réglage décimales");
        self.focus_entree = true;
    }

    pub fn set_angle(&mut self, angle: AngleMode) {
        if self.reglages.angle != angle {
            self.reglages = self.reglages.avec_angle(angle);
            info!(?angle, "réglage mode d’angle");
        }
        self.focus_entree = true;
    }
}
