// src/noyau/reglages.rs
//
// Réglages consommés en LECTURE SEULE par le noyau.
// Persistés par l’UI (eframe storage), d’où serde.

use serde::{Deserialize, Serialize};

/// Décimales par défaut à l’affichage.
pub const DECIMALES_DEFAUT: u8 = 4;

/// Borne côté UI.
pub const DECIMALES_MAX_UI: u8 = 10;

/// Borne côté format (tolérance plus large que l’UI).
pub const DECIMALES_MAX_FORMAT: u8 = 15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// Angle saisi -> radians.
    pub fn en_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Radians => x,
            AngleMode::Degrees => x * std::f64::consts::PI / 180.0,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            AngleMode::Radians => "Rad",
            AngleMode::Degrees => "Deg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub decimales: u8,
    pub angle: AngleMode,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            angle: AngleMode::default(),
        }
    }
}

impl Reglages {
    /// Garde-fou UI : décimales bornées à [0, 10].
    pub fn avec_decimales(mut self, decimales: u8) -> Self {
        self.decimales = decimales.min(DECIMALES_MAX_UI);
        self
    }

    pub fn avec_angle(mut self, angle: AngleMode) -> Self {
        self.angle = angle;
        self
    }
}
