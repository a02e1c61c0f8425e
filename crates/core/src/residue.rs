//! Résidus d'acides aminés et classes chimiques

use crate::error::{PeptideError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Codes à une lettre des 20 acides aminés standards, plus le marqueur de gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Residue {
    A,  // Alanine
    R,  // Arginine
    N,  // Asparagine
    D,  // Aspartate
    C,  // Cystéine
    E,  // Glutamate
    Q,  // Glutamine
    G,  // Glycine
    H,  // Histidine
    I,  // Isoleucine
    L,  // Leucine
    K,  // Lysine
    M,  // Méthionine
    F,  // Phénylalanine
    P,  // Proline
    S,  // Sérine
    T,  // Thréonine
    W,  // Tryptophane
    Y,  // Tyrosine
    V,  // Valine
    #[serde(rename = "-")]
    Gap,
}

impl Residue {
    /// Convertit un caractère en résidu (insensible à la casse)
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Residue::A),
            'R' => Ok(Residue::R),
            'N' => Ok(Residue::N),
            'D' => Ok(Residue::D),
            'C' => Ok(Residue::C),
            'E' => Ok(Residue::E),
            'Q' => Ok(Residue::Q),
            'G' => Ok(Residue::G),
            'H' => Ok(Residue::H),
            'I' => Ok(Residue::I),
            'L' => Ok(Residue::L),
            'K' => Ok(Residue::K),
            'M' => Ok(Residue::M),
            'F' => Ok(Residue::F),
            'P' => Ok(Residue::P),
            'S' => Ok(Residue::S),
            'T' => Ok(Residue::T),
            'W' => Ok(Residue::W),
            'Y' => Ok(Residue::Y),
            'V' => Ok(Residue::V),
            '-' => Ok(Residue::Gap),
            _ => Err(PeptideError::InvalidResidue(c)),
        }
    }

    /// Convertit un résidu en caractère (majuscule)
    pub fn as_char(self) -> char {
        match self {
            Residue::A => 'A',
            Residue::R => 'R',
            Residue::N => 'N',
            Residue::D => 'D',
            Residue::C => 'C',
            Residue::E => 'E',
            Residue::Q => 'Q',
            Residue::G => 'G',
            Residue::H => 'H',
            Residue::I => 'I',
            Residue::L => 'L',
            Residue::K => 'K',
            Residue::M => 'M',
            Residue::F => 'F',
            Residue::P => 'P',
            Residue::S => 'S',
            Residue::T => 'T',
            Residue::W => 'W',
            Residue::Y => 'Y',
            Residue::V => 'V',
            Residue::Gap => '-',
        }
    }

    /// Classe chimique du résidu, table fixe
    pub fn class(self) -> ResidueClass {
        match self {
            Residue::C => ResidueClass::Cysteine,
            Residue::A
            | Residue::I
            | Residue::L
            | Residue::M
            | Residue::F
            | Residue::W
            | Residue::Y
            | Residue::V
            | Residue::P => ResidueClass::Hydrophobic,
            Residue::G => ResidueClass::Glycine,
            Residue::D | Residue::E => ResidueClass::Negative,
            Residue::K | Residue::R => ResidueClass::Positive,
            Residue::S | Residue::T | Residue::H | Residue::Q | Residue::N => ResidueClass::Polar,
            Residue::Gap => ResidueClass::Space,
        }
    }

    /// Vrai si c'est le marqueur de gap
    pub fn is_gap(self) -> bool {
        matches!(self, Residue::Gap)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Residue {
    type Error = PeptideError;

    fn try_from(c: char) -> Result<Self> {
        Residue::from_char(c)
    }
}

/// Vérifie qu'un caractère appartient à l'alphabet accepté
pub fn is_valid_symbol(c: char) -> bool {
    Residue::from_char(c).is_ok()
}

/// Classes chimiques utilisées pour la coloration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidueClass {
    Cysteine,
    Hydrophobic,
    Glycine,
    Negative,
    Positive,
    Polar,
    Space,
}

impl ResidueClass {
    /// Les 7 classes, dans l'ordre de la légende
    pub const ALL: [ResidueClass; 7] = [
        ResidueClass::Cysteine,
        ResidueClass::Hydrophobic,
        ResidueClass::Glycine,
        ResidueClass::Negative,
        ResidueClass::Positive,
        ResidueClass::Polar,
        ResidueClass::Space,
    ];

    /// Classe d'un caractère quelconque; tout symbole inconnu retombe sur `Space`
    pub fn of_char(c: char) -> ResidueClass {
        Residue::from_char(c)
            .map(Residue::class)
            .unwrap_or(ResidueClass::Space)
    }

    /// Identifiant court, utilisé comme classe CSS et dans le JSON
    pub fn name(self) -> &'static str {
        match self {
            ResidueClass::Cysteine => "cysteine",
            ResidueClass::Hydrophobic => "hydrophobic",
            ResidueClass::Glycine => "glycine",
            ResidueClass::Negative => "negative",
            ResidueClass::Positive => "positive",
            ResidueClass::Polar => "polar",
            ResidueClass::Space => "space",
        }
    }

    /// Libellé affiché dans la légende
    pub fn label(self) -> &'static str {
        match self {
            ResidueClass::Cysteine => "Cystéine",
            ResidueClass::Hydrophobic => "Hydrophobes",
            ResidueClass::Glycine => "Glycine",
            ResidueClass::Negative => "Chargés négativement",
            ResidueClass::Positive => "Chargés positivement",
            ResidueClass::Polar => "Polaires non chargés",
            ResidueClass::Space => "Gap",
        }
    }

    /// Symboles couverts par la classe, pour la légende
    pub fn members(self) -> &'static str {
        match self {
            ResidueClass::Cysteine => "C",
            ResidueClass::Hydrophobic => "A, I, L, M, F, W, Y, V, P",
            ResidueClass::Glycine => "G",
            ResidueClass::Negative => "D, E",
            ResidueClass::Positive => "K, R",
            ResidueClass::Polar => "S, T, H, Q, N",
            ResidueClass::Space => "-",
        }
    }
}

impl fmt::Display for ResidueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
