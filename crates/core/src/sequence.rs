//! Séquence d'acides aminés normalisée

use crate::error::Result;
use crate::residue::{Residue, ResidueClass};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Séquence validée, résidus normalisés en majuscules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeptideSequence {
    residues: Vec<Residue>,
}

impl PeptideSequence {
    /// Parse une séquence depuis une chaîne brute (insensible à la casse)
    pub fn parse(s: &str) -> Result<Self> {
        let residues = s
            .chars()
            .map(Residue::from_char)
            .collect::<Result<Vec<Residue>>>()?;

        Ok(Self { residues })
    }

    /// Retourne la longueur de la séquence
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Vérifie si la séquence est vide
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Accès aux résidus
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// Compte les résidus par classe chimique, dans l'ordre de `ResidueClass::ALL`
    pub fn class_counts(&self) -> [usize; 7] {
        let mut counts = [0usize; 7];

        for residue in &self.residues {
            let idx = ResidueClass::ALL
                .iter()
                .position(|c| *c == residue.class())
                .unwrap_or(6);
            counts[idx] += 1;
        }

        counts
    }
}

impl fmt::Display for PeptideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for PeptideSequence {
    type Err = crate::error::PeptideError;

    fn from_str(s: &str) -> Result<Self> {
        PeptideSequence::parse(s)
    }
}
