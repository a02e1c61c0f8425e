//! Validation des paires de séquences saisies

use crate::residue::is_valid_symbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Désigne laquelle des deux séquences est concernée par une erreur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceSlot {
    First,
    Second,
}

impl fmt::Display for SequenceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceSlot::First => write!(f, "première"),
            SequenceSlot::Second => write!(f, "deuxième"),
        }
    }
}

/// Erreurs de saisie, accumulées et affichées toutes ensemble
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Les deux séquences sont obligatoires")]
    BothRequired,

    #[error("La {0} séquence contient des symboles invalides")]
    InvalidSymbols(SequenceSlot),

    #[error("Les séquences doivent être de même longueur")]
    LengthMismatch,
}

/// Valide une paire de séquences brutes.
///
/// Les trois règles sont évaluées indépendamment, sans court-circuit: le
/// résultat peut contenir plusieurs erreurs à la fois. Une liste vide signifie
/// que la paire est affichable.
pub fn validate_pair(first: &str, second: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Règle 1: les deux saisies sont requises (espaces seuls = vide)
    if first.trim().is_empty() || second.trim().is_empty() {
        errors.push(ValidationError::BothRequired);
    }

    // Règle 2: alphabet des résidus, insensible à la casse
    if !first.is_empty() && !first.chars().all(is_valid_symbol) {
        errors.push(ValidationError::InvalidSymbols(SequenceSlot::First));
    }
    if !second.is_empty() && !second.chars().all(is_valid_symbol) {
        errors.push(ValidationError::InvalidSymbols(SequenceSlot::Second));
    }

    // Règle 3: longueurs identiques, comparées sur les saisies brutes
    if !first.is_empty()
        && !second.is_empty()
        && first.chars().count() != second.chars().count()
    {
        errors.push(ValidationError::LengthMismatch);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair_no_errors() {
        assert!(validate_pair("VLSP", "VLAP").is_empty());
        assert!(validate_pair("vlsp", "VLAP").is_empty());
        assert!(validate_pair("AC-G", "acgg").is_empty());
    }

    #[test]
    fn test_empty_inputs_require_both() {
        assert_eq!(validate_pair("", ""), vec![ValidationError::BothRequired]);
        // Une seule séquence vide déclenche aussi la règle
        assert_eq!(validate_pair("", "ACD"), vec![ValidationError::BothRequired]);
        assert_eq!(validate_pair("ACD", ""), vec![ValidationError::BothRequired]);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate_pair("   ", "ACD");
        assert!(errors.contains(&ValidationError::BothRequired));
    }

    #[test]
    fn test_invalid_symbols_identify_sequence() {
        assert_eq!(
            validate_pair("AB", "AC"),
            vec![ValidationError::InvalidSymbols(SequenceSlot::First)]
        );
        assert_eq!(
            validate_pair("AC", "AZ"),
            vec![ValidationError::InvalidSymbols(SequenceSlot::Second)]
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            validate_pair("ACDE", "ACD"),
            vec![ValidationError::LengthMismatch]
        );
    }

    #[test]
    fn test_errors_accumulate() {
        // Symboles invalides des deux côtés et longueurs différentes
        let errors = validate_pair("AXB", "1234");
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidSymbols(SequenceSlot::First),
                ValidationError::InvalidSymbols(SequenceSlot::Second),
                ValidationError::LengthMismatch,
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::BothRequired.to_string(),
            "Les deux séquences sont obligatoires"
        );
        assert_eq!(
            ValidationError::InvalidSymbols(SequenceSlot::First).to_string(),
            "La première séquence contient des symboles invalides"
        );
        assert_eq!(
            ValidationError::InvalidSymbols(SequenceSlot::Second).to_string(),
            "La deuxième séquence contient des symboles invalides"
        );
        assert_eq!(
            ValidationError::LengthMismatch.to_string(),
            "Les séquences doivent être de même longueur"
        );
    }
}
