//! Session interactive et machine à états d'affichage

use crate::sequence::PeptideSequence;
use crate::validation::{validate_pair, ValidationError};
use serde::{Deserialize, Serialize};

/// État du panneau de résultats.
///
/// Visible uniquement après une validation sans erreur; toute modification
/// d'une saisie repasse en `Hidden` jusqu'à la prochaine soumission réussie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayState {
    Hidden,
    Visible,
}

/// Session de comparaison: les deux saisies brutes, le dernier résultat de
/// validation et l'état d'affichage, remplacés en bloc à chaque soumission
#[derive(Debug, Clone)]
pub struct CompareSession {
    first: String,
    second: String,
    errors: Vec<ValidationError>,
    state: DisplayState,
}

impl CompareSession {
    /// Crée une session vide, résultats masqués
    pub fn new() -> Self {
        Self {
            first: String::new(),
            second: String::new(),
            errors: Vec::new(),
            state: DisplayState::Hidden,
        }
    }

    /// Remplace la première saisie; masque le résultat courant
    pub fn set_first(&mut self, value: impl Into<String>) {
        self.first = value.into();
        self.state = DisplayState::Hidden;
    }

    /// Remplace la deuxième saisie; masque le résultat courant
    pub fn set_second(&mut self, value: impl Into<String>) {
        self.second = value.into();
        self.state = DisplayState::Hidden;
    }

    /// Soumet la paire courante: valide, met à jour l'état et retourne les
    /// erreurs accumulées (vide = résultat visible)
    pub fn submit(&mut self) -> &[ValidationError] {
        self.errors = validate_pair(&self.first, &self.second);

        self.state = if self.errors.is_empty() {
            DisplayState::Visible
        } else {
            DisplayState::Hidden
        };

        tracing::debug!(
            erreurs = self.errors.len(),
            visible = self.state == DisplayState::Visible,
            "soumission validée"
        );

        &self.errors
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// Retourne la paire normalisée, uniquement quand le résultat est visible
    pub fn sequences(&self) -> Option<(PeptideSequence, PeptideSequence)> {
        if self.state != DisplayState::Visible {
            return None;
        }

        // La validation garantit que le parse ne peut pas échouer ici
        let first = PeptideSequence::parse(&self.first).ok()?;
        let second = PeptideSequence::parse(&self.second).ok()?;
        Some((first, second))
    }
}

impl Default for CompareSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_hidden() {
        let session = CompareSession::new();
        assert_eq!(session.state(), DisplayState::Hidden);
        assert!(session.errors().is_empty());
        assert!(session.sequences().is_none());
    }

    #[test]
    fn test_submit_valid_pair_becomes_visible() {
        let mut session = CompareSession::new();
        session.set_first("VLSP");
        session.set_second("vlap");

        assert!(session.submit().is_empty());
        assert_eq!(session.state(), DisplayState::Visible);

        let (first, second) = session.sequences().unwrap();
        assert_eq!(first.to_string(), "VLSP");
        assert_eq!(second.to_string(), "VLAP");
    }

    #[test]
    fn test_submit_invalid_pair_stays_hidden() {
        let mut session = CompareSession::new();
        session.set_first("VLSP");
        session.set_second("VLA");

        assert_eq!(session.submit(), &[ValidationError::LengthMismatch]);
        assert_eq!(session.state(), DisplayState::Hidden);
        assert!(session.sequences().is_none());
    }

    #[test]
    fn test_any_edit_hides_result() {
        let mut session = CompareSession::new();
        session.set_first("VLSP");
        session.set_second("VLAP");
        session.submit();
        assert_eq!(session.state(), DisplayState::Visible);

        session.set_second("VLAP"); // même valeur: la modification masque quand même
        assert_eq!(session.state(), DisplayState::Hidden);

        session.submit();
        assert_eq!(session.state(), DisplayState::Visible);

        session.set_first("VLS");
        assert_eq!(session.state(), DisplayState::Hidden);
    }
}
