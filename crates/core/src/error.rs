//! Types d'erreurs pour la bibliothèque Peptidiff

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeptideError {
    #[error("Résidu invalide: {0}")]
    InvalidResidue(char),

    #[error("Format FASTA invalide: {0}")]
    FastaFormat(String),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PeptideError>;
