//! Lecture FASTA minimale pour alimenter la comparaison

use crate::error::{PeptideError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Un enregistrement FASTA brut: identifiant d'en-tête et séquence telle
/// quelle (la validation intervient en aval)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

/// Lit un fichier FASTA
pub fn read_fasta(path: &Path) -> Result<Vec<FastaRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(FastaRecord {
                id: header.to_string(),
                sequence: String::new(),
            });
        } else {
            match current.as_mut() {
                Some(record) => record.sequence.push_str(line),
                None => {
                    return Err(PeptideError::FastaFormat(
                        "séquence avant le premier en-tête >".to_string(),
                    ))
                }
            }
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }

    if records.is_empty() {
        return Err(PeptideError::FastaFormat("fichier vide".to_string()));
    }

    Ok(records)
}
