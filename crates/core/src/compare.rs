//! Découpage en blocs et annotation du diff positionnel

use crate::residue::{Residue, ResidueClass};
use crate::sequence::PeptideSequence;
use serde::{Deserialize, Serialize};

/// Largeur de ligne utilisée hors terminal (exports JSON/HTML)
pub const DEFAULT_CHUNK_WIDTH: usize = 30;

/// Choisit la largeur de ligne selon la largeur d'affichage disponible.
///
/// Paliers hérités de l'outil d'origine: plus l'affichage est étroit, plus
/// les lignes sont courtes.
pub fn chunk_width_for(columns: usize) -> usize {
    if columns <= 40 {
        10
    } else if columns <= 60 {
        15
    } else if columns <= 100 {
        20
    } else {
        DEFAULT_CHUNK_WIDTH
    }
}

/// Un résidu annoté de sa classe de coloration.
///
/// `class` vaut `None` quand la position ne doit pas être mise en évidence
/// (deuxième séquence, résidu identique à la première).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueCell {
    pub residue: Residue,
    pub class: Option<ResidueClass>,
}

/// Une ligne d'affichage: deux tranches appariées et leur offset de départ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBlock {
    pub start: usize,
    pub first: Vec<ResidueCell>,
    pub second: Vec<ResidueCell>,
}

impl DisplayBlock {
    /// Nombre de positions couvertes par le bloc
    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }
}

/// Découpe deux séquences validées de même longueur en blocs appariés.
///
/// Chaque bloc couvre au plus `width` positions, le dernier pouvant être plus
/// court. Première séquence: chaque résidu porte sa classe. Deuxième
/// séquence: la classe n'est portée qu'aux positions où les résidus
/// diffèrent. Les entrées sont supposées déjà validées (longueurs égales).
pub fn diff_blocks(
    first: &PeptideSequence,
    second: &PeptideSequence,
    width: usize,
) -> Vec<DisplayBlock> {
    debug_assert_eq!(first.len(), second.len());

    let width = width.max(1);
    let mut blocks = Vec::with_capacity(first.len().div_ceil(width));

    let chunks = first
        .residues()
        .chunks(width)
        .zip(second.residues().chunks(width));

    for (index, (chunk_one, chunk_two)) in chunks.enumerate() {
        let first_cells = chunk_one
            .iter()
            .map(|r| ResidueCell {
                residue: *r,
                class: Some(r.class()),
            })
            .collect();

        let second_cells = chunk_one
            .iter()
            .zip(chunk_two.iter())
            .map(|(a, b)| ResidueCell {
                residue: *b,
                class: (a != b).then(|| b.class()),
            })
            .collect();

        blocks.push(DisplayBlock {
            start: index * width,
            first: first_cells,
            second: second_cells,
        });
    }

    tracing::debug!(
        positions = first.len(),
        blocs = blocks.len(),
        largeur = width,
        "blocs d'affichage construits"
    );

    blocks
}
