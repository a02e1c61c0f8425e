//! Rendu terminal des blocs de comparaison

use console::Style;
use peptidiff_core::{DisplayBlock, ResidueCell, ResidueClass, ValidationError};

/// Style terminal associé à chaque classe chimique
pub fn class_style(class: ResidueClass) -> Style {
    match class {
        ResidueClass::Cysteine => Style::new().yellow().bold(),
        ResidueClass::Hydrophobic => Style::new().cyan(),
        ResidueClass::Glycine => Style::new().magenta(),
        ResidueClass::Negative => Style::new().red(),
        ResidueClass::Positive => Style::new().blue(),
        ResidueClass::Polar => Style::new().green(),
        ResidueClass::Space => Style::new().dim(),
    }
}

fn render_row(cells: &[ResidueCell]) -> String {
    cells
        .iter()
        .map(|cell| match cell.class {
            Some(class) => class_style(class)
                .apply_to(cell.residue.as_char())
                .to_string(),
            // Position identique: affichée sans couleur, atténuée
            None => Style::new()
                .dim()
                .apply_to(cell.residue.as_char())
                .to_string(),
        })
        .collect()
}

/// Affiche les blocs appariés, chaque bloc précédé de sa position de départ
pub fn render_blocks(blocks: &[DisplayBlock]) {
    for block in blocks {
        println!("{:>5}  {}", block.start + 1, render_row(&block.first));
        println!("{:>5}  {}", "", render_row(&block.second));
        println!();
    }
}

/// Affiche les erreurs de saisie sur stderr
pub fn render_errors(errors: &[ValidationError]) {
    let style = Style::new().red().bold();

    for error in errors {
        eprintln!("{}", style.apply_to(format!("✗ {}", error)));
    }
}
