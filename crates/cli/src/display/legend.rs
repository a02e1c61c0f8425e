//! Légende des classes chimiques

use crate::display::renderer::class_style;
use peptidiff_core::ResidueClass;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct LegendRow {
    #[tabled(rename = "")]
    swatch: String,
    #[tabled(rename = "Classe")]
    class: &'static str,
    #[tabled(rename = "Résidus")]
    members: &'static str,
}

/// Construit le tableau de légende des 7 classes
pub fn legend_table() -> Table {
    let rows: Vec<LegendRow> = ResidueClass::ALL
        .iter()
        .map(|class| LegendRow {
            swatch: class_style(*class).apply_to("██").to_string(),
            class: class.label(),
            members: class.members(),
        })
        .collect();

    Table::new(rows)
}

/// Affiche la légende
pub fn render_legend() {
    println!("{}", legend_table());
}
