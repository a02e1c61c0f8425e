//! Commande d'affichage de la légende

use crate::display::legend;
use anyhow::Result;

pub fn run() -> Result<()> {
    println!("Légende des classes chimiques:\n");
    legend::render_legend();

    Ok(())
}
