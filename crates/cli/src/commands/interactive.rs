//! Session interactive dans le terminal

use crate::display::{legend, renderer};
use anyhow::Result;
use console::Term;
use peptidiff_core::{chunk_width_for, diff_blocks, CompareSession};

pub fn run() -> Result<()> {
    let term = Term::stdout();
    let mut session = CompareSession::new();

    println!("🧬 Comparaison interactive de séquences d'acides aminés (q pour quitter)\n");

    loop {
        // Chaque nouvelle saisie masque le résultat précédent
        term.write_str("Première séquence : ")?;
        let first = term.read_line()?;
        if first.trim() == "q" {
            break;
        }
        session.set_first(first);

        term.write_str("Deuxième séquence : ")?;
        let second = term.read_line()?;
        if second.trim() == "q" {
            break;
        }
        session.set_second(second);

        if session.submit().is_empty() {
            if let Some((first, second)) = session.sequences() {
                let width = chunk_width_for(term.size().1 as usize);
                println!();
                renderer::render_blocks(&diff_blocks(&first, &second, width));
                legend::render_legend();
            }
        } else {
            renderer::render_errors(session.errors());
        }

        println!();
    }

    Ok(())
}
