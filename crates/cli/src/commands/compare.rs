//! Commande de comparaison

use crate::display::{html, legend, renderer};
use crate::OutputFormat;
use anyhow::{anyhow, bail, Context, Result};
use console::Term;
use peptidiff_core::{
    chunk_width_for, diff_blocks, read_fasta, validate_pair, FastaRecord, PeptideSequence,
    DEFAULT_CHUNK_WIDTH,
};
use std::path::PathBuf;

pub fn run(
    first: Option<String>,
    second: Option<String>,
    fasta: Option<PathBuf>,
    width: Option<usize>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    // 1. Récupérer les deux saisies
    let (first, second) = match fasta {
        Some(path) => {
            let records = read_fasta(&path)
                .with_context(|| format!("lecture de {}", path.display()))?;
            let [one, two]: [FastaRecord; 2] = records.try_into().map_err(
                |records: Vec<FastaRecord>| {
                    anyhow!(
                        "le fichier FASTA doit contenir exactement deux séquences (trouvé {})",
                        records.len()
                    )
                },
            )?;
            (one.sequence, two.sequence)
        }
        None => (first.unwrap_or_default(), second.unwrap_or_default()),
    };

    // 2. Valider la paire; le résultat est supprimé en cas d'erreur
    let errors = validate_pair(&first, &second);
    if !errors.is_empty() {
        renderer::render_errors(&errors);
        std::process::exit(1);
    }

    // 3. Normaliser et découper en blocs
    let first = PeptideSequence::parse(&first)?;
    let second = PeptideSequence::parse(&second)?;

    let width = width.unwrap_or_else(|| match format {
        OutputFormat::Text => chunk_width_for(Term::stdout().size().1 as usize),
        OutputFormat::Json | OutputFormat::Html => DEFAULT_CHUNK_WIDTH,
    });
    let blocks = diff_blocks(&first, &second, width);

    // 4. Rendre selon le format
    match format {
        OutputFormat::Text => {
            if output.is_some() {
                bail!("--output n'est disponible qu'avec les formats json et html");
            }
            println!("🧬 Comparaison de {} positions:\n", first.len());
            renderer::render_blocks(&blocks);
            legend::render_legend();
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "length": first.len(),
                "width": width,
                "blocks": blocks,
            }))?;
            write_or_print(&json, output, "JSON")?;
        }
        OutputFormat::Html => {
            let document = html::render_document(&blocks);
            write_or_print(&document, output, "HTML")?;
        }
    }

    Ok(())
}

/// Écrit le rendu dans un fichier, sinon sur stdout
fn write_or_print(content: &str, output: Option<PathBuf>, label: &str) -> Result<()> {
    if let Some(output) = output {
        std::fs::write(&output, content)?;
        println!("{} écrit dans: {}", label, output.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}
