//! CLI pour Peptidiff

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use commands::{compare, interactive, legend};

#[derive(Parser)]
#[command(name = "peptidiff")]
#[command(about = "Comparaison visuelle de deux séquences d'acides aminés", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare deux séquences de même longueur et affiche le diff coloré
    Compare {
        /// Première séquence d'acides aminés
        first: Option<String>,

        /// Deuxième séquence d'acides aminés
        second: Option<String>,

        /// Fichier FASTA contenant exactement les deux séquences
        #[arg(short = 'f', long, conflicts_with_all = ["first", "second"])]
        fasta: Option<PathBuf>,

        /// Largeur de ligne en résidus (défaut: selon le terminal)
        #[arg(short, long)]
        width: Option<usize>,

        /// Format de sortie
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Exporter en fichier (JSON et HTML uniquement)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Affiche la légende des classes chimiques
    Legend,

    /// Session interactive dans le terminal
    Interactive,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    peptidiff_core::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            first,
            second,
            fasta,
            width,
            format,
            output,
        } => {
            compare::run(first, second, fasta, width, format, output)?;
        }
        Commands::Legend => {
            legend::run()?;
        }
        Commands::Interactive => {
            interactive::run()?;
        }
    }

    Ok(())
}
