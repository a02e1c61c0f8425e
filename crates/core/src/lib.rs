//! Peptidiff Core
//!
//! Bibliothèque principale pour la comparaison positionnelle de deux
//! séquences d'acides aminés de même longueur: validation des saisies,
//! classification chimique des résidus et découpage en blocs d'affichage.

pub mod compare;
pub mod error;
pub mod fasta;
pub mod logging;
pub mod residue;
pub mod sequence;
pub mod session;
pub mod validation;

// Réexportations principales
pub use compare::{chunk_width_for, diff_blocks, DisplayBlock, ResidueCell, DEFAULT_CHUNK_WIDTH};
pub use error::{PeptideError, Result};
pub use fasta::{read_fasta, FastaRecord};
pub use logging::init_logging;
pub use residue::{is_valid_symbol, Residue, ResidueClass};
pub use sequence::PeptideSequence;
pub use session::{CompareSession, DisplayState};
pub use validation::{validate_pair, SequenceSlot, ValidationError};
