//! Export HTML de la comparaison

use peptidiff_core::{DisplayBlock, ResidueCell, ResidueClass};

/// Rend un résidu annoté en span coloré; sans classe, la position est atténuée
fn render_cell(cell: &ResidueCell) -> String {
    match cell.class {
        Some(class) => format!(
            r#"<span class="seq-char amino-{}">{}</span>"#,
            class.name(),
            cell.residue.as_char()
        ),
        None => format!(r#"<span class="seq-char">{}</span>"#, cell.residue.as_char()),
    }
}

fn render_row(cells: &[ResidueCell]) -> String {
    cells.iter().map(render_cell).collect()
}

fn render_block(block: &DisplayBlock) -> String {
    format!(
        r#"        <div class="sequence-block">
            <div class="position">{}</div>
            <div class="sequence">{}</div>
            <div class="sequence">{}</div>
        </div>"#,
        block.start + 1,
        render_row(&block.first),
        render_row(&block.second)
    )
}

fn render_legend() -> String {
    ResidueClass::ALL
        .iter()
        .map(|class| {
            format!(
                r#"        <div class="legend-item"><span class="legend-swatch amino-{}"></span>{} — {}</div>"#,
                class.name(),
                class.label(),
                class.members()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Construit le document HTML complet: blocs de comparaison puis légende
pub fn render_document(blocks: &[DisplayBlock]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="utf-8">
    <title>Peptidiff</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .sequence-block {{ margin-bottom: 16px; }}
        .position {{ color: #9e9e9e; font-size: 12px; }}
        .sequence {{ font-family: monospace; font-size: 18px; letter-spacing: 2px; }}
        .seq-char {{ padding: 1px 2px; }}
        .amino-cysteine {{ background-color: #ffd54f; }}
        .amino-hydrophobic {{ background-color: #4dd0e1; }}
        .amino-glycine {{ background-color: #ba68c8; }}
        .amino-negative {{ background-color: #e57373; }}
        .amino-positive {{ background-color: #64b5f6; }}
        .amino-polar {{ background-color: #81c784; }}
        .amino-space {{ background-color: #e0e0e0; }}
        .legend {{ margin-top: 24px; }}
        .legend-item {{ margin: 4px 0; }}
        .legend-swatch {{ display: inline-block; width: 14px; height: 14px; margin-right: 8px; vertical-align: middle; }}
    </style>
</head>
<body>
    <h1>Résultat de la comparaison</h1>
    <div class="alignment">
{}
    </div>
    <div class="legend">
        <h2>Légende des classes chimiques</h2>
{}
    </div>
</body>
</html>
"#,
        blocks
            .iter()
            .map(render_block)
            .collect::<Vec<_>>()
            .join("\n"),
        render_legend()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use peptidiff_core::{diff_blocks, PeptideSequence};

    #[test]
    fn test_matching_positions_have_no_class() {
        let first = PeptideSequence::parse("VLSP").unwrap();
        let second = PeptideSequence::parse("VLAP").unwrap();
        let blocks = diff_blocks(&first, &second, 30);

        let cell = render_cell(&blocks[0].second[0]); // V = V
        assert_eq!(cell, r#"<span class="seq-char">V</span>"#);

        let cell = render_cell(&blocks[0].second[2]); // S ≠ A
        assert_eq!(cell, r#"<span class="seq-char amino-hydrophobic">A</span>"#);
    }

    #[test]
    fn test_document_contains_blocks_and_legend() {
        let seq = PeptideSequence::parse("CGDKS").unwrap();
        let document = render_document(&diff_blocks(&seq, &seq.clone(), 30));

        assert!(document.contains("amino-cysteine"));
        assert!(document.contains("Légende des classes chimiques"));
        assert!(document.contains(r#"<div class="position">1</div>"#));
    }
}
