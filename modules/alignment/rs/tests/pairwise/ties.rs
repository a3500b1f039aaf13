use coalign_alignment_rs::pairwise::scoring::symbols::Table;
use coalign_alignment_rs::pairwise::{scoring, Aligner, Pointer, Tag};
use eyre::Result;

use super::*;

#[test]
fn test_gap_placement() -> Result<()> {
    // The gap may be opened before or after the repeated T
    let scheme = scheme("AT", "AT", 2.0, -1.0, (1.0, 0.5, 1.0, 0.5));
    let outcome = Aligner::builder()
        .build()
        .align(&scheme, &chars("ATTA"), &chars("ATA"))?;
    ensure(
        &outcome,
        &scheme,
        &Workload {
            seq1: "ATTA",
            seq2: "ATA",
            score: 5.0,
            alignments: &[("ATTA", "A_TA"), ("ATTA", "AT_A")],
        },
    );
    Ok(())
}

#[test]
fn test_open_and_extend_tie() -> Result<()> {
    // Opening a gap after M(4,2) and extending the gap ending at Ix(4,2) both score 1.0
    let scheme = scheme("ACGT", "ACGT", 2.0, -1.0, (1.0, 0.5, 1.5, 0.0));
    let grid = Aligner::builder()
        .build()
        .fill(&scheme, &chars("GATTA"), &chars("GTA"))?;

    assert_eq!(grid.score(Tag::M, 4, 2), 2.5);
    assert_eq!(grid.score(Tag::Ix, 4, 2), 1.0);
    assert_eq!(grid.score(Tag::Ix, 5, 2), 1.0);
    assert_eq!(
        grid.pointers(Tag::Ix, 5, 2).as_slice(),
        &[Pointer::new(Tag::M, 4, 2), Pointer::new(Tag::Ix, 4, 2)]
    );
    Ok(())
}

#[test]
fn test_fuzzy_ties() -> Result<()> {
    let table = |delta: f64| -> Table<f64, char, char> {
        [('A', 'C', 1.0), ('B', 'C', 1.0 + delta)]
            .into_iter()
            .collect()
    };
    let gaps = || scoring::gaps::DualAffine::new(1.0, 1.0, 1.0, 1.0);
    let (seq1, seq2) = (chars("AB"), chars("C"));

    // Within the tolerance: both columns are optimal
    let scheme = scoring::compose(table(5e-7), gaps());
    let outcome = Aligner::builder().build().align(&scheme, &seq1, &seq2)?;
    assert_eq!(outcome.terminals(), &[(1, 1), (2, 1)]);
    assert_eq!(
        outcome.alignments(),
        &[
            Alignment::new("A".to_string(), "C".to_string()),
            Alignment::new("B".to_string(), "C".to_string()),
        ]
    );

    // Outside of it: a single winner
    let scheme = scoring::compose(table(1e-3), gaps());
    let outcome = Aligner::builder().build().align(&scheme, &seq1, &seq2)?;
    assert_eq!(*outcome.score(), 1.001);
    assert_eq!(outcome.terminals(), &[(2, 1)]);
    assert_eq!(
        outcome.alignments(),
        &[Alignment::new("B".to_string(), "C".to_string())]
    );
    Ok(())
}
