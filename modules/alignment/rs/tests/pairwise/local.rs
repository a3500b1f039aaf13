use coalign_alignment_rs::pairwise::{Aligner, Mode, Tag};
use eyre::Result;

use super::*;

#[test]
fn test_local_island() -> Result<()> {
    let scheme = scheme("ACGT", "ACGT", 2.0, -3.0, (2.0, 1.0, 2.0, 1.0));
    let (seq1, seq2) = (chars("TTACGTT"), chars("GGACGGG"));

    // Each of M, Ix and Iy is a restart before the island, so the same island is traced thrice
    let outcome = Aligner::builder()
        .with_mode(Mode::Local)
        .build()
        .align(&scheme, &seq1, &seq2)?;
    ensure(
        &outcome,
        &scheme,
        &Workload {
            seq1: "TTACGTT",
            seq2: "GGACGGG",
            score: 6.0,
            alignments: &[("ACG", "ACG"); 3],
        },
    );
    assert_eq!(outcome.terminals(), &[(5, 5)]);

    let outcome = Aligner::builder().build().align(&scheme, &seq1, &seq2)?;
    ensure(
        &outcome,
        &scheme,
        &Workload {
            seq1: "TTACGTT",
            seq2: "GGACGGG",
            score: 3.0,
            alignments: &[("TTACG", "__ACG"), ("__ACG", "GGACG")],
        },
    );
    Ok(())
}

#[test]
fn test_clamp_everywhere() -> Result<()> {
    let scheme = scheme("AT", "AT", 1.0, -1.0, (1.0, 1.0, 1.0, 1.0));
    let aligner = Aligner::builder().with_mode(Mode::Local).build();
    let (seq1, seq2) = (chars("AAA"), chars("TTT"));

    let grid = aligner.fill(&scheme, &seq1, &seq2)?;
    for (row, col) in grid.interior() {
        for tag in Tag::ALL {
            assert_eq!(grid.score(tag, row, col), 0.0);
            assert!(grid.pointers(tag, row, col).is_empty());
        }
    }

    let outcome = aligner.align(&scheme, &seq1, &seq2)?;
    assert_eq!(*outcome.score(), 0.0);
    assert_eq!(outcome.terminals().len(), 9);
    assert!(outcome.alignments().is_empty());
    Ok(())
}

#[test]
fn test_scores_are_nonnegative() -> Result<()> {
    let scheme = scheme("ACGT", "ACGT", 1.0, -2.0, (1.5, 0.5, 2.5, 0.25));
    let (seq1, seq2) = (chars("GATTACAGATTACA"), chars("TACCAGTTAC"));

    let grid = Aligner::builder()
        .with_mode(Mode::Local)
        .build()
        .fill(&scheme, &seq1, &seq2)?;
    for (row, col) in grid.interior() {
        for tag in Tag::ALL {
            let cell = grid.at(tag, row, col);
            assert!(cell.score >= 0.0);
            assert_eq!(cell.score == 0.0, cell.pointers.is_empty());
        }
    }
    Ok(())
}

#[test]
fn test_invariants() -> Result<()> {
    let scheme = scheme("ACGT", "ACGT", 1.0, -2.0, (1.5, 0.5, 2.5, 0.25));
    let (seq1, seq2) = ("GATTACAGATTACA", "TACCAGTTAC");

    for mode in [Mode::Global, Mode::Local] {
        let outcome = Aligner::builder()
            .with_mode(mode)
            .build()
            .align(&scheme, &chars(seq1), &chars(seq2))?;
        assert!(!outcome.alignments().is_empty());
        for alignment in outcome.alignments() {
            invariants(alignment, seq1, seq2);
            assert!(rescore(alignment, &scheme).fuzzy_eq(*outcome.score()));
        }
    }
    Ok(())
}
