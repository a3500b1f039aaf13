use coalign_alignment_rs::pairwise::{Aligner, BottomRight, Error, Limits};
use eyre::Result;

use super::*;

#[test]
fn test_distinct_alphabets() -> Result<()> {
    let scheme = scheme("ATGC", "ATGCX", 1.0, -1.0, (0.1, 0.5, 0.6, 0.3));
    let w = Workload {
        seq1: "AATGC",
        seq2: "AGGC",
        score: 2.3,
        alignments: &[("ATG_C", "A_GGC")],
    };

    for aligner in [
        Aligner::builder().build(),
        Aligner::builder().with_terminals(BottomRight).build(),
    ] {
        let outcome = aligner.align(&scheme, &chars(w.seq1), &chars(w.seq2))?;
        ensure(&outcome, &scheme, &w);
    }
    Ok(())
}

#[test]
fn test_single_optimum() -> Result<()> {
    let scheme = scheme("ATGC", "ATGCX", 2.0, -1.0, (1.0, 0.5, 1.0, 0.5));
    let w = Workload {
        seq1: "AATGC",
        seq2: "AGGC",
        score: 5.0,
        alignments: &[("ATGC", "AGGC")],
    };

    let outcome = Aligner::builder()
        .build()
        .align(&scheme, &chars(w.seq1), &chars(w.seq2))?;
    ensure(&outcome, &scheme, &w);
    assert_eq!(outcome.terminals(), &[(5, 4)]);
    Ok(())
}

#[test]
fn test_free_ends() -> Result<()> {
    // Whole-matrix terminals: the best global prefix-suffix alignment is a single column
    let scheme = scheme("AT", "AT", 1.0, -1.0, (1.0, 1.0, 1.0, 1.0));
    let outcome = Aligner::builder()
        .build()
        .align(&scheme, &chars("AAA"), &chars("TTT"))?;
    ensure(
        &outcome,
        &scheme,
        &Workload {
            seq1: "AAA",
            seq2: "TTT",
            score: -1.0,
            alignments: &[("A", "T"); 5],
        },
    );

    // Bottom-right terminal: both sequences must reach the last column
    let outcome = Aligner::builder()
        .with_terminals(BottomRight)
        .build()
        .align(&scheme, &chars("AAA"), &chars("TTT"))?;
    ensure(
        &outcome,
        &scheme,
        &Workload {
            seq1: "AAA",
            seq2: "TTT",
            score: -3.0,
            alignments: &[
                ("AAA", "TTT"),
                ("AAA", "_TT"),
                ("_AA", "TTT"),
                ("AAA", "T_T"),
                ("AAA", "__T"),
                ("A_A", "TTT"),
                ("__A", "TTT"),
            ],
        },
    );
    Ok(())
}

#[test]
fn test_wavefront_fill() -> Result<()> {
    let scheme = scheme("ATGC", "ATGCX", 3.0, -2.0, (1.0, 1.0, 1.0, 1.0));
    let (seq1, seq2) = (chars("AATGCTTAGCGATC"), chars("AGGCTAAGCCATX"));

    let sequential = Aligner::builder().build().fill(&scheme, &seq1, &seq2)?;
    let parallel = Aligner::builder()
        .with_thread_pool(coalign_core_rs::parallelism::pool(4)?)
        .build()
        .fill(&scheme, &seq1, &seq2)?;
    assert_eq!(sequential, parallel);
    Ok(())
}

#[test]
fn test_missing_pair() {
    // 'X' is declared only for the second sequence
    let scheme = scheme("ATGC", "ATGCX", 1.0, -1.0, (1.0, 1.0, 1.0, 1.0));

    let report = Aligner::builder()
        .build()
        .align(&scheme, &chars("AXG"), &chars("ATG"))
        .unwrap_err();
    assert_eq!(
        report.downcast_ref::<Error>(),
        Some(&Error::Lookup {
            a: "'X'".to_string(),
            b: "'A'".to_string(),
            row: 2,
            col: 1,
        })
    );

    // The parallel fill reports the same pair
    let report = Aligner::builder()
        .with_thread_pool(coalign_core_rs::parallelism::pool(2).unwrap())
        .build()
        .align(&scheme, &chars("AXGAX"), &chars("ATGTTX"))
        .unwrap_err();
    assert_eq!(
        report.downcast_ref::<Error>(),
        Some(&Error::Lookup {
            a: "'X'".to_string(),
            b: "'A'".to_string(),
            row: 2,
            col: 1,
        })
    );
}

#[test]
fn test_too_many_paths() {
    let scheme = scheme("AT", "AT", 1.0, -1.0, (1.0, 1.0, 1.0, 1.0));

    let report = Aligner::builder()
        .with_terminals(BottomRight)
        .with_limits(Limits::new(4, None))
        .build()
        .align(&scheme, &chars("AAA"), &chars("TTT"))
        .unwrap_err();
    let error = report.downcast_ref::<Error>();
    assert_eq!(error, Some(&Error::TooManyPaths { limit: 4 }));
    assert!(error.is_some_and(Error::is_resource_limit));
}
