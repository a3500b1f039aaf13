use coalign_alignment_rs::pairwise::scoring::{self, gaps, symbols, Model};
use coalign_alignment_rs::pairwise::{Alignment, Outcome, GAP};
use coalign_alignment_rs::Score;

mod global;
mod local;
mod ties;

pub type Scheme = Model<f64, char, char>;

/// Match/mismatch table over explicit alphabets.
pub fn scheme(
    alphabet1: &str,
    alphabet2: &str,
    matching: f64,
    mismatching: f64,
    (dx, ex, dy, ey): (f64, f64, f64, f64),
) -> Scheme {
    let table = alphabet1
        .chars()
        .flat_map(|a| {
            alphabet2.chars().map(move |b| {
                let score = if a == b { matching } else { mismatching };
                (a, b, score)
            })
        })
        .collect();
    scoring::compose(table, gaps::DualAffine::new(dx, ex, dy, ey))
}

pub fn chars(seq: &str) -> Vec<char> {
    seq.chars().collect()
}

pub struct Workload<'a> {
    pub seq1: &'a str,
    pub seq2: &'a str,
    pub score: f64,
    pub alignments: &'a [(&'a str, &'a str)],
}

/// Compare the outcome against the expected score and alignments (in traceback order) and check
/// the structural invariants of every emitted alignment.
pub fn ensure(outcome: &Outcome<f64>, scheme: &Scheme, w: &Workload<'_>) {
    assert!(
        outcome.score().fuzzy_eq(w.score),
        "{} != {}",
        outcome.score(),
        w.score
    );

    let expected = w
        .alignments
        .iter()
        .map(|(a, b)| Alignment::new(a.to_string(), b.to_string()))
        .collect::<Vec<_>>();
    assert_eq!(outcome.alignments(), &expected);

    for alignment in outcome.alignments() {
        invariants(alignment, w.seq1, w.seq2);

        let rescored = rescore(alignment, scheme);
        assert!(
            rescored.fuzzy_eq(w.score),
            "{alignment:?} scores {rescored}, expected {}",
            w.score
        );
    }
}

pub fn invariants(alignment: &Alignment, seq1: &str, seq2: &str) {
    assert_eq!(alignment.seq1().chars().count(), alignment.seq2().chars().count());
    for (a, b) in alignment.seq1().chars().zip(alignment.seq2().chars()) {
        assert!(a != GAP || b != GAP, "Gap-gap column in {alignment:?}");
    }

    let (ungapped1, ungapped2) = alignment.ungapped();
    assert!(seq1.contains(&ungapped1), "{ungapped1} is not a part of {seq1}");
    assert!(seq2.contains(&ungapped2), "{ungapped2} is not a part of {seq2}");
}

/// Column-by-column affine score of an alignment, starting outside of any gap.
pub fn rescore(alignment: &Alignment, scheme: &Scheme) -> f64 {
    let (dx, ex) = (
        gaps::Scorer::seq1_gap_open(scheme),
        gaps::Scorer::seq1_gap_extend(scheme),
    );
    let (dy, ey) = (
        gaps::Scorer::seq2_gap_open(scheme),
        gaps::Scorer::seq2_gap_extend(scheme),
    );

    let (mut total, mut ingap1, mut ingap2) = (0.0, false, false);
    for (a, b) in alignment.seq1().chars().zip(alignment.seq2().chars()) {
        if a == GAP {
            total -= if ingap1 { ex } else { dx };
        } else if b == GAP {
            total -= if ingap2 { ey } else { dy };
        } else {
            total += symbols::Scorer::score(scheme, &a, &b).unwrap();
        }
        (ingap1, ingap2) = (a == GAP, b == GAP);
    }
    total
}
