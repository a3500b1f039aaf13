use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ahash::AHashMap;
use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, eyre, Result, WrapErr};
use itertools::Itertools;

use coalign_alignment_rs::pairwise::Alignment;
use coalign_alignment_rs::Score;

/// Writes alignment results: the optimal score, a blank line, then every alignment as two rows
/// followed by a blank line.
#[derive(Debug, Clone)]
pub struct Writer<W> {
    writer: W,
}

impl<W> Writer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Writer<()> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Writer<BufWriter<File>>> {
        let path = path.as_ref();
        let file = File::create(path)
            .wrap_err_with(|| format!("Failed to create the output file {}", path.display()))?;
        Ok(Writer::new(BufWriter::new(file)))
    }
}

impl<W: Write> Writer<W> {
    pub fn write(&mut self, score: f64, alignments: &[Alignment]) -> Result<()> {
        // Debug formatting is the shortest representation that round-trips: 3.0, 2.5, 0.30000000000000004
        writeln!(self.writer, "{score:?}\n")?;
        for alignment in alignments {
            writeln!(self.writer, "{}\n{}\n", alignment.seq1(), alignment.seq2())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Parsed alignment results.
#[derive(Clone, PartialEq, Debug, Default, Getters, Dissolve, Constructor)]
pub struct Results {
    score: f64,
    pairs: Vec<(String, String)>,
}

pub struct Reader;

impl Reader {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Results> {
        let path = path.as_ref();
        let file = File::open(path)
            .wrap_err_with(|| format!("Failed to open the results file {}", path.display()))?;
        Self::parse(BufReader::new(file))
            .wrap_err_with(|| format!("Failed to parse the results file {}", path.display()))
    }

    /// The first non-blank line is the score, every following pair of non-blank lines is an
    /// alignment. Any number of blank lines may separate them.
    pub fn parse(reader: impl BufRead) -> Result<Results> {
        let lines = reader
            .lines()
            .map_ok(|line| line.trim().to_string())
            .filter_ok(|line| !line.is_empty())
            .collect::<Result<Vec<_>, _>>()?;

        let (score, rows) = lines
            .split_first()
            .ok_or_else(|| eyre!("No score line found"))?;
        let score = score
            .parse::<f64>()
            .map_err(|_| eyre!("Score line is not a number: {score:?}"))?;

        ensure!(
            rows.len() % 2 == 0,
            "Unpaired alignment row at the end: {:?}",
            rows[rows.len() - 1]
        );
        let pairs = rows
            .iter()
            .tuples()
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();

        Ok(Results { score, pairs })
    }
}

/// Difference between expected and actual results. Alignments are compared as multisets.
#[derive(Clone, PartialEq, Debug, Default, Getters, Dissolve)]
pub struct Comparison {
    score_matches: bool,
    /// Expected pairs that weren't found, with the number of missing copies
    missing: Vec<((String, String), usize)>,
    /// Found pairs that weren't expected, with the number of extra copies
    extra: Vec<((String, String), usize)>,
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        self.score_matches && self.missing.is_empty() && self.extra.is_empty()
    }
}

pub fn compare(expected: &Results, actual: &Results) -> Comparison {
    let mut balance: AHashMap<&(String, String), isize> = AHashMap::new();
    for pair in &expected.pairs {
        *balance.entry(pair).or_default() += 1;
    }
    for pair in &actual.pairs {
        *balance.entry(pair).or_default() -= 1;
    }

    let (mut missing, mut extra) = (Vec::new(), Vec::new());
    for (pair, count) in balance.into_iter().sorted() {
        match count {
            0 => {}
            x if x > 0 => missing.push((pair.clone(), x as usize)),
            x => extra.push((pair.clone(), x.unsigned_abs())),
        }
    }

    Comparison {
        score_matches: expected.score.fuzzy_eq(actual.score),
        missing,
        extra,
    }
}
