use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Display, Error};
use eyre::{Result, WrapErr};

use coalign_alignment_rs::pairwise::scoring::{self, gaps::DualAffine, symbols::Table, Model};
use coalign_alignment_rs::pairwise::Mode;

/// The parameter file doesn't follow the expected layout. `line` is 1-based and counts blank lines.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error, Constructor)]
#[display("Malformed input at line {line}: {reason}")]
pub struct MalformedInput {
    pub line: usize,
    pub reason: String,
}

/// Alignment parameters:
/// ```text
/// AATGC                 <- sequence A
/// AGGC                  <- sequence B
/// 0                     <- 0 for global alignment, anything else for local
/// 0.1 0.5 0.6 0.3       <- dx ex dy ey
/// 4                     <- alphabet A
/// ATGC
/// 5                     <- alphabet B
/// ATGCX
/// 1 1 A A 1             <- i j a b score, for every pair of alphabet symbols in order
/// 1 2 A T -1
/// ...
/// ```
/// Blank lines are skipped and every line is trimmed.
#[derive(Clone, Debug, Getters, Dissolve)]
pub struct Params {
    seq_a: String,
    seq_b: String,
    #[getter(skip)]
    mode: Mode,
    gaps: DualAffine<f64>,
    alphabet_a: String,
    alphabet_b: String,
    substitutions: Table<f64, char, char>,
}

impl Params {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .wrap_err_with(|| format!("Failed to open the parameter file {}", path.display()))?;
        Self::parse(BufReader::new(file))
            .wrap_err_with(|| format!("Failed to parse the parameter file {}", path.display()))
    }

    pub fn parse(reader: impl BufRead) -> Result<Self> {
        let mut lines = Lines::new(reader);

        let (_, seq_a) = lines.next("sequence A")?;
        let (_, seq_b) = lines.next("sequence B")?;
        let (_, flag) = lines.next("alignment mode")?;
        let mode = Mode::from_flag(&flag);

        let (lineno, line) = lines.next("gap penalties")?;
        let penalties = line
            .split_whitespace()
            .map(|token| number::<f64>(lineno, token))
            .collect::<Result<Vec<_>, _>>()?;
        let gaps = match penalties.as_slice() {
            &[dx, ex, dy, ey] => DualAffine::new(dx, ex, dy, ey),
            _ => {
                return Err(MalformedInput::new(
                    lineno,
                    format!("expected 4 gap penalties, found {}", penalties.len()),
                )
                .into())
            }
        };

        let alphabet_a = lines.alphabet("A")?;
        let alphabet_b = lines.alphabet("B")?;

        let mut substitutions = Table::new();
        for row in 1..=alphabet_a.1 {
            for col in 1..=alphabet_b.1 {
                let (lineno, line) = lines.next("substitution score")?;
                let (a, b, score) = substitution(lineno, &line, (row, col))?;

                for (symbol, alphabet) in [(a, &alphabet_a.0), (b, &alphabet_b.0)] {
                    if !alphabet.contains(symbol) {
                        log::warn!(
                            "Line {lineno}: symbol {symbol:?} is not a part of the declared alphabet {alphabet:?}"
                        );
                    }
                }
                if substitutions.insert(a, b, score).is_some() {
                    log::warn!("Line {lineno}: {a:?}/{b:?} is scored twice, the last score is used");
                }
            }
        }

        for (name, seq, alphabet) in [("A", &seq_a, &alphabet_a.0), ("B", &seq_b, &alphabet_b.0)] {
            if let Some(symbol) = seq.chars().find(|x| !alphabet.contains(*x)) {
                log::warn!("Sequence {name} contains {symbol:?} outside of its alphabet {alphabet:?}");
            }
        }

        log::debug!(
            "Parsed {mode} alignment parameters: |A| = {}, |B| = {}, {} substitution scores",
            seq_a.chars().count(),
            seq_b.chars().count(),
            substitutions.len()
        );

        Ok(Self {
            seq_a,
            seq_b,
            mode,
            gaps,
            alphabet_a: alphabet_a.0,
            alphabet_b: alphabet_b.0,
            substitutions,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Scoring model for the aligner: the substitution table and the dual affine gap penalties.
    pub fn model(&self) -> Model<f64, char, char> {
        scoring::compose(self.substitutions.clone(), self.gaps)
    }
}

// Non-blank, trimmed lines with their 1-based numbers
struct Lines<R> {
    inner: std::io::Lines<R>,
    lineno: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            lineno: 0,
        }
    }

    fn next(&mut self, what: &str) -> Result<(usize, String)> {
        for line in self.inner.by_ref() {
            let line = line.wrap_err("Failed to read a line")?;
            self.lineno += 1;

            let line = line.trim();
            if !line.is_empty() {
                return Ok((self.lineno, line.to_string()));
            }
        }
        Err(MalformedInput::new(self.lineno + 1, format!("expected {what}, found end of input")).into())
    }

    fn alphabet(&mut self, name: &str) -> Result<(String, usize)> {
        let (lineno, line) = self.next(&format!("size of the alphabet {name}"))?;
        let size = number::<usize>(lineno, &line)?;

        let (lineno, symbols) = self.next(&format!("symbols of the alphabet {name}"))?;
        let count = symbols.chars().count();
        if count != size {
            log::warn!(
                "Line {lineno}: alphabet {name} declares {size} symbols, but lists {count}: {symbols}"
            );
        }
        Ok((symbols, size))
    }
}

fn number<T: std::str::FromStr>(lineno: usize, token: &str) -> Result<T, MalformedInput> {
    token
        .parse()
        .map_err(|_| MalformedInput::new(lineno, format!("invalid number {token:?}")))
}

fn symbol(lineno: usize, token: &str) -> Result<char, MalformedInput> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(MalformedInput::new(
            lineno,
            format!("expected a single-character symbol, found {token:?}"),
        )),
    }
}

fn substitution(
    lineno: usize,
    line: &str,
    expected: (usize, usize),
) -> Result<(char, char, f64), MalformedInput> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let &[i, j, a, b, score] = tokens.as_slice() else {
        return Err(MalformedInput::new(
            lineno,
            format!("expected `i j a b score`, found {} token(s)", tokens.len()),
        ));
    };

    let indices = (number::<usize>(lineno, i)?, number::<usize>(lineno, j)?);
    if indices != expected {
        return Err(MalformedInput::new(
            lineno,
            format!(
                "expected indices {} {}, found {} {}",
                expected.0, expected.1, indices.0, indices.1
            ),
        ));
    }

    Ok((symbol(lineno, a)?, symbol(lineno, b)?, number(lineno, score)?))
}
