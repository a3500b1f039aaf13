use derive_getters::{Dissolve, Getters};
use eyre::{Result, WrapErr};
use rayon::ThreadPool;

use crate::pairwise::emit::Alignment;
use crate::pairwise::grid::{Grid, Tag};
use crate::pairwise::recurrence::{Mode, Recurrence};
use crate::pairwise::scoring::Scheme;
use crate::pairwise::terminal::{Terminals, WholeMatrix};
use crate::pairwise::traceback::{Limits, Traceback};
use crate::Score;

/// Result of aligning two sequences: the optimal score and every co-optimal alignment.
#[derive(Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct Outcome<S: Score> {
    score: S,
    terminals: Vec<(usize, usize)>,
    alignments: Vec<Alignment>,
}

pub struct Aligner<S: Score> {
    mode: Mode,
    terminals: Box<dyn Terminals<S>>,
    limits: Limits,
    thread_pool: Option<ThreadPool>,
}

pub struct AlignerBuilder<S: Score> {
    mode: Mode,
    terminals: Box<dyn Terminals<S>>,
    limits: Limits,
    thread_pool: Option<ThreadPool>,
}

impl<S: Score> Default for AlignerBuilder<S> {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            terminals: Box::new(WholeMatrix),
            limits: Limits::default(),
            thread_pool: None,
        }
    }
}

impl<S: Score> AlignerBuilder<S> {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_terminals(mut self, terminals: impl Terminals<S> + 'static) -> Self {
        self.terminals = Box::new(terminals);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Fill the grid along anti-diagonals inside the given pool instead of the sequential sweep.
    pub fn with_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    pub fn build(self) -> Aligner<S> {
        Aligner {
            mode: self.mode,
            terminals: self.terminals,
            limits: self.limits,
            thread_pool: self.thread_pool,
        }
    }
}

impl<S: Score> Aligner<S> {
    pub fn builder() -> AlignerBuilder<S> {
        AlignerBuilder::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Build and fill the three DP matrices for the given sequences.
    pub fn fill<A, B, Sch>(&self, scheme: &Sch, seq1: &[A], seq2: &[B]) -> Result<Grid<S>>
    where
        A: Sync,
        B: Sync,
        Sch: Scheme<Score = S, Seq1Symbol = A, Seq2Symbol = B> + Sync,
    {
        log::debug!(
            "Filling {}x{} {} alignment grid",
            seq1.len() + 1,
            seq2.len() + 1,
            self.mode
        );

        let mut grid = Grid::new(seq1.len(), seq2.len());
        let recurrence = Recurrence::new(scheme, self.mode);
        let filled = match &self.thread_pool {
            Some(pool) => pool.install(|| recurrence.fill_wavefront(&mut grid, seq1, seq2)),
            None => recurrence.fill(&mut grid, seq1, seq2),
        };
        filled.wrap_err("Failed to fill the alignment grid")?;

        if log::log_enabled!(log::Level::Trace) {
            for tag in Tag::ALL {
                log::trace!("{}", grid.matrix(tag));
                log::trace!("{:#}", grid.matrix(tag));
            }
        }
        Ok(grid)
    }

    /// Align two sequences and enumerate every co-optimal alignment.
    pub fn align<A, B, Sch>(&self, scheme: &Sch, seq1: &[A], seq2: &[B]) -> Result<Outcome<S>>
    where
        A: Copy + Into<char> + Sync,
        B: Copy + Into<char> + Sync,
        Sch: Scheme<Score = S, Seq1Symbol = A, Seq2Symbol = B> + Sync,
    {
        let grid = self.fill(scheme, seq1, seq2)?;

        let (score, terminals) = self.terminals.select(&grid);
        log::debug!(
            "Optimal score {score} reached at {} terminal cell(s)",
            terminals.len()
        );

        let paths = Traceback::new(&grid, self.limits)
            .paths(&terminals)
            .wrap_err("Failed to enumerate co-optimal alignments")?;

        let alignments = paths
            .iter()
            .map(|path| Alignment::emit(path, seq1, seq2))
            .collect::<Vec<_>>();
        log::info!(
            "Found {} co-optimal alignment(s) with score {score}",
            alignments.len()
        );

        Ok(Outcome {
            score,
            terminals,
            alignments,
        })
    }
}
