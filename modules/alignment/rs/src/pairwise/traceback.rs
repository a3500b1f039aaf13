use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::pairwise::grid::{Grid, Pointer, Tag};
use crate::pairwise::Error;
use crate::Score;

/// Caps on the traceback enumeration. Every tie along a path doubles the number of co-optimal
/// alignments, so the total must be bounded.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Limits {
    /// Maximum number of enumerated paths across all terminals
    pub max_paths: usize,
    /// Maximum number of steps in a single path, unbounded if None
    pub max_depth: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_paths: 65_536,
            max_depth: None,
        }
    }
}

/// One co-optimal traceback path.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve, Constructor)]
pub struct Path {
    /// Emitting steps, from the terminal cell back to the first aligned column
    steps: Vec<Pointer>,
    /// Where the path stopped: a boundary cell or a local restart cell. Emits nothing.
    origin: Pointer,
}

impl Path {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            write!(f, "{step}->")?;
        }
        write!(f, "{}", self.origin)
    }
}

/// Enumerates every path through the predecessor pointers of a filled grid.
///
/// The walk is a depth-first search with an explicit stack. Predecessors are visited in the order
/// they are stored in the cell (M, Ix, Iy), so paths come out in a deterministic order.
#[derive(Copy, Clone, Debug, Constructor)]
pub struct Traceback<'a, S: Score> {
    grid: &'a Grid<S>,
    limits: Limits,
}

impl<S: Score> Traceback<'_, S> {
    /// All paths starting at the given terminal M cells, in the order of terminals.
    pub fn paths(&self, terminals: &[(usize, usize)]) -> Result<Vec<Path>, Error> {
        let mut paths = Vec::new();
        for &(row, col) in terminals {
            self.trace(Pointer::new(Tag::M, row, col), &mut paths)?;
        }
        Ok(paths)
    }

    /// Append all paths starting at the terminal to `saveto`.
    pub fn trace(&self, terminal: Pointer, saveto: &mut Vec<Path>) -> Result<(), Error> {
        // Terminals that are themselves restarts (e.g. all-negative local grid) align nothing
        if terminal.is_boundary() || self.grid.cell(&terminal).pointers.is_empty() {
            log::debug!("Terminal {terminal} has no predecessors, skipping it");
            return Ok(());
        }

        let mut trail: Vec<Pointer> = Vec::new();
        let mut stack = vec![(terminal, 0usize)];

        while let Some((ptr, depth)) = stack.pop() {
            trail.truncate(depth);

            let predecessors = &self.grid.cell(&ptr).pointers;
            if ptr.is_boundary() || predecessors.is_empty() {
                if saveto.len() == self.limits.max_paths {
                    return Err(Error::TooManyPaths {
                        limit: self.limits.max_paths,
                    });
                }
                saveto.push(Path::new(trail.clone(), ptr));
                continue;
            }

            if let Some(limit) = self.limits.max_depth {
                if depth >= limit {
                    return Err(Error::TooDeep { limit });
                }
            }
            trail.push(ptr);

            // Reversed, so that the first stored predecessor is explored first
            for next in predecessors.iter().rev() {
                stack.push((*next, depth + 1));
            }
        }
        Ok(())
    }
}
