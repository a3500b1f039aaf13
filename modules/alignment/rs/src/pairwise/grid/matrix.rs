use std::fmt::{Display, Formatter};

use derive_more::Constructor;
use itertools::Itertools;

use super::{Grid, Tag};
use crate::Score;

/// Borrowed view of one of the three matrices.
///
/// `{}` renders the scores with two decimals, `{:#}` renders the predecessor lists
/// (`∅` for cells without predecessors).
#[derive(Copy, Clone, Debug, Constructor)]
pub struct Matrix<'a, S: Score> {
    grid: &'a Grid<S>,
    tag: Tag,
}

impl<S: Score> Matrix<'_, S> {
    pub fn tag(&self) -> Tag {
        self.tag
    }

    fn render(&self, pointers: bool) -> Vec<Vec<String>> {
        (0..self.grid.rows())
            .map(|row| {
                (0..self.grid.cols())
                    .map(|col| {
                        let cell = self.grid.at(self.tag, row, col);
                        if !pointers {
                            format!("{:.2}", cell.score)
                        } else if cell.pointers.is_empty() {
                            "∅".to_string()
                        } else {
                            cell.pointers.iter().join(" ")
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl<S: Score> Display for Matrix<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let pointers = f.alternate();
        let cells = self.render(pointers);

        let mut widths = vec![0; self.grid.cols()];
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        match pointers {
            true => writeln!(f, "{} pointers:", self.tag)?,
            false => writeln!(f, "{}:", self.tag)?,
        }
        for row in cells {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| match pointers {
                    true => format!("{cell:<width$}"),
                    false => format!("{cell:>width$}"),
                })
                .join("  ");
            writeln!(f, "  {}", line.trim_end())?;
        }
        Ok(())
    }
}
