pub use aligner::{Aligner, AlignerBuilder, Outcome};
pub use emit::{Alignment, Summary, GAP};
pub use error::Error;
pub use grid::{Cell, Grid, Pointer, Pointers, Tag};
pub use recurrence::{Mode, Recurrence};
pub use terminal::{BottomRight, Terminals, WholeMatrix};
pub use traceback::{Limits, Path, Traceback};

mod aligner;
pub mod emit;
mod error;
pub mod grid;
pub mod recurrence;
pub mod scoring;
pub mod terminal;
pub mod traceback;
