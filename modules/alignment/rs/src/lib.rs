pub use coalign_core_rs::num::Score;

pub mod pairwise;
