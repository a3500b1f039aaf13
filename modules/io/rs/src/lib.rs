pub mod params;
pub mod report;

pub use params::{MalformedInput, Params};
pub use report::{compare, Comparison, Reader, Results, Writer};
