pub mod size_stats;
pub mod util;

pub use size_stats::*;
pub use util::*;
