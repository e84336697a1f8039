pub mod ranking;

pub use ranking::{build_ranking, RankedSeries};
