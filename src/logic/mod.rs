pub mod factors;
pub mod hints;
pub mod predictor;
pub mod ranker;

pub use factors::Factor;
pub use predictor::{predict, YieldPredictor};
pub use ranker::{rank_all, recommend, DEFAULT_TOP_N};
