mod batch;
pub mod models;
pub mod months;
mod progress;

pub use batch::{MatchBatch, SkipStage, SkippedGame};
pub use models::*;
pub use months::{ArchiveMonth, MonthIterator};
pub use progress::FetchProgress;
