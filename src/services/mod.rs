pub mod ingestion;
pub mod processing;
pub mod storage;

pub use ingestion::IngestionService;
pub use processing::{ProcessingService, ProcessingSummary};
pub use storage::StorageService;
