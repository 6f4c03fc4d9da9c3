pub mod memory_repository;
pub mod metrics;
pub mod repository;

pub use memory_repository::InMemoryBorrowerRiskRepository;
pub use self::metrics::{get_metrics, init_metrics};
pub use repository::BorrowerRiskRepository;
