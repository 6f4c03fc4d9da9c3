use crate::models::BorrowerRisk;
use crate::services::repository::BorrowerRiskRepository;
use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

/// Borrower risk repository held entirely in process memory.
///
/// One instance is created at startup and shared by every request; records
/// live until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryBorrowerRiskRepository {
    storage: DashMap<Uuid, BorrowerRisk>,
}

impl InMemoryBorrowerRiskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl BorrowerRiskRepository for InMemoryBorrowerRiskRepository {
    async fn add_or_update(&self, borrower_risk: BorrowerRisk) -> Result<()> {
        // Single shard-locked insert; never read-then-write.
        self.storage.insert(borrower_risk.borrower_id, borrower_risk);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<BorrowerRisk>> {
        Ok(self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }
}
