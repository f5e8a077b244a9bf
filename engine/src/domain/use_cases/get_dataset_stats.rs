//! GetDatasetStats use case
//! Aggregates backing the stats view

use crate::domain::ports::RecordStore;
use crate::domain::{DatasetStatsResponse, DomainError};
use async_trait::async_trait;
use std::sync::Arc;

/// Use case for computing the chart aggregates
#[async_trait]
pub trait GetDatasetStats: Send + Sync {
    async fn execute(&self) -> Result<DatasetStatsResponse, DomainError>;
}

/// Implementation of GetDatasetStats use case
pub struct GetDatasetStatsUseCase {
    store: Arc<dyn RecordStore>,
}

impl GetDatasetStatsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GetDatasetStats for GetDatasetStatsUseCase {
    async fn execute(&self) -> Result<DatasetStatsResponse, DomainError> {
        let table = self.store.load_table().await?;

        Ok(DatasetStatsResponse {
            course_averages: table.avg_marks_by_course(),
            grade_counts: table.grade_distribution(),
        })
    }
}
