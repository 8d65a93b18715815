use dnslite_application::ports::RecordRepository;
use dnslite_infrastructure::repositories::SqliteRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub records: Arc<dyn RecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            records: Arc::new(SqliteRecordRepository::new(pool)),
        }
    }
}
