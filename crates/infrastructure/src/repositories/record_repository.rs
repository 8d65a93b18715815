use async_trait::async_trait;
use dnslite_application::ports::RecordRepository;
use dnslite_domain::{DnsRecord, DomainError, RecordFilter, RecordType};
use sqlx::SqlitePool;
use tracing::{error, instrument, warn};

type RecordRow = (i64, String, String, String, i64, String);

const COLUMNS: &str = "id, name, record_type, value, ttl, created_at";

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Option<DnsRecord> {
        let (id, name, record_type, value, ttl, created_at) = row;
        let record_type = match record_type.parse::<RecordType>() {
            Ok(rt) => rt,
            Err(e) => {
                warn!(record_id = id, error = %e, "Ignoring stored record with unknown type");
                return None;
            }
        };
        Some(DnsRecord {
            id: Some(id),
            name,
            record_type,
            value,
            ttl: u32::try_from(ttl).unwrap_or(0),
            created_at: Some(created_at),
        })
    }

    fn rows_to_records(rows: Vec<RecordRow>) -> Vec<DnsRecord> {
        rows.into_iter().filter_map(Self::row_to_record).collect()
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self))]
    async fn insert(&self, record: &DnsRecord) -> Result<DnsRecord, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "INSERT INTO dns_records (name, record_type, value, ttl, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {}",
            COLUMNS
        ))
        .bind(&record.name)
        .bind(record.record_type.as_str())
        .bind(&record.value)
        .bind(i64::from(record.ttl))
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert DNS record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Self::row_to_record(row).ok_or_else(|| {
            DomainError::DatabaseError("Inserted record could not be read back".to_string())
        })
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {} FROM dns_records WHERE name = ? AND record_type = ? ORDER BY id ASC",
            COLUMNS
        ))
        .bind(name)
        .bind(record_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query DNS records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::rows_to_records(rows))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {} FROM dns_records WHERE name = ? ORDER BY id ASC",
            COLUMNS
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query DNS records by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::rows_to_records(rows))
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &RecordFilter) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {} FROM dns_records
             WHERE (?1 IS NULL OR name = ?1) AND (?2 IS NULL OR record_type = ?2)
             ORDER BY id ASC",
            COLUMNS
        ))
        .bind(filter.name.as_deref())
        .bind(filter.record_type.map(|rt| rt.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list DNS records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::rows_to_records(rows))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<DnsRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(&format!(
            "SELECT {} FROM dns_records WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query DNS record by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.and_then(Self::row_to_record))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM dns_records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete DNS record");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}
