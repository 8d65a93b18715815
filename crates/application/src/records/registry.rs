use dnslite_domain::{DnsRecord, RecordType};
use hickory_proto::rr::{Name, Record};
use std::collections::HashMap;
use tracing::warn;

use super::address::{AHandler, AaaaHandler};
use super::caa::CaaHandler;
use super::cname::CnameHandler;
use super::handler::RecordHandler;
use super::txt::TxtHandler;

/// Immutable map from record type to its handler. Built once at startup.
pub struct TypeRegistry {
    handlers: HashMap<RecordType, Box<dyn RecordHandler>>,
}

impl TypeRegistry {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Handlers for every administrable type.
    pub fn standard() -> Self {
        Self::empty()
            .with(AHandler)
            .with(AaaaHandler)
            .with(CnameHandler)
            .with(TxtHandler)
            .with(CaaHandler)
    }

    pub fn with(mut self, handler: impl RecordHandler + 'static) -> Self {
        self.handlers
            .insert(handler.record_type(), Box::new(handler));
        self
    }

    /// Case-insensitive lookup by type name. `None` means the type cannot be
    /// administered: unknown, or answered only from configuration (NS).
    pub fn lookup(&self, type_name: &str) -> Option<&dyn RecordHandler> {
        let record_type = type_name
            .trim()
            .parse::<RecordType>()
            .ok()
            .filter(RecordType::is_administrable)?;
        self.handler(record_type)
    }

    pub fn handler(&self, record_type: RecordType) -> Option<&dyn RecordHandler> {
        self.handlers.get(&record_type).map(|h| h.as_ref())
    }

    /// Renders records in the order given. Rows that fail to render are skipped.
    pub fn render(&self, name: &Name, records: &[DnsRecord]) -> Vec<Record> {
        records
            .iter()
            .filter_map(|record| {
                let Some(handler) = self.handler(record.record_type) else {
                    warn!(record_type = %record.record_type, id = ?record.id, "No handler for stored record");
                    return None;
                };
                match handler.render(name, record) {
                    Ok(rr) => Some(rr),
                    Err(e) => {
                        warn!(error = %e, id = ?record.id, "Skipping unrenderable record");
                        None
                    }
                }
            })
            .collect()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
