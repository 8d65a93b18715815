use super::Repositories;
use dnslite_api::{AppState, Envelopes};
use dnslite_application::records::TypeRegistry;
use dnslite_application::use_cases::{AddRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase};
use dnslite_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub add_record: Arc<AddRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, registry: Arc<TypeRegistry>) -> Self {
        Self {
            add_record: Arc::new(AddRecordUseCase::new(
                repos.records.clone(),
                registry,
                config.dns.default_ttl,
            )),
            list_records: Arc::new(ListRecordsUseCase::new(repos.records.clone())),
            delete_record: Arc::new(DeleteRecordUseCase::new(repos.records.clone())),
        }
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            add_record: self.add_record,
            list_records: self.list_records,
            delete_record: self.delete_record,
            envelopes: Arc::new(Envelopes::new()),
        }
    }
}
