use dnslite_application::use_cases::{AddRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase};
use std::sync::Arc;

use crate::envelope::Envelopes;

#[derive(Clone)]
pub struct AppState {
    pub add_record: Arc<AddRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
    pub envelopes: Arc<Envelopes>,
}
