mod add_record;
mod delete_record;
mod list_records;

pub use add_record::AddRecordUseCase;
pub use delete_record::DeleteRecordUseCase;
pub use list_records::ListRecordsUseCase;
