pub mod dns;
pub mod records;

pub use dns::{Resolution, ResolveQueryUseCase};
pub use records::{AddRecordUseCase, DeleteRecordUseCase, ListRecordsUseCase};
