mod resolve_query;

pub use resolve_query::{ClassifiedQuery, Resolution, ResolveQueryUseCase};
