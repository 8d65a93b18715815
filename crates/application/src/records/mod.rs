mod address;
mod caa;
mod cname;
mod handler;
mod registry;
mod txt;
mod type_map;

pub use address::{AHandler, AaaaHandler};
pub use caa::{CaaHandler, CAA_TAG, MAX_CAA_VALUE_LEN};
pub use cname::CnameHandler;
pub use handler::RecordHandler;
pub use registry::TypeRegistry;
pub use txt::{TxtHandler, MAX_SEGMENT_LEN};
pub use type_map::RecordTypeMapper;
