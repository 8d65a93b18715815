#![allow(dead_code)]
mod dns_messages;
mod mock_repositories;

pub use dns_messages::*;
pub use mock_repositories::*;
