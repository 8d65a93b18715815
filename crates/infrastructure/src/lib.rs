//! dnslite infrastructure: storage, upstream transport and DNS request handling
pub mod database;
pub mod dns;
pub mod repositories;
