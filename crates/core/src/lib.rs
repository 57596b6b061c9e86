//! Domain logic for the OSAKA TV catalog service.
//!
//! Everything in this crate is pure: the catalog composition engine, admin
//! form state and validation, and upload preconditions. I/O lives in
//! `osaka-db` (records) and `osaka-storage` (image objects).

pub mod catalog;
pub mod error;
pub mod forms;
pub mod types;
pub mod upload;
