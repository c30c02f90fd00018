//! Database module: the `links` table and its storage handle.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool setup and the `LinksStorage` queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::Link;
pub use sqlite::{LinksStorage, SqlitePool, connect, initialize};
