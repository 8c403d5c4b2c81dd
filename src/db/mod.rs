//! Database module: the student row model, its schema and the SQLite repository.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool setup and the `StudentsStorage` repository

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{NewStudent, Student};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, StudentsStorage, connect};
