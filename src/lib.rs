pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod types;
pub mod views;

pub use config::Config;
pub use db::{NewStudent, Student, StudentsStorage};
pub use error::RosterError;
