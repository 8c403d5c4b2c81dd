pub mod form;

pub use form::{FieldErrors, IdQuery, StudentForm};
