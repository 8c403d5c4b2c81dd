//! Server-rendered HTML pages.
//!
//! Every value that came from a user or from storage goes through
//! [`html::escape`] before it is written into markup.

pub mod html;
pub mod students;

pub use html::error_page;
pub use students::{FormPage, list_page, student_form_page};
