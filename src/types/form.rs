use serde::Deserialize;
use std::fmt;

use crate::db::models::{NewStudent, Student};

/// Raw add/edit form body. Every field is optional so a missing field is a
/// validation failure rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

/// `?id=` query string of the edit and delete pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Collected per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn single(field: &'static str, message: &'static str) -> Self {
        Self(vec![FieldError { field, message }])
    }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Parse a student id from a query, path or hidden form field.
pub fn parse_id(raw: Option<&str>) -> Result<i64, FieldErrors> {
    match raw.map(str::trim) {
        None | Some("") => Err(FieldErrors::single("id", "is required")),
        Some(s) => s
            .parse::<i64>()
            .map_err(|_| FieldErrors::single("id", "must be a whole number")),
    }
}

impl IdQuery {
    pub fn id(&self) -> Result<i64, FieldErrors> {
        parse_id(self.id.as_deref())
    }
}

impl StudentForm {
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: Some(student.id.to_string()),
            name: Some(student.name.clone()),
            age: Some(student.age.to_string()),
            grade: Some(student.grade.clone()),
        }
    }

    /// Check required fields server-side; all failures are reported at once.
    pub fn validate(&self) -> Result<NewStudent, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = required_text(self.name.as_deref());
        if name.is_none() {
            errors.push("name", "is required");
        }

        let age = match required_text(self.age.as_deref()) {
            None => {
                errors.push("age", "is required");
                None
            }
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(age) => Some(age),
                Err(_) => {
                    errors.push("age", "must be a whole number");
                    None
                }
            },
        };

        let grade = required_text(self.grade.as_deref());
        if grade.is_none() {
            errors.push("grade", "is required");
        }

        match (name, age, grade) {
            (Some(name), Some(age), Some(grade)) if errors.is_empty() => {
                Ok(NewStudent::new(name, age, grade))
            }
            _ => Err(errors),
        }
    }
}

/// Blank means missing; a present value is kept exactly as submitted.
fn required_text(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}
