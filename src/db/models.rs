use sqlx::FromRow;

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub grade: String,
}

/// Validated field values for inserting or fully replacing a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub grade: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, age: i64, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            grade: grade.into(),
        }
    }

    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            grade: self.grade,
        }
    }
}
