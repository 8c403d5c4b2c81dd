use std::fmt::Write;

use super::html::{escape, layout};
use crate::db::models::Student;
use crate::types::form::{FieldErrors, StudentForm};

/// Everything needed to render the add or edit form.
pub struct FormPage<'a> {
    pub heading: &'a str,
    pub action: &'a str,
    pub submit_label: &'a str,
    pub values: &'a StudentForm,
    pub errors: &'a FieldErrors,
}

impl<'a> FormPage<'a> {
    pub fn add(values: &'a StudentForm, errors: &'a FieldErrors) -> Self {
        Self {
            heading: "Add Student",
            action: "/add",
            submit_label: "Add Student",
            values,
            errors,
        }
    }

    pub fn edit(values: &'a StudentForm, errors: &'a FieldErrors) -> Self {
        Self {
            heading: "Edit Student",
            action: "/edit",
            submit_label: "Update Student",
            values,
            errors,
        }
    }
}

/// The index page: an empty add form above the table of all students.
pub fn list_page(students: &[Student]) -> String {
    let empty = StudentForm::default();
    let no_errors = FieldErrors::default();
    let mut body = form_section(&FormPage::add(&empty, &no_errors));

    body.push_str(
        "<section class=\"students-list\">\n<h2>Students</h2>\n<table>\n<thead>\n\
         <tr><th>ID</th><th>Name</th><th>Age</th><th>Grade</th><th>Actions</th></tr>\n\
         </thead>\n<tbody>\n",
    );
    for s in students {
        let _ = writeln!(
            body,
            "<tr><td>{id}</td><td>{name}</td><td>{age}</td><td>{grade}</td><td>\
             <a href=\"/edit?id={id}\" class=\"btn btn-update\">Edit</a> \
             <a href=\"/delete?id={id}\" class=\"btn btn-delete\" \
             onclick=\"return confirm('Delete this student?')\">Delete</a></td></tr>",
            id = s.id,
            name = escape(&s.name),
            age = s.age,
            grade = escape(&s.grade),
        );
    }
    if students.is_empty() {
        body.push_str("<tr><td colspan=\"5\">No students yet.</td></tr>\n");
    }
    body.push_str("</tbody>\n</table>\n</section>");

    layout("Students", &body)
}

pub fn student_form_page(page: &FormPage<'_>) -> String {
    layout(page.heading, &form_section(page))
}

fn form_section(page: &FormPage<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<section class=\"form-section\">\n<h2>{}</h2>",
        escape(page.heading)
    );
    if !page.errors.is_empty() {
        out.push_str("<ul class=\"errors\">\n");
        for e in page.errors.iter() {
            let _ = writeln!(out, "<li>{} {}</li>", e.field, e.message);
        }
        out.push_str("</ul>\n");
    }
    let _ = writeln!(out, "<form method=\"post\" action=\"{}\">", page.action);
    if let Some(id) = page.values.id.as_deref() {
        let _ = writeln!(
            out,
            "<input type=\"hidden\" id=\"id\" name=\"id\" value=\"{}\">",
            escape(id)
        );
    }
    let values = page.values;
    input(&mut out, page.errors, "name", "Name", "text", values.name.as_deref());
    input(&mut out, page.errors, "age", "Age", "number", values.age.as_deref());
    input(&mut out, page.errors, "grade", "Grade", "text", values.grade.as_deref());
    let _ = writeln!(
        out,
        "<button type=\"submit\">{}</button>\n</form>\n</section>",
        escape(page.submit_label)
    );
    out
}

fn input(
    out: &mut String,
    errors: &FieldErrors,
    field: &str,
    label: &str,
    kind: &str,
    value: Option<&str>,
) {
    let value = value.unwrap_or_default();

    let _ = writeln!(
        out,
        "<label for=\"{field}\">{label}:</label>\n\
         <input type=\"{kind}\" id=\"{field}\" name=\"{field}\" value=\"{value}\" required>",
        value = escape(value),
    );
    if let Some(message) = errors.get(field) {
        let _ = writeln!(out, "<span class=\"field-error\">{label} {message}</span>");
    }
}
