use axum::http::StatusCode;

const STYLE: &str = r#"
body { font-family: sans-serif; background: #f4f6f8; margin: 0; }
.container { max-width: 860px; margin: 0 auto; padding: 1.5rem; }
header h1 { margin-bottom: 0.25rem; }
section { background: #fff; border-radius: 6px; padding: 1rem 1.25rem; margin: 1rem 0; }
label { display: block; margin-top: 0.6rem; }
input { padding: 0.35rem; width: 100%; max-width: 320px; }
button { margin-top: 0.9rem; padding: 0.4rem 1rem; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.45rem; border-bottom: 1px solid #dde2e6; }
.btn { padding: 0.2rem 0.6rem; border-radius: 4px; color: #fff; text-decoration: none; }
.btn-update { background: #2f7bd8; }
.btn-delete { background: #d8442f; }
.field-error { color: #b3261e; font-size: 0.9rem; }
.errors { color: #b3261e; }
"#;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in the shared page chrome. `title` is escaped, `body` is not.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
<header>
<h1>Student Records</h1>
<p>Add, edit, delete and list students</p>
</header>
{body}
<footer><p><a href="/">Back to the list</a></p></footer>
</div>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<section class=\"errors\">\n<h2>{} {}</h2>\n<p>{}</p>\n</section>",
        status.as_u16(),
        escape(reason),
        escape(message)
    );
    layout(reason, &body)
}
