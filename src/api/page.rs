use axum::response::Html;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<hr>
{message}
</body>
</html>
"#;

/// Renders the static page shown at the end of a login attempt.
pub fn render(title: &str, message: &str) -> Html<String> {
    Html(
        PAGE_TEMPLATE
            .replace("{title}", &escape(title))
            .replace("{message}", &escape(message)),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
