//! HTML document for the page route

/// Path the page loads its renderer script from
pub const APP_SCRIPT_PATH: &str = "/assets/app.js";

pub const PAGE_TITLE: &str = "Secure Web";

/// Text shown whenever content cannot be displayed
pub const DENIED_TEXT: &str = "Access denied";

/// Build the landing document
///
/// The body is only a placeholder; `app.js` fills `#app` from the content endpoint.
pub fn render_index(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
    <div id="app">Loading...</div>

    <noscript>{DENIED_TEXT}</noscript>

    <script src="{APP_SCRIPT_PATH}"></script>
</body>
</html>
"#
    )
}
