//! Turns an editor snippet into a self-contained HTML document for the
//! preview pane. Pure text transformation, no state.

use crate::model::Category;

const BOOTSTRAP_CSS_CDN: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS_CDN: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js";

/// A snippet that already is a full document is used as-is.
fn is_full_document(source: &str) -> bool {
    let lower = source.trim().to_ascii_lowercase();
    lower.contains("<!doctype") || lower.contains("<html") || lower.contains("<body")
}

/// Wrap `source` into a complete document. Bootstrap snippets get the CDN
/// stylesheet and bundle, CSS snippets become a `<style>` block over a fixed
/// demo body, anything else is dropped into a minimal document.
pub fn build_preview_document(category: Category, source: &str) -> String {
    if is_full_document(source) {
        return source.to_owned();
    }

    match category {
        Category::Bootstrap => format!(
            "<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\"/>\n  \
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>\n  \
             <link href=\"{BOOTSTRAP_CSS_CDN}\" rel=\"stylesheet\">\n</head>\n\
             <body class=\"p-3 bg-light\">\n{source}\n\
             <script src=\"{BOOTSTRAP_JS_CDN}\"></script>\n</body>\n</html>\n"
        ),
        Category::Css => format!(
            "<!doctype html>\n<html>\n<head>\n  <meta charset=\"utf-8\"/>\n  \
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/>\n  \
             <style>\n{source}\n  </style>\n</head>\n<body>\n  \
             <h3>CSS Demo</h3>\n  <p class=\"demo\">Sample paragraph</p>\n\
             </body>\n</html>\n"
        ),
        Category::Html => format!(
            "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"/>\
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\"/></head>\n\
             <body>\n{source}\n</body>\n</html>\n"
        ),
    }
}
