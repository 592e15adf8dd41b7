use crate::model::Category;
use egui_code_editor::Syntax;

/// Highlighting for markup snippets in the try-it editor.
pub fn html_syntax() -> Syntax {
    Syntax::new("html")
        .with_comment("<!--")
        .with_comment_multiline(["<!--", "-->"])
        .with_keywords([
            "html", "head", "body", "title", "meta", "link", "script", "style", "div", "span",
            "p", "a", "img", "ul", "ol", "li", "table", "tr", "td", "th", "form", "input",
            "label", "button", "h1", "h2", "h3", "h4", "h5", "h6", "nav", "section", "article",
            "header", "footer", "main", "aside",
        ])
        .with_types(["class", "id", "href", "src", "alt", "rel", "type", "name", "action"])
}

/// Highlighting for stylesheet snippets.
pub fn css_syntax() -> Syntax {
    Syntax::new("css")
        .with_comment("/*")
        .with_comment_multiline(["/*", "*/"])
        .with_keywords([
            "color", "background", "background-color", "margin", "padding", "border", "display",
            "position", "width", "height", "font-size", "font-weight", "font-style", "flex",
            "grid", "gap", "align-items", "justify-content", "opacity", "transition",
            "transform", "z-index", "overflow", "text-align", "border-radius",
        ])
        .with_types([
            "px", "em", "rem", "auto", "none", "block", "inline", "absolute", "relative",
            "fixed", "center", "solid",
        ])
}

/// Editor syntax for a category's snippets.
pub fn syntax_for(category: Category) -> Syntax {
    match category {
        Category::Css => css_syntax(),
        Category::Html | Category::Bootstrap => html_syntax(),
    }
}
