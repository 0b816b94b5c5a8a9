//! Server-rendered views.
//!
//! Each page is a plain struct holding its model and rendering itself to
//! HTML. The resolved view name is emitted as a `data-view` attribute on
//! the document body, which is what the controller tests assert against.

mod pages;

pub use pages::{ErrorPage, IndexPage, SignupPage, VIEW_INDEX, VIEW_SIGNUP};

/// Escape a value for interpolation into HTML text or attributes.
pub(crate) fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap page body markup in the shared document shell.
pub(crate) fn layout(view: &str, title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body data-view=\"{view}\">\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape(title),
        view = view,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_handles_markup_characters() {
        assert_eq!(
            escape(r#"<b>"O'Brien & sons"</b>"#),
            "&lt;b&gt;&quot;O&#39;Brien &amp; sons&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_layout_tags_the_body_with_the_view_name() {
        let html = layout("index", "Home", "<p>hi</p>\n");
        assert!(html.contains("<body data-view=\"index\">"));
        assert!(html.contains("<title>Home</title>"));
    }
}
