//! HTML rendering of structured content
//!
//! Produces the markup the editor would show for the content, suitable for
//! writing out as a standalone `.html` export.

use crate::{Attributes, ListKind, StructuredContent};

/// Render content to an HTML fragment
pub fn render_html(content: &StructuredContent) -> String {
    let mut writer = HtmlWriter::default();

    for op in &content.ops {
        let mut segments = op.insert.split('\n').peekable();
        while let Some(segment) = segments.next() {
            if !segment.is_empty() {
                writer.push_inline(segment, &op.attributes);
            }
            // Every segment except the last was terminated by a newline.
            if segments.peek().is_some() {
                writer.finish_block(&op.attributes);
            }
        }
    }

    writer.finish()
}

#[derive(Default)]
struct HtmlWriter {
    out: String,
    line: String,
    open_list: Option<ListKind>,
}

impl HtmlWriter {
    fn push_inline(&mut self, text: &str, attrs: &Attributes) {
        let mut html = escape(text);
        if attrs.strike {
            html = format!("<s>{}</s>", html);
        }
        if attrs.underline {
            html = format!("<u>{}</u>", html);
        }
        if attrs.italic {
            html = format!("<em>{}</em>", html);
        }
        if attrs.bold {
            html = format!("<strong>{}</strong>", html);
        }
        if let Some(href) = &attrs.link {
            html = format!("<a href=\"{}\">{}</a>", escape(href), html);
        }
        self.line.push_str(&html);
    }

    fn finish_block(&mut self, attrs: &Attributes) {
        if attrs.list != self.open_list {
            self.close_list();
            if let Some(kind) = attrs.list {
                self.out.push_str(list_tag(kind).0);
                self.open_list = Some(kind);
            }
        }

        let tag = match (attrs.list, attrs.header) {
            (Some(_), _) => "li".to_string(),
            (None, Some(level)) => format!("h{}", level),
            (None, None) => "p".to_string(),
        };
        let style = attrs
            .align
            .map(|align| format!(" style=\"text-align: {}\"", align.as_css()))
            .unwrap_or_default();
        let body = if self.line.is_empty() {
            "<br>".to_string()
        } else {
            std::mem::take(&mut self.line)
        };

        self.out.push_str(&format!("<{tag}{style}>{body}</{tag}>"));
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.open_list.take() {
            self.out.push_str(list_tag(kind).1);
        }
    }

    fn finish(mut self) -> String {
        // Trailing text without a terminating newline still forms a paragraph.
        if !self.line.is_empty() {
            self.finish_block(&Attributes::default());
        }
        self.close_list();
        self.out
    }
}

fn list_tag(kind: ListKind) -> (&'static str, &'static str) {
    match kind {
        ListKind::Ordered => ("<ol>", "</ol>"),
        ListKind::Bullet => ("<ul>", "</ul>"),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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
