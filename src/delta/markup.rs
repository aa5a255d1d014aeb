//! Markup rendering for Delta documents.
//!
//! Produces the rendered-markup snapshot that accompanies every document
//! snapshot in change notifications. This mirrors the markup the live editor
//! itself produces for the formats the bridge deals in: paragraphs on
//! newlines, inline bold/italic/underline/strike/link, image and video
//! embeds.

use crate::delta::{Delta, DeltaOp, Embed, Insert};

/// Renders a document to HTML markup.
///
/// An empty document renders to the empty string. Attribute values that are
/// `false` or `null` are treated as "format absent".
pub fn render(delta: &Delta) -> String {
    let mut out = String::new();
    let mut paragraph = String::new();

    for op in &delta.ops {
        match &op.insert {
            Insert::Text(text) => {
                let mut segments = text.split('\n');
                if let Some(first) = segments.next() {
                    push_text(&mut paragraph, first, op);
                }
                for segment in segments {
                    close_paragraph(&mut out, &mut paragraph);
                    push_text(&mut paragraph, segment, op);
                }
            }
            Insert::Embed(embed) => paragraph.push_str(&render_embed(embed)),
        }
    }

    if !paragraph.is_empty() {
        close_paragraph(&mut out, &mut paragraph);
    }
    out
}

fn close_paragraph(out: &mut String, paragraph: &mut String) {
    out.push_str("<p>");
    if paragraph.is_empty() {
        out.push_str("<br>");
    } else {
        out.push_str(paragraph);
    }
    out.push_str("</p>");
    paragraph.clear();
}

fn push_text(paragraph: &mut String, segment: &str, op: &DeltaOp) {
    if segment.is_empty() {
        return;
    }
    let mut html = escape(segment);
    if let Some(attributes) = &op.attributes {
        if is_set(attributes.get("bold")) {
            html = format!("<strong>{html}</strong>");
        }
        if is_set(attributes.get("italic")) {
            html = format!("<em>{html}</em>");
        }
        if is_set(attributes.get("underline")) {
            html = format!("<u>{html}</u>");
        }
        if is_set(attributes.get("strike")) {
            html = format!("<s>{html}</s>");
        }
        if let Some(serde_json::Value::String(href)) = attributes.get("link") {
            html = format!(r#"<a href="{}">{html}</a>"#, escape(href));
        }
    }
    paragraph.push_str(&html);
}

fn render_embed(embed: &Embed) -> String {
    match embed {
        Embed::Image(url) => format!(r#"<img src="{}">"#, escape(url)),
        Embed::Video(url) => format!(
            r#"<iframe class="ql-video" src="{}" frameborder="0" allowfullscreen="true"></iframe>"#,
            escape(url)
        ),
    }
}

fn is_set(value: Option<&serde_json::Value>) -> bool {
    !matches!(
        value,
        None | Some(serde_json::Value::Bool(false)) | Some(serde_json::Value::Null)
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::DeltaOp;

    #[test]
    fn test_empty_document_renders_empty() {
        assert_eq!(render(&Delta::new()), "");
    }

    #[test]
    fn test_plain_and_bold_text() {
        let delta = Delta::new()
            .with_op(DeltaOp::text("hello "))
            .with_op(DeltaOp::text("world").with_attribute("bold", true));
        assert_eq!(render(&delta), "<p>hello <strong>world</strong></p>");
    }

    #[test]
    fn test_newlines_split_paragraphs() {
        let delta = Delta::new().with_op(DeltaOp::text("one\ntwo\n"));
        assert_eq!(render(&delta), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_blank_line_renders_br() {
        let delta = Delta::new().with_op(DeltaOp::text("a\n\nb\n"));
        assert_eq!(render(&delta), "<p>a</p><p><br></p><p>b</p>");
    }

    #[test]
    fn test_link_wraps_other_formats() {
        let delta = Delta::new().with_op(
            DeltaOp::text("here")
                .with_attribute("bold", true)
                .with_attribute("link", "https://example.com"),
        );
        assert_eq!(
            render(&delta),
            r#"<p><a href="https://example.com"><strong>here</strong></a></p>"#
        );
    }

    #[test]
    fn test_false_attribute_is_ignored() {
        let delta = Delta::new().with_op(DeltaOp::text("x").with_attribute("bold", false));
        assert_eq!(render(&delta), "<p>x</p>");
    }

    #[test]
    fn test_embeds() {
        let delta = Delta::new()
            .with_op(DeltaOp::image("https://example.com/a.png"))
            .with_op(DeltaOp::video("https://example.com/v"));
        let html = render(&delta);
        assert!(html.contains(r#"<img src="https://example.com/a.png">"#));
        assert!(html.contains(r#"class="ql-video""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let delta = Delta::new().with_op(DeltaOp::text("<b> & \"q\""));
        assert_eq!(render(&delta), "<p>&lt;b&gt; &amp; &quot;q&quot;</p>");
    }
}
