use pulldown_cmark::{html, Event, Options, Parser};
use yew::{AttrValue, Html};

/// Markdown to HTML with raw HTML blocks shown as text.
pub fn markdown_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

pub fn render_markdown(text: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(format!(
        "<div class=\"markdown\">{}</div>",
        markdown_html(text)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_html_is_escaped() {
        let out = markdown_html("**жирный** <script>alert(1)</script>");
        assert!(out.contains("<strong>жирный</strong>"));
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains("<script>"));
    }
}
