//! HTML fragment output for the web client.

use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

use super::{ChipKind, DisplayUnit, RunStyle};

/// Class on the wrapping element.
pub const CONTENT_CLASS: &str = "message-content";

/// Renders display units as an escaped HTML fragment wrapped in a single
/// `div`. All message text goes through `html-escape`.
pub fn to_html(units: &[DisplayUnit]) -> String {
    let mut html = format!("<div class=\"{CONTENT_CLASS}\">");
    for unit in units {
        write_unit(&mut html, unit);
    }
    html.push_str("</div>");
    html
}

fn write_unit(html: &mut String, unit: &DisplayUnit) {
    match unit {
        DisplayUnit::Run { style, text } => {
            let (open, close) = match style {
                RunStyle::Plain => ("", ""),
                RunStyle::Strong => ("<strong>", "</strong>"),
                RunStyle::Emphasis => ("<em>", "</em>"),
                RunStyle::Code => ("<code class=\"inline-code\">", "</code>"),
            };
            html.push_str(open);
            encode_text_to_string(text, html);
            html.push_str(close);
        }
        DisplayUnit::LineBreak => html.push_str("<br>"),
        DisplayUnit::CodeBlock { language, code } => {
            html.push_str("<pre class=\"code-block\">");
            match language {
                Some(lang) => {
                    html.push_str("<div class=\"code-language\">");
                    encode_text_to_string(lang, html);
                    html.push_str("</div><code class=\"language-");
                    encode_double_quoted_attribute_to_string(lang, html);
                    html.push_str("\">");
                }
                None => html.push_str("<code>"),
            }
            encode_text_to_string(code, html);
            html.push_str("</code></pre>");
        }
        DisplayUnit::Chip { kind, label } => {
            let class = match kind {
                ChipKind::Mention => "mention",
                ChipKind::Channel => "channel",
            };
            html.push_str("<span class=\"");
            html.push_str(class);
            html.push_str("\">");
            encode_text_to_string(label, html);
            html.push_str("</span>");
        }
        DisplayUnit::Link { href, new_context } => {
            html.push_str("<a href=\"");
            encode_double_quoted_attribute_to_string(href, html);
            html.push('"');
            if *new_context {
                html.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
            }
            html.push('>');
            encode_text_to_string(href, html);
            html.push_str("</a>");
        }
    }
}
