use yew::prelude::*;

/// Render bot text written in a small markdown subset: headings, fenced code,
/// bullet lists, bold, italic and inline code. All text is HTML-escaped.
pub fn render_markdown(content: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(markdown_to_html(content)))
}

pub fn markdown_to_html(content: &str) -> String {
    let mut html_output = String::new();
    let mut in_code_block = false;
    let mut in_list = false;
    let mut code_content = String::new();

    for line in content.lines() {
        if line.trim_start().starts_with("```") {
            if in_code_block {
                push_code_block(&mut html_output, &code_content);
                code_content.clear();
                in_code_block = false;
            } else {
                close_list(&mut html_output, &mut in_list);
                in_code_block = true;
            }
            continue;
        }

        if in_code_block {
            if !code_content.is_empty() {
                code_content.push('\n');
            }
            code_content.push_str(line);
            continue;
        }

        let trimmed = line.trim_start();
        if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            if !in_list {
                html_output.push_str("<ul>");
                in_list = true;
            }
            html_output.push_str("<li>");
            html_output.push_str(&render_inline(item));
            html_output.push_str("</li>");
            continue;
        }
        close_list(&mut html_output, &mut in_list);

        if let Some(rest) = trimmed.strip_prefix("### ") {
            html_output.push_str(&format!("<h3>{}</h3>", html_escape(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("## ") {
            html_output.push_str(&format!("<h2>{}</h2>", html_escape(rest)));
        } else if let Some(rest) = trimmed.strip_prefix("# ") {
            html_output.push_str(&format!("<h1>{}</h1>", html_escape(rest)));
        } else if trimmed.is_empty() {
            if !html_output.is_empty()
                && !html_output.ends_with("</p>")
                && !html_output.ends_with("</pre>")
                && !html_output.ends_with("<br>")
            {
                html_output.push_str("<br>");
            }
        } else {
            html_output.push_str("<p>");
            html_output.push_str(&render_inline(line));
            html_output.push_str("</p>");
        }
    }

    close_list(&mut html_output, &mut in_list);

    // Unclosed fence still renders its content
    if in_code_block {
        push_code_block(&mut html_output, &code_content);
    }

    html_output
}

fn push_code_block(out: &mut String, code: &str) {
    out.push_str("<pre><code>");
    out.push_str(&html_escape(code));
    out.push_str("</code></pre>");
}

fn close_list(out: &mut String, in_list: &mut bool) {
    if *in_list {
        out.push_str("</ul>");
        *in_list = false;
    }
}

/// Code spans are split out first and emitted verbatim (escaped only), so
/// emphasis markers inside backticks stay literal.
fn render_inline(text: &str) -> String {
    let parts: Vec<&str> = text.split('`').collect();
    // An even count means the last backtick is unpaired
    let paired = if parts.len() % 2 == 1 {
        parts.len()
    } else {
        parts.len() - 1
    };

    let mut result = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i >= paired {
            result.push('`');
            result.push_str(&render_emphasis(part));
        } else if i % 2 == 1 {
            result.push_str("<code>");
            result.push_str(&html_escape(part));
            result.push_str("</code>");
        } else {
            result.push_str(&render_emphasis(part));
        }
    }

    result
}

fn render_emphasis(text: &str) -> String {
    let escaped = html_escape(text);
    let with_bold = replace_pattern(&escaped, "**", "<strong>", "</strong>");
    replace_pattern(&with_bold, "*", "<em>", "</em>")
}

fn replace_pattern(text: &str, delimiter: &str, open_tag: &str, close_tag: &str) -> String {
    let parts: Vec<&str> = text.split(delimiter).collect();
    if parts.len() < 3 {
        return text.to_string();
    }

    // An odd number of delimiters leaves the last one unpaired
    let paired = if parts.len() % 2 == 1 {
        parts.len()
    } else {
        parts.len() - 1
    };

    let mut result = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i == 0 {
            result.push_str(part);
        } else if i >= paired {
            result.push_str(delimiter);
            result.push_str(part);
        } else if i % 2 == 1 {
            result.push_str(open_tag);
            result.push_str(part);
        } else {
            result.push_str(close_tag);
            result.push_str(part);
        }
    }

    result
}

pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(markdown_to_html("Hello there"), "<p>Hello there</p>");
    }

    #[test]
    fn test_escapes_html() {
        assert_eq!(
            markdown_to_html("<script>alert('x')</script>"),
            "<p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_inline_styles() {
        assert_eq!(
            markdown_to_html("The **Nexon EV** has *great* range, see `specs`"),
            "<p>The <strong>Nexon EV</strong> has <em>great</em> range, see <code>specs</code></p>"
        );
    }

    #[test]
    fn test_asterisks_inside_code_stay_literal() {
        assert_eq!(
            markdown_to_html("Run `SELECT * FROM cars WHERE a*b > 1` now"),
            "<p>Run <code>SELECT * FROM cars WHERE a*b &gt; 1</code> now</p>"
        );
        assert_eq!(
            markdown_to_html("Use `count(*)` and `sum(*)` for **totals**"),
            "<p>Use <code>count(*)</code> and <code>sum(*)</code> for <strong>totals</strong></p>"
        );
    }

    #[test]
    fn test_unpaired_backtick_kept() {
        assert_eq!(
            markdown_to_html("a `b` c ` *d*"),
            "<p>a <code>b</code> c ` <em>d</em></p>"
        );
    }

    #[test]
    fn test_unpaired_delimiter_kept() {
        assert_eq!(markdown_to_html("5 * 3 = 15"), "<p>5 * 3 = 15</p>");
        assert_eq!(markdown_to_html("a *b* c *d"), "<p>a <em>b</em> c *d</p>");
    }

    #[test]
    fn test_headings_and_lists() {
        let html = markdown_to_html("## Models\n- Nexon\n- Harrier\n\nDone");
        assert_eq!(
            html,
            "<h2>Models</h2><ul><li>Nexon</li><li>Harrier</li></ul><br><p>Done</p>"
        );
    }

    #[test]
    fn test_code_block_escaped() {
        let html = markdown_to_html("```\nlet x = a < b;\n```");
        assert_eq!(html, "<pre><code>let x = a &lt; b;</code></pre>");
    }

    #[test]
    fn test_unclosed_code_block() {
        let html = markdown_to_html("```\nSELECT *");
        assert_eq!(html, "<pre><code>SELECT *</code></pre>");
    }
}
