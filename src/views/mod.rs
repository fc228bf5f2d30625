//! HTML pages. Every function here is a pure `data -> markup` view.

mod admin;
mod public;
mod student;

pub use admin::{add_notice, admin_dashboard, complaints, feedback, notices_admin};
pub use public::{home, login, student_register};
pub use student::{complaint_form, feedback_form, student_dashboard};

/// Escapes text for use in element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// A single-textarea form posting back to `action`.
fn message_form(action: &str, submit: &str, back: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <textarea name=\"message\" rows=\"6\" cols=\"60\"></textarea>\n\
         <button type=\"submit\">{submit}</button>\n\
         </form>\n\
         <p><a href=\"{back}\">Back</a></p>"
    )
}

fn empty_row(columns: usize, text: &str) -> String {
    format!("<tr><td colspan=\"{columns}\">{text}</td></tr>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_page_escapes_title() {
        let html = page("<x>", "<p>body</p>");
        assert!(html.contains("<title>&lt;x&gt;</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}
