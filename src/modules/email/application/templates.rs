//! HTML bodies for outgoing notifications.

use uuid::Uuid;

/// Escapes text for safe interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

pub fn enrollment_confirmation(
    student_name: &str,
    course_title: &str,
    course_id: Uuid,
    client_url: &str,
) -> (String, String) {
    let subject = format!("You're enrolled in {course_title}");
    let link = format!("{}/course/{}", client_url.trim_end_matches('/'), course_id);
    let body = format!(
        "<p>Hi {name},</p>\
         <p>You now have full access to <strong>{title}</strong>.</p>\
         <p><a href=\"{link}\">Start learning</a></p>\
         <p>Happy learning!</p>",
        name = escape_html(student_name),
        title = escape_html(course_title),
        link = escape_html(&link),
    );
    (subject, body)
}

/// Wraps an admin's plain-text reply. Line breaks are kept.
pub fn contact_reply(recipient_name: &str, reply_body: &str) -> String {
    let paragraphs = escape_html(reply_body).replace('\n', "<br>");
    format!(
        "<p>Hi {name},</p><p>{paragraphs}</p><p>Thanks for reaching out.</p>",
        name = escape_html(recipient_name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn enrollment_email_links_to_course() {
        let id = Uuid::new_v4();
        let (subject, body) =
            enrollment_confirmation("Aisha", "Rust <Basics>", id, "http://localhost:5173/");

        assert_eq!(subject, "You're enrolled in Rust <Basics>");
        assert!(body.contains(&format!("http://localhost:5173/course/{id}")));
        assert!(body.contains("Rust &lt;Basics&gt;"));
    }

    #[test]
    fn contact_reply_keeps_line_breaks() {
        let body = contact_reply("Sam", "Line one\nLine <two>");
        assert!(body.contains("Line one<br>Line &lt;two&gt;"));
    }
}
