use crate::types::Notice;

use super::{empty_row, escape, message_form, page};

pub fn student_dashboard(email: &str, notices: &[Notice]) -> String {
    let rows = if notices.is_empty() {
        empty_row(3, "No notices yet.")
    } else {
        notices
            .iter()
            .map(|n| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&n.created_at.display()),
                    escape(&n.title),
                    escape(&n.message),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        "<p>Logged in as {email}</p>\n\
         <nav><a href=\"/student_complaint\">File a complaint</a> | \
         <a href=\"/student_feedback\">Give feedback</a> | \
         <a href=\"/logout\">Log out</a></nav>\n\
         <h2>Notices</h2>\n\
         <table>\n<tr><th>Date</th><th>Title</th><th>Message</th></tr>\n{rows}\n</table>",
        email = escape(email),
    );
    page("Student Dashboard", &body)
}

pub fn complaint_form() -> String {
    page(
        "File a Complaint",
        &message_form("/student_complaint", "Submit complaint", "/student_dashboard"),
    )
}

pub fn feedback_form() -> String {
    page(
        "Give Feedback",
        &message_form("/student_feedback", "Submit feedback", "/student_dashboard"),
    )
}
