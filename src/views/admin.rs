use crate::types::{Complaint, Feedback, Notice};

use super::{empty_row, escape, page};

pub fn admin_dashboard(email: &str) -> String {
    let body = format!(
        "<p>Logged in as {email}</p>\n\
         <ul>\n\
         <li><a href=\"/add_notice\">Add notice</a></li>\n\
         <li><a href=\"/view_notices_admin\">Manage notices</a></li>\n\
         <li><a href=\"/view_complaints\">Complaints</a></li>\n\
         <li><a href=\"/view_feedback\">Feedback</a></li>\n\
         <li><a href=\"/logout\">Log out</a></li>\n\
         </ul>",
        email = escape(email),
    );
    page("Admin Dashboard", &body)
}

pub fn add_notice() -> String {
    page(
        "Add Notice",
        "<form method=\"post\" action=\"/add_notice\">\n\
         <label>Title <input type=\"text\" name=\"title\"></label>\n\
         <textarea name=\"message\" rows=\"6\" cols=\"60\"></textarea>\n\
         <button type=\"submit\">Publish</button>\n\
         </form>\n\
         <p><a href=\"/admin_dashboard\">Back</a></p>",
    )
}

pub fn notices_admin(notices: &[Notice]) -> String {
    let rows = if notices.is_empty() {
        empty_row(4, "No notices.")
    } else {
        notices
            .iter()
            .map(|n| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td>\
                     <td><a href=\"/delete_notice/{}\">Delete</a></td></tr>",
                    escape(&n.created_at.display()),
                    escape(&n.title),
                    escape(&n.message),
                    escape(&n.id),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        "<p><a href=\"/delete_all_notices\">Delete all notices</a> | \
         <a href=\"/admin_dashboard\">Back</a></p>\n\
         <table>\n<tr><th>Date</th><th>Title</th><th>Message</th><th></th></tr>\n{rows}\n</table>"
    );
    page("Notices", &body)
}

pub fn complaints(complaints: &[Complaint]) -> String {
    let rows = if complaints.is_empty() {
        empty_row(5, "No complaints.")
    } else {
        complaints
            .iter()
            .map(|c| {
                let action = if c.status.is_resolved() {
                    String::new()
                } else {
                    format!("<a href=\"/update_complaint/{}\">Resolve</a>", escape(&c.id))
                };
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{action}</td></tr>",
                    escape(&c.created_at.display()),
                    escape(&c.student_email),
                    escape(&c.message),
                    c.status,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        "<p><a href=\"/admin_dashboard\">Back</a></p>\n\
         <table>\n<tr><th>Date</th><th>Student</th><th>Complaint</th><th>Status</th><th></th></tr>\n\
         {rows}\n</table>"
    );
    page("Complaints", &body)
}

pub fn feedback(entries: &[Feedback]) -> String {
    let rows = if entries.is_empty() {
        empty_row(3, "No feedback.")
    } else {
        entries
            .iter()
            .map(|f| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&f.created_at.display()),
                    escape(&f.student_email),
                    escape(&f.message),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        "<p><a href=\"/admin_dashboard\">Back</a></p>\n\
         <table>\n<tr><th>Date</th><th>Student</th><th>Feedback</th></tr>\n{rows}\n</table>"
    );
    page("Feedback", &body)
}
