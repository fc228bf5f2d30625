use crate::types::Role;

use super::page;

pub fn home() -> String {
    page(
        "Campus Notice Board",
        "<ul>\n\
         <li><a href=\"/student_register\">Student registration</a></li>\n\
         <li><a href=\"/student_login\">Student login</a></li>\n\
         <li><a href=\"/admin_login\">Admin login</a></li>\n\
         </ul>",
    )
}

pub fn student_register() -> String {
    page(
        "Student Registration",
        "<form method=\"post\" action=\"/student_register\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label>\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         <p>Already registered? <a href=\"/student_login\">Log in</a></p>",
    )
}

/// Login form for either role; posts back to the role's login path.
pub fn login(role: Role) -> String {
    let title = match role {
        Role::Student => "Student Login",
        Role::Admin => "Admin Login",
    };
    let body = format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n\
         <p><a href=\"/\">Home</a></p>",
        action = role.login_path(),
    );
    page(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_posts_to_role_path() {
        assert!(login(Role::Student).contains("action=\"/student_login\""));
        assert!(login(Role::Admin).contains("action=\"/admin_login\""));
    }
}
