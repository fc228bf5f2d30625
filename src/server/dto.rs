use serde::Deserialize;

// Every field is optional so a missing input reaches the presence checks
// instead of failing deserialization.

#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NoticeForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Complaint and feedback submissions.
#[derive(Debug, Default, Deserialize)]
pub struct MessageForm {
    #[serde(default)]
    pub message: Option<String>,
}
