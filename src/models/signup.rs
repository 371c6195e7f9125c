use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupConfirmation {
    pub message: String,
}

impl SignupConfirmation {
    pub fn new(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity_name),
        }
    }
}
