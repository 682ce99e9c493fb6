// User profile domain model
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub username: String,
}

impl UserProfile {
    pub fn greeting(&self) -> String {
        format!("Welcome, {}!", self.username)
    }
}
