use serde::Serialize;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{NewUser, Session, User};

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiClient {
    /// Authenticate and store the returned token before handing the
    /// session back.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let session: Session = self
            .post(
                "/api/auth/login",
                &LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        self.set_token(&session.access_token)?;
        Ok(session)
    }

    /// Create an account; like login, stores the token as a side effect.
    pub async fn register(&self, data: &NewUser) -> Result<Session> {
        let session: Session = self.post("/api/auth/register", data).await?;
        self.set_token(&session.access_token)?;
        Ok(session)
    }

    /// Resolve the current user from the stored token.
    pub async fn me(&self) -> Result<User> {
        self.get("/api/auth/me").await
    }
}
