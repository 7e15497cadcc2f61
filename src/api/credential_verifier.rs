/// Decides whether a request's `Authorization` header grants access to the VIP orders.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, authorization: Option<&str>) -> bool;
}

/// Accepts exactly one header value, `Bearer <token>`. No expiry, no identities.
pub struct StaticBearerVerifier {
    expected_authorization: String
}

impl StaticBearerVerifier {
    pub fn new(token: &str) -> StaticBearerVerifier {
        StaticBearerVerifier { expected_authorization: format!("Bearer {}", token) }
    }
}

impl CredentialVerifier for StaticBearerVerifier {
    fn verify(&self, authorization: Option<&str>) -> bool {
        authorization == Some(self.expected_authorization.as_str())
    }
}
