use crate::api::StaticBearerVerifier;

pub const DEFAULT_VIP_TOKEN: &str = "secret-shelian-token";

pub struct CredentialVerifierFactory {}

impl CredentialVerifierFactory {
    pub fn create() -> StaticBearerVerifier {
        let vip_token = dotenv::var("VIP_TOKEN").unwrap_or_else(|_| DEFAULT_VIP_TOKEN.to_string());
        StaticBearerVerifier::new(&vip_token)
    }
}
