use std::convert::Infallible;
use rocket::request::{ FromRequest, Outcome };
use rocket::Request;

/// The raw `Authorization` header, if any. Never fails; checking it is up to a `CredentialVerifier`.
pub struct AuthorizationHeader<'r>(pub Option<&'r str>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthorizationHeader<'r> {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(AuthorizationHeader(request.headers().get_one("Authorization")))
    }
}
