mod authorization_header;
mod catalogue;
mod coffee_service;
mod cors;
mod credential_verifier;
mod credential_verifier_factory;
mod routes;
mod uploaded_file;
pub mod models;

pub use authorization_header::*;
pub use coffee_service::*;
pub use cors::Cors;
pub use credential_verifier::*;
pub use credential_verifier_factory::*;
pub use routes::*;
pub use uploaded_file::*;
