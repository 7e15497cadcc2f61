extern crate env_logger;
use coffee_api_adventure::api::{ build_rocket, CredentialVerifierFactory };
use coffee_api_adventure::resources::ResourceServiceFactory;

#[rocket::launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    env_logger::init();
    let resource_service = match ResourceServiceFactory::create() {
        Ok(new_resource_service) => new_resource_service,
        Err(error) => {
            panic!("Couldn't create resource service: {}", error);
        }
    };
    let credential_verifier = CredentialVerifierFactory::create();
    build_rocket(resource_service, Box::new(credential_verifier))
}
