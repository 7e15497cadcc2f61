use rocket::{ Build, Request, Rocket, State };
use rocket::figment::Figment;
use rocket::form::Form;
use rocket::http::{ ContentType, Status };
use rocket::response::status;
use rocket::serde::json::Json;
use serde_json::json;
use crate::api::models::{ Coffee, GenericError, OrderConfirmation, UnauthorizedError, UploadReceipt, VipOrdersResponse };
use crate::api::{ cors, AuthorizationHeader, CoffeeService, CredentialVerifier, Cors, UploadForm };
use crate::resources::ResourceService;

pub type ManagedCredentialVerifier = Box<dyn CredentialVerifier>;

#[get("/coffees")]
fn coffees_get(coffee_service: &State<CoffeeService>) -> Json<Vec<Coffee>> {
    Json(coffee_service.get_coffees())
}

// Only JSON bodies are parsed; anything else reads as an empty order.
#[post("/order", data = "<order_input>")]
fn order_post(
    coffee_service: &State<CoffeeService>,
    content_type: Option<&ContentType>,
    order_input: String
) -> Result<Json<OrderConfirmation>, status::Custom<Json<GenericError>>> {
    let order_json = match content_type {
        Some(content_type) if content_type.is_json() => Some(order_input.as_str()),
        _ => None
    };
    match coffee_service.place_order(order_json) {
        Ok(order_confirmation) => Ok(Json(order_confirmation)),
        Err(error) => Err(status::Custom(Status::InternalServerError, Json(GenericError { message: error })))
    }
}

#[post("/upload", data = "<upload_form>")]
fn upload_post(coffee_service: &State<CoffeeService>, upload_form: Form<UploadForm<'_>>) -> Result<Json<UploadReceipt>, status::Custom<Json<GenericError>>> {
    match upload_form.into_inner().into_metadata() {
        Ok(file) => Ok(Json(coffee_service.receive_upload(file))),
        Err(status) => Err(status::Custom(status, Json(GenericError { message: status.to_string() })))
    }
}

// Anything that isn't a form lands here and is accepted without a file.
#[post("/upload", rank = 2)]
fn upload_without_form_post(coffee_service: &State<CoffeeService>) -> Json<UploadReceipt> {
    Json(coffee_service.receive_upload(None))
}

#[get("/vip-orders")]
fn vip_orders_get(
    coffee_service: &State<CoffeeService>,
    credential_verifier: &State<ManagedCredentialVerifier>,
    authorization: AuthorizationHeader<'_>
) -> Result<Json<VipOrdersResponse>, status::Custom<Json<UnauthorizedError>>> {
    if !credential_verifier.verify(authorization.0) {
        return Err(status::Custom(Status::Forbidden, Json(coffee_service.unauthorized())));
    }
    Ok(Json(coffee_service.get_vip_orders()))
}

#[catch(default)]
fn default_catcher(status: Status, request: &Request<'_>) -> status::Custom<Json<GenericError>> {
    if let Some(resource_service) = request.rocket().state::<ResourceService>() {
        let message_data = &json!({ "code": status.code, "method": request.method().as_str(), "uri": request.uri().to_string() });
        log::info!("{}", resource_service.render("http_error_info_message_template", message_data));
    }
    status::Custom(status, Json(GenericError { message: status.to_string() }))
}

pub fn build_rocket(resource_service: ResourceService, credential_verifier: ManagedCredentialVerifier) -> Rocket<Build> {
    build_rocket_with_figment(rocket::Config::figment(), resource_service, credential_verifier)
}

/// Same as `build_rocket`, with the configuration (port, limits, log level) taken from `figment`.
pub fn build_rocket_with_figment(
    figment: Figment,
    resource_service: ResourceService,
    credential_verifier: ManagedCredentialVerifier
) -> Rocket<Build> {
    let coffee_service = CoffeeService::new(resource_service.clone());
    rocket::custom(figment)
        .attach(Cors)
        .mount("/", routes![cors::preflight])
        .mount("/api", routes![coffees_get, order_post, upload_post, upload_without_form_post, vip_orders_get])
        .register("/", catchers![default_catcher])
        .manage(coffee_service)
        .manage(resource_service)
        .manage(credential_verifier)
}
