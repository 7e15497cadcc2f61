use serde_json::{ json, Map, Number, Value };
use crate::api::catalogue;
use crate::api::models::{ Coffee, FileMetadata, OrderConfirmation, UnauthorizedError, UploadReceipt, VipOrdersResponse };
use crate::resources::ResourceService;

const UNDEFINED: &str = "undefined";

/// Answers every endpoint from constants or from the request itself. Holds no mutable state.
#[derive(Clone)]
pub struct CoffeeService {
    resource_service: ResourceService
}

impl CoffeeService {
    pub fn new(resource_service: ResourceService) -> CoffeeService {
        CoffeeService { resource_service }
    }

    pub fn get_coffees(&self) -> Vec<Coffee> {
        let coffees = catalogue::coffee_catalogue();
        let listing_message = self.resource_service.render("listing_coffees_info_message_template", &json!({ "count": coffees.len() }));
        log::info!("{}", listing_message);
        coffees
    }

    /// Echoes `coffee` and `size` back without validating them. A missing body, or one that isn't a JSON object, reads as `{}`.
    pub fn place_order(&self, order_json: Option<&str>) -> Result<OrderConfirmation, String> {
        let order = match order_json.map(serde_json::from_str::<Value>) {
            Some(Ok(Value::Object(order))) => order,
            _ => Map::new()
        };
        let message_data = &json!({
            "coffee": template_literal_text(order.get("coffee")),
            "size": template_literal_text(order.get("size"))
        });
        let message = self.resource_service
            .render_resource_template_string_by_name("order_placed_message_template", message_data)
            .ok_or_else(|| String::from("Couldn't render the order confirmation"))?;
        let order_received_message = self.resource_service.render("order_received_info_message_template", &json!({ "message": message }));
        log::info!("{}", order_received_message);
        Ok(OrderConfirmation { message })
    }

    pub fn receive_upload(&self, file: Option<FileMetadata>) -> UploadReceipt {
        match &file {
            Some(metadata) => {
                let file_received_message = self.resource_service.render("file_received_info_message_template", metadata);
                log::info!("{}", file_received_message);
            },
            None => log::info!("{}", self.resource_service.text("no_file_received_info_message"))
        }
        UploadReceipt {
            message: self.resource_service.text("file_uploaded_message"),
            file
        }
    }

    pub fn get_vip_orders(&self) -> VipOrdersResponse {
        let payload = catalogue::vip_orders();
        let served_message = self.resource_service.render("vip_orders_served_info_message_template", &json!({ "count": payload.len() }));
        log::info!("{}", served_message);
        VipOrdersResponse {
            message: self.resource_service.text("vip_orders_message"),
            payload
        }
    }

    pub fn unauthorized(&self) -> UnauthorizedError {
        log::warn!("{}", self.resource_service.text("vip_orders_rejected_warn_message"));
        UnauthorizedError { error: self.resource_service.text("unauthorized_error_message") }
    }
}

/// Text a JSON value turns into when interpolated into a JavaScript template literal.
pub fn template_literal_text(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED.to_string(),
        Some(Value::Null) => String::from("null"),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number_text(number),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items.iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => template_literal_text(Some(other))
            })
            .collect::<Vec<String>>()
            .join(","),
        Some(Value::Object(_)) => String::from("[object Object]")
    }
}

// Integral floats print without a fraction, as JavaScript numbers do.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float == 0.0 => String::from("0"),
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => format!("{}", float),
        _ => number.to_string()
    }
}
