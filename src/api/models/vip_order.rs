use serde::{ Deserialize, Serialize };

/// `coffee_id` is a plain number; nothing checks it against the coffee catalogue.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct VipOrder {
    pub order_id: u32,
    pub customer: String,
    pub coffee_id: u32,
    pub size: String,
    pub quantity: u32,
    pub special_request: String
}
