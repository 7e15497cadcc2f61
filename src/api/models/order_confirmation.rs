use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct OrderConfirmation {
    pub message: String
}
