use serde::{ Deserialize, Serialize };
use crate::api::models::VipOrder;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct VipOrdersResponse {
    pub message: String,
    pub payload: Vec<VipOrder>
}
