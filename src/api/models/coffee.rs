use serde::{ Deserialize, Serialize };
use crate::api::models::CoffeeSize;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Coffee {
    pub id: u32,
    pub title: String,
    pub size: CoffeeSize
}

impl Coffee {
    pub fn new(id: u32, title: &str, size: CoffeeSize) -> Self {
        Coffee { id, title: title.to_string(), size }
    }
}
