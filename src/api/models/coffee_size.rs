use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CoffeeSize {
    Small,
    Medium,
    Large
}
