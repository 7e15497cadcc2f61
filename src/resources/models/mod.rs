mod resources_element;
mod string_element;

pub use resources_element::*;
pub use string_element::*;
