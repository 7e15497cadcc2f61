mod coffee;
mod coffee_size;
mod vip_order;
mod order_confirmation;
mod file_metadata;
mod upload_receipt;
mod vip_orders_response;
mod generic_error;
mod unauthorized_error;

pub use coffee::*;
pub use coffee_size::*;
pub use vip_order::*;
pub use order_confirmation::*;
pub use file_metadata::*;
pub use upload_receipt::*;
pub use vip_orders_response::*;
pub use generic_error::*;
pub use unauthorized_error::*;
