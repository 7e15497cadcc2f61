mod resource_service;
mod resource_service_factory;
pub mod models;

pub use resource_service::*;
pub use resource_service_factory::*;
