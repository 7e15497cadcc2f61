mod client_error;
mod coffee_api;
mod command;
mod http_coffee_api;
mod local_storage;
mod local_storage_factory;
mod output;
mod render;
mod session;
mod step;
mod step_runner;
mod wizard_state;

pub use client_error::*;
pub use coffee_api::*;
pub use command::*;
pub use http_coffee_api::*;
pub use local_storage::*;
pub use local_storage_factory::*;
pub use output::*;
pub use render::*;
pub use session::*;
pub use step::*;
pub use step_runner::*;
pub use wizard_state::*;
