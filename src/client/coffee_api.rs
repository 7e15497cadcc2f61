use std::path::Path;
use async_trait::async_trait;
use serde_json::Value;
use crate::client::ClientError;

/// The Mock API Service as the client sees it. Every successful call yields the decoded JSON body,
/// whatever the status code.
#[async_trait]
pub trait CoffeeApi: Send + Sync {
    async fn list_coffees(&self) -> Result<Value, ClientError>;
    async fn place_order(&self, order: Value) -> Result<Value, ClientError>;
    async fn upload_file(&self, file_path: &Path) -> Result<Value, ClientError>;
    async fn fetch_vip_orders(&self, token: &str) -> Result<Value, ClientError>;
}
