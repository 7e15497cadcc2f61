use std::path::Path;
use async_trait::async_trait;
use reqwest::multipart::{ Form, Part };
use reqwest::{ header, Client, RequestBuilder };
use serde_json::Value;
use crate::client::{ ClientError, CoffeeApi };

pub const DEFAULT_COFFEE_API_URL: &str = "http://localhost:5000/api";

pub struct HttpCoffeeApi {
    http_client: Client,
    base_url: String
}

impl HttpCoffeeApi {
    pub fn new(base_url: &str) -> HttpCoffeeApi {
        HttpCoffeeApi {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string()
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send_for_json(request: RequestBuilder) -> Result<Value, ClientError> {
        let response = request.send().await.map_err(ClientError::Transport)?;
        log::debug!("{} answered {}", response.url(), response.status());
        response.json::<Value>().await.map_err(ClientError::Decode)
    }
}

#[async_trait]
impl CoffeeApi for HttpCoffeeApi {
    async fn list_coffees(&self) -> Result<Value, ClientError> {
        Self::send_for_json(self.http_client.get(self.endpoint("coffees"))).await
    }

    async fn place_order(&self, order: Value) -> Result<Value, ClientError> {
        Self::send_for_json(self.http_client.post(self.endpoint("order")).json(&order)).await
    }

    async fn upload_file(&self, file_path: &Path) -> Result<Value, ClientError> {
        let bytes = tokio::fs::read(file_path).await.map_err(|source| ClientError::Io {
            path: file_path.display().to_string(),
            source
        })?;
        let file_name = file_path.file_name()
            .map(|file_name| file_name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_type_for(file_path))
            .map_err(ClientError::Transport)?;
        let form = Form::new().part("file", part);
        Self::send_for_json(self.http_client.post(self.endpoint("upload")).multipart(form)).await
    }

    async fn fetch_vip_orders(&self, token: &str) -> Result<Value, ClientError> {
        let request = self.http_client.get(self.endpoint("vip-orders"))
            .header(header::AUTHORIZATION, format!("Bearer {}", token));
        Self::send_for_json(request).await
    }
}

fn mime_type_for(file_path: &Path) -> &'static str {
    let extension = file_path.extension()
        .map(|extension| extension.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "txt" => "text/plain",
        "json" => "application/json",
        _ => "application/octet-stream"
    }
}

pub struct HttpCoffeeApiFactory {}

impl HttpCoffeeApiFactory {
    pub fn create() -> HttpCoffeeApi {
        let coffee_api_url = dotenv::var("COFFEE_API_URL").unwrap_or_else(|_| DEFAULT_COFFEE_API_URL.to_string());
        log::info!("Using the coffee API at {}", coffee_api_url);
        HttpCoffeeApi::new(&coffee_api_url)
    }
}
