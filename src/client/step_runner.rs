use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use serde_json::{ json, Map, Value };
use uuid::Uuid;
use crate::client::{ ClientError, CoffeeApi, LocalStorage, Resolution, StepAction };
use crate::resources::ResourceService;

const ATTRIBUTION_FIELD: &str = "helloThere";
const UNDEFINED: &str = "undefined";

/// Executes step actions. Every run ends in exactly one `Resolution`.
pub struct StepRunner {
    coffee_api: Arc<dyn CoffeeApi>,
    local_storage: Arc<LocalStorage>,
    resource_service: ResourceService
}

impl StepRunner {
    pub fn new(coffee_api: Arc<dyn CoffeeApi>, local_storage: Arc<LocalStorage>, resource_service: ResourceService) -> StepRunner {
        StepRunner { coffee_api, local_storage, resource_service }
    }

    pub fn loading_message(&self, action: &StepAction) -> String {
        let name = match action {
            StepAction::ListCoffees => "fetching_coffees_loading_message",
            StepAction::PlaceOrder => "placing_order_loading_message",
            StepAction::UploadFile => "uploading_file_loading_message",
            StepAction::FetchVipOrders => "fetching_vip_orders_loading_message",
            StepAction::SaveFavorite { .. } => "saving_favorite_loading_message",
            StepAction::PromiseStates { .. } => "promise_states_loading_message"
        };
        self.resource_service.text(name)
    }

    pub async fn run(&self, action: &StepAction, inputs: &BTreeMap<String, String>) -> Resolution {
        let invocation_id = Uuid::new_v4();
        let running_message = self.resource_service.render(
            "running_step_info_message_template",
            &json!({ "action": action.name(), "invocation_id": invocation_id.to_string() })
        );
        log::info!("{}", running_message);
        match action {
            StepAction::ListCoffees => self.resolve(self.coffee_api.list_coffees().await),
            StepAction::PlaceOrder => self.place_order(inputs).await,
            StepAction::UploadFile => self.upload_file(inputs).await,
            StepAction::FetchVipOrders => self.fetch_vip_orders(inputs).await,
            StepAction::SaveFavorite { storage_key } => self.save_favorite(storage_key, inputs),
            StepAction::PromiseStates { delay_ms } => self.promise_states(Duration::from_millis(*delay_ms)).await
        }
    }

    async fn place_order(&self, inputs: &BTreeMap<String, String>) -> Resolution {
        // Inputs the user never filled in are left out of the body, not sent as null.
        let mut order = Map::new();
        for field in ["coffee", "size"] {
            if let Some(value) = inputs.get(field) {
                order.insert(field.to_string(), Value::String(value.clone()));
            }
        }
        self.resolve(self.coffee_api.place_order(Value::Object(order)).await)
    }

    async fn upload_file(&self, inputs: &BTreeMap<String, String>) -> Resolution {
        let file_path = match inputs.get("file").map(|file| file.trim()).filter(|file| !file.is_empty()) {
            Some(file_path) => Path::new(file_path),
            None => return self.failure("no file selected")
        };
        match self.coffee_api.upload_file(file_path).await {
            Ok(value) => Resolution::Data { value, preview_url: preview_url_for(file_path) },
            Err(error) => self.failure(&error.to_string())
        }
    }

    async fn fetch_vip_orders(&self, inputs: &BTreeMap<String, String>) -> Resolution {
        let token = inputs.get("token").map(String::as_str).unwrap_or(UNDEFINED);
        match self.coffee_api.fetch_vip_orders(token).await {
            Ok(mut value) => {
                if let Value::Object(fields) = &mut value {
                    fields.insert(ATTRIBUTION_FIELD.to_string(), Value::String(self.resource_service.text("vip_attribution_message")));
                }
                Resolution::data(value)
            },
            Err(error) => self.failure(&error.to_string())
        }
    }

    fn save_favorite(&self, storage_key: &str, inputs: &BTreeMap<String, String>) -> Resolution {
        let favorite = match inputs.get(storage_key).filter(|favorite| !favorite.is_empty()) {
            Some(favorite) => favorite,
            None => return Resolution::Error(self.resource_service.text("favorite_required_error_message"))
        };
        match self.local_storage.set_item(storage_key, favorite) {
            Ok(()) => {
                let saved_message = self.resource_service.render("saved_favorite_message_template", &json!({ "favorite": favorite }));
                Resolution::data(Value::String(saved_message))
            },
            Err(error) => self.failure(&error.to_string())
        }
    }

    async fn promise_states(&self, delay: Duration) -> Resolution {
        match self.coffee_api.list_coffees().await {
            Ok(value) => {
                tokio::time::sleep(delay).await;
                Resolution::data(value)
            },
            Err(error) => self.failure(&error.to_string())
        }
    }

    fn resolve(&self, result: Result<Value, ClientError>) -> Resolution {
        match result {
            Ok(value) => Resolution::data(value),
            Err(error) => self.failure(&error.to_string())
        }
    }

    fn failure(&self, reason: &str) -> Resolution {
        Resolution::Error(self.resource_service.render("request_failed_message_template", &json!({ "reason": reason })))
    }
}

/// A `file://` URL for the selected file itself; the service keeps no copy to link to.
fn preview_url_for(file_path: &Path) -> Option<String> {
    let absolute_path = std::fs::canonicalize(file_path).ok()?;
    reqwest::Url::from_file_path(absolute_path).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use async_trait::async_trait;
    use tempfile::TempDir;
    use crate::client::{ demo_steps, FAVORITE_COFFEE_KEY, PROMISE_STATES_DELAY_MS };
    use crate::resources::ResourceServiceFactory;
    use super::*;

    #[derive(Default)]
    struct FakeCoffeeApi {
        offline: bool,
        orders: Mutex<Vec<Value>>,
        tokens: Mutex<Vec<String>>
    }

    #[async_trait]
    impl CoffeeApi for FakeCoffeeApi {
        async fn list_coffees(&self) -> Result<Value, ClientError> {
            if self.offline {
                return Err(ClientError::Storage(String::from("connection refused")));
            }
            Ok(json!([{ "id": 1, "title": "Black Coffee", "size": "Medium" }]))
        }

        async fn place_order(&self, order: Value) -> Result<Value, ClientError> {
            self.orders.lock().unwrap().push(order);
            Ok(json!({ "message": "Order placed: Large Latte" }))
        }

        async fn upload_file(&self, _file_path: &Path) -> Result<Value, ClientError> {
            Ok(json!({ "message": "File uploaded successfully" }))
        }

        async fn fetch_vip_orders(&self, token: &str) -> Result<Value, ClientError> {
            self.tokens.lock().unwrap().push(token.to_string());
            Ok(json!({ "error": "Unauthorized" }))
        }
    }

    struct Fixture {
        temp_dir: TempDir,
        coffee_api: Arc<FakeCoffeeApi>,
        local_storage: Arc<LocalStorage>,
        step_runner: StepRunner
    }

    fn fixture(coffee_api: FakeCoffeeApi) -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let local_storage = Arc::new(LocalStorage::open(temp_dir.path().join("local_storage.json")).unwrap());
        let coffee_api = Arc::new(coffee_api);
        let resource_service = ResourceServiceFactory::create_embedded().unwrap();
        let step_runner = StepRunner::new(coffee_api.clone(), local_storage.clone(), resource_service);
        Fixture { temp_dir, coffee_api, local_storage, step_runner }
    }

    fn inputs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(field, value)| (field.to_string(), value.to_string())).collect()
    }

    fn save_favorite_action() -> StepAction {
        StepAction::SaveFavorite { storage_key: FAVORITE_COFFEE_KEY.to_string() }
    }

    #[test]
    fn every_step_has_a_loading_message() {
        let fixture = fixture(FakeCoffeeApi::default());
        let messages: Vec<String> = demo_steps().iter().map(|step| fixture.step_runner.loading_message(&step.action)).collect();
        assert_eq!(messages, vec![
            "Fetching coffee types...",
            "Placing order...",
            "Uploading file...",
            "Fetching VIP orders...",
            "Saving favorite coffee...",
            "Loading..."
        ]);
    }

    #[tokio::test]
    async fn transport_failures_become_error_messages() {
        let fixture = fixture(FakeCoffeeApi { offline: true, ..FakeCoffeeApi::default() });
        let resolution = fixture.step_runner.run(&StepAction::ListCoffees, &BTreeMap::new()).await;
        assert_eq!(resolution, Resolution::Error(String::from("Error: connection refused")));
    }

    #[tokio::test]
    async fn order_omits_fields_never_entered() {
        let fixture = fixture(FakeCoffeeApi::default());
        fixture.step_runner.run(&StepAction::PlaceOrder, &inputs(&[("coffee", "Latte"), ("size", "Large")])).await;
        fixture.step_runner.run(&StepAction::PlaceOrder, &inputs(&[("size", "Large")])).await;
        let orders = fixture.coffee_api.orders.lock().unwrap().clone();
        assert_eq!(orders, vec![json!({ "coffee": "Latte", "size": "Large" }), json!({ "size": "Large" })]);
    }

    #[tokio::test]
    async fn vip_response_gets_the_attribution() {
        let fixture = fixture(FakeCoffeeApi::default());
        let resolution = fixture.step_runner.run(&StepAction::FetchVipOrders, &inputs(&[("token", "wrong-token")])).await;
        assert_eq!(resolution, Resolution::data(json!({
            "error": "Unauthorized",
            "helloThere": "Brewed by Shelian Gladis, 22501A0544 ☕"
        })));
        assert_eq!(fixture.coffee_api.tokens.lock().unwrap().clone(), vec![String::from("wrong-token")]);
    }

    #[tokio::test]
    async fn upload_without_a_file_fails() {
        let fixture = fixture(FakeCoffeeApi::default());
        let resolution = fixture.step_runner.run(&StepAction::UploadFile, &BTreeMap::new()).await;
        assert_eq!(resolution, Resolution::Error(String::from("Error: no file selected")));
    }

    #[tokio::test]
    async fn upload_links_a_local_preview() {
        let fixture = fixture(FakeCoffeeApi::default());
        let logo_path = fixture.temp_dir.path().join("logo.png");
        std::fs::write(&logo_path, b"png").unwrap();
        let resolution = fixture.step_runner.run(&StepAction::UploadFile, &inputs(&[("file", logo_path.to_str().unwrap())])).await;
        match resolution {
            Resolution::Data { value, preview_url } => {
                assert_eq!(value, json!({ "message": "File uploaded successfully" }));
                let preview_url = preview_url.unwrap();
                assert!(preview_url.starts_with("file://"));
                assert!(preview_url.ends_with("/logo.png"));
            },
            other => panic!("unexpected resolution {:?}", other)
        }
    }

    #[tokio::test]
    async fn favorite_is_saved_locally() {
        let fixture = fixture(FakeCoffeeApi::default());
        let resolution = fixture.step_runner.run(&save_favorite_action(), &inputs(&[(FAVORITE_COFFEE_KEY, "Mocha")])).await;
        assert_eq!(resolution, Resolution::data(json!("Saved locally: Mocha")));
        assert_eq!(fixture.local_storage.get_item(FAVORITE_COFFEE_KEY), Some(String::from("Mocha")));
    }

    #[tokio::test]
    async fn empty_favorite_leaves_storage_untouched() {
        let fixture = fixture(FakeCoffeeApi::default());
        fixture.local_storage.set_item(FAVORITE_COFFEE_KEY, "Espresso").unwrap();
        for empty_inputs in [inputs(&[(FAVORITE_COFFEE_KEY, "")]), BTreeMap::new()] {
            let resolution = fixture.step_runner.run(&save_favorite_action(), &empty_inputs).await;
            assert_eq!(resolution, Resolution::Error(String::from("Please enter a favorite coffee before saving!")));
        }
        assert_eq!(fixture.local_storage.get_item(FAVORITE_COFFEE_KEY), Some(String::from("Espresso")));
    }

    #[tokio::test(start_paused = true)]
    async fn promise_states_wait_before_resolving() {
        let fixture = fixture(FakeCoffeeApi::default());
        let started = tokio::time::Instant::now();
        let resolution = fixture.step_runner.run(&StepAction::PromiseStates { delay_ms: PROMISE_STATES_DELAY_MS }, &BTreeMap::new()).await;
        assert!(started.elapsed() >= Duration::from_millis(PROMISE_STATES_DELAY_MS));
        assert!(matches!(resolution, Resolution::Data { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn promise_states_fail_without_waiting() {
        let fixture = fixture(FakeCoffeeApi { offline: true, ..FakeCoffeeApi::default() });
        let started = tokio::time::Instant::now();
        let resolution = fixture.step_runner.run(&StepAction::PromiseStates { delay_ms: PROMISE_STATES_DELAY_MS }, &BTreeMap::new()).await;
        assert!(started.elapsed() < Duration::from_millis(PROMISE_STATES_DELAY_MS));
        assert_eq!(resolution, Resolution::Error(String::from("Error: connection refused")));
    }
}
