use serde::{ Deserialize, Serialize };

pub const FAVORITE_COFFEE_KEY: &str = "favoriteCoffee";
pub const PROMISE_STATES_DELAY_MS: u64 = 2000;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    File
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct InputField {
    pub name: String,
    pub kind: InputKind
}

impl InputField {
    pub fn text(name: &str) -> Self {
        InputField { name: name.to_string(), kind: InputKind::Text }
    }

    pub fn file(name: &str) -> Self {
        InputField { name: name.to_string(), kind: InputKind::File }
    }
}

/// What running a step does. Plain data, so step definitions stay serializable.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(tag = "type")]
pub enum StepAction {
    ListCoffees,
    PlaceOrder,
    UploadFile,
    FetchVipOrders,
    SaveFavorite { storage_key: String },
    PromiseStates { delay_ms: u64 }
}

impl StepAction {
    pub fn name(&self) -> &'static str {
        match self {
            StepAction::ListCoffees => "ListCoffees",
            StepAction::PlaceOrder => "PlaceOrder",
            StepAction::UploadFile => "UploadFile",
            StepAction::FetchVipOrders => "FetchVipOrders",
            StepAction::SaveFavorite { .. } => "SaveFavorite",
            StepAction::PromiseStates { .. } => "PromiseStates"
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Step {
    pub title: String,
    pub description: String,
    pub details: String,
    #[serde(rename = "inputFields", default)]
    pub input_fields: Vec<InputField>,
    pub action: StepAction
}

impl Step {
    fn new(title: &str, description: &str, details: &str, input_fields: Vec<InputField>, action: StepAction) -> Self {
        Step {
            title: title.to_string(),
            description: description.to_string(),
            details: details.to_string(),
            input_fields,
            action
        }
    }

    pub fn declares_input(&self, field: &str) -> bool {
        self.input_fields.iter().any(|input_field| input_field.name == field)
    }
}

pub fn demo_steps() -> Vec<Step> {
    vec![
        Step::new(
            "Requesting Data",
            "Fetching coffee types...",
            "We'll request a list of available coffee types from our backend.",
            vec![],
            StepAction::ListCoffees
        ),
        Step::new(
            "Sending Data with a Request",
            "Ordering a coffee...",
            "Enter your coffee type and size to place an order using a POST request.",
            vec![InputField::text("coffee"), InputField::text("size")],
            StepAction::PlaceOrder
        ),
        Step::new(
            "Uploading Files",
            "Uploading a coffee shop logo...",
            "Select a file to simulate uploading a coffee shop logo as multipart form data.",
            vec![InputField::file("file")],
            StepAction::UploadFile
        ),
        Step::new(
            "Authorized Requests",
            "Fetching VIP orders...",
            "Enter your token to fetch exclusive VIP coffee orders.",
            vec![InputField::text("token")],
            StepAction::FetchVipOrders
        ),
        Step::new(
            "Saving Data Locally",
            "Saving your favorite coffee...",
            "Enter your favorite coffee type and save it locally. To check, open the local storage file shown at startup.",
            vec![InputField::text(FAVORITE_COFFEE_KEY)],
            StepAction::SaveFavorite { storage_key: FAVORITE_COFFEE_KEY.to_string() }
        ),
        Step::new(
            "Handling Promise States",
            "Demonstrating loading and error handling...",
            "We'll show how to handle pending, fulfilled, and rejected states.",
            vec![],
            StepAction::PromiseStates { delay_ms: PROMISE_STATES_DELAY_MS }
        )
    ]
}
