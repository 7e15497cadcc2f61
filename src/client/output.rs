use serde_json::Value;

/// What the output area shows. Exactly one state at a time.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Output {
    #[default]
    Idle,
    Loading(String),
    Error(String),
    Data {
        value: Value,
        preview_url: Option<String>
    }
}

/// How a step invocation ended.
#[derive(Clone, PartialEq, Debug)]
pub enum Resolution {
    Data {
        value: Value,
        preview_url: Option<String>
    },
    Error(String)
}

impl Resolution {
    pub fn data(value: Value) -> Self {
        Resolution::Data { value, preview_url: None }
    }
}

impl From<Resolution> for Output {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Data { value, preview_url } => Output::Data { value, preview_url },
            Resolution::Error(message) => Output::Error(message)
        }
    }
}
