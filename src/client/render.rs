use std::fmt::Write;
use serde_json::Value;
use crate::client::{ InputKind, Output, WizardState };

pub fn render_state(state: &WizardState) -> String {
    let step = state.current_step();
    let mut text = String::new();
    let _ = writeln!(text, "☕ Incorporating Data: {} ({}/{})", step.title, state.step() + 1, state.step_count());
    let _ = writeln!(text, "{}", step.details);
    let _ = writeln!(text, "{}", step.description);
    for input_field in &step.input_fields {
        let kind = match input_field.kind {
            InputKind::Text => "text",
            InputKind::File => "file path"
        };
        let value = state.inputs().get(&input_field.name).map(String::as_str).unwrap_or("");
        let _ = writeln!(text, "  {} [{}]: {}", input_field.name, kind, value);
    }
    let mut navigation = Vec::new();
    if !state.is_first_step() {
        navigation.push("◀️ prev");
    }
    navigation.push("run");
    if !state.is_last_step() {
        navigation.push("next ▶️");
    }
    let _ = writeln!(text, "{}", navigation.join(" | "));
    text.push_str(&render_output(state.output()));
    text
}

pub fn render_output(output: &Output) -> String {
    match output {
        Output::Idle => String::new(),
        Output::Loading(message) => format!("⏳ {}\n", message),
        Output::Error(message) => format!("❌ {}\n", message),
        Output::Data { value, preview_url } => {
            let mut text = format!("{}\n", pretty_json(value));
            if let Some(preview_url) = preview_url {
                let _ = writeln!(text, "🖼 {}", preview_url);
            }
            text
        }
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
