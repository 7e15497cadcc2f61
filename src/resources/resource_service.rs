use handlebars::Handlebars;
use serde::Serialize;
use crate::resources::models::ResourcesElement;

#[derive(Clone)]
pub struct ResourceService {
    resource_element: ResourcesElement
}

impl ResourceService {
    pub fn new(resource_element: ResourcesElement) -> ResourceService {
        ResourceService {
            resource_element
        }
    }

    pub fn get_resource_string_by_name(&self, name: &str) -> Option<String> {
        self.resource_element.strings.iter()
            .find(|string_element| string_element.name == name)
            .map(|string_element| string_element.content.clone())
    }

    /// Renders a handlebars template resource. Values are inserted verbatim; nothing is HTML-escaped.
    pub fn render_resource_template_string_by_name<T: Serialize>(&self, name: &str, data: &T) -> Option<String> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        let template_string = self.get_resource_string_by_name(name)?;
        match handlebars.render_template(template_string.as_str(), data) {
            Ok(rendered) => Some(rendered),
            Err(error) => {
                log::warn!("Couldn't render resource template \"{}\": {}", name, error);
                None
            }
        }
    }

    /// Like `get_resource_string_by_name`, but falls back to the resource name itself.
    pub fn text(&self, name: &str) -> String {
        self.get_resource_string_by_name(name).unwrap_or_else(|| {
            log::warn!("Missing resource string \"{}\"", name);
            name.to_string()
        })
    }

    /// Like `render_resource_template_string_by_name`, but falls back to the resource name itself.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.render_resource_template_string_by_name(name, data).unwrap_or_else(|| name.to_string())
    }
}
