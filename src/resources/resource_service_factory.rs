use std::fs;
use hard_xml::XmlRead;
use crate::resources::models::ResourcesElement;
use crate::resources::ResourceService;

const EMBEDDED_STRINGS_XML: &str = include_str!("../../resources/strings.xml");

pub struct ResourceServiceFactory {}

impl ResourceServiceFactory {
    /// Loads `STRINGS_XML_FILE_PATH` (relative to the home directory) when set, the bundled strings otherwise.
    pub fn create() -> Result<ResourceService, String> {
        let resource_xml_content = match dotenv::var("STRINGS_XML_FILE_PATH") {
            Ok(strings_xml_file_path) => {
                let home_dir = dirs::home_dir().ok_or_else(|| String::from("Couldn't determine the home directory"))?;
                let file_path = home_dir.join(strings_xml_file_path);
                log::info!("Loading resource strings from \"{}\"", file_path.display());
                fs::read_to_string(&file_path)
                    .map_err(|error| format!("Couldn't read \"{}\": {}", file_path.display(), error))?
            },
            Err(_) => EMBEDDED_STRINGS_XML.to_string()
        };
        Self::create_from_str(&resource_xml_content)
    }

    pub fn create_from_str(resource_xml_content: &str) -> Result<ResourceService, String> {
        match ResourcesElement::from_str(resource_xml_content) {
            Ok(resource_element) => Ok(ResourceService::new(resource_element)),
            Err(error) => Err(format!("Couldn't parse resource strings: {}", error))
        }
    }

    pub fn create_embedded() -> Result<ResourceService, String> {
        Self::create_from_str(EMBEDDED_STRINGS_XML)
    }
}
