use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct FileMetadata {
    pub fieldname: String,
    pub originalname: String,
    pub encoding: String,
    pub mimetype: String,
    pub size: u64
}
