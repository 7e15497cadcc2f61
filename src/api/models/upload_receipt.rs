use serde::{ Deserialize, Serialize };
use crate::api::models::FileMetadata;

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct UploadReceipt {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file: Option<FileMetadata>
}
