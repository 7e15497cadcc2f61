use rocket::data::Limits;
use rocket::form::{ self, DataField, FromFormField };
use rocket::form::error::ErrorKind;
use rocket::http::Status;
use crate::api::models::FileMetadata;

const FILE_FIELD_NAME: &str = "file";
const TRANSFER_ENCODING: &str = "7bit";

/// A multipart file field. The bytes are read into memory only to be counted, then dropped.
pub struct UploadedFile {
    pub metadata: FileMetadata
}

#[derive(FromForm)]
pub struct UploadForm<'r> {
    pub file: form::Result<'r, UploadedFile>
}

impl UploadForm<'_> {
    /// `None` when no file was attached. A file that couldn't be read, such as one over the limit, is an error status.
    pub fn into_metadata(self) -> Result<Option<FileMetadata>, Status> {
        match self.file {
            Ok(uploaded_file) => Ok(Some(uploaded_file.metadata)),
            Err(errors) if errors.iter().all(|error| matches!(error.kind, ErrorKind::Missing | ErrorKind::Unexpected)) => Ok(None),
            Err(errors) => Err(errors.status())
        }
    }
}

#[rocket::async_trait]
impl<'r> FromFormField<'r> for UploadedFile {
    async fn from_data(field: DataField<'r, '_>) -> form::Result<'r, Self> {
        let limit = field.request.limits().get(FILE_FIELD_NAME).unwrap_or(Limits::FILE);
        let originalname = field.file_name
            .map(|file_name| file_name.dangerous_unsafe_unsanitized_raw().as_str().to_string())
            .unwrap_or_default();
        let mimetype = field.content_type.to_string();
        let bytes = field.data.open(limit).into_bytes().await
            .map_err(|error| form::Error::from(ErrorKind::Io(error)))?;
        if !bytes.is_complete() {
            let too_large = ErrorKind::InvalidLength { min: None, max: Some(limit.as_u64()) };
            return Err(form::Error::from(too_large).into());
        }
        let size = bytes.len() as u64;
        Ok(UploadedFile {
            metadata: FileMetadata {
                fieldname: FILE_FIELD_NAME.to_string(),
                originalname,
                encoding: TRANSFER_ENCODING.to_string(),
                mimetype,
                size
            }
        })
    }
}
