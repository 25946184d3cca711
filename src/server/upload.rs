//! Multipart upload parsing

use std::collections::HashMap;

use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use log::debug;
use serde::de::DeserializeOwned;

use crate::errors::{PixelError, PixelResult};

/// Name of the multipart field carrying the image bytes
pub const FILE_FIELD: &str = "file";

/// A parsed multipart upload: the image plus any text fields
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Vec<u8>,
    pub filename: Option<String>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// Read every field of a multipart request
    ///
    /// # Returns
    /// The form, or `InvalidRequest` if the body is malformed or has no file
    pub async fn read(mut multipart: Multipart) -> PixelResult<Self> {
        let mut form = UploadForm::default();
        let mut has_file = false;

        while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
            let name = field.name().unwrap_or_default().to_string();
            if name == FILE_FIELD {
                form.filename = field.file_name().map(str::to_string);
                form.file = field.bytes().await.map_err(invalid_multipart)?.to_vec();
                has_file = true;
            } else {
                let text = field.text().await.map_err(invalid_multipart)?;
                form.fields.insert(name, text);
            }
        }

        if !has_file {
            return Err(PixelError::InvalidRequest(format!("missing '{}' field", FILE_FIELD)));
        }

        debug!("Received upload {:?} ({} bytes, {} extra fields)",
               form.filename, form.file.len(), form.fields.len());
        Ok(form)
    }

    /// Raw text of a non-file field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Deserialize a JSON-encoded field
    pub fn json_field<T: DeserializeOwned>(&self, name: &str) -> PixelResult<T> {
        let raw = self.field(name)
            .ok_or_else(|| PixelError::InvalidRequest(format!("missing '{}' field", name)))?;
        serde_json::from_str(raw)
            .map_err(|e| PixelError::InvalidRequest(format!("field '{}': {}", name, e)))
    }
}

fn invalid_multipart(error: MultipartError) -> PixelError {
    rejected(error.status(), error.body_text())
}

/// Map a rejected request body onto the error reported to the client
fn rejected(status: StatusCode, detail: String) -> PixelError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        PixelError::UploadTooLarge(detail)
    } else {
        PixelError::InvalidRequest(detail)
    }
}

impl From<MultipartRejection> for PixelError {
    fn from(rejection: MultipartRejection) -> Self {
        rejected(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for PixelError {
    fn from(rejection: JsonRejection) -> Self {
        rejected(rejection.status(), rejection.body_text())
    }
}
