// src/modules/media/adapter/incoming/web/multipart.rs

use actix_multipart::Multipart;
use futures::StreamExt;
use std::collections::HashMap;

/// The file part of an upload form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field_name: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A parsed multipart form: at most one file part (the last one wins, as
/// the admin panel sends exactly one) plus the text fields.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Drain a multipart payload into an UploadForm. A part with a filename is
/// the file; everything else is treated as UTF-8 text.
pub async fn read_upload_form(
    mut payload: Multipart,
) -> Result<UploadForm, actix_multipart::MultipartError> {
    let mut form = UploadForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item?;

        let (name, file_name) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().unwrap_or_default().to_string(),
                cd.get_filename().map(|s| s.to_string()),
            ),
            None => (String::new(), None),
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        match file_name {
            Some(file_name) => {
                form.file = Some(UploadedFile {
                    field_name: name,
                    file_name,
                    bytes,
                });
            }
            None => {
                form.fields
                    .insert(name, String::from_utf8_lossy(&bytes).into_owned());
            }
        }
    }

    Ok(form)
}
