//! Multipart intake
//!
//! Turns the multipart body into a [`RelayForm`]. Only framing problems and
//! unreadable file content fail here; missing fields are the pipeline's call.

use crate::core::relay::{
    CLIENT_ID_FIELD, DEVICE_PROFILE_ID_FIELD, FILE_FIELD, LEGACY_CLIENT_ID_FIELD,
    LEGACY_DEVICE_PROFILE_ID_FIELD, RelayForm, StageError, TOKEN_FIELD, UploadedAudio,
};
use crate::utils::format_bytes;
use actix_multipart::{Field, Multipart};
use bytes::BytesMut;
use futures::StreamExt;
use tracing::{debug, warn};

/// Largest accepted text field, in bytes
const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

/// Read every part of the multipart body
///
/// Text fields are decoded lossily as UTF-8. The first occurrence of a field
/// wins and later duplicates are drained. A canonical field name wins over
/// its legacy alias whichever arrives first.
pub async fn read_relay_form(
    mut payload: Multipart,
    max_file_size: usize,
) -> Result<RelayForm, StageError> {
    let mut form = RelayForm::default();
    // Set once the canonical name has been read; aliases never override it
    let mut canonical_profile = false;
    let mut canonical_client = false;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| {
            warn!("Error reading multipart field: {}", e);
            StageError::MissingFilePart(format!("Invalid multipart data: {}", e))
        })?;

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => {
                drain(&mut field).await?;
                continue;
            }
        };

        match field_name.as_str() {
            FILE_FIELD if form.file.is_none() => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .map(str::to_owned);
                let content = read_file(&mut field, max_file_size).await?;
                debug!(
                    filename = filename.as_deref().unwrap_or("-"),
                    size = content.len(),
                    "Received file part"
                );
                form.file = Some(UploadedAudio::new(filename, content));
            }
            TOKEN_FIELD if form.token.is_none() => {
                form.token = Some(read_text(&mut field).await?);
            }
            DEVICE_PROFILE_ID_FIELD if !canonical_profile => {
                form.device_profile_id = Some(read_text(&mut field).await?);
                canonical_profile = true;
            }
            LEGACY_DEVICE_PROFILE_ID_FIELD if form.device_profile_id.is_none() => {
                form.device_profile_id = Some(read_text(&mut field).await?);
            }
            CLIENT_ID_FIELD if !canonical_client => {
                form.client_id = Some(read_text(&mut field).await?);
                canonical_client = true;
            }
            LEGACY_CLIENT_ID_FIELD if form.client_id.is_none() => {
                form.client_id = Some(read_text(&mut field).await?);
            }
            _ => drain(&mut field).await?,
        }
    }

    Ok(form)
}

async fn read_file(field: &mut Field, max_size: usize) -> Result<BytesMut, StageError> {
    let mut data = BytesMut::new();

    while let Some(chunk) = field.next().await {
        let bytes = chunk.map_err(|e| {
            warn!("Error reading file chunk: {}", e);
            StageError::FileOpen(format!("Error reading file: {}", e))
        })?;

        if data.len() + bytes.len() > max_size {
            return Err(StageError::FileOpen(format!(
                "Upload exceeds the {} limit",
                format_bytes(max_size as u64)
            )));
        }
        data.extend_from_slice(&bytes);
    }

    Ok(data)
}

async fn read_text(field: &mut Field) -> Result<String, StageError> {
    let mut data = Vec::new();

    while let Some(chunk) = field.next().await {
        let bytes = chunk.map_err(|e| {
            StageError::MissingFilePart(format!("Invalid multipart data: {}", e))
        })?;

        if data.len() + bytes.len() > MAX_TEXT_FIELD_SIZE {
            return Err(StageError::MissingFilePart(format!(
                "Form field `{}` is too large",
                field.name().unwrap_or_default()
            )));
        }
        data.extend_from_slice(&bytes);
    }

    Ok(String::from_utf8_lossy(&data).into_owned())
}

async fn drain(field: &mut Field) -> Result<(), StageError> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| StageError::MissingFilePart(format!("Invalid multipart data: {}", e)))?;
    }
    Ok(())
}
