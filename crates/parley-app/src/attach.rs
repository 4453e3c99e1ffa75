//! Reading an image from disk for `/image`.

use std::path::Path;

use parley_ai::ImageAttachment;
use parley_common::ParleyError;

/// Upper bound on attachment size; inline image data must fit one request.
const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// Load `path` as an image attachment, inferring the MIME type from the
/// extension.
pub async fn load_image(path: &Path) -> Result<ImageAttachment, ParleyError> {
    let mime = mime_guess::from_path(path)
        .first()
        .filter(|m| m.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| ParleyError::Attachment(format!("{} is not an image", path.display())))?;

    let size = tokio::fs::metadata(path).await?.len();
    if size == 0 {
        return Err(ParleyError::Attachment(format!("{} is empty", path.display())));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ParleyError::Attachment(format!(
            "{} is too large ({size} bytes, limit {MAX_IMAGE_BYTES})",
            path.display()
        )));
    }

    let data = tokio::fs::read(path).await?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".into());

    tracing::debug!(name = %name, mime = %mime, bytes = data.len(), "image attached");
    Ok(ImageAttachment::new(name, mime.essence_str(), data))
}
