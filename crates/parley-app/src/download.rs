//! Saving generated images to disk for `/save`.

use std::path::{Path, PathBuf};

use parley_common::ParleyError;

/// File name for the `index`-th of `count` images saved at `millis`.
pub fn image_file_name(millis: i64, index: usize, count: usize) -> String {
    if count <= 1 {
        format!("generated-image-{millis}.jpg")
    } else {
        format!("generated-image-{millis}-{}.jpg", index + 1)
    }
}

/// Fetch every URL and write it into `dir`. Returns the written paths in
/// URL order; the first failure aborts the rest.
pub async fn save_images(
    http: &reqwest::Client,
    urls: &[String],
    dir: &Path,
) -> Result<Vec<PathBuf>, ParleyError> {
    tokio::fs::create_dir_all(dir).await?;
    let millis = chrono::Utc::now().timestamp_millis();

    let mut saved = Vec::with_capacity(urls.len());
    for (index, url) in urls.iter().enumerate() {
        let bytes = fetch(http, url).await?;
        let path = dir.join(image_file_name(millis, index, urls.len()));
        tokio::fs::write(&path, &bytes).await?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "image saved");
        saved.push(path);
    }
    Ok(saved)
}

async fn fetch(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, ParleyError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| ParleyError::Network(e.without_url().to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ParleyError::Network(format!("image download failed: HTTP {status}")));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ParleyError::Network(e.without_url().to_string()))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_image_name_has_timestamp_only() {
        assert_eq!(
            image_file_name(1_700_000_000_000, 0, 1),
            "generated-image-1700000000000.jpg"
        );
    }

    #[test]
    fn multiple_images_are_numbered() {
        assert_eq!(image_file_name(42, 0, 2), "generated-image-42-1.jpg");
        assert_eq!(image_file_name(42, 1, 2), "generated-image-42-2.jpg");
    }

    #[tokio::test]
    async fn nothing_to_save_creates_directory_only() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("images");
        let saved = save_images(&reqwest::Client::new(), &[], &dir).await.unwrap();
        assert!(saved.is_empty());
        assert!(dir.is_dir());
    }
}
