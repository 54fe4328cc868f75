//! Download and decode the displayed image into a terminal-sized preview

use image::imageops::FilterType;

use crate::error::PreviewError;
use crate::state::ImagePreview;

/// Pixel columns in a preview (one per terminal cell)
pub const PREVIEW_WIDTH: u32 = 64;
/// Pixel rows in a preview (two per terminal cell)
pub const PREVIEW_HEIGHT: u32 = 32;

pub async fn fetch_preview(url: &str) -> Result<ImagePreview, PreviewError> {
    let bytes = download(url).await?;
    let url = url.to_string();
    tokio::task::spawn_blocking(move || decode_preview(&bytes, &url))
        .await
        .map_err(|e| PreviewError::Download(e.to_string()))?
}

async fn download(url: &str) -> Result<Vec<u8>, PreviewError> {
    let response = crate::api::http_client()
        .get(url)
        .send()
        .await
        .map_err(|e| PreviewError::Download(e.to_string()))?
        .error_for_status()
        .map_err(|e| PreviewError::Download(e.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| PreviewError::Download(e.to_string()))?;
    Ok(bytes.to_vec())
}

/// Crop-to-fill the decoded image into a `PREVIEW_WIDTH` x `PREVIEW_HEIGHT` grid.
pub fn decode_preview(bytes: &[u8], url: &str) -> Result<ImagePreview, PreviewError> {
    let image = image::load_from_memory(bytes)?;
    let rgb = image
        .resize_to_fill(PREVIEW_WIDTH, PREVIEW_HEIGHT, FilterType::Triangle)
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb.pixels().map(|p| p.0).collect();

    Ok(ImagePreview {
        url: url.to_string(),
        width,
        height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([10, 120, 200]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_decode_scales_to_preview_grid() {
        let preview = decode_preview(&png_bytes(300, 120), "https://img.example/a.png").unwrap();

        assert_eq!(preview.width, PREVIEW_WIDTH);
        assert_eq!(preview.height, PREVIEW_HEIGHT);
        assert_eq!(preview.pixels.len(), (PREVIEW_WIDTH * PREVIEW_HEIGHT) as usize);
        assert_eq!(preview.pixel(0, 0), Some([10, 120, 200]));
        assert_eq!(preview.url, "https://img.example/a.png");
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = decode_preview(b"<html>not an image</html>", "x").unwrap_err();
        assert!(matches!(err, PreviewError::Decode(_)));
    }
}
