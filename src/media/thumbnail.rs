use image::imageops::FilterType;

use crate::api::OrdersClient;
use crate::error::ThumbnailError;

/// Height of product thumbnails on the detail cards
pub const THUMBNAIL_HEIGHT: u32 = 140;

/// Upper bound on thumbnail width so very wide banners stay inside a card
const THUMBNAIL_MAX_WIDTH: u32 = 320;

/// Decoded RGBA pixels ready to hand to an image widget
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Download a product picture and turn it into a thumbnail.
///
/// Decoding runs on the blocking pool so the UI thread never stalls.
pub async fn load_thumbnail(client: OrdersClient, url: String) -> Result<Thumbnail, ThumbnailError> {
    let bytes = client.fetch_bytes(&url).await?;

    tokio::task::spawn_blocking(move || make_thumbnail(&bytes))
        .await
        .map_err(|e| ThumbnailError::Task(e.to_string()))?
}

/// Decode any supported format and fit it into the thumbnail box
pub fn make_thumbnail(bytes: &[u8]) -> Result<Thumbnail, ThumbnailError> {
    let img = image::load_from_memory(bytes).map_err(|e| ThumbnailError::Decode(e.to_string()))?;

    // Never upscale small pictures
    let thumbnail = if img.height() > THUMBNAIL_HEIGHT || img.width() > THUMBNAIL_MAX_WIDTH {
        img.resize(THUMBNAIL_MAX_WIDTH, THUMBNAIL_HEIGHT, FilterType::Lanczos3)
    } else {
        img
    };

    let rgba = thumbnail.to_rgba8();
    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_large_image_is_scaled_to_height() {
        let thumb = make_thumbnail(&png(280, 560)).unwrap();
        assert_eq!(thumb.height, THUMBNAIL_HEIGHT);
        assert_eq!(thumb.width, 70);
        assert_eq!(thumb.rgba.len(), (thumb.width * thumb.height * 4) as usize);
    }

    #[test]
    fn test_small_image_is_not_upscaled() {
        let thumb = make_thumbnail(&png(40, 30)).unwrap();
        assert_eq!((thumb.width, thumb.height), (40, 30));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        assert!(matches!(
            make_thumbnail(b"definitely not a picture"),
            Err(ThumbnailError::Decode(_))
        ));
    }
}
