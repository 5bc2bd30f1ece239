/// View layer
///
/// Pure functions from screen state to iced widgets:
/// - `list` draws the paginated order table
/// - `detail` draws the selected order and its product cards

use iced::widget::image::Handle;
use std::collections::HashMap;

pub mod detail;
pub mod list;

/// Per-URL state of a product picture
#[derive(Debug, Clone)]
pub enum ThumbnailSlot {
    Loading,
    Ready(Handle),
    Failed,
}

/// Product pictures fetched so far, keyed by URL
pub type Thumbnails = HashMap<String, ThumbnailSlot>;

/// Drop failed pictures so the next session retries them
pub fn forget_failed(thumbnails: &mut Thumbnails) {
    thumbnails.retain(|_, slot| !matches!(slot, ThumbnailSlot::Failed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forget_failed_keeps_loaded_pictures() {
        let mut thumbnails = Thumbnails::new();
        thumbnails.insert("a".into(), ThumbnailSlot::Ready(Handle::from_rgba(1, 1, vec![0; 4])));
        thumbnails.insert("b".into(), ThumbnailSlot::Failed);
        thumbnails.insert("c".into(), ThumbnailSlot::Loading);

        forget_failed(&mut thumbnails);

        assert!(matches!(thumbnails.get("a"), Some(ThumbnailSlot::Ready(_))));
        assert!(thumbnails.get("b").is_none());
        assert!(matches!(thumbnails.get("c"), Some(ThumbnailSlot::Loading)));
    }
}
