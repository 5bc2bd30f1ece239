/// Product media module
///
/// This module handles:
/// - Downloading product pictures referenced by line items
/// - Decoding and resizing them into thumbnails off the UI thread

pub mod thumbnail;
