//! Command-line image listing.

use std::io::Write;

use tokio::sync::mpsc;

use crate::sources::{ApiFieldError, DataSource};
use crate::state::types::Image;
use crate::store::request_images;

/// What: Format one image as a tab-separated line.
///
/// Inputs:
/// - `img`: Image to print.
///
/// Output:
/// - `id<TAB>label<TAB>vendor<TAB>size MB`, with `-` for a missing vendor.
#[must_use]
pub fn image_line(img: &Image) -> String {
    format!(
        "{}\t{}\t{}\t{} MB",
        img.id,
        img.label,
        img.vendor.as_deref().unwrap_or("-"),
        img.size
    )
}

/// What: Fetch every image and print it to stdout.
///
/// Inputs:
/// - `source`: Where images come from.
///
/// Output:
/// - Number of images printed.
///
/// # Errors
/// - Returns the normalized API errors when the fetch fails.
///
/// Details:
/// - Goes through the same request flow as the TUI so failures carry the same messages.
pub async fn handle_list_images(source: &DataSource) -> Result<usize, Vec<ApiFieldError>> {
    tracing::info!(source = %source.describe(), "image listing requested from CLI");
    let (tx, _rx) = mpsc::unbounded_channel();
    let images = request_images(source.load_images(), &tx).await?;
    let mut out = std::io::stdout().lock();
    for img in &images {
        let _ = writeln!(out, "{}", image_line(img));
    }
    Ok(images.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_line_formats_missing_vendor() {
        let img = Image {
            id: "private/7".into(),
            label: "golden".into(),
            description: None,
            size: 2500,
            is_public: false,
            kind: "manual".into(),
            vendor: None,
            created: None,
            deprecated: false,
        };
        assert_eq!(image_line(&img), "private/7\tgolden\t-\t2500 MB");
    }
}
