//! Plain-text renderings of photos returned to tool callers.

use std::fmt::Write;

use crate::unsplash::Photo;

/// URL sizes listed first in summaries, in this order.
const PREFERRED_SIZES: [&str; 4] = ["small", "regular", "full", "raw"];

/// Compact block used by search and random results.
pub fn photo_summary(photo: &Photo) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "- ID: {}", photo.id());

    let description = match photo.description() {
        "" => photo.alt_description(),
        description => description,
    };
    if !description.is_empty() {
        let _ = writeln!(out, "  Description: {description}");
    }

    let _ = writeln!(out, "  Size: {}x{}", photo.width(), photo.height());
    let _ = writeln!(out, "  URLs:");

    let urls = photo.urls();
    for size in PREFERRED_SIZES {
        if let Some(url) = urls.get(size) {
            let _ = writeln!(out, "    {size}: {url}");
        }
    }

    let mut rest: Vec<_> = urls
        .iter()
        .filter(|(size, _)| !PREFERRED_SIZES.contains(&size.as_str()))
        .collect();
    rest.sort();
    for (size, url) in rest {
        let _ = writeln!(out, "    {size}: {url}");
    }

    out
}

/// Full view used by `get_photo`.
pub fn photo_details(photo: &Photo) -> String {
    let mut out = String::from("Photo Details:\n\n");

    let _ = writeln!(out, "- ID: {}", photo.id());
    if !photo.description().is_empty() {
        let _ = writeln!(out, "- Description: {}", photo.description());
    }
    if !photo.alt_description().is_empty() {
        let _ = writeln!(out, "- Alt Description: {}", photo.alt_description());
    }
    let _ = writeln!(out, "- Size: {}x{}", photo.width(), photo.height());
    let _ = writeln!(out, "- Likes: {}", photo.likes());
    if let Some(downloads) = photo.downloads() {
        let _ = writeln!(out, "- Downloads: {downloads}");
    }

    if let Some(user) = photo.user() {
        out.push_str("\nPhotographer:\n");
        let _ = writeln!(out, "- Name: {}", user.name());
        let _ = writeln!(out, "- Username: @{}", user.username());
        if !user.portfolio_url().is_empty() {
            let _ = writeln!(out, "- Portfolio: {}", user.portfolio_url());
        }
    }

    if let Some(location) = photo.location().filter(|location| !location.is_empty()) {
        out.push_str("\nLocation:\n");
        line(&mut out, "Name", location.name());
        line(&mut out, "City", location.city());
        line(&mut out, "Country", location.country());
    }

    if let Some(exif) = photo.exif().filter(|exif| !exif.is_empty()) {
        out.push_str("\nCamera Info:\n");
        line(&mut out, "Camera Make", exif.make());
        line(&mut out, "Camera Model", exif.model());
        line(&mut out, "Exposure Time", exif.exposure_time());
        line(&mut out, "Aperture", exif.aperture());
        line(&mut out, "Focal Length", exif.focal_length());
        if let Some(iso) = exif.iso() {
            let _ = writeln!(out, "- ISO: {iso}");
        }
    }

    out.push_str("\nURLs:\n");
    for (size, url) in photo.urls() {
        let _ = writeln!(out, "- {size}: {url}");
    }

    if !photo.tags().is_empty() {
        out.push_str("\nTags:\n");
        for tag in photo.tags() {
            let _ = writeln!(out, "- {}", tag.title());
        }
    }

    out
}

fn line(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        let _ = writeln!(out, "- {label}: {value}");
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn photo(value: Value) -> Photo {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn summary_lists_preferred_sizes_first() {
        let photo = photo(json!({
            "id": "p1",
            "width": 640,
            "height": 480,
            "urls": {"full": "f", "small": "s", "thumb": "t"},
        }));

        let summary = photo_summary(&photo);
        assert_eq!(
            summary,
            "- ID: p1\n  Size: 640x480\n  URLs:\n    small: s\n    full: f\n    thumb: t\n"
        );
    }

    #[test]
    fn summary_falls_back_to_alt_description() {
        let with_alt = photo(json!({"id": "p", "description": "", "alt_description": "a dog"}));
        assert!(photo_summary(&with_alt).contains("  Description: a dog\n"));

        let with_both = photo(json!({"id": "p", "description": "mine", "alt_description": "a dog"}));
        let summary = photo_summary(&with_both);
        assert!(summary.contains("  Description: mine\n"));
        assert!(!summary.contains("a dog"));

        let with_none = photo(json!({"id": "p", "description": null}));
        assert!(!photo_summary(&with_none).contains("Description"));
    }

    #[test]
    fn details_show_both_descriptions() {
        let photo = photo(json!({
            "id": "p",
            "description": "mine",
            "alt_description": "a dog",
            "likes": 3,
            "downloads": 12,
        }));

        let details = photo_details(&photo);
        assert!(details.starts_with("Photo Details:\n\n- ID: p\n"));
        assert!(details.contains("- Description: mine\n"));
        assert!(details.contains("- Alt Description: a dog\n"));
        assert!(details.contains("- Likes: 3\n"));
        assert!(details.contains("- Downloads: 12\n"));
    }

    #[test]
    fn details_omit_missing_downloads() {
        let photo = photo(json!({"id": "p"}));
        assert!(!photo_details(&photo).contains("Downloads"));
    }

    #[test]
    fn details_omit_empty_location() {
        let photo = photo(json!({
            "id": "p",
            "location": {"name": "", "city": "", "country": ""},
        }));
        assert!(!photo_details(&photo).contains("Location:"));
    }

    #[test]
    fn details_show_only_populated_location_fields() {
        let photo = photo(json!({
            "id": "p",
            "location": {"name": null, "city": "Oslo", "country": "Norway"},
        }));

        let details = photo_details(&photo);
        assert!(details.contains("\nLocation:\n- City: Oslo\n- Country: Norway\n"));
        assert!(!details.contains("- Name:"));
    }

    #[test]
    fn details_omit_camera_info_for_zero_iso() {
        let photo = photo(json!({
            "id": "p",
            "exif": {"make": "", "model": "", "exposure_time": "", "aperture": "", "focal_length": "", "iso": 0},
        }));
        assert!(!photo_details(&photo).contains("Camera Info:"));
    }

    #[test]
    fn details_show_iso_alone() {
        let photo = photo(json!({"id": "p", "exif": {"iso": 400}}));

        let details = photo_details(&photo);
        assert!(details.contains("\nCamera Info:\n- ISO: 400\n\nURLs:\n"));
    }

    #[test]
    fn details_render_photographer_and_tags() {
        let photo = photo(json!({
            "id": "p",
            "user": {"name": "Jane Doe", "username": "jane", "portfolio_url": "https://jane.example"},
            "urls": {"raw": "r"},
            "tags": [{"title": "cat"}, {"title": "window"}],
        }));

        let details = photo_details(&photo);
        assert!(details.contains(
            "\nPhotographer:\n- Name: Jane Doe\n- Username: @jane\n- Portfolio: https://jane.example\n"
        ));
        assert!(details.contains("\nURLs:\n- raw: r\n"));
        assert!(details.ends_with("\nTags:\n- cat\n- window\n"));
    }

    #[test]
    fn details_skip_empty_portfolio() {
        let photo = photo(json!({
            "id": "p",
            "user": {"name": "Jane", "username": "jane", "portfolio_url": null},
        }));
        assert!(!photo_details(&photo).contains("Portfolio"));
    }
}
