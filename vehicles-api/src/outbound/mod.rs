//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: in-process car store
//! - **pricing**: reqwest client for the pricing service
//! - **maps**: reqwest client for the maps service plus a coordinate-derived mock
//!
//! Adapters translate between domain types and transport representations.
//! They contain no business logic.

pub mod maps;
pub mod persistence;
pub mod pricing;

/// Whitespace-compacted, length-capped rendering of an error body for logs.
fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

/// `status 503` or `status 503: <preview>`.
fn status_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_compacts_and_truncates() {
        assert_eq!(body_preview(b"  a \n b  "), "a b");
        let long = "x".repeat(200);
        let preview = body_preview(long.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }
}
