//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use photosift::adapters::Catalog;
use photosift::models::Photo;
use photosift::screens::{GridViewState, PhotoGridScreen};
use tempfile::NamedTempFile;

/// How long a test waits for a derived value before failing.
pub const SETTLE: Duration = Duration::from_secs(1);

/// Catalog JSON with `count` photos tagged "beach".
///
/// Photo `n` gets scenes labels `beach` (0.9) and `sunset` (0.03), an
/// objects label `umbrella` (0.5), and, for even `n`, a faces label.
/// Every third photo is also tagged "summer".
pub fn beach_catalog_json(count: usize) -> String {
    let photos: Vec<serde_json::Value> = (0..count)
        .map(|n| {
            let mut labels = serde_json::json!({
                "scenes": [["beach", 0.9], ["sunset", 0.03]],
                "objects": [["umbrella", 0.5]],
            });
            if n % 2 == 0 {
                labels["faces"] = serde_json::json!([["smile", 0.7]]);
            }
            serde_json::json!({
                "id": n,
                "tags": ["beach", if n % 3 == 0 { "summer" } else { "winter" }],
                "taken_at": "2024-07-02T10:15:00Z",
                "image_base64": "AQIDBA==",
                "labels": labels,
            })
        })
        .collect();
    serde_json::json!({ "photos": photos }).to_string()
}

pub fn beach_catalog(count: usize) -> Arc<Catalog> {
    Arc::new(Catalog::from_json(&beach_catalog_json(count)).expect("fixture catalog parses"))
}

/// Write `contents` to a temp file that lives as long as the handle.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    std::io::Write::write_all(&mut file, contents.as_bytes()).expect("write temp file");
    file
}

/// Wait for the grid's navigation to update, then snapshot it.
pub async fn settled(grid: &mut PhotoGridScreen) -> GridViewState {
    tokio::time::timeout(SETTLE, grid.changed())
        .await
        .expect("navigation did not update")
        .expect("grid is visible");
    grid.sync().expect("grid is visible")
}

pub fn ids(photos: &[Photo]) -> Vec<String> {
    photos.iter().map(|photo| photo.id.to_string()).collect()
}
