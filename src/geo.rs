//! Geolocation overlay composition
//!
//! Deduplicates the customer geolocation table and packages the points
//! with the map extent the presentation layer draws them over. The
//! backdrop image itself is fetched through a byte-stream provider so the
//! rendering side never hard-codes a transport.

use crate::error::Result;
use crate::types::GeoPoint;
use hashbrown::HashSet;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Geographic bounding box for the scatter backdrop, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapExtent {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

/// Extent of the Brazil backdrop image used by the dashboard
pub const BRAZIL_EXTENT: MapExtent = MapExtent {
    west: -73.982_830_55,
    east: -33.8,
    south: -33.751_169_44,
    north: 5.4,
};

/// Deduplicated point set ready for scatter rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoOverlay {
    pub points: Vec<GeoPoint>,
    pub extent: MapExtent,
}

/// Keep exactly one point per distinct customer.
///
/// Invariant: the first occurrence in input order wins; the loader
/// preserves file row order so this is deterministic for a given file.
/// Idempotent: applying it to its own output is a no-op.
pub fn dedupe_points(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(points.len());
    let mut unique = Vec::new();

    for point in points {
        if seen.insert(point.customer_unique_id.as_str()) {
            unique.push(point.clone());
        }
    }

    unique
}

/// Compose the overlay for the Brazil backdrop.
pub fn compose_overlay(points: &[GeoPoint]) -> GeoOverlay {
    GeoOverlay {
        points: dedupe_points(points),
        extent: BRAZIL_EXTENT,
    }
}

/// Byte-stream provider for the backdrop image
pub trait MapImageProvider: Send + Sync {
    /// Fetch the raw image bytes
    fn fetch(&self) -> Result<Vec<u8>>;
}

/// Backdrop image read from a local file
#[derive(Debug, Clone)]
pub struct FileMapImage {
    path: PathBuf,
}

impl FileMapImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MapImageProvider for FileMapImage {
    fn fetch(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }
}

/// Backdrop image fetched over HTTP
#[cfg(feature = "async")]
pub struct HttpMapImage {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "async")]
impl HttpMapImage {
    /// URL of the Brazil backdrop used by the original dashboard
    pub const DEFAULT_URL: &'static str =
        "https://i.pinimg.com/originals/3a/0c/e1/3a0ce18b3c842748c255bc0aa445ad41.jpg";

    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                crate::error::DashboardError::Data(format!("Failed to create HTTP client: {}", e))
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch the image bytes
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            crate::error::DashboardError::Data(format!("Backdrop fetch failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(crate::error::DashboardError::Data(format!(
                "Backdrop fetch returned {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            crate::error::DashboardError::Data(format!("Backdrop read failed: {}", e))
        })?;
        Ok(bytes.to_vec())
    }
}
