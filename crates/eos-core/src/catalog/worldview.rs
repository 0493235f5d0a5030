//! NASA GIBS WMS GetMap request builder for the Worldview snapshot.

use super::CatalogError;
use chrono::{Datelike, NaiveDate};

pub const GIBS_WMS_ENDPOINT: &str = "https://gibs.earthdata.nasa.gov/wms/epsg4326/best/wms.cgi";
pub const TRUECOLOR_LAYER: &str = "MODIS_Terra_CorrectedReflectance_TrueColor";

/// Small bbox around New York City (lat/lon order, as WMS 1.3.0 expects for EPSG:4326).
const NYC_BBOX: [f64; 4] = [40.4, -74.4, 41.0, -73.6];

#[derive(Debug, Clone, PartialEq)]
pub struct WmsRequest {
    pub layer: String,
    pub bbox: [f64; 4],
    pub width: u32,
    pub height: u32,
    pub crs: String,
    pub format: String,
    pub time: String,
}

impl WmsRequest {
    /// 512x512 MODIS Terra true-color tile over New York City on `date`.
    pub fn truecolor(date: &str) -> Result<Self, CatalogError> {
        validate_date(date)?;
        Ok(Self {
            layer: TRUECOLOR_LAYER.to_string(),
            bbox: NYC_BBOX,
            width: 512,
            height: 512,
            crs: "EPSG:4326".to_string(),
            format: "image/png".to_string(),
            time: date.to_string(),
        })
    }

    /// GetMap URL. Query values are form-encoded (`image%2Fpng`, `EPSG%3A4326`,
    /// comma-separated BBOX as `%2C`), which GIBS decodes like the literal form.
    pub fn url(&self) -> String {
        let bbox = self
            .bbox
            .iter()
            .map(|v| format!("{:?}", v))
            .collect::<Vec<_>>()
            .join(",");
        let width = self.width.to_string();
        let height = self.height.to_string();
        let params: [(&str, &str); 12] = [
            ("SERVICE", "WMS"),
            ("REQUEST", "GetMap"),
            ("VERSION", "1.3.0"),
            ("LAYERS", self.layer.as_str()),
            ("STYLES", ""),
            ("FORMAT", self.format.as_str()),
            ("TRANSPARENT", "TRUE"),
            ("HEIGHT", height.as_str()),
            ("WIDTH", width.as_str()),
            ("CRS", self.crs.as_str()),
            ("BBOX", bbox.as_str()),
            ("TIME", self.time.as_str()),
        ];
        match url::Url::parse_with_params(GIBS_WMS_ENDPOINT, params.iter()) {
            Ok(u) => u.into(),
            // The endpoint is a constant; parsing cannot fail.
            Err(_) => GIBS_WMS_ENDPOINT.to_string(),
        }
    }
}

/// Accepts a real calendar date written as zero-padded `YYYY-MM-DD`.
pub fn validate_date(date: &str) -> Result<(), CatalogError> {
    let invalid = || CatalogError::InvalidDate(date.to_string());
    // chrono also accepts unpadded fields (`2020-1-01`).
    if date.len() != 10 {
        return Err(invalid());
    }
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())?;
    if parsed.year() < 1 {
        return Err(invalid());
    }
    Ok(())
}
