//! Built-in provider entries.

use super::worldview::WmsRequest;
use super::{CatalogEntry, CatalogError, Sample};
use crate::metadata::SampleMetadata;

const EARTH_OBSERVATORY_URL: &str =
    "https://earthobservatory.nasa.gov/ContentFeature/BlueMarble/Images/land_ocean_ice_2048.jpg";

const WRI_SAMPLE_URLS: &[&str] = &[
    "https://datasets.wri.org/dataset/8f6b2c8e-e5b6-4c5e-8b7b-21f5b7a3b0ba/resource/8f37a987-b2e0-4a11-9d53-8b0d2050b1fe/download/sample.csv",
];

/// Provider entries in the order they are processed.
pub fn builtin_entries(worldview_date: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    Ok(vec![
        worldview(worldview_date)?,
        earth_observatory(),
        wri(),
        no_sample(
            "NASA SEDAC",
            "sedac",
            "https://sedac.ciesin.columbia.edu/",
            "SEDAC datasets often require login. Create a free account at https://sedac.ciesin.columbia.edu/.\n\
             Once downloaded, place a small sample file here and document it in a metadata JSON.\n",
        ),
        no_sample(
            "WorldPop",
            "worldpop",
            "https://www.worldpop.org/",
            "WorldPop provides country-level population rasters. Visit https://www.worldpop.org/ to download a small country tile.\n\
             Place the file here and add a metadata JSON noting the source and license.\n",
        ),
        no_sample(
            "GHSL (EU Copernicus)",
            "ghsl",
            "https://ghsl.jrc.ec.europa.eu/",
            "GHSL (EU Copernicus) provides population and built-up layers. Visit https://ghsl.jrc.ec.europa.eu/.\n\
             Download a small tile (e.g., a small country or region) and place it here with metadata.\n",
        ),
        no_sample(
            "Copernicus Services Catalogue",
            "eu_copernicus",
            "https://www.copernicus.eu/en/access-data/copernicus-services-catalogue",
            "Copernicus Services Catalogue contains many datasets. Visit https://www.copernicus.eu/en/access-data/copernicus-services-catalogue.\n\
             Download a small, relevant sample and document license and attribution.\n",
        ),
        no_sample(
            "UN-Habitat Earth Observations Toolkit",
            "eotoolkit",
            "https://eotoolkit.unhabitat.org/",
            "UN-Habitat Earth Observations Toolkit: https://eotoolkit.unhabitat.org/.\n\
             Identify a relevant resource and place a small sample or a link with documentation here.\n",
        ),
    ])
}

fn worldview(date: &str) -> Result<CatalogEntry, CatalogError> {
    let req = WmsRequest::truecolor(date)?;
    let metadata = SampleMetadata::new("NASA GIBS / Worldview")
        .layer(&req.layer)
        .projection(&req.crs)
        .bbox(req.bbox)
        .size([req.width, req.height])
        .format(&req.format)
        .license("Publicly available imagery via NASA GIBS; see NASA usage policies");
    Ok(CatalogEntry {
        provider: "NASA GIBS / Worldview".to_string(),
        slug: "worldview".to_string(),
        docs_url: "https://worldview.earthdata.nasa.gov/".to_string(),
        sample: Some(Sample {
            urls: vec![req.url()],
            file_name: format!("worldview_truecolor_{date}.png"),
            metadata,
        }),
        placeholder: format!(
            "Open https://worldview.earthdata.nasa.gov/ and export a 512x512 PNG of the\n\
             {} layer over New York City for {date}.\n",
            req.layer
        ),
    })
}

fn earth_observatory() -> CatalogEntry {
    CatalogEntry {
        provider: "NASA Earth Observatory".to_string(),
        slug: "earth_observatory".to_string(),
        docs_url: "https://earthobservatory.nasa.gov/".to_string(),
        sample: Some(Sample {
            urls: vec![EARTH_OBSERVATORY_URL.to_string()],
            file_name: "sample_earth_observatory.jpg".to_string(),
            metadata: SampleMetadata::new("NASA Earth Observatory")
                .title("Blue Marble (sample image)")
                .license("Please see NASA Earth Observatory usage guidelines"),
        }),
        placeholder: "Image URLs on Earth Observatory change from time to time. Pick a small\n\
                      preview-sized image from https://earthobservatory.nasa.gov/ and place it here.\n"
            .to_string(),
    }
}

fn wri() -> CatalogEntry {
    CatalogEntry {
        provider: "World Resources Institute (WRI) Data Explorer".to_string(),
        slug: "wri".to_string(),
        docs_url: "https://data.wri.org/".to_string(),
        sample: Some(Sample {
            urls: WRI_SAMPLE_URLS.iter().map(|u| u.to_string()).collect(),
            file_name: "wri_sample.csv".to_string(),
            metadata: SampleMetadata::new("World Resources Institute (WRI) Data Explorer").notes(
                "Small sample CSV for demonstration; replace with a project-relevant dataset",
            ),
        }),
        placeholder: "Please visit https://data.wri.org/ and download a small CSV, then place it here as wri_sample.csv.\n"
            .to_string(),
    }
}

fn no_sample(provider: &str, slug: &str, docs_url: &str, placeholder: &str) -> CatalogEntry {
    CatalogEntry {
        provider: provider.to_string(),
        slug: slug.to_string(),
        docs_url: docs_url.to_string(),
        sample: None,
        placeholder: placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worldview_file_name_tracks_date() {
        let e = worldview("2021-07-04").unwrap();
        let sample = e.sample.unwrap();
        assert_eq!(sample.file_name, "worldview_truecolor_2021-07-04.png");
        assert!(sample.urls[0].contains("TIME=2021-07-04"));
        assert_eq!(sample.metadata.size, Some([512, 512]));
    }

    #[test]
    fn placeholder_only_providers_have_no_sample() {
        let entries = builtin_entries("2020-01-01").unwrap();
        let without: Vec<_> = entries
            .iter()
            .filter(|e| e.sample.is_none())
            .map(|e| e.slug.as_str())
            .collect();
        assert_eq!(without, ["sedac", "worldpop", "ghsl", "eu_copernicus", "eotoolkit"]);
    }

    #[test]
    fn every_entry_has_docs_link_and_instructions() {
        for e in builtin_entries("2020-01-01").unwrap() {
            assert!(e.docs_url.starts_with("https://"), "{}", e.slug);
            assert!(e.placeholder.ends_with('\n'), "{}", e.slug);
        }
    }

    #[test]
    fn bad_date_is_rejected() {
        assert_eq!(
            builtin_entries("01/01/2020").unwrap_err(),
            CatalogError::InvalidDate("01/01/2020".to_string())
        );
    }
}
