//! Dataset loading from a URL or a local file.

use anyhow::Context;
use fwd_data::{Dataset, LoadError};
use log::info;
use std::time::Duration;

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch(url: &str) -> Result<String, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| LoadError::Fetch(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LoadError::Status {
            status: response.status().as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))
}

/// Load and parse the dataset named by `source`.
pub async fn load(source: &str) -> anyhow::Result<Dataset> {
    info!("Loading dataset from {}", source);
    let body = if is_url(source) {
        fetch(source).await
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))
    }
    .with_context(|| format!("Failed to load dataset from {}", source))?;

    let dataset = Dataset::from_json(&body)
        .with_context(|| format!("Failed to parse dataset from {}", source))?;
    info!("Loaded {} records", dataset.len());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/sample_app_data.json");

    #[test]
    fn urls_are_recognized() {
        assert!(is_url("https://example.com/data.json"));
        assert!(is_url("http://localhost:8080/data.json"));
        assert!(!is_url("fixtures/sample_app_data.json"));
        assert!(!is_url("./https.json"));
    }

    #[tokio::test]
    async fn loads_local_fixture() {
        let dataset = load(FIXTURE).await.unwrap();
        assert_eq!(dataset.len(), 26);
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let err = load("/definitely/not/here.json").await.unwrap_err();
        assert!(err.to_string().contains("Failed to load dataset"));
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::Fetch(_))
        ));
    }
}
