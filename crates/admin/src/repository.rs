//! Data access for the remote preset collection resource.
//!
//! [`HttpPresetRepository`] performs exactly one HTTP attempt per call: no
//! retries, no backoff, no timeout. It reports success or failure and leaves
//! all business meaning to the controller.

use async_trait::async_trait;
use lutshop_core::preset::PresetRecord;
use lutshop_core::types::DbId;
use serde_json::Value;

use crate::config::AdminConfig;
use crate::error::AdminError;

/// Result of a list call that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The server answered successfully with these records (possibly none).
    Loaded(Vec<PresetRecord>),
    /// The server answered with a non-success status. Recoverable: callers
    /// keep whatever they already had.
    Unavailable { status: u16 },
}

/// The three operations the admin screen performs against the collection.
#[async_trait]
pub trait PresetRepository: Send + Sync {
    /// Fetch the full collection.
    async fn list(&self) -> Result<Listing, AdminError>;

    /// Submit a draft as a new record and return it with its assigned id.
    async fn create(&self, record: &PresetRecord) -> Result<PresetRecord, AdminError>;

    /// Replace record `id` with `record` in full.
    async fn update(&self, id: DbId, record: &PresetRecord) -> Result<(), AdminError>;
}

/// [`PresetRepository`] over HTTP with JSON bodies.
pub struct HttpPresetRepository {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPresetRepository {
    pub fn new(config: &AdminConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing [`reqwest::Client`] (and its connection pool).
    pub fn with_client(client: reqwest::Client, config: &AdminConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn item_url(&self, id: DbId) -> String {
        format!("{}/{id}", self.endpoint)
    }

    /// Turn a non-success status into a [`AdminError::Submit`] carrying the
    /// status and body text.
    async fn ensure_submitted(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, AdminError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AdminError::Submit(format!("HTTP {}: {body}", status.as_u16())));
        }
        Ok(response)
    }
}

#[async_trait]
impl PresetRepository for HttpPresetRepository {
    async fn list(&self) -> Result<Listing, AdminError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| AdminError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Preset list returned no data");
            return Ok(Listing::Unavailable {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AdminError::Fetch(e.to_string()))?;
        let presets = presets_from_body(body);
        tracing::debug!(count = presets.len(), "Fetched presets");
        Ok(Listing::Loaded(presets))
    }

    async fn create(&self, record: &PresetRecord) -> Result<PresetRecord, AdminError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| AdminError::Submit(e.to_string()))?;
        let response = Self::ensure_submitted(response).await?;

        // The body is informational; a success status already means created.
        let body: Value = response.json().await.unwrap_or(Value::Null);
        match assigned_id(&body) {
            Some(id) => {
                tracing::info!(id, name = %record.name, "Preset created");
                Ok(record.with_id(id))
            }
            None => {
                tracing::warn!(name = %record.name, "Create response carried no id");
                Ok(record.clone())
            }
        }
    }

    async fn update(&self, id: DbId, record: &PresetRecord) -> Result<(), AdminError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(record)
            .send()
            .await
            .map_err(|e| AdminError::Submit(e.to_string()))?;
        Self::ensure_submitted(response).await?;
        tracing::info!(id, is_active = record.is_active, "Preset updated");
        Ok(())
    }
}

/// Records under the body's `presets` field. A missing or non-array field
/// reads as an empty list; rows that do not parse are skipped.
fn presets_from_body(mut body: Value) -> Vec<PresetRecord> {
    let Some(Value::Array(rows)) = body.get_mut("presets").map(Value::take) else {
        tracing::warn!("Presets field missing or not a list, treating as empty");
        return Vec::new();
    };
    rows.into_iter()
        .filter_map(|row| {
            serde_json::from_value(row)
                .map_err(|e| tracing::warn!(error = %e, "Skipping malformed preset row"))
                .ok()
        })
        .collect()
}

/// The id the server assigned, from either `{"id": N}` or a full record body.
fn assigned_id(body: &Value) -> Option<DbId> {
    body.get("id")
        .and_then(Value::as_i64)
        .or_else(|| body.get("preset").and_then(|p| p.get("id")).and_then(Value::as_i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn presets_from_body_reads_records() {
        let body = json!({"presets": [
            {"id": 1, "name": "Cinematic", "preset_file_url": "https://cdn/1.cube"},
            {"id": 2, "name": "Sunset Glow", "preset_file_url": "https://cdn/2.cube"}
        ]});
        let presets = presets_from_body(body);
        assert_eq!(presets.len(), 2);
        assert_eq!(presets[1].name, "Sunset Glow");
    }

    #[test]
    fn presets_from_body_missing_field_is_empty() {
        assert!(presets_from_body(json!({})).is_empty());
    }

    #[test]
    fn presets_from_body_malformed_field_is_empty() {
        assert!(presets_from_body(json!({"presets": "oops"})).is_empty());
        assert!(presets_from_body(json!({"presets": null})).is_empty());
        assert!(presets_from_body(json!({"presets": [{"id": "x"}]})).is_empty());
    }

    #[test]
    fn presets_from_body_reads_rows_with_null_fields() {
        let body = json!({"presets": [
            {"id": 1, "name": "Cinematic", "preset_file_url": "https://cdn/1.cube"},
            {"id": 2, "name": "Sunset", "preset_file_url": "u",
             "preview_image_url": null, "description": null}
        ]});
        let presets = presets_from_body(body);
        assert_eq!(presets.len(), 2);
        assert_eq!(presets[1].id, Some(2));
        assert_eq!(presets[1].description, "");
        assert_eq!(presets[1].preview_image_url, "");
    }

    #[test]
    fn presets_from_body_skips_only_unreadable_rows() {
        let body = json!({"presets": [
            {"id": 1, "name": "Cinematic", "preset_file_url": "https://cdn/1.cube"},
            {"id": "not-a-number", "name": "Broken"},
            {"id": 3, "name": "Vintage", "preset_file_url": "https://cdn/3.cube"}
        ]});
        let ids: Vec<_> = presets_from_body(body).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn assigned_id_accepts_both_response_shapes() {
        assert_eq!(assigned_id(&json!({"id": 7, "message": "Preset created"})), Some(7));
        assert_eq!(assigned_id(&json!({"preset": {"id": 8}})), Some(8));
        assert_eq!(assigned_id(&json!({"message": "ok"})), None);
        assert_eq!(assigned_id(&Value::Null), None);
    }

    #[test]
    fn item_url_joins_without_double_slash() {
        let repo = HttpPresetRepository::new(&AdminConfig::new("http://host/presets/"));
        assert_eq!(repo.item_url(7), "http://host/presets/7");
    }
}
