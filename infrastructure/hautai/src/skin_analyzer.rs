use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use tracing::{error, info};

use business::domain::skin_analysis::errors::SkinAnalysisError;
use business::domain::skin_analysis::image::AnalysisImage;
use business::domain::skin_analysis::services::SkinAnalyzerService;

use crate::client::{DEFAULT_TIMEOUT, HautAIClient, UPLOAD_TIMEOUT};

pub struct SkinAnalyzerHautAI {
    client: HautAIClient,
}

impl SkinAnalyzerHautAI {
    pub fn new(client: HautAIClient) -> Self {
        Self { client }
    }

    /// Created resources come back as `{"id": ...}`; the id may be a string or a number.
    fn created_id(value: &serde_json::Value) -> Result<String, SkinAnalysisError> {
        match value.get("id") {
            Some(serde_json::Value::String(id)) if !id.is_empty() => Ok(id.clone()),
            Some(serde_json::Value::Number(id)) => Ok(id.to_string()),
            _ => {
                error!(body = %value, "Haut.ai response has no resource id");
                Err(SkinAnalysisError::InvalidProviderResponse)
            }
        }
    }
}

#[async_trait]
impl SkinAnalyzerService for SkinAnalyzerHautAI {
    async fn create_subject(&self, name: &str) -> Result<String, SkinAnalysisError> {
        let body = json!({ "name": name });
        let response = self
            .client
            .request(Method::POST, &[], Some(&body), DEFAULT_TIMEOUT)
            .await?;
        let subject_id = Self::created_id(&response)?;

        info!(%subject_id, "Created Haut.ai subject for {}", name);
        Ok(subject_id)
    }

    async fn create_batch(&self, subject_id: &str) -> Result<String, SkinAnalysisError> {
        let response = self
            .client
            .request(Method::POST, &[subject_id, "batches"], None, DEFAULT_TIMEOUT)
            .await?;
        let batch_id = Self::created_id(&response)?;

        info!(%subject_id, %batch_id, "Created Haut.ai batch");
        Ok(batch_id)
    }

    async fn send_image(
        &self,
        subject_id: &str,
        batch_id: &str,
        image: &AnalysisImage,
    ) -> Result<String, SkinAnalysisError> {
        let body = json!({
            "side_id": image.side_id,
            "light_id": image.light_id,
            "b64data": image.base64(),
        });
        let response = self
            .client
            .request(
                Method::POST,
                &[subject_id, "batches", batch_id, "images"],
                Some(&body),
                UPLOAD_TIMEOUT,
            )
            .await?;
        let image_id = Self::created_id(&response)?;

        info!(%subject_id, %batch_id, %image_id, "Sent image to Haut.ai");
        Ok(image_id)
    }

    async fn get_results(
        &self,
        subject_id: &str,
        batch_id: &str,
        image_id: &str,
    ) -> Result<serde_json::Value, SkinAnalysisError> {
        let results = self
            .client
            .request(
                Method::GET,
                &[subject_id, "batches", batch_id, "images", image_id, "results"],
                None,
                DEFAULT_TIMEOUT,
            )
            .await?;

        match &results {
            serde_json::Value::Array(items) => {
                info!(%image_id, items = items.len(), "Retrieved Haut.ai results")
            }
            _ => info!(%image_id, "Retrieved Haut.ai results object"),
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::HautAISettings;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DATASET: &str = "/api/v1/companies/co-1/datasets/ds-1/subjects";

    fn analyzer(server: &MockServer) -> SkinAnalyzerHautAI {
        SkinAnalyzerHautAI::new(HautAIClient::new(HautAISettings {
            base_url: server.uri(),
            api_key: Some("key".to_string()),
            company_id: Some("co-1".to_string()),
            dataset_id: Some("ds-1".to_string()),
            ..Default::default()
        }))
    }

    #[tokio::test]
    async fn should_create_subject_named_after_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{}/", DATASET)))
            .and(body_json(json!({"name": "uid-42"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "subj-7"})))
            .expect(1)
            .mount(&server)
            .await;

        let subject_id = analyzer(&server).create_subject("uid-42").await.unwrap();

        assert_eq!(subject_id, "subj-7");
    }

    #[tokio::test]
    async fn should_accept_numeric_batch_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{}/subj-7/batches/", DATASET)))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 311})))
            .mount(&server)
            .await;

        let batch_id = analyzer(&server).create_batch("subj-7").await.unwrap();

        assert_eq!(batch_id, "311");
    }

    #[tokio::test]
    async fn should_send_image_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{}/subj-7/batches/311/images/", DATASET)))
            .and(body_json(json!({"side_id": 1, "light_id": 2, "b64data": "aGVsbG8="})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "img-5"})))
            .expect(1)
            .mount(&server)
            .await;

        let image = AnalysisImage::from_base64("aGVsbG8=", 1, 2).unwrap();
        let image_id = analyzer(&server)
            .send_image("subj-7", "311", &image)
            .await
            .unwrap();

        assert_eq!(image_id, "img-5");
    }

    #[tokio::test]
    async fn should_reject_created_response_without_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{}/", DATASET)))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"name": "uid-1"})))
            .mount(&server)
            .await;

        let result = analyzer(&server).create_subject("uid-1").await;

        assert!(matches!(
            result.unwrap_err(),
            SkinAnalysisError::InvalidProviderResponse
        ));
    }

    #[tokio::test]
    async fn should_return_raw_results_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!(
                "{}/subj-7/batches/311/images/img-5/results/",
                DATASET
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"algorithm_tech_name": "wrinkles", "result": {"area_results": []}},
                {"algorithm_tech_name": "redness", "result": {"area_results": []}}
            ])))
            .mount(&server)
            .await;

        let results = analyzer(&server)
            .get_results("subj-7", "311", "img-5")
            .await
            .unwrap();

        assert_eq!(results.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn should_keep_caller_ids_inside_results_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/", DATASET)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": "s-other", "name": "other-uid"}])),
            )
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!(
                "{}/%3Fx=/batches/b/images/i/results/",
                DATASET
            )))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let result = analyzer(&server).get_results("?x=", "b", "i").await;

        assert!(matches!(
            result.unwrap_err(),
            SkinAnalysisError::ProviderUnavailable
        ));
        let requests = server.received_requests().await.unwrap();
        assert!(requests.iter().all(|r| r.url.query().is_none()));
    }

    #[tokio::test]
    async fn should_map_server_errors_to_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = analyzer(&server)
            .get_results("subj-7", "311", "img-5")
            .await;

        assert!(matches!(
            result.unwrap_err(),
            SkinAnalysisError::ProviderUnavailable
        ));
    }
}
