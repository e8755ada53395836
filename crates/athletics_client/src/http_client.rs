//! HTTP client implementation for the athletics results store.
//!
//! This module provides a reqwest-based implementation of the [`AthleticsClient`](crate::AthleticsClient) trait.

use crate::config::Config;
use crate::observability::record_request;
use crate::retry::RetryPolicy;
use crate::{
    AthleticsClient, AthleticsError, CompetitionResult, Discipline, Participant, ParticipantFilter,
};
use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::time::Instant;

const PARTICIPANTS: &str = "/api/participants";
const DISCIPLINES: &str = "/api/disciplines";
const RESULTS: &str = "/api/results";

/// Client for the results store using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestAthleticsClient {
    base_url: String,
    api_token: Option<SecretString>,
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl ReqwestAthleticsClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the store (e.g., "http://localhost:8081")
    /// * `api_token` - Optional bearer token sent with every request
    pub fn new(base_url: &str, api_token: Option<SecretString>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client: reqwest::Client::new(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AthleticsError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            client,
            retry: RetryPolicy::default(),
        })
    }

    /// Replace the retry policy used for read requests.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request with JSON accept header and the bearer token, if any.
    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.api_token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Execute a request and decode a JSON response.
    async fn execute_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AthleticsError> {
        let started = Instant::now();
        let result = self.send_and_decode(request).await;
        record_request(operation, result.is_ok(), started.elapsed());
        if let Err(e) = &result {
            tracing::debug!(operation, error = %e, "store request failed");
        }
        result
    }

    /// Execute a request with no expected response body.
    async fn execute_empty(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<(), AthleticsError> {
        let started = Instant::now();
        let result = async {
            let resp = request.send().await?;
            if !resp.status().is_success() {
                return Err(self.error_from_response(resp).await);
            }
            Ok(())
        }
        .await;
        record_request(operation, result.is_ok(), started.elapsed());
        result
    }

    /// GET with retries on transient failures.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, AthleticsError> {
        let url = self.url(path);
        self.retry
            .retry_async_if(
                || self.execute_json(operation, self.request(Method::GET, &url).query(query)),
                AthleticsError::is_retryable,
            )
            .await
    }

    async fn send_and_decode<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AthleticsError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        tracing::trace!(status = status.as_u16(), url = %resp.url(), "store response");
        // Read body as text first so decoding errors can show what came back.
        let text = resp.text().await?;
        serde_json::from_str::<T>(&text).map_err(|e| {
            let body_snippet: String = text.chars().take(512).collect();
            AthleticsError::Decode(format!("{e} - body: {body_snippet}"))
        })
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> AthleticsError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        AthleticsError::from_status(status, body_snippet)
    }
}

fn require_discipline_id(result: &CompetitionResult) -> Result<(), AthleticsError> {
    if result.discipline.id.is_none() {
        return Err(AthleticsError::InvalidInput(
            "result must reference a stored discipline".into(),
        ));
    }
    Ok(())
}

#[async_trait]
impl AthleticsClient for ReqwestAthleticsClient {
    async fn list_participants(&self) -> Result<Vec<Participant>, AthleticsError> {
        self.get_json("list_participants", PARTICIPANTS, &[]).await
    }

    async fn get_participant(&self, id: i64) -> Result<Participant, AthleticsError> {
        self.get_json("get_participant", &format!("{PARTICIPANTS}/{id}"), &[])
            .await
    }

    async fn create_participant(
        &self,
        participant: &Participant,
    ) -> Result<Participant, AthleticsError> {
        participant.validate()?;
        let url = self.url(PARTICIPANTS);
        self.execute_json(
            "create_participant",
            self.request(Method::POST, &url).json(participant),
        )
        .await
    }

    async fn update_participant(
        &self,
        id: i64,
        participant: &Participant,
    ) -> Result<Participant, AthleticsError> {
        participant.validate()?;
        let url = self.url(&format!("{PARTICIPANTS}/{id}"));
        self.execute_json(
            "update_participant",
            self.request(Method::PUT, &url).json(participant),
        )
        .await
    }

    async fn delete_participant(&self, id: i64) -> Result<(), AthleticsError> {
        let url = self.url(&format!("{PARTICIPANTS}/{id}"));
        self.execute_empty("delete_participant", self.request(Method::DELETE, &url))
            .await
    }

    async fn search_participants(&self, name: &str) -> Result<Vec<Participant>, AthleticsError> {
        self.get_json(
            "search_participants",
            &format!("{PARTICIPANTS}/search"),
            &[("name", name.trim().to_string())],
        )
        .await
    }

    async fn filter_participants(
        &self,
        filter: &ParticipantFilter,
    ) -> Result<Vec<Participant>, AthleticsError> {
        if filter.is_empty() {
            return self.list_participants().await;
        }
        self.get_json(
            "filter_participants",
            &format!("{PARTICIPANTS}/filter"),
            &filter.query_pairs(),
        )
        .await
    }

    async fn add_discipline_to_participant(
        &self,
        participant_id: i64,
        discipline_id: i64,
    ) -> Result<Participant, AthleticsError> {
        let url = self.url(&format!(
            "{PARTICIPANTS}/{participant_id}/disciplines/{discipline_id}"
        ));
        self.execute_json(
            "add_discipline_to_participant",
            self.request(Method::POST, &url),
        )
        .await
    }

    async fn update_participant_discipline(
        &self,
        participant_id: i64,
        discipline_id: i64,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError> {
        discipline.validate()?;
        let url = self.url(&format!(
            "{PARTICIPANTS}/{participant_id}/disciplines/{discipline_id}"
        ));
        self.execute_json(
            "update_participant_discipline",
            self.request(Method::PUT, &url).json(discipline),
        )
        .await
    }

    async fn add_result_to_participant(
        &self,
        participant_id: i64,
        discipline_id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        result.validate()?;
        require_discipline_id(result)?;
        let url = self.url(&format!(
            "{PARTICIPANTS}/{participant_id}/disciplines/{discipline_id}/results"
        ));
        self.execute_json(
            "add_result_to_participant",
            self.request(Method::POST, &url).json(result),
        )
        .await
    }

    async fn update_participant_result(
        &self,
        participant_id: i64,
        discipline_id: i64,
        result_id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        result.validate()?;
        require_discipline_id(result)?;
        let url = self.url(&format!(
            "{PARTICIPANTS}/{participant_id}/disciplines/{discipline_id}/results/{result_id}"
        ));
        self.execute_json(
            "update_participant_result",
            self.request(Method::PUT, &url).json(result),
        )
        .await
    }

    async fn list_disciplines(&self) -> Result<Vec<Discipline>, AthleticsError> {
        self.get_json("list_disciplines", DISCIPLINES, &[]).await
    }

    async fn get_discipline(&self, id: i64) -> Result<Discipline, AthleticsError> {
        self.get_json("get_discipline", &format!("{DISCIPLINES}/{id}"), &[])
            .await
    }

    async fn create_discipline(
        &self,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError> {
        discipline.validate()?;
        let url = self.url(DISCIPLINES);
        self.execute_json(
            "create_discipline",
            self.request(Method::POST, &url).json(discipline),
        )
        .await
    }

    async fn update_discipline(
        &self,
        id: i64,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError> {
        discipline.validate()?;
        let url = self.url(&format!("{DISCIPLINES}/{id}"));
        self.execute_json(
            "update_discipline",
            self.request(Method::PUT, &url).json(discipline),
        )
        .await
    }

    async fn delete_discipline(&self, id: i64) -> Result<(), AthleticsError> {
        let url = self.url(&format!("{DISCIPLINES}/{id}"));
        self.execute_empty("delete_discipline", self.request(Method::DELETE, &url))
            .await
    }

    async fn list_results(&self) -> Result<Vec<CompetitionResult>, AthleticsError> {
        self.get_json("list_results", RESULTS, &[]).await
    }

    async fn get_result(&self, id: i64) -> Result<CompetitionResult, AthleticsError> {
        self.get_json("get_result", &format!("{RESULTS}/{id}"), &[])
            .await
    }

    async fn create_result(
        &self,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        result.validate()?;
        let url = self.url(RESULTS);
        self.execute_json(
            "create_result",
            self.request(Method::POST, &url).json(result),
        )
        .await
    }

    async fn update_result(
        &self,
        id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        result.validate()?;
        let url = self.url(&format!("{RESULTS}/{id}"));
        self.execute_json(
            "update_result",
            self.request(Method::PUT, &url).json(result),
        )
        .await
    }

    async fn delete_result(&self, id: i64) -> Result<(), AthleticsError> {
        let url = self.url(&format!("{RESULTS}/{id}"));
        self.execute_empty("delete_result", self.request(Method::DELETE, &url))
            .await
    }
}
