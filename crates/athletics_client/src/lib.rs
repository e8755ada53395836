//! Client library for the athletics results store.
//!
//! Holds the shared domain model, the measurement codec and age group
//! classifier every view uses, and the `AthleticsClient` trait with its
//! reqwest-based implementation.

use async_trait::async_trait;
use thiserror::Error;

pub mod age_group;
pub mod config;
pub mod filter;
pub mod http_client;
pub mod measurement;
pub mod model;
pub mod observability;
pub mod retry;
pub mod utils;

pub use age_group::{AGE_BANDS, AgeBand, AgeGroup, band_of, classify};
pub use filter::ParticipantFilter;
pub use measurement::{MeasurementError, ResultKind, decode, encode};
pub use model::{CompetitionResult, Discipline, DisciplineRef, Gender, Participant};

#[derive(Debug, Error)]
pub enum AthleticsError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not authorized: {0}")]
    Auth(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Measurement(#[from] MeasurementError),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("api error {status}: {body}")]
    Api { status: u16, body: String },
}

impl AthleticsError {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            404 => AthleticsError::NotFound(body),
            401 | 403 => AthleticsError::Auth(body),
            400 | 422 => AthleticsError::InvalidInput(body),
            _ => AthleticsError::Api { status, body },
        }
    }

    /// Transport failures, throttling and server-side errors are worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            AthleticsError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            AthleticsError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[async_trait]
pub trait AthleticsClient: Send + Sync + 'static {
    // === Participants ===

    async fn list_participants(&self) -> Result<Vec<Participant>, AthleticsError>;
    async fn get_participant(&self, id: i64) -> Result<Participant, AthleticsError>;
    async fn create_participant(
        &self,
        participant: &Participant,
    ) -> Result<Participant, AthleticsError>;
    async fn update_participant(
        &self,
        id: i64,
        participant: &Participant,
    ) -> Result<Participant, AthleticsError>;
    async fn delete_participant(&self, id: i64) -> Result<(), AthleticsError>;

    /// Participants whose name contains `name`.
    async fn search_participants(&self, name: &str) -> Result<Vec<Participant>, AthleticsError>;

    /// Participants matching every set field of `filter`.
    async fn filter_participants(
        &self,
        filter: &ParticipantFilter,
    ) -> Result<Vec<Participant>, AthleticsError>;

    // === Participant disciplines and results ===

    /// Register a participant for a discipline.
    async fn add_discipline_to_participant(
        &self,
        participant_id: i64,
        discipline_id: i64,
    ) -> Result<Participant, AthleticsError>;

    async fn update_participant_discipline(
        &self,
        participant_id: i64,
        discipline_id: i64,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError>;

    /// Record a result for a participant in one of their disciplines.
    async fn add_result_to_participant(
        &self,
        participant_id: i64,
        discipline_id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError>;

    async fn update_participant_result(
        &self,
        participant_id: i64,
        discipline_id: i64,
        result_id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError>;

    // === Disciplines ===

    async fn list_disciplines(&self) -> Result<Vec<Discipline>, AthleticsError>;
    async fn get_discipline(&self, id: i64) -> Result<Discipline, AthleticsError>;
    async fn create_discipline(&self, discipline: &Discipline)
    -> Result<Discipline, AthleticsError>;
    async fn update_discipline(
        &self,
        id: i64,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError>;
    async fn delete_discipline(&self, id: i64) -> Result<(), AthleticsError>;

    // === Results ===

    async fn list_results(&self) -> Result<Vec<CompetitionResult>, AthleticsError>;
    async fn get_result(&self, id: i64) -> Result<CompetitionResult, AthleticsError>;
    async fn create_result(
        &self,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError>;
    async fn update_result(
        &self,
        id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError>;
    async fn delete_result(&self, id: i64) -> Result<(), AthleticsError>;
}

#[cfg(test)]
mod tests {
    use super::AthleticsError;

    #[test]
    fn status_codes_map_to_variants() {
        assert!(matches!(
            AthleticsError::from_status(404, "gone".into()),
            AthleticsError::NotFound(_)
        ));
        assert!(matches!(
            AthleticsError::from_status(403, String::new()),
            AthleticsError::Auth(_)
        ));
        assert!(matches!(
            AthleticsError::from_status(422, String::new()),
            AthleticsError::InvalidInput(_)
        ));
        assert!(matches!(
            AthleticsError::from_status(502, String::new()),
            AthleticsError::Api { status: 502, .. }
        ));
    }

    #[test]
    fn only_server_side_failures_are_retryable() {
        assert!(AthleticsError::from_status(503, String::new()).is_retryable());
        assert!(AthleticsError::from_status(429, String::new()).is_retryable());
        assert!(!AthleticsError::from_status(404, String::new()).is_retryable());
        assert!(!AthleticsError::InvalidInput("x".into()).is_retryable());
    }
}
