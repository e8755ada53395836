//! Middleware layer for cross-cutting concerns.
//!
//! Sits between the MCP handlers and the store client and logs every
//! operation with its duration and outcome.

use std::sync::Arc;
use std::time::Instant;

use athletics_client::{
    AthleticsClient, AthleticsError, CompetitionResult, Discipline, Participant, ParticipantFilter,
};
use tracing::debug;

/// Wraps any [`AthleticsClient`] and logs each call at debug level.
#[derive(Clone)]
pub struct LoggingMiddleware<C: AthleticsClient> {
    inner: Arc<C>,
}

impl<C: AthleticsClient> LoggingMiddleware<C> {
    pub fn new(client: C) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    /// Execute a fallible operation with logging.
    async fn with_logging<F, Fut, T>(&self, operation: F, name: &str) -> Result<T, AthleticsError>
    where
        F: FnOnce(Arc<C>) -> Fut,
        Fut: std::future::Future<Output = Result<T, AthleticsError>>,
    {
        let start = Instant::now();
        debug!("Starting operation: {}", name);

        let result = operation(self.inner.clone()).await;

        let duration = start.elapsed();
        match &result {
            Ok(_) => debug!("Operation completed: {} in {:?}", name, duration),
            Err(e) => debug!("Operation failed: {} in {:?} - error: {}", name, duration, e),
        }

        result
    }
}

#[async_trait::async_trait]
impl<C: AthleticsClient> AthleticsClient for LoggingMiddleware<C> {
    async fn list_participants(&self) -> Result<Vec<Participant>, AthleticsError> {
        self.with_logging(
            |client| async move { client.list_participants().await },
            "list_participants",
        )
        .await
    }

    async fn get_participant(&self, id: i64) -> Result<Participant, AthleticsError> {
        self.with_logging(
            |client| async move { client.get_participant(id).await },
            &format!("get_participant({id})"),
        )
        .await
    }

    async fn create_participant(
        &self,
        participant: &Participant,
    ) -> Result<Participant, AthleticsError> {
        self.with_logging(
            |client| async move { client.create_participant(participant).await },
            "create_participant",
        )
        .await
    }

    async fn update_participant(
        &self,
        id: i64,
        participant: &Participant,
    ) -> Result<Participant, AthleticsError> {
        self.with_logging(
            |client| async move { client.update_participant(id, participant).await },
            &format!("update_participant({id})"),
        )
        .await
    }

    async fn delete_participant(&self, id: i64) -> Result<(), AthleticsError> {
        self.with_logging(
            |client| async move { client.delete_participant(id).await },
            &format!("delete_participant({id})"),
        )
        .await
    }

    async fn search_participants(&self, name: &str) -> Result<Vec<Participant>, AthleticsError> {
        self.with_logging(
            |client| async move { client.search_participants(name).await },
            "search_participants",
        )
        .await
    }

    async fn filter_participants(
        &self,
        filter: &ParticipantFilter,
    ) -> Result<Vec<Participant>, AthleticsError> {
        self.with_logging(
            |client| async move { client.filter_participants(filter).await },
            &format!("filter_participants({} criteria)", filter.query_pairs().len()),
        )
        .await
    }

    async fn add_discipline_to_participant(
        &self,
        participant_id: i64,
        discipline_id: i64,
    ) -> Result<Participant, AthleticsError> {
        self.with_logging(
            |client| async move {
                client
                    .add_discipline_to_participant(participant_id, discipline_id)
                    .await
            },
            "add_discipline_to_participant",
        )
        .await
    }

    async fn update_participant_discipline(
        &self,
        participant_id: i64,
        discipline_id: i64,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError> {
        self.with_logging(
            |client| async move {
                client
                    .update_participant_discipline(participant_id, discipline_id, discipline)
                    .await
            },
            "update_participant_discipline",
        )
        .await
    }

    async fn add_result_to_participant(
        &self,
        participant_id: i64,
        discipline_id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        self.with_logging(
            |client| async move {
                client
                    .add_result_to_participant(participant_id, discipline_id, result)
                    .await
            },
            "add_result_to_participant",
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
        self.with_logging(
            |client| async move {
                client
                    .update_participant_result(participant_id, discipline_id, result_id, result)
                    .await
            },
            "update_participant_result",
        )
        .await
    }

    async fn list_disciplines(&self) -> Result<Vec<Discipline>, AthleticsError> {
        self.with_logging(
            |client| async move { client.list_disciplines().await },
            "list_disciplines",
        )
        .await
    }

    async fn get_discipline(&self, id: i64) -> Result<Discipline, AthleticsError> {
        self.with_logging(
            |client| async move { client.get_discipline(id).await },
            &format!("get_discipline({id})"),
        )
        .await
    }

    async fn create_discipline(
        &self,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError> {
        self.with_logging(
            |client| async move { client.create_discipline(discipline).await },
            "create_discipline",
        )
        .await
    }

    async fn update_discipline(
        &self,
        id: i64,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError> {
        self.with_logging(
            |client| async move { client.update_discipline(id, discipline).await },
            &format!("update_discipline({id})"),
        )
        .await
    }

    async fn delete_discipline(&self, id: i64) -> Result<(), AthleticsError> {
        self.with_logging(
            |client| async move { client.delete_discipline(id).await },
            &format!("delete_discipline({id})"),
        )
        .await
    }

    async fn list_results(&self) -> Result<Vec<CompetitionResult>, AthleticsError> {
        self.with_logging(
            |client| async move { client.list_results().await },
            "list_results",
        )
        .await
    }

    async fn get_result(&self, id: i64) -> Result<CompetitionResult, AthleticsError> {
        self.with_logging(
            |client| async move { client.get_result(id).await },
            &format!("get_result({id})"),
        )
        .await
    }

    async fn create_result(
        &self,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        self.with_logging(
            |client| async move { client.create_result(result).await },
            "create_result",
        )
        .await
    }

    async fn update_result(
        &self,
        id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        self.with_logging(
            |client| async move { client.update_result(id, result).await },
            &format!("update_result({id})"),
        )
        .await
    }

    async fn delete_result(&self, id: i64) -> Result<(), AthleticsError> {
        self.with_logging(
            |client| async move { client.delete_result(id).await },
            &format!("delete_result({id})"),
        )
        .await
    }
}
