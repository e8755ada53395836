use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rmcp::Json;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    GetPromptRequestParams, GetPromptResult, ListPromptsResult, PaginatedRequestParams,
};
use rmcp::service::RequestContext;
use rmcp::RoleServer;
use rmcp::{prompt, prompt_handler, prompt_router, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use athletics_client::utils::parse_result_date;
use athletics_client::{
    AgeGroup, AthleticsClient, CompetitionResult, Discipline, Gender, Participant,
    ParticipantFilter, ResultKind, band_of, decode, encode,
};

pub mod config;
pub mod error;
pub mod middleware;
mod prompts;
pub mod session;
mod test_utils;
pub mod views;

use error::{McpError, McpResult};
use session::{Authenticator, Session, SessionStatus};
use views::{AgeBandView, DisciplineView, ParticipantView, ResultView};

#[derive(Clone)]
pub struct AthleticsMcpHandler {
    client: Arc<dyn AthleticsClient>,
    authenticator: Authenticator,
    session: Arc<RwLock<Session>>,
    tool_router: rmcp::handler::server::tool::ToolRouter<AthleticsMcpHandler>,
    prompt_router: rmcp::handler::server::router::prompt::PromptRouter<AthleticsMcpHandler>,
}

// === Tool parameters ===

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct IdParam {
    pub id: i64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct LoginParams {
    /// Administrator user name; the configured one when omitted
    pub user: Option<String>,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchParams {
    /// Part of the first or last name
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ParticipantInput {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub age: Option<u32>,
    pub club: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateParticipantParams {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    /// Remove the recorded age. Cannot be combined with `age`.
    #[serde(default)]
    pub clear_age: bool,
    pub club: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ParticipantDisciplineParams {
    pub participant_id: i64,
    pub discipline_id: i64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct NewResultParams {
    pub participant_id: i64,
    pub discipline_id: i64,
    /// YYYY-MM-DD
    pub date: String,
    /// As displayed for the discipline, e.g. `1:02.35` for TIME or `7.45` for DISTANCE
    pub value: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct NewStandaloneResultParams {
    pub discipline_id: i64,
    /// Participant the result belongs to, if any
    pub participant_id: Option<i64>,
    /// YYYY-MM-DD
    pub date: String,
    /// As displayed for the discipline
    pub value: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateParticipantResultParams {
    pub participant_id: i64,
    pub discipline_id: i64,
    pub result_id: i64,
    pub date: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateResultParams {
    pub id: i64,
    pub date: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DisciplineInput {
    pub name: String,
    pub result_type: ResultKind,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateDisciplineParams {
    pub id: i64,
    pub name: Option<String>,
    pub result_type: Option<ResultKind>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct UpdateParticipantDisciplineParams {
    pub participant_id: i64,
    pub discipline_id: i64,
    pub name: Option<String>,
    pub result_type: Option<ResultKind>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct FormatParams {
    /// Canonical value: milliseconds for TIME, meters for DISTANCE
    pub value: f64,
    pub result_type: ResultKind,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ParseParams {
    pub display: String,
    pub result_type: ResultKind,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct AgeParams {
    pub age: u32,
}

// === Prompt parameters ===

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ParticipantOverviewParams {
    pub participant_id: i64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct DisciplineStandingsParams {
    pub discipline_id: i64,
    pub age_group: Option<AgeGroup>,
}

// === Tool results ===

#[derive(Debug, Serialize, JsonSchema)]
pub struct ParticipantListResult {
    pub count: usize,
    pub participants: Vec<ParticipantView>,
}

impl From<Vec<Participant>> for ParticipantListResult {
    fn from(participants: Vec<Participant>) -> Self {
        let participants: Vec<ParticipantView> =
            participants.iter().map(ParticipantView::from).collect();
        Self {
            count: participants.len(),
            participants,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct DisciplineListResult {
    pub disciplines: Vec<DisciplineView>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ResultListResult {
    pub results: Vec<ResultView>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct DeletedResult {
    pub id: i64,
    pub deleted: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct FormattedValue {
    pub value: f64,
    pub result_type: ResultKind,
    pub display: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct AgeClassification {
    pub age: u32,
    pub age_group: AgeGroup,
    /// Filter label of the group
    pub label: String,
    /// The age range this age matched, e.g. `0-5` for a Senior under 6
    pub range: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct AgeGroupList {
    pub age_groups: Vec<AgeBandView>,
}

fn parse_date(raw: &str) -> McpResult<NaiveDate> {
    parse_result_date(raw)
        .ok_or_else(|| McpError::Validation(format!("date must be YYYY-MM-DD, got {raw:?}")))
}

/// Apply optional date/value edits, decoding the value with the result's own kind.
fn apply_result_edits(
    mut result: CompetitionResult,
    date: Option<&str>,
    value: Option<&str>,
) -> McpResult<CompetitionResult> {
    if let Some(date) = date {
        result.date = parse_date(date)?;
    }
    if let Some(value) = value {
        result.result_value = decode(value, result.kind())?;
    }
    Ok(result)
}

fn supported_kind(kind: ResultKind) -> McpResult<ResultKind> {
    if !kind.is_supported() {
        return Err(McpError::Validation(
            "result_type must be TIME, DISTANCE or POINTS".into(),
        ));
    }
    Ok(kind)
}

fn apply_discipline_edits(
    mut discipline: Discipline,
    name: Option<String>,
    result_type: Option<ResultKind>,
) -> McpResult<Discipline> {
    if let Some(name) = name {
        discipline.name = non_blank("name", name)?;
    }
    if let Some(kind) = result_type {
        discipline.result_type = supported_kind(kind)?;
    }
    Ok(discipline)
}

fn non_blank(field: &str, value: String) -> McpResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(McpError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

#[tool_router]
#[prompt_router]
impl AthleticsMcpHandler {
    pub fn new(client: Arc<dyn AthleticsClient>, authenticator: Authenticator) -> Self {
        Self {
            client,
            authenticator,
            session: Arc::new(RwLock::new(Session::default())),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    /// A handler sharing the client and credentials but starting a fresh,
    /// anonymous session. Used once per HTTP connection.
    pub fn fresh_session(&self) -> Self {
        Self::new(self.client.clone(), self.authenticator.clone())
    }

    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompt_router.list_all().len()
    }

    async fn require_session(&self) -> McpResult<()> {
        self.session
            .read()
            .await
            .require_active(Utc::now())
            .map(|_| ())
    }

    // === Session ===

    #[tool(name = "login", description = "Log in as administrator to enable changes")]
    async fn login(&self, params: Parameters<LoginParams>) -> Result<Json<SessionStatus>, String> {
        let p = params.0;
        let now = Utc::now();
        let user = p
            .user
            .unwrap_or_else(|| self.authenticator.default_user().to_string());
        let session = match self.authenticator.login(&user, &p.password, now) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(%user, "login rejected");
                return Err(e.into());
            }
        };
        let status = session.status(now);
        *self.session.write().await = session;
        tracing::info!(%user, "administrator logged in");
        Ok(Json(status))
    }

    #[tool(name = "logout", description = "End the administrator session")]
    async fn logout(&self) -> Result<Json<SessionStatus>, String> {
        self.session.write().await.clear();
        Ok(Json(SessionStatus::default()))
    }

    #[tool(name = "session_status", description = "Show whether a session is active")]
    async fn session_status(&self) -> Result<Json<SessionStatus>, String> {
        Ok(Json(self.session.read().await.status(Utc::now())))
    }

    // === Participants ===

    #[tool(name = "list_participants", description = "List all participants")]
    async fn list_participants(&self) -> Result<Json<ParticipantListResult>, String> {
        let participants = self
            .client
            .list_participants()
            .await
            .map_err(McpError::from)?;
        Ok(Json(participants.into()))
    }

    #[tool(
        name = "get_participant",
        description = "Get a participant with disciplines, results and age group"
    )]
    async fn get_participant(
        &self,
        params: Parameters<IdParam>,
    ) -> Result<Json<ParticipantView>, String> {
        let p = self
            .client
            .get_participant(params.0.id)
            .await
            .map_err(McpError::from)?;
        Ok(Json(ParticipantView::from(&p)))
    }

    #[tool(name = "search_participants", description = "Search participants by name")]
    async fn search_participants(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<Json<ParticipantListResult>, String> {
        let name = non_blank("name", params.0.name)?;
        let found = self
            .client
            .search_participants(&name)
            .await
            .map_err(McpError::from)?;
        Ok(Json(found.into()))
    }

    #[tool(
        name = "filter_participants",
        description = "Filter participants by name, gender, age group, club or discipline"
    )]
    async fn filter_participants(
        &self,
        params: Parameters<ParticipantFilter>,
    ) -> Result<Json<ParticipantListResult>, String> {
        let found = self
            .client
            .filter_participants(&params.0)
            .await
            .map_err(McpError::from)?;
        Ok(Json(found.into()))
    }

    #[tool(name = "create_participant", description = "Register a new participant")]
    async fn create_participant(
        &self,
        params: Parameters<ParticipantInput>,
    ) -> Result<Json<ParticipantView>, String> {
        self.require_session().await?;
        let p = params.0;
        let participant = Participant::new(
            non_blank("first_name", p.first_name)?,
            non_blank("last_name", p.last_name)?,
            p.gender,
            p.age,
            p.club.unwrap_or_default().trim(),
        );
        let created = self
            .client
            .create_participant(&participant)
            .await
            .map_err(McpError::from)?;
        tracing::info!(id = ?created.id, "participant created");
        Ok(Json(ParticipantView::from(&created)))
    }

    #[tool(
        name = "update_participant",
        description = "Change a participant's name, gender, age or club; clear_age removes the age"
    )]
    async fn update_participant(
        &self,
        params: Parameters<UpdateParticipantParams>,
    ) -> Result<Json<ParticipantView>, String> {
        self.require_session().await?;
        let p = params.0;
        if p.clear_age && p.age.is_some() {
            return Err(McpError::Validation(
                "give either age or clear_age, not both".into(),
            )
            .into());
        }
        let mut participant = self
            .client
            .get_participant(p.id)
            .await
            .map_err(McpError::from)?;
        if let Some(first_name) = p.first_name {
            participant.first_name = non_blank("first_name", first_name)?;
        }
        if let Some(last_name) = p.last_name {
            participant.last_name = non_blank("last_name", last_name)?;
        }
        if let Some(gender) = p.gender {
            participant.gender = gender;
        }
        if p.clear_age {
            participant.age = None;
        } else if let Some(age) = p.age {
            participant.age = Some(age);
        }
        if let Some(club) = p.club {
            participant.club = club.trim().to_string();
        }
        let updated = self
            .client
            .update_participant(p.id, &participant)
            .await
            .map_err(McpError::from)?;
        Ok(Json(ParticipantView::from(&updated)))
    }

    #[tool(name = "delete_participant", description = "Delete a participant by id")]
    async fn delete_participant(
        &self,
        params: Parameters<IdParam>,
    ) -> Result<Json<DeletedResult>, String> {
        self.require_session().await?;
        let id = params.0.id;
        self.client
            .delete_participant(id)
            .await
            .map_err(McpError::from)?;
        tracing::info!(id, "participant deleted");
        Ok(Json(DeletedResult { id, deleted: true }))
    }

    #[tool(
        name = "add_discipline_to_participant",
        description = "Register a participant for a discipline"
    )]
    async fn add_discipline_to_participant(
        &self,
        params: Parameters<ParticipantDisciplineParams>,
    ) -> Result<Json<ParticipantView>, String> {
        self.require_session().await?;
        let p = params.0;
        let updated = self
            .client
            .add_discipline_to_participant(p.participant_id, p.discipline_id)
            .await
            .map_err(McpError::from)?;
        Ok(Json(ParticipantView::from(&updated)))
    }

    #[tool(
        name = "add_result_to_participant",
        description = "Record a result; the value is entered as displayed for the discipline"
    )]
    async fn add_result_to_participant(
        &self,
        params: Parameters<NewResultParams>,
    ) -> Result<Json<ResultView>, String> {
        self.require_session().await?;
        let p = params.0;
        let discipline = self
            .client
            .get_discipline(p.discipline_id)
            .await
            .map_err(McpError::from)?;
        let result = CompetitionResult {
            id: None,
            date: parse_date(&p.date)?,
            result_value: decode(&p.value, discipline.result_type).map_err(McpError::from)?,
            discipline: discipline.to_ref(),
            participant_id: Some(p.participant_id),
        };
        let stored = self
            .client
            .add_result_to_participant(p.participant_id, p.discipline_id, &result)
            .await
            .map_err(McpError::from)?;
        Ok(Json(ResultView::from(&stored)))
    }

    #[tool(
        name = "update_participant_result",
        description = "Correct the date or value of a participant's result"
    )]
    async fn update_participant_result(
        &self,
        params: Parameters<UpdateParticipantResultParams>,
    ) -> Result<Json<ResultView>, String> {
        self.require_session().await?;
        let p = params.0;
        let existing = self
            .client
            .get_result(p.result_id)
            .await
            .map_err(McpError::from)?;
        let edited = apply_result_edits(existing, p.date.as_deref(), p.value.as_deref())?;
        let stored = self
            .client
            .update_participant_result(p.participant_id, p.discipline_id, p.result_id, &edited)
            .await
            .map_err(McpError::from)?;
        Ok(Json(ResultView::from(&stored)))
    }

    #[tool(
        name = "update_participant_discipline",
        description = "Rename or change the kind of a discipline through a participant it is attached to"
    )]
    async fn update_participant_discipline(
        &self,
        params: Parameters<UpdateParticipantDisciplineParams>,
    ) -> Result<Json<DisciplineView>, String> {
        self.require_session().await?;
        let p = params.0;
        let existing = self
            .client
            .get_discipline(p.discipline_id)
            .await
            .map_err(McpError::from)?;
        let discipline = apply_discipline_edits(existing, p.name, p.result_type)?;
        let updated = self
            .client
            .update_participant_discipline(p.participant_id, p.discipline_id, &discipline)
            .await
            .map_err(McpError::from)?;
        Ok(Json(DisciplineView::from(&updated)))
    }

    // === Disciplines ===

    #[tool(name = "list_disciplines", description = "List all disciplines")]
    async fn list_disciplines(&self) -> Result<Json<DisciplineListResult>, String> {
        let disciplines = self
            .client
            .list_disciplines()
            .await
            .map_err(McpError::from)?;
        Ok(Json(DisciplineListResult {
            disciplines: disciplines.iter().map(DisciplineView::from).collect(),
        }))
    }

    #[tool(name = "get_discipline", description = "Get a discipline with its results")]
    async fn get_discipline(
        &self,
        params: Parameters<IdParam>,
    ) -> Result<Json<DisciplineView>, String> {
        let d = self
            .client
            .get_discipline(params.0.id)
            .await
            .map_err(McpError::from)?;
        Ok(Json(DisciplineView::from(&d)))
    }

    #[tool(
        name = "create_discipline",
        description = "Create a discipline measured by TIME, DISTANCE or POINTS"
    )]
    async fn create_discipline(
        &self,
        params: Parameters<DisciplineInput>,
    ) -> Result<Json<DisciplineView>, String> {
        self.require_session().await?;
        let p = params.0;
        let discipline = Discipline::new(non_blank("name", p.name)?, supported_kind(p.result_type)?);
        let created = self
            .client
            .create_discipline(&discipline)
            .await
            .map_err(McpError::from)?;
        Ok(Json(DisciplineView::from(&created)))
    }

    #[tool(name = "update_discipline", description = "Rename a discipline or change its kind")]
    async fn update_discipline(
        &self,
        params: Parameters<UpdateDisciplineParams>,
    ) -> Result<Json<DisciplineView>, String> {
        self.require_session().await?;
        let p = params.0;
        let existing = self
            .client
            .get_discipline(p.id)
            .await
            .map_err(McpError::from)?;
        let discipline = apply_discipline_edits(existing, p.name, p.result_type)?;
        let updated = self
            .client
            .update_discipline(p.id, &discipline)
            .await
            .map_err(McpError::from)?;
        Ok(Json(DisciplineView::from(&updated)))
    }

    #[tool(name = "delete_discipline", description = "Delete a discipline by id")]
    async fn delete_discipline(
        &self,
        params: Parameters<IdParam>,
    ) -> Result<Json<DeletedResult>, String> {
        self.require_session().await?;
        let id = params.0.id;
        self.client
            .delete_discipline(id)
            .await
            .map_err(McpError::from)?;
        Ok(Json(DeletedResult { id, deleted: true }))
    }

    // === Results ===

    #[tool(name = "list_results", description = "List all results with display values")]
    async fn list_results(&self) -> Result<Json<ResultListResult>, String> {
        let results = self.client.list_results().await.map_err(McpError::from)?;
        Ok(Json(ResultListResult {
            results: results.iter().map(ResultView::from).collect(),
        }))
    }

    #[tool(name = "get_result", description = "Get one result by id")]
    async fn get_result(&self, params: Parameters<IdParam>) -> Result<Json<ResultView>, String> {
        let r = self
            .client
            .get_result(params.0.id)
            .await
            .map_err(McpError::from)?;
        Ok(Json(ResultView::from(&r)))
    }

    #[tool(
        name = "create_result",
        description = "Record a result against a discipline; the value is entered as displayed"
    )]
    async fn create_result(
        &self,
        params: Parameters<NewStandaloneResultParams>,
    ) -> Result<Json<ResultView>, String> {
        self.require_session().await?;
        let p = params.0;
        let discipline = self
            .client
            .get_discipline(p.discipline_id)
            .await
            .map_err(McpError::from)?;
        let result = CompetitionResult {
            id: None,
            date: parse_date(&p.date)?,
            result_value: decode(&p.value, discipline.result_type).map_err(McpError::from)?,
            discipline: discipline.to_ref(),
            participant_id: p.participant_id,
        };
        let stored = self
            .client
            .create_result(&result)
            .await
            .map_err(McpError::from)?;
        Ok(Json(ResultView::from(&stored)))
    }

    #[tool(
        name = "update_result",
        description = "Correct the date or value of a result; the value is entered as displayed"
    )]
    async fn update_result(
        &self,
        params: Parameters<UpdateResultParams>,
    ) -> Result<Json<ResultView>, String> {
        self.require_session().await?;
        let p = params.0;
        let existing = self.client.get_result(p.id).await.map_err(McpError::from)?;
        let edited = apply_result_edits(existing, p.date.as_deref(), p.value.as_deref())?;
        let stored = self
            .client
            .update_result(p.id, &edited)
            .await
            .map_err(McpError::from)?;
        Ok(Json(ResultView::from(&stored)))
    }

    #[tool(name = "delete_result", description = "Delete a result by id")]
    async fn delete_result(
        &self,
        params: Parameters<IdParam>,
    ) -> Result<Json<DeletedResult>, String> {
        self.require_session().await?;
        let id = params.0.id;
        self.client
            .delete_result(id)
            .await
            .map_err(McpError::from)?;
        Ok(Json(DeletedResult { id, deleted: true }))
    }

    // === Codec & classifier ===

    #[tool(
        name = "format_result_value",
        description = "Render a canonical value (ms or meters) as shown for its kind"
    )]
    async fn format_result_value(
        &self,
        params: Parameters<FormatParams>,
    ) -> Result<Json<FormattedValue>, String> {
        let p = params.0;
        let display = encode(p.value, p.result_type).map_err(McpError::from)?;
        Ok(Json(FormattedValue {
            value: p.value,
            result_type: p.result_type,
            display,
        }))
    }

    #[tool(
        name = "parse_result_value",
        description = "Parse a displayed value (e.g. 1:02.35) into its canonical number"
    )]
    async fn parse_result_value(
        &self,
        params: Parameters<ParseParams>,
    ) -> Result<Json<FormattedValue>, String> {
        let p = params.0;
        let value = decode(&p.display, p.result_type).map_err(McpError::from)?;
        let display = encode(value, p.result_type).map_err(McpError::from)?;
        Ok(Json(FormattedValue {
            value,
            result_type: p.result_type,
            display,
        }))
    }

    #[tool(name = "classify_age", description = "Age group for an age")]
    async fn classify_age(
        &self,
        params: Parameters<AgeParams>,
    ) -> Result<Json<AgeClassification>, String> {
        let age = params.0.age;
        let band = band_of(age);
        Ok(Json(AgeClassification {
            age,
            age_group: band.group,
            label: band.group.filter_label(),
            range: band.label(),
        }))
    }

    #[tool(name = "list_age_groups", description = "List the age groups and their bands")]
    async fn list_age_groups(&self) -> Result<Json<AgeGroupList>, String> {
        Ok(Json(AgeGroupList {
            age_groups: views::age_bands(),
        }))
    }

    // === MCP Prompts ===

    #[prompt(
        name = "participant-overview",
        description = "Summarize one participant's disciplines and best results"
    )]
    async fn participant_overview(
        &self,
        params: Parameters<ParticipantOverviewParams>,
    ) -> GetPromptResult {
        prompts::participant_overview_prompt(params.0.participant_id)
    }

    #[prompt(
        name = "discipline-standings",
        description = "Rank entrants of a discipline, optionally within one age group"
    )]
    async fn discipline_standings(
        &self,
        params: Parameters<DisciplineStandingsParams>,
    ) -> GetPromptResult {
        let p = params.0;
        prompts::discipline_standings_prompt(p.discipline_id, p.age_group.map(AgeGroup::as_str))
    }
}

#[tool_handler]
#[prompt_handler(router = self.prompt_router)]
impl rmcp::ServerHandler for AthleticsMcpHandler {
    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo::new(
            rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
        )
        .with_instructions(
            "Athletics results administration - list, search and edit participants, \
             disciplines and results. Log in before making changes.",
        )
    }
}
