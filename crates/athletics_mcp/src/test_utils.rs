//! In-memory `AthleticsClient` used by the handler unit tests.
#![cfg(test)]

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use athletics_client::{
    AthleticsClient, AthleticsError, CompetitionResult, Discipline, Gender, Participant,
    ParticipantFilter, ResultKind,
};

#[derive(Default)]
struct Store {
    participants: Vec<Participant>,
    disciplines: Vec<Discipline>,
    results: Vec<CompetitionResult>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// A tiny stand-in for the results store, keeping everything in vectors.
#[derive(Default)]
pub struct InMemoryClient {
    store: Mutex<Store>,
}

fn not_found(what: &str, id: i64) -> AthleticsError {
    AthleticsError::NotFound(format!("{what} {id}"))
}

impl InMemoryClient {
    /// Two participants, three disciplines and one 60m result for Anna.
    pub fn seeded() -> Self {
        let mut store = Store {
            next_id: 100,
            ..Default::default()
        };
        let mut sprint = Discipline::new("60m", ResultKind::Time);
        sprint.id = Some(1);
        let mut jump = Discipline::new("Long jump", ResultKind::Distance);
        jump.id = Some(2);
        let mut combined = Discipline::new("Pentathlon", ResultKind::Points);
        combined.id = Some(3);

        let result = CompetitionResult {
            id: Some(1),
            date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            result_value: 9_870.0,
            discipline: sprint.to_ref(),
            participant_id: Some(1),
        };

        let mut anna = Participant::new("Anna", "Holm", Gender::Female, Some(12), "Storm");
        anna.id = Some(1);
        anna.disciplines.push(sprint.clone());
        anna.results.push(result.clone());
        let mut ola = Participant::new("Ola", "Nordmann", Gender::Male, Some(41), "Tyrving");
        ola.id = Some(2);

        store.participants = vec![anna, ola];
        store.disciplines = vec![sprint, jump, combined];
        store.results = vec![result];
        Self {
            store: Mutex::new(store),
        }
    }

    pub async fn participant_count(&self) -> usize {
        self.store.lock().await.participants.len()
    }
}

fn matches_filter(p: &Participant, filter: &ParticipantFilter) -> bool {
    filter.query_pairs().iter().all(|(key, value)| match *key {
        "name" => p
            .full_name()
            .to_lowercase()
            .contains(&value.to_lowercase()),
        "gender" => p.gender.to_string() == *value,
        "ageGroup" => p.age_group().map(|g| g.filter_label()).as_ref() == Some(value),
        "club" => p.club.eq_ignore_ascii_case(value),
        "discipline" => p
            .disciplines
            .iter()
            .any(|d| d.name.eq_ignore_ascii_case(value)),
        _ => true,
    })
}

#[async_trait]
impl AthleticsClient for InMemoryClient {
    async fn list_participants(&self) -> Result<Vec<Participant>, AthleticsError> {
        Ok(self.store.lock().await.participants.clone())
    }

    async fn get_participant(&self, id: i64) -> Result<Participant, AthleticsError> {
        let store = self.store.lock().await;
        store
            .participants
            .iter()
            .find(|p| p.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found("participant", id))
    }

    async fn create_participant(
        &self,
        participant: &Participant,
    ) -> Result<Participant, AthleticsError> {
        participant.validate()?;
        let mut store = self.store.lock().await;
        let mut created = participant.clone();
        created.id = Some(store.next_id());
        store.participants.push(created.clone());
        Ok(created)
    }

    async fn update_participant(
        &self,
        id: i64,
        participant: &Participant,
    ) -> Result<Participant, AthleticsError> {
        participant.validate()?;
        let mut store = self.store.lock().await;
        let slot = store
            .participants
            .iter_mut()
            .find(|p| p.id == Some(id))
            .ok_or_else(|| not_found("participant", id))?;
        *slot = participant.clone();
        slot.id = Some(id);
        Ok(slot.clone())
    }

    async fn delete_participant(&self, id: i64) -> Result<(), AthleticsError> {
        let mut store = self.store.lock().await;
        let before = store.participants.len();
        store.participants.retain(|p| p.id != Some(id));
        if store.participants.len() == before {
            return Err(not_found("participant", id));
        }
        Ok(())
    }

    async fn search_participants(&self, name: &str) -> Result<Vec<Participant>, AthleticsError> {
        let filter = ParticipantFilter {
            name: Some(name.to_string()),
            ..Default::default()
        };
        self.filter_participants(&filter).await
    }

    async fn filter_participants(
        &self,
        filter: &ParticipantFilter,
    ) -> Result<Vec<Participant>, AthleticsError> {
        let store = self.store.lock().await;
        Ok(store
            .participants
            .iter()
            .filter(|p| matches_filter(p, filter))
            .cloned()
            .collect())
    }

    async fn add_discipline_to_participant(
        &self,
        participant_id: i64,
        discipline_id: i64,
    ) -> Result<Participant, AthleticsError> {
        let mut store = self.store.lock().await;
        let discipline = store
            .disciplines
            .iter()
            .find(|d| d.id == Some(discipline_id))
            .cloned()
            .ok_or_else(|| not_found("discipline", discipline_id))?;
        let participant = store
            .participants
            .iter_mut()
            .find(|p| p.id == Some(participant_id))
            .ok_or_else(|| not_found("participant", participant_id))?;
        if !participant
            .disciplines
            .iter()
            .any(|d| d.id == Some(discipline_id))
        {
            participant.disciplines.push(discipline);
        }
        Ok(participant.clone())
    }

    async fn update_participant_discipline(
        &self,
        participant_id: i64,
        discipline_id: i64,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError> {
        let mut store = self.store.lock().await;
        let participant = store
            .participants
            .iter_mut()
            .find(|p| p.id == Some(participant_id))
            .ok_or_else(|| not_found("participant", participant_id))?;
        let slot = participant
            .disciplines
            .iter_mut()
            .find(|d| d.id == Some(discipline_id))
            .ok_or_else(|| not_found("discipline", discipline_id))?;
        *slot = discipline.clone();
        slot.id = Some(discipline_id);
        Ok(slot.clone())
    }

    async fn add_result_to_participant(
        &self,
        participant_id: i64,
        discipline_id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        result.validate()?;
        let mut store = self.store.lock().await;
        let id = store.next_id();
        let participant = store
            .participants
            .iter_mut()
            .find(|p| p.id == Some(participant_id))
            .ok_or_else(|| not_found("participant", participant_id))?;
        if !participant
            .disciplines
            .iter()
            .any(|d| d.id == Some(discipline_id))
        {
            return Err(AthleticsError::InvalidInput(format!(
                "participant {participant_id} is not registered for discipline {discipline_id}"
            )));
        }
        let mut stored = result.clone();
        stored.id = Some(id);
        stored.participant_id = Some(participant_id);
        participant.results.push(stored.clone());
        store.results.push(stored.clone());
        Ok(stored)
    }

    async fn update_participant_result(
        &self,
        participant_id: i64,
        _discipline_id: i64,
        result_id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        let mut stored = result.clone();
        stored.participant_id = Some(participant_id);
        self.update_result(result_id, &stored).await
    }

    async fn list_disciplines(&self) -> Result<Vec<Discipline>, AthleticsError> {
        Ok(self.store.lock().await.disciplines.clone())
    }

    async fn get_discipline(&self, id: i64) -> Result<Discipline, AthleticsError> {
        let store = self.store.lock().await;
        store
            .disciplines
            .iter()
            .find(|d| d.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found("discipline", id))
    }

    async fn create_discipline(
        &self,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError> {
        discipline.validate()?;
        let mut store = self.store.lock().await;
        let mut created = discipline.clone();
        created.id = Some(store.next_id());
        store.disciplines.push(created.clone());
        Ok(created)
    }

    async fn update_discipline(
        &self,
        id: i64,
        discipline: &Discipline,
    ) -> Result<Discipline, AthleticsError> {
        discipline.validate()?;
        let mut store = self.store.lock().await;
        let slot = store
            .disciplines
            .iter_mut()
            .find(|d| d.id == Some(id))
            .ok_or_else(|| not_found("discipline", id))?;
        *slot = discipline.clone();
        slot.id = Some(id);
        Ok(slot.clone())
    }

    async fn delete_discipline(&self, id: i64) -> Result<(), AthleticsError> {
        let mut store = self.store.lock().await;
        let before = store.disciplines.len();
        store.disciplines.retain(|d| d.id != Some(id));
        if store.disciplines.len() == before {
            return Err(not_found("discipline", id));
        }
        Ok(())
    }

    async fn list_results(&self) -> Result<Vec<CompetitionResult>, AthleticsError> {
        Ok(self.store.lock().await.results.clone())
    }

    async fn get_result(&self, id: i64) -> Result<CompetitionResult, AthleticsError> {
        let store = self.store.lock().await;
        store
            .results
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found("result", id))
    }

    async fn create_result(
        &self,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        result.validate()?;
        let mut store = self.store.lock().await;
        let mut created = result.clone();
        created.id = Some(store.next_id());
        store.results.push(created.clone());
        Ok(created)
    }

    async fn update_result(
        &self,
        id: i64,
        result: &CompetitionResult,
    ) -> Result<CompetitionResult, AthleticsError> {
        result.validate()?;
        let mut store = self.store.lock().await;
        let slot = store
            .results
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| not_found("result", id))?;
        *slot = result.clone();
        slot.id = Some(id);
        let updated = slot.clone();
        for p in &mut store.participants {
            for r in p.results.iter_mut().filter(|r| r.id == Some(id)) {
                *r = updated.clone();
            }
        }
        Ok(updated)
    }

    async fn delete_result(&self, id: i64) -> Result<(), AthleticsError> {
        let mut store = self.store.lock().await;
        let before = store.results.len();
        store.results.retain(|r| r.id != Some(id));
        if store.results.len() == before {
            return Err(not_found("result", id));
        }
        for p in &mut store.participants {
            p.results.retain(|r| r.id != Some(id));
        }
        Ok(())
    }
}
