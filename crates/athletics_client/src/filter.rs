use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{AgeGroup, Gender};

/// Query for the participant filter endpoint. Unset fields are not sent.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct ParticipantFilter {
    /// Substring of the participant's name
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub age_group: Option<AgeGroup>,
    pub club: Option<String>,
    /// Discipline name
    pub discipline: Option<String>,
}

impl ParticipantFilter {
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Query string pairs in the store's naming. The age group goes out as its
    /// band label (`14-22`), not its name.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = non_blank(&self.name) {
            pairs.push(("name", name.to_string()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.to_string()));
        }
        if let Some(group) = self.age_group {
            pairs.push(("ageGroup", group.filter_label()));
        }
        if let Some(club) = non_blank(&self.club) {
            pairs.push(("club", club.to_string()));
        }
        if let Some(discipline) = non_blank(&self.discipline) {
            pairs.push(("discipline", discipline.to_string()));
        }
        pairs
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
