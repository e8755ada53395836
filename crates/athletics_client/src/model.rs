//! Entity shapes exchanged with the results store.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};

use crate::age_group::{AgeGroup, classify};
use crate::measurement::{self, MeasurementError, ResultKind};
use crate::AthleticsError;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MALE" | "M" => Ok(Gender::Male),
            "FEMALE" | "F" => Ok(Gender::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => f.write_str("MALE"),
            Gender::Female => f.write_str("FEMALE"),
        }
    }
}

/// A participant as the store returns it.
///
/// There is no age group field: [`Participant::age_group`] derives it from
/// `age` every time, and the serialized form carries that derived value. Any
/// `ageGroup` the store sends back is ignored.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub club: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub disciplines: Vec<Discipline>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<CompetitionResult>,
}

impl Participant {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
        age: Option<u32>,
        club: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            age,
            club: club.into(),
            disciplines: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age.map(classify)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn validate(&self) -> Result<(), AthleticsError> {
        require_non_empty("firstName", &self.first_name)?;
        require_non_empty("lastName", &self.last_name)?;
        for result in &self.results {
            result.validate()?;
        }
        Ok(())
    }
}

impl Serialize for Participant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            id: Option<i64>,
            first_name: &'a str,
            last_name: &'a str,
            gender: Gender,
            age: Option<u32>,
            club: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            age_group: Option<AgeGroup>,
            disciplines: &'a [Discipline],
            results: &'a [CompetitionResult],
        }

        Wire {
            id: self.id,
            first_name: &self.first_name,
            last_name: &self.last_name,
            gender: self.gender,
            age: self.age,
            club: &self.club,
            age_group: self.age_group(),
            disciplines: &self.disciplines,
            results: &self.results,
        }
        .serialize(serializer)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Discipline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub result_type: ResultKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<CompetitionResult>,
}

impl Discipline {
    pub fn new(name: impl Into<String>, result_type: ResultKind) -> Self {
        Self {
            id: None,
            name: name.into(),
            result_type,
            results: Vec::new(),
        }
    }

    pub fn to_ref(&self) -> DisciplineRef {
        DisciplineRef {
            id: self.id,
            name: self.name.clone(),
            result_type: self.result_type,
        }
    }

    pub fn validate(&self) -> Result<(), AthleticsError> {
        require_non_empty("name", &self.name)
    }
}

/// The discipline a result belongs to, as embedded in the result itself.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub result_type: ResultKind,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub result_value: f64,
    pub discipline: DisciplineRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<i64>,
}

impl CompetitionResult {
    pub fn kind(&self) -> ResultKind {
        self.discipline.result_type
    }

    /// The value formatted for its discipline's kind.
    pub fn display_value(&self) -> Result<String, MeasurementError> {
        measurement::encode(self.result_value, self.kind())
    }

    pub fn validate(&self) -> Result<(), AthleticsError> {
        if !self.result_value.is_finite() || self.result_value < 0.0 {
            return Err(AthleticsError::InvalidInput(format!(
                "resultValue must be a non-negative number, got {}",
                self.result_value
            )));
        }
        Ok(())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AthleticsError> {
    if value.trim().is_empty() {
        return Err(AthleticsError::InvalidInput(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sprint() -> DisciplineRef {
        DisciplineRef {
            id: Some(3),
            name: "100m".into(),
            result_type: ResultKind::Time,
        }
    }

    #[test]
    fn participant_ignores_stored_age_group() {
        let payload = json!({
            "id": 1,
            "firstName": "Anna",
            "lastName": "Holm",
            "gender": "FEMALE",
            "age": 12,
            "club": "Storm Klub",
            "ageGroup": "ADULT",
            "results": null
        });
        let p: Participant = serde_json::from_value(payload).expect("participant");
        assert_eq!(p.age_group(), Some(AgeGroup::Youth));
        assert!(p.results.is_empty());
        assert!(p.disciplines.is_empty());
    }

    #[test]
    fn participant_serializes_derived_age_group() {
        let mut p = Participant::new("Bo", "Lind", Gender::Male, Some(30), "Falke IF");
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["ageGroup"], "ADULT");
        assert_eq!(v["firstName"], "Bo");
        assert!(v.get("id").is_none());

        p.age = Some(8);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["ageGroup"], "CHILD");

        p.age = None;
        let v = serde_json::to_value(&p).unwrap();
        assert!(v.get("ageGroup").is_none());
        assert!(v["age"].is_null());
    }

    #[test]
    fn participant_validation_rejects_blank_names() {
        let p = Participant::new("  ", "Lind", Gender::Male, None, "");
        assert!(matches!(p.validate(), Err(AthleticsError::InvalidInput(_))));
        let p = Participant::new("Bo", "Lind", Gender::Male, None, "");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn result_requires_discipline() {
        let payload = json!({"id": 4, "date": "2024-06-01", "resultValue": 9580, "discipline": null});
        let res: Result<CompetitionResult, _> = serde_json::from_value(payload);
        assert!(res.is_err());
    }

    #[test]
    fn result_display_uses_discipline_kind() {
        let payload = json!({
            "id": 4,
            "date": "2024-06-01",
            "resultValue": 9580,
            "participantId": 1,
            "discipline": {"id": 3, "name": "100m", "resultType": "TIME"}
        });
        let r: CompetitionResult = serde_json::from_value(payload).expect("result");
        assert_eq!(r.discipline, sprint());
        assert_eq!(r.display_value().unwrap(), "00:00:09.58");
    }

    #[test]
    fn result_validation_rejects_negative_values() {
        let r = CompetitionResult {
            id: None,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            result_value: -1.0,
            discipline: sprint(),
            participant_id: None,
        };
        assert!(r.validate().is_err());
    }

    #[test]
    fn gender_parses_loosely() {
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert!("x".parse::<Gender>().is_err());
    }
}
