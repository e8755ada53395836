//! Display shapes returned by read tools and the HTTP endpoints.
//!
//! Every value here is computed from the domain model at the moment it is
//! rendered: age groups come from `classify`, result strings from `encode`.

use athletics_client::{
    AgeBand, AgeGroup, CompetitionResult, Discipline, Gender, Participant, ResultKind, band_of,
};
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Clone, Debug, Serialize, JsonSchema, PartialEq)]
pub struct ResultView {
    pub id: Option<i64>,
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    pub discipline_id: Option<i64>,
    pub discipline: String,
    pub result_type: ResultKind,
    /// Canonical value as stored
    pub value: f64,
    /// Value rendered for its discipline, e.g. `00:01:02.00` or `7 m 45 cm`
    pub display: String,
    pub participant_id: Option<i64>,
}

impl From<&CompetitionResult> for ResultView {
    fn from(r: &CompetitionResult) -> Self {
        Self {
            id: r.id,
            date: r.date.format("%Y-%m-%d").to_string(),
            discipline_id: r.discipline.id,
            discipline: r.discipline.name.clone(),
            result_type: r.kind(),
            value: r.result_value,
            // A stored value the codec refuses is shown raw.
            display: r
                .display_value()
                .unwrap_or_else(|_| r.result_value.to_string()),
            participant_id: r.participant_id,
        }
    }
}

#[derive(Clone, Debug, Serialize, JsonSchema, PartialEq)]
pub struct DisciplineSummary {
    pub id: Option<i64>,
    pub name: String,
    pub result_type: ResultKind,
}

#[derive(Clone, Debug, Serialize, JsonSchema, PartialEq)]
pub struct DisciplineView {
    pub id: Option<i64>,
    pub name: String,
    pub result_type: ResultKind,
    pub results: Vec<ResultView>,
}

impl From<&Discipline> for DisciplineView {
    fn from(d: &Discipline) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            result_type: d.result_type,
            results: d.results.iter().map(ResultView::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, JsonSchema, PartialEq)]
pub struct ParticipantView {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub age: Option<u32>,
    pub age_group: Option<AgeGroup>,
    /// Age range the participant falls in, e.g. `10-13`
    pub age_band: Option<String>,
    pub club: String,
    pub disciplines: Vec<DisciplineSummary>,
    pub results: Vec<ResultView>,
}

impl From<&Participant> for ParticipantView {
    fn from(p: &Participant) -> Self {
        let age_group = p.age_group();
        Self {
            id: p.id,
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            gender: p.gender,
            age: p.age,
            age_group,
            age_band: p.age.map(|age| band_of(age).label()),
            club: p.club.clone(),
            disciplines: p
                .disciplines
                .iter()
                .map(|d| DisciplineSummary {
                    id: d.id,
                    name: d.name.clone(),
                    result_type: d.result_type,
                })
                .collect(),
            results: p.results.iter().map(ResultView::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, JsonSchema, PartialEq)]
pub struct AgeBandView {
    pub age_group: AgeGroup,
    /// Label used by the participant filter, e.g. `41+`
    pub label: String,
    /// Every age range that classifies as this group
    pub ages: Vec<String>,
}

impl From<AgeGroup> for AgeBandView {
    fn from(group: AgeGroup) -> Self {
        Self {
            age_group: group,
            label: group.filter_label(),
            ages: group.bands().map(AgeBand::label).collect(),
        }
    }
}

pub fn age_bands() -> Vec<AgeBandView> {
    AgeGroup::ALL.into_iter().map(AgeBandView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use athletics_client::DisciplineRef;
    use chrono::NaiveDate;

    fn result(value: f64, kind: ResultKind) -> CompetitionResult {
        CompetitionResult {
            id: Some(1),
            date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            result_value: value,
            discipline: DisciplineRef {
                id: Some(2),
                name: "Long jump".into(),
                result_type: kind,
            },
            participant_id: Some(9),
        }
    }

    #[test]
    fn result_view_renders_by_kind() {
        let v = ResultView::from(&result(7.45, ResultKind::Distance));
        assert_eq!(v.display, "7 m 45 cm");
        assert_eq!(v.date, "2025-06-14");
        let v = ResultView::from(&result(3_661_230.0, ResultKind::Time));
        assert_eq!(v.display, "01:01:01.23");
    }

    #[test]
    fn unrenderable_value_falls_back_to_raw() {
        let v = ResultView::from(&result(-1.0, ResultKind::Time));
        assert_eq!(v.display, "-1");
    }

    #[test]
    fn participant_view_derives_age_group() {
        let mut p = Participant::new("Ola", "Nordmann", Gender::Male, Some(41), "IL Tyrving");
        p.results.push(result(12.0, ResultKind::Points));
        let v = ParticipantView::from(&p);
        assert_eq!(v.age_group, Some(AgeGroup::Senior));
        assert_eq!(v.age_band.as_deref(), Some("41+"));
        assert_eq!(v.results[0].display, "12");

        p.age = Some(4);
        let v = ParticipantView::from(&p);
        assert_eq!(v.age_group, Some(AgeGroup::Senior));
        assert_eq!(v.age_band.as_deref(), Some("0-5"));

        p.age = None;
        let v = ParticipantView::from(&p);
        assert!(v.age_group.is_none());
        assert!(v.age_band.is_none());
    }

    #[test]
    fn age_bands_cover_every_group() {
        let bands = age_bands();
        assert_eq!(bands.len(), 5);
        assert_eq!(bands[0].label, "6-9");
        assert_eq!(bands[4].age_group, AgeGroup::Senior);
        assert_eq!(bands[4].label, "41+");
        assert_eq!(bands[4].ages, ["0-5", "41+"]);
        assert_eq!(bands[1].ages, ["10-13"]);
    }
}
