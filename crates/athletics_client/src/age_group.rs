//! Age bands used for classification and for search filters.
//!
//! [`AGE_BANDS`] is the only place band boundaries are written down. The
//! classifier, the filter labels sent to the store and their inverse are all
//! derived from it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeGroup {
    Child,
    Youth,
    Junior,
    Adult,
    Senior,
}

/// An inclusive age range. `max == None` means open-ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgeBand {
    pub group: AgeGroup,
    pub min: u32,
    pub max: Option<u32>,
}

impl AgeBand {
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && self.max.is_none_or(|max| age <= max)
    }

    /// Label the store's filter endpoint understands, e.g. `6-9` or `41+`.
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}+", self.min),
        }
    }
}

/// Every age from 0 up, in ascending rows with no gaps. `Senior` owns two
/// rows: the under-6 row and the open-ended `41+` row.
pub const AGE_BANDS: [AgeBand; 6] = [
    AgeBand { group: AgeGroup::Senior, min: 0, max: Some(5) },
    AgeBand { group: AgeGroup::Child, min: 6, max: Some(9) },
    AgeBand { group: AgeGroup::Youth, min: 10, max: Some(13) },
    AgeBand { group: AgeGroup::Junior, min: 14, max: Some(22) },
    AgeBand { group: AgeGroup::Adult, min: 23, max: Some(40) },
    AgeBand { group: AgeGroup::Senior, min: 41, max: None },
];

/// The row an age falls in.
pub fn band_of(age: u32) -> &'static AgeBand {
    // the first row starts at 0, so the index is never 0
    let idx = AGE_BANDS.partition_point(|band| band.min <= age);
    &AGE_BANDS[idx - 1]
}

/// Map an age to its group.
pub fn classify(age: u32) -> AgeGroup {
    band_of(age).group
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Child,
        AgeGroup::Youth,
        AgeGroup::Junior,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];

    /// The row the store's filter endpoint knows this group by.
    pub fn band(self) -> &'static AgeBand {
        // row 0 is the under-6 part of Senior, the rest follow variant order
        &AGE_BANDS[self as usize + 1]
    }

    /// Every row that classifies as this group, youngest first.
    pub fn bands(self) -> impl Iterator<Item = &'static AgeBand> {
        AGE_BANDS.iter().filter(move |band| band.group == self)
    }

    pub fn contains(self, age: u32) -> bool {
        self.bands().any(|band| band.contains(age))
    }

    pub fn filter_label(self) -> String {
        self.band().label()
    }

    pub fn from_filter_label(label: &str) -> Option<AgeGroup> {
        let label = label.trim();
        AgeGroup::ALL
            .into_iter()
            .find(|group| group.filter_label() == label)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "CHILD",
            AgeGroup::Youth => "YOUTH",
            AgeGroup::Junior => "JUNIOR",
            AgeGroup::Adult => "ADULT",
            AgeGroup::Senior => "SENIOR",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgeGroup {
    type Err = String;

    /// Accepts a group name (`junior`, `JUNIOR`) or a filter label (`14-22`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        AgeGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == upper)
            .or_else(|| AgeGroup::from_filter_label(s))
            .ok_or_else(|| format!("unknown age group: {s}"))
    }
}
