//! The participant entity and its activity counters.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A registered participant, as stored in the collection.
///
/// Field names keep the camelCase spelling used on the wire and in the
/// stored documents; `_id` is assigned by the datastore on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "idNumber")]
    pub id_number: Option<String>,
    #[serde(default, rename = "lineId")]
    pub line_id: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
    #[serde(default, rename = "healthMeasurement")]
    pub health_measurement: i64,
    #[serde(default, rename = "healthEducation")]
    pub health_education: i64,
    #[serde(default)]
    pub exercise: i64,
}

/// Boundary rendering of a stored participant.
///
/// A raw `ObjectId` serializes through `serde_json` as `{"$oid": …}`, so the
/// identifier is converted to its hex text form here.
#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "idNumber")]
    pub id_number: Option<String>,
    #[serde(rename = "lineId")]
    pub line_id: Option<String>,
    pub tel: Option<String>,
    #[serde(rename = "healthMeasurement")]
    pub health_measurement: i64,
    #[serde(rename = "healthEducation")]
    pub health_education: i64,
    pub exercise: i64,
}

impl From<Participant> for ParticipantRecord {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: participant.name,
            id_number: participant.id_number,
            line_id: participant.line_id,
            tel: participant.tel,
            health_measurement: participant.health_measurement,
            health_education: participant.health_education,
            exercise: participant.exercise,
        }
    }
}

/// The three per-participant activity counters.
///
/// Increment requests name the counter in the URL path; anything outside
/// this set fails to parse and is rejected before a datastore call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterField {
    HealthMeasurement,
    HealthEducation,
    Exercise,
}

impl CounterField {
    /// Document key the counter is stored under.
    pub fn as_key(self) -> &'static str {
        match self {
            CounterField::HealthMeasurement => "healthMeasurement",
            CounterField::HealthEducation => "healthEducation",
            CounterField::Exercise => "exercise",
        }
    }
}

impl std::str::FromStr for CounterField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "healthMeasurement" => Ok(CounterField::HealthMeasurement),
            "healthEducation" => Ok(CounterField::HealthEducation),
            "exercise" => Ok(CounterField::Exercise),
            _ => Err(()),
        }
    }
}
