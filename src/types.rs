//! Core types for the resort graph.

use crate::error::ResortError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating status of a lift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiftStatus {
    Open,
    Closed,
    Hold,
}

impl LiftStatus {
    pub const ALL: [LiftStatus; 3] = [LiftStatus::Open, LiftStatus::Closed, LiftStatus::Hold];

    pub fn as_str(&self) -> &'static str {
        match self {
            LiftStatus::Open => "OPEN",
            LiftStatus::Closed => "CLOSED",
            LiftStatus::Hold => "HOLD",
        }
    }
}

impl fmt::Display for LiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LiftStatus {
    type Err = ResortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(LiftStatus::Open),
            "CLOSED" => Ok(LiftStatus::Closed),
            "HOLD" => Ok(LiftStatus::Hold),
            other => Err(ResortError::InvalidEnumValue {
                type_name: "LiftStatus",
                value: other.to_string(),
            }),
        }
    }
}

/// Operating status of a trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrailStatus {
    Open,
    Closed,
}

impl TrailStatus {
    pub const ALL: [TrailStatus; 2] = [TrailStatus::Open, TrailStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrailStatus::Open => "OPEN",
            TrailStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for TrailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrailStatus {
    type Err = ResortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(TrailStatus::Open),
            "CLOSED" => Ok(TrailStatus::Closed),
            other => Err(ResortError::InvalidEnumValue {
                type_name: "TrailStatus",
                value: other.to_string(),
            }),
        }
    }
}

/// A chairlift, gondola or surface lift.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lift {
    pub id: String,
    pub name: String,
    pub capacity: i64,
    pub status: LiftStatus,
    pub night: bool,
    pub elevation_gain: i64,
    /// Ride time as displayed on the trail map (e.g. "5 minutes").
    pub time: String,
    /// Ids of the trails this lift serves.
    pub trails: Vec<String>,
}

impl Lift {
    /// Copy of this lift with only `status` replaced.
    pub fn with_status(&self, status: LiftStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Whether this lift lists `trail_id` among the trails it serves.
    pub fn serves(&self, trail_id: &str) -> bool {
        self.trails.iter().any(|t| t == trail_id)
    }
}

/// A groomed run, glade or park.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
    pub id: String,
    pub name: String,
    /// Ids of the lifts serving this trail.
    pub lift: Vec<String>,
    pub difficulty: String,
    pub status: TrailStatus,
    pub groomed: bool,
    pub snowmaking: bool,
    pub trees: bool,
    pub night: bool,
}

impl Trail {
    /// Copy of this trail with only `status` replaced.
    pub fn with_status(&self, status: TrailStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Whether `lift_id` is listed as serving this trail.
    pub fn served_by(&self, lift_id: &str) -> bool {
        self.lift.iter().any(|l| l == lift_id)
    }
}

/// Which of the two entity collections something refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Lift,
    Trail,
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionKind::Lift => f.write_str("lift"),
            CollectionKind::Trail => f.write_str("trail"),
        }
    }
}

/// Shared shape of the records held by an entity collection.
pub trait Entity: Clone + Send + Sync + 'static {
    type Status: Copy + PartialEq + fmt::Debug + Send + Sync;

    const KIND: CollectionKind;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn status(&self) -> Self::Status;
}

impl Entity for Lift {
    type Status = LiftStatus;

    const KIND: CollectionKind = CollectionKind::Lift;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> LiftStatus {
        self.status
    }
}

impl Entity for Trail {
    type Status = TrailStatus;

    const KIND: CollectionKind = CollectionKind::Trail;

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> TrailStatus {
        self.status
    }
}

/// Named channel identifying a category of change event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    LiftStatusChange,
    TrailStatusChange,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::LiftStatusChange => "lift-status-change",
            Topic::TrailStatusChange => "trail-status-change",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jazz_cat() -> Lift {
        Lift {
            id: "jazz-cat".to_string(),
            name: "Jazz Cat".to_string(),
            capacity: 2,
            status: LiftStatus::Open,
            night: true,
            elevation_gain: 1230,
            time: "10 minutes".to_string(),
            trails: vec!["goosebumps".to_string(), "river-run".to_string()],
        }
    }

    #[test]
    fn test_lift_with_status_keeps_other_fields() {
        let lift = jazz_cat();
        let held = lift.with_status(LiftStatus::Hold);

        assert_eq!(held.status, LiftStatus::Hold);
        assert_eq!(held, Lift { status: LiftStatus::Hold, ..lift.clone() });
        // Original untouched
        assert_eq!(lift.status, LiftStatus::Open);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("HOLD".parse::<LiftStatus>().unwrap(), LiftStatus::Hold);
        assert_eq!("CLOSED".parse::<TrailStatus>().unwrap(), TrailStatus::Closed);

        let err = "HOLD".parse::<TrailStatus>().unwrap_err();
        assert!(matches!(
            err,
            ResortError::InvalidEnumValue { type_name: "TrailStatus", .. }
        ));
        assert!("open".parse::<LiftStatus>().is_err());
    }

    #[test]
    fn test_lift_json_field_names() {
        let value = serde_json::to_value(jazz_cat()).unwrap();
        assert_eq!(value["elevationGain"], 1230);
        assert_eq!(value["status"], "OPEN");
        assert_eq!(value["trails"][1], "river-run");
    }

    #[test]
    fn test_trail_json_parse() {
        let trail: Trail = serde_json::from_str(
            r#"{
                "id": "goosebumps",
                "name": "Goosebumps",
                "lift": ["jazz-cat"],
                "difficulty": "advanced",
                "status": "CLOSED",
                "groomed": false,
                "snowmaking": false,
                "trees": true,
                "night": false
            }"#,
        )
        .unwrap();

        assert_eq!(trail.status, TrailStatus::Closed);
        assert!(trail.served_by("jazz-cat"));
        assert!(!trail.served_by("astra-express"));
    }

    #[test]
    fn test_topic_names() {
        assert_eq!(Topic::LiftStatusChange.as_str(), "lift-status-change");
        assert_eq!(Topic::TrailStatusChange.to_string(), "trail-status-change");
    }
}
