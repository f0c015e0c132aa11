use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted football fixture. The wire representation uses camelCase
/// (`homeTeam`/`awayTeam`/`matchDate`); the disciplinary counters stay
/// internal to the table and the increment endpoints.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Match {
    pub id: i32,
    #[serde(rename = "homeTeam")]
    pub home_team: String,
    #[serde(rename = "awayTeam")]
    pub away_team: String,
    pub score1: i32,
    pub score2: i32,
    #[serde(rename = "matchDate", with = "display_date")]
    pub match_date: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub yellow_cards: i32,
    #[serde(skip_serializing)]
    pub red_cards: i32,
    #[serde(skip_serializing)]
    pub extra_time: i32,
}

impl Match {
    /// Lower-case the team names for display. Stored values keep the casing
    /// the client submitted; lookups by id are unaffected.
    pub fn normalized(mut self) -> Self {
        self.home_team = self.home_team.to_lowercase();
        self.away_team = self.away_team.to_lowercase();
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    #[serde(rename = "homeTeam")]
    pub home_team: String,
    #[serde(rename = "awayTeam")]
    pub away_team: String,
    pub score1: i32,
    pub score2: i32,
}

#[derive(Debug, Deserialize)]
pub struct ScoreUpdateRequest {
    pub score1: i32,
    pub score2: i32,
}

#[derive(Debug, Deserialize)]
pub struct ExtraTimeRequest {
    pub extra_minutes: i32,
}

/// `matchDate` is rendered as `YYYY-MM-DD HH:MM:SS` rather than RFC 3339.
mod display_date {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixture() -> Match {
        Match {
            id: 7,
            home_team: "Real Madrid".into(),
            away_team: "Barcelona".into(),
            score1: 2,
            score2: 1,
            match_date: Utc.with_ymd_and_hms(2026, 3, 14, 21, 0, 0).unwrap(),
            yellow_cards: 3,
            red_cards: 1,
            extra_time: 5,
        }
    }

    #[test]
    fn match_serializes_with_camel_case_names_and_plain_date() {
        let json = serde_json::to_value(fixture().normalized()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "homeTeam": "real madrid",
                "awayTeam": "barcelona",
                "score1": 2,
                "score2": 1,
                "matchDate": "2026-03-14 21:00:00"
            })
        );
    }

    #[test]
    fn counters_stay_out_of_the_wire_representation() {
        let json = serde_json::to_value(fixture()).unwrap();
        assert!(json.get("yellow_cards").is_none());
        assert!(json.get("red_cards").is_none());
        assert!(json.get("extra_time").is_none());
    }

    #[test]
    fn normalization_leaves_ids_and_scores_alone() {
        let normalized = fixture().normalized();
        assert_eq!(normalized.id, 7);
        assert_eq!(normalized.score1, 2);
        assert_eq!(normalized.score2, 1);
    }
}
