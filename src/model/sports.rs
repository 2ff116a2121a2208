use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::de;
use super::schema::{Field, Kind};
use super::Model;

const TEAM_FIELDS: &[Field] = &[
    Field::required("id", "id", Kind::Int),
    Field::required("name", "name", Kind::Str),
    Field::required("league", "league", Kind::Str),
    Field::optional("record", "record", Kind::Str),
    Field::optional("logo", "logo", Kind::Str),
    Field::optional("abbreviation", "abbreviation", Kind::Str),
    Field::optional("alias", "alias", Kind::Str),
    Field::optional("created_at", "createdAt", Kind::Timestamp),
    Field::optional("updated_at", "updatedAt", Kind::Timestamp),
];

const SPORT_FIELDS: &[Field] = &[
    Field::required("sport", "sport", Kind::Str),
    Field::optional("image", "image", Kind::Str),
    Field::optional("resolution", "resolution", Kind::Str),
    Field::optional("ordering", "ordering", Kind::Str),
    Field::optional("tags", "tags", Kind::Str),
    Field::optional("series", "series", Kind::Str),
];

/// A sports team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(deserialize_with = "de::required_i64")]
    pub id: i64,
    pub name: String,
    pub league: String,
    pub record: Option<String>,
    pub logo: Option<String>,
    pub abbreviation: Option<String>,
    pub alias: Option<String>,
    #[serde(default, alias = "created_at", with = "crate::datetime::flexible")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, alias = "updated_at", with = "crate::datetime::flexible")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Model for Team {
    const NAME: &'static str = "Team";
    const FIELDS: &'static [Field] = TEAM_FIELDS;
}

/// Per-sport display and resolution metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportMetadata {
    pub sport: String,
    pub image: Option<String>,
    /// Resolution source URL.
    pub resolution: Option<String>,
    pub ordering: Option<String>,
    /// Comma-separated tag IDs.
    pub tags: Option<String>,
    pub series: Option<String>,
}

impl Model for SportMetadata {
    const NAME: &'static str = "SportMetadata";
    const FIELDS: &'static [Field] = SPORT_FIELDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn team_requires_integer_id() {
        let team = Team::from_value(json!({"id": 7, "name": "Lakers", "league": "nba"})).unwrap();
        assert_eq!(team.id, 7);
        assert_eq!(team.logo, None);

        let err = Team::from_value(json!({"id": "seven", "name": "Lakers"})).unwrap_err();
        assert_eq!(err.errors.len(), 2);
        assert!(err.is_missing("league"));
    }

    #[test]
    fn sport_metadata_parses() {
        let sport = SportMetadata::from_value(json!({
            "sport": "nba",
            "tags": "1,745,100639",
            "series": "10345"
        }))
        .unwrap();
        assert_eq!(sport.tags.as_deref(), Some("1,745,100639"));
        assert_eq!(sport.image, None);
    }
}
