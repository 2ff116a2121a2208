use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::schema::{Field, Kind};
use super::Model;

const FIELDS: &[Field] = &[
    Field::required("id", "id", Kind::Str),
    Field::optional("label", "label", Kind::Str),
    Field::optional("slug", "slug", Kind::Str),
    Field::optional("force_show", "forceShow", Kind::Bool),
    Field::optional("force_hide", "forceHide", Kind::Bool),
    Field::optional("is_carousel", "isCarousel", Kind::Bool),
    Field::optional("published_at", "publishedAt", Kind::Str),
    Field::optional("created_at", "createdAt", Kind::Timestamp),
    Field::optional("updated_at", "updatedAt", Kind::Timestamp),
];

/// A category label attached to markets and events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub label: Option<String>,
    pub slug: Option<String>,
    #[serde(alias = "force_show")]
    pub force_show: Option<bool>,
    #[serde(alias = "force_hide")]
    pub force_hide: Option<bool>,
    #[serde(alias = "is_carousel")]
    pub is_carousel: Option<bool>,
    /// Kept verbatim; the upstream format for this field is not stable.
    #[serde(alias = "published_at")]
    pub published_at: Option<String>,
    #[serde(default, alias = "created_at", with = "crate::datetime::flexible")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, alias = "updated_at", with = "crate::datetime::flexible")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Model for Tag {
    const NAME: &'static str = "Tag";
    const FIELDS: &'static [Field] = FIELDS;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn only_id_is_required() {
        let tag = Tag::from_value(json!({"id": "2"})).unwrap();
        assert_eq!(tag.id, "2");
        assert_eq!(tag.label, None);
        assert_eq!(tag.force_show, None);

        let err = Tag::from_value(json!({"label": "Politics"})).unwrap_err();
        assert!(err.is_missing("id"));
    }

    #[test]
    fn parses_upstream_shape() {
        let tag = Tag::from_value(json!({
            "id": "2",
            "label": "Politics",
            "slug": "politics",
            "forceShow": true,
            "publishedAt": "2023-10-25 18:54:42.5+00",
            "createdAt": "2023-10-25T18:54:42.5Z",
            "updatedAt": "2024-06-12 09:12:03+00"
        }))
        .unwrap();
        assert_eq!(tag.force_show, Some(true));
        assert_eq!(tag.published_at.as_deref(), Some("2023-10-25 18:54:42.5+00"));
        assert_eq!(tag.updated_at, Some(datetime!(2024-06-12 09:12:03 UTC)));
    }
}
