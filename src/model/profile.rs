use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::schema::{Field, Kind};
use super::Model;

const FIELDS: &[Field] = &[
    Field::required("proxy_wallet", "proxyWallet", Kind::Str),
    Field::optional("display_name", "displayName", Kind::Str),
    Field::optional("name", "name", Kind::Str),
    Field::optional("pseudonym", "pseudonym", Kind::Str),
    Field::optional("bio", "bio", Kind::Str),
    Field::optional("image", "image", Kind::Str),
    Field::optional("created_at", "createdAt", Kind::Timestamp),
];

/// Public profile of a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "proxy_wallet")]
    pub proxy_wallet: String,
    #[serde(alias = "display_name")]
    pub display_name: Option<String>,
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
    #[serde(default, alias = "created_at", with = "crate::datetime::flexible")]
    pub created_at: Option<OffsetDateTime>,
}

impl Model for Profile {
    const NAME: &'static str = "Profile";
    const FIELDS: &'static [Field] = FIELDS;
}
