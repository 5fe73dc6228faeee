use serde::{Deserialize, Serialize};

/// Profile record of the signed-in user as returned by the profile API.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileRecord {
    #[serde(default)]
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    /// Comma-separated skill list.
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    /// Comma-separated language list.
    #[serde(default)]
    pub languages: String,
    #[serde(default)]
    pub connections: u32,
    #[serde(default, rename = "mutualConnections")]
    pub mutual_connections: u32,
}

/// One entry in the profile activity stream.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub date: String,
}

/// Profile plus activity stream, the shape of a `get_profile` response.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileBundle {
    pub user: ProfileRecord,
    #[serde(default)]
    pub activity: Vec<ActivityItem>,
}

/// Fields accepted by the profile update endpoint.
///
/// Only the subset the backend persists; name and email are managed through
/// the account flow and never sent here.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub title: String,
    pub bio: String,
    pub skills: String,
    pub location: String,
    pub phone: String,
    pub languages: String,
}
