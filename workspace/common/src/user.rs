use serde::{Deserialize, Serialize};

/// Gender attribute of a user record.
///
/// Only `"male"` and `"female"` are recognised on the wire; any other value
/// deserialises to [`Gender::Other`] and never matches a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[serde(other)]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// A user record as returned by the data source.
///
/// `height` and `gender` are optional so that a malformed record still
/// deserialises; such records simply fall outside every bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    /// Height in centimetres.
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

impl UserRecord {
    pub fn new(height: f64, gender: Gender) -> Self {
        Self {
            height: Some(height),
            gender: Some(gender),
            ..Default::default()
        }
    }
}

/// One page of the `/users` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}
