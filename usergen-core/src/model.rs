use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub gender: String,
    pub name: Name,
    pub email: String,
    pub location: Location,
    pub login: Login,
    pub cell: String,
    pub picture: Picture,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    pub fn location_line(&self) -> String {
        [
            self.location.city.as_str(),
            self.location.state.as_str(),
            self.location.country.as_str(),
        ]
        .join(", ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    // Some nationalities report numeric or missing states.
    #[serde(deserialize_with = "string_or_number", default)]
    pub state: String,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub md5: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
}

/// Envelope of `GET /api/`.  Only the first result is ever used.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiResponse {
    pub results: Vec<UserRecord>,
}

impl ApiResponse {
    pub fn into_first(self) -> Result<UserRecord, Error> {
        self.results.into_iter().next().ok_or(Error::EmptyResults)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Value::deserialize(deserializer)? {
        Value::Str(s) => s,
        Value::Num(n) => n.to_string(),
    })
}
