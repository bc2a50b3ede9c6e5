use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// HTTP methods that appear in the API reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Patch,
}

impl HttpMethod {
    /// All methods, in the order the reference documents list them.
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// Recognise a method marker line: a backtick-quoted method at the start of
    /// the line once leading whitespace is removed (`` `GET` ``).
    #[must_use]
    pub fn from_marker(line: &str) -> Option<Self> {
        let line = line.trim_start();
        Self::ALL.into_iter().find(|method| {
            line.strip_prefix('`')
                .and_then(|rest| rest.strip_prefix(method.as_str()))
                .is_some_and(|rest| rest.starts_with('`'))
        })
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "PUT" => Ok(Self::Put),
            "POST" => Ok(Self::Post),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            _ => Err(format!(
                "invalid HTTP method: '{s}', expected: GET, PUT, POST, DELETE, PATCH"
            )),
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
