use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw body of `GET https://ipinfo.io/json`. Fields we don't render are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IpInfoResponse {
    pub ip: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub city: String,
}

/// Parsed IP + location pair for one lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub ip: String,
    pub location: Option<Location>,
}

impl From<IpInfoResponse> for LookupResult {
    fn from(raw: IpInfoResponse) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());

        // Bogon and some anycast addresses come back with no city/country at all
        let location = match (non_empty(raw.city), non_empty(raw.country)) {
            (Some(city), Some(country)) => Some(Location { country, city }),
            _ => None,
        };

        LookupResult { ip: raw.ip, location }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}
