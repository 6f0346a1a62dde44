use serde::Deserialize;

use crate::error::FetchFailure;

/// Payload served by `GET /date`. Only `date` is read; anything else the
/// backend sends is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct DateResponse {
    #[serde(default)]
    pub date: Option<String>,
}

impl DateResponse {
    /// Parse a raw response body and pull out the date string.
    pub fn parse(body: &str) -> Result<String, FetchFailure> {
        let response: DateResponse = serde_json::from_str(body).map_err(FetchFailure::parse)?;
        response.into_date()
    }

    pub fn into_date(self) -> Result<String, FetchFailure> {
        self.date.ok_or(FetchFailure::MissingDate)
    }
}

/// Observable phases of the display. There is no failed phase: a failed
/// fetch simply leaves the display `Unloaded`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Unloaded,
    Loaded(String),
}

impl Phase {
    pub fn current_date(&self) -> &str {
        match self {
            Phase::Unloaded => "",
            Phase::Loaded(date) => date,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Phase::Loaded(_))
    }
}
