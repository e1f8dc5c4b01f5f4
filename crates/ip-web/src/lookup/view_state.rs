//! View-state reducer for the lookup widget.
//!
//! ```text
//! Loading --(fetch success)--> Loaded(result)
//! Loading --(fetch failure)--> Error(message)
//! ```
//!
//! A new fetch start always resets to `Loading`; the widget only starts one
//! fetch per mount, so in practice there is no way back.

use super::{Location, LookupError, LookupResult};
use crate::i18n::Messages;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Loaded(LookupResult),
}

#[derive(Debug, Clone)]
pub enum LookupEvent {
    Started,
    Finished(Result<LookupResult, LookupError>),
}

impl ViewState {
    pub fn apply(self, event: LookupEvent, messages: &Messages) -> ViewState {
        match event {
            LookupEvent::Started => ViewState::Loading,
            LookupEvent::Finished(outcome) => Self::from_outcome(outcome, messages),
        }
    }

    pub fn from_outcome(outcome: Result<LookupResult, LookupError>, messages: &Messages) -> ViewState {
        match outcome {
            Ok(result) => ViewState::Loaded(result),
            Err(err) => ViewState::Error(err.user_message(messages)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// The IP to display and copy, once loaded
    pub fn ip(&self) -> Option<&str> {
        match self {
            ViewState::Loaded(result) => Some(&result.ip),
            _ => None,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            ViewState::Loaded(result) => result.location.as_ref(),
            _ => None,
        }
    }
}
