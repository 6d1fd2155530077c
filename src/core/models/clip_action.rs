use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::ConfigError;
use crate::global_constants::{ACTION_NAME_COPY, ACTION_NAME_CUT};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClipAction {
    Copy,
    Cut,
}

impl fmt::Display for ClipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipAction::Copy => write!(f, "{}", ACTION_NAME_COPY),
            ClipAction::Cut => write!(f, "{}", ACTION_NAME_CUT),
        }
    }
}

impl Default for ClipAction {
    fn default() -> Self {
        ClipAction::Copy
    }
}

impl FromStr for ClipAction {
    type Err = ConfigError;

    fn from_str(action_name: &str) -> Result<Self, Self::Err> {
        match action_name {
            ACTION_NAME_COPY => Ok(ClipAction::Copy),
            ACTION_NAME_CUT => Ok(ClipAction::Cut),
            other => Err(ConfigError::InvalidAction(other.to_string())),
        }
    }
}
