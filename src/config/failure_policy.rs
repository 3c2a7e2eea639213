use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a failed block-list request affects the rest of the run.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Hash, ValueEnum, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The whole run fails
    #[default]
    Abort,
    /// The page is kept with no contents
    Skip,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Skip => write!(f, "skip"),
        }
    }
}
