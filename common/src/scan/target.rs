//! # Scan Target Model
//!
//! The address range handed to the external scanner, usually in CIDR
//! notation (e.g. `192.168.1.0/24`).
//!
//! No parsing happens here. Whatever the user supplies is passed through
//! verbatim and the scanner decides whether it makes sense.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanTarget(String);

impl ScanTarget {
    pub fn new(range: impl Into<String>) -> Self {
        Self(range.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ScanTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for ScanTarget {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
