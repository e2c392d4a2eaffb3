//! School campuses.

use serde::{Deserialize, Serialize};

/// One of the academy's physical campuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "North Campus")]
    NorthCampus,
    #[serde(rename = "South Campus")]
    SouthCampus,
    #[serde(rename = "East Campus")]
    EastCampus,
}

impl Branch {
    pub const ALL: [Branch; 3] = [Branch::NorthCampus, Branch::SouthCampus, Branch::EastCampus];

    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::NorthCampus => "North Campus",
            Branch::SouthCampus => "South Campus",
            Branch::EastCampus => "East Campus",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == s)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
