use serde::{Deserialize, Serialize};
use std::fmt;

/// Fare band derived from a guest's age
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FareCategory {
    Infant,
    Child,
    Adult,
    Senior,
}

impl FareCategory {
    pub const ALL: [FareCategory; 4] = [
        FareCategory::Infant,
        FareCategory::Child,
        FareCategory::Adult,
        FareCategory::Senior,
    ];

    /// First matching band wins: <= 2 infant, < 18 child, < 60 adult, otherwise senior.
    pub fn for_age(age: i64) -> Self {
        if age <= 2 {
            FareCategory::Infant
        } else if age < 18 {
            FareCategory::Child
        } else if age < 60 {
            FareCategory::Adult
        } else {
            FareCategory::Senior
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FareCategory::Infant => "infant",
            FareCategory::Child => "child",
            FareCategory::Adult => "adult",
            FareCategory::Senior => "senior",
        }
    }
}

impl fmt::Display for FareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
