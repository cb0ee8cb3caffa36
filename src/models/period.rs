use serde::Serialize;
use std::fmt;

/// Session of the day a work entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Morning,
    Evening,
}

impl Period {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Period::Morning => "morning",
            Period::Evening => "evening",
        }
    }

    /// Convert DB string → enum.
    ///
    /// Besides the canonical lowercase names this also accepts the labels
    /// stored by the first version of the clinic app (`صباحي` / `مسائي`),
    /// so an existing `daily_work` table stays readable.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim() {
            "morning" | "صباحي" => Some(Period::Morning),
            "evening" | "مسائي" => Some(Period::Evening),
            _ => None,
        }
    }

    /// Helper: convert user input (any case, `am`/`pm` shorthands)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "morning" | "am" | "m" => Some(Period::Morning),
            "evening" | "pm" | "e" => Some(Period::Evening),
            other => Period::from_db_str(other),
        }
    }

    /// Human-readable label used in listings and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Morning => "Morning",
            Period::Evening => "Evening",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
