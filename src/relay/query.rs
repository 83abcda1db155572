//! Inbound relay query and defaulting.

use crate::config::QueryDefaults;
use crate::engine::Calculation;

/// Query parameters accepted on `/json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayQuery {
    pub date: Option<String>,
    pub time: Option<String>,
}

impl RelayQuery {
    /// Pick `date` and `time` out of decoded query pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "date" => &mut query.date,
                "time" => &mut query.time,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Resolve the values to send upstream. Absent and empty both fall back.
    pub fn resolve(self, defaults: &QueryDefaults) -> Calculation {
        Calculation {
            date: or_default(self.date, &defaults.date),
            time: or_default(self.time, &defaults.time),
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}
