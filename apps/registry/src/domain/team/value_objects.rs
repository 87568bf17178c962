use serde::{Deserialize, Serialize};
use std::fmt;

/// Externally supplied team identifier
///
/// Unique across the team collection. Ordering follows the numeric value,
/// which is the order `all_team_ids` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(i64);

impl TeamId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TeamId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A team's pair of jersey colors
///
/// # Clash Rule
/// When an away team's primary color matches the home team's primary color,
/// the away team switches to its secondary color.
///
/// # Example
/// ```
/// use team_registry::domain::team::value_objects::JerseyColors;
///
/// let home = JerseyColors::new("red", "white");
/// let away = JerseyColors::new("red", "black");
/// assert_eq!(away.away_color_against(&home), "black");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JerseyColors {
    primary: String,
    secondary: String,
}

impl JerseyColors {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Color this team wears when visiting a team dressed in `home`
    pub fn away_color_against(&self, home: &JerseyColors) -> &str {
        if self.primary == home.primary {
            &self.secondary
        } else {
            &self.primary
        }
    }
}
