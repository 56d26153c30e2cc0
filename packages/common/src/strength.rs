#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How strongly a hero wields a power.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities,
/// so a `hero_powers.strength` column can never hold anything outside the allowed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "PascalCase")]
pub enum Strength {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Strong"))]
    Strong,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Weak"))]
    Weak,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Average"))]
    Average,
}

impl Strength {
    /// All allowed values, in the order they are reported to clients.
    pub const ALL: &'static [Strength] = &[Self::Strong, Self::Weak, Self::Average];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }

    /// Comma-separated list of allowed values, e.g. `Strong, Weak, Average`.
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a string that is not an allowed strength.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid strength '{invalid}'. Valid values: {}", Strength::allowed())]
pub struct ParseStrengthError {
    invalid: String,
}

impl ParseStrengthError {
    pub fn invalid(&self) -> &str {
        &self.invalid
    }
}

impl FromStr for Strength {
    type Err = ParseStrengthError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strong" => Ok(Self::Strong),
            "Weak" => Ok(Self::Weak),
            "Average" => Ok(Self::Average),
            _ => Err(ParseStrengthError {
                invalid: s.to_string(),
            }),
        }
    }
}
