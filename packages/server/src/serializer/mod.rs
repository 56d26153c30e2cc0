//! Selective serialization of entities and their relationships.
//!
//! A record is rendered as its columns plus every relationship it declares,
//! expanded depth-first. Which relationships are followed is controlled by
//! [`Rules`]: a set of exclusion paths relative to the root record (e.g.
//! `hero_powers.hero`) and a hard depth cap. A path is pruned as soon as it
//! matches an exclusion, and no path longer than the cap is ever expanded, so
//! the hero -> hero_power -> hero cycle terminates even with no exclusions.

mod snapshot;

use std::fmt;
use std::str::FromStr;

use sea_orm::{ConnectionTrait, DbErr};
use serde_json::{Map, Value, json};

use crate::entity::{hero, hero_power, power};

pub use snapshot::Snapshot;

/// Relationship hops expanded at most, regardless of exclusions.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// A relationship name as it appears in serialized output and exclusion paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    HeroPowers,
    Hero,
    Power,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeroPowers => "hero_powers",
            Self::Hero => "hero",
            Self::Power => "power",
        }
    }

    /// Whether the relationship resolves to a collection.
    pub fn is_many(&self) -> bool {
        matches!(self, Self::HeroPowers)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePathError {
    #[error("empty exclusion path")]
    Empty,
    #[error("unknown relationship '{0}' in exclusion path")]
    UnknownRelation(String),
}

impl FromStr for Relation {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero_powers" => Ok(Self::HeroPowers),
            "hero" => Ok(Self::Hero),
            "power" => Ok(Self::Power),
            other => Err(ParsePathError::UnknownRelation(other.to_string())),
        }
    }
}

/// A relationship route from the root record, e.g. `hero_powers.power`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExcludePath(Vec<Relation>);

impl ExcludePath {
    pub fn new(relations: &[Relation]) -> Self {
        Self(relations.to_vec())
    }

    /// True if `path` is this route or lies underneath it.
    pub fn covers(&self, path: &[Relation]) -> bool {
        path.starts_with(&self.0)
    }
}

impl FromStr for ExcludePath {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('-');
        if s.is_empty() {
            return Err(ParsePathError::Empty);
        }
        s.split('.')
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for ExcludePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.0.iter().map(Relation::as_str).collect();
        f.write_str(&parts.join("."))
    }
}

/// Which relationship paths a serialization follows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    excludes: Vec<ExcludePath>,
    max_depth: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            excludes: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Rules {
    pub fn excluding(paths: &[&[Relation]]) -> Self {
        Self {
            excludes: paths.iter().map(|p| ExcludePath::new(p)).collect(),
            ..Self::default()
        }
    }

    /// Build rules from dotted paths such as `"-hero_powers.hero"`.
    pub fn parse<'a>(paths: impl IntoIterator<Item = &'a str>) -> Result<Self, ParsePathError> {
        let excludes = paths
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            excludes,
            ..Self::default()
        })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether the relationship at the end of `path` should be expanded.
    pub fn allows(&self, path: &[Relation]) -> bool {
        path.len() <= self.max_depth && !self.excludes.iter().any(|ex| ex.covers(path))
    }

    /// Heroes in a listing: columns only.
    pub fn hero_list() -> Self {
        Self::excluding(&[&[Relation::HeroPowers]])
    }

    /// A single hero: its hero_powers, each with its power, but neither the
    /// way back to the hero nor the power's own hero_powers.
    pub fn hero_detail() -> Self {
        Self::excluding(&[
            &[Relation::HeroPowers, Relation::Hero],
            &[Relation::HeroPowers, Relation::Power, Relation::HeroPowers],
        ])
    }

    /// Powers, in any context: columns only.
    pub fn power() -> Self {
        Self::excluding(&[&[Relation::HeroPowers]])
    }

    /// A hero_power with both ends, neither of which expands its hero_powers.
    pub fn hero_power() -> Self {
        Self::excluding(&[
            &[Relation::Hero, Relation::HeroPowers],
            &[Relation::Power, Relation::HeroPowers],
        ])
    }
}

/// Any serializable entity row.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    Hero(hero::Model),
    Power(power::Model),
    HeroPower(hero_power::Model),
}

impl Record {
    /// Relationships in the order they are expanded.
    pub fn relations(&self) -> &'static [Relation] {
        match self {
            Record::Hero(_) | Record::Power(_) => &[Relation::HeroPowers],
            Record::HeroPower(_) => &[Relation::Hero, Relation::Power],
        }
    }

    pub fn columns(&self) -> Map<String, Value> {
        let value = match self {
            Record::Hero(m) => json!({
                "id": m.id,
                "name": m.name,
                "super_name": m.super_name,
            }),
            Record::Power(m) => json!({
                "id": m.id,
                "name": m.name,
                "description": m.description,
            }),
            Record::HeroPower(m) => json!({
                "id": m.id,
                "hero_id": m.hero_id,
                "power_id": m.power_id,
                "strength": m.strength.as_str(),
            }),
        };
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

impl From<hero::Model> for Record {
    fn from(m: hero::Model) -> Self {
        Record::Hero(m)
    }
}

impl From<power::Model> for Record {
    fn from(m: power::Model) -> Self {
        Record::Power(m)
    }
}

impl From<hero_power::Model> for Record {
    fn from(m: hero_power::Model) -> Self {
        Record::HeroPower(m)
    }
}

/// Serialize one record, loading whatever relationships `rules` lets through.
pub async fn serialize_one<C, R>(db: &C, record: R, rules: &Rules) -> Result<Value, DbErr>
where
    C: ConnectionTrait,
    R: Into<Record>,
{
    let record = record.into();
    let snapshot = Snapshot::collect(db, std::slice::from_ref(&record), rules).await?;
    Ok(snapshot.render(&record, rules))
}

/// Serialize a list of records into a JSON array, preserving their order.
pub async fn serialize_many<C, R>(db: &C, records: Vec<R>, rules: &Rules) -> Result<Value, DbErr>
where
    C: ConnectionTrait,
    R: Into<Record>,
{
    let records: Vec<Record> = records.into_iter().map(Into::into).collect();
    let snapshot = Snapshot::collect(db, &records, rules).await?;
    Ok(Value::Array(
        records.iter().map(|r| snapshot.render(r, rules)).collect(),
    ))
}
