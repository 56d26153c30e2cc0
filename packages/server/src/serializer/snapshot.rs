use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use serde_json::Value;

use super::{Record, Relation, Rules};
use crate::entity::{hero, hero_power, power};
use crate::graph;

/// The rows a serialization touches, keyed by id.
///
/// `collect` walks the same paths `render` will, fetching each relationship
/// the first time it is needed, so rendering itself is pure and synchronous.
#[derive(Debug, Default)]
pub struct Snapshot {
    heroes: HashMap<i32, hero::Model>,
    powers: HashMap<i32, power::Model>,
    hero_powers: HashMap<i32, hero_power::Model>,
    /// Loaded `hero_powers` collections, as ordered ids.
    of_hero: HashMap<i32, Vec<i32>>,
    of_power: HashMap<i32, Vec<i32>>,
}

impl Snapshot {
    pub async fn collect<C: ConnectionTrait>(
        db: &C,
        roots: &[Record],
        rules: &Rules,
    ) -> Result<Self, DbErr> {
        let mut snap = Snapshot::default();
        let mut pending: Vec<(Record, Vec<Relation>)> = Vec::new();

        for root in roots {
            snap.insert(root.clone());
            pending.push((root.clone(), Vec::new()));
        }

        while let Some((record, path)) = pending.pop() {
            for &relation in record.relations() {
                let mut next = path.clone();
                next.push(relation);
                if !rules.allows(&next) {
                    continue;
                }
                for child in snap.fetch(db, &record, relation).await? {
                    pending.push((child, next.clone()));
                }
            }
        }

        Ok(snap)
    }

    pub fn render(&self, record: &Record, rules: &Rules) -> Value {
        self.render_at(record, &mut Vec::new(), rules)
    }

    fn render_at(&self, record: &Record, path: &mut Vec<Relation>, rules: &Rules) -> Value {
        let mut map = record.columns();

        for &relation in record.relations() {
            path.push(relation);
            if rules.allows(path) {
                let related = self.related(record, relation);
                let value = if relation.is_many() {
                    Value::Array(
                        related
                            .iter()
                            .map(|r| self.render_at(r, path, rules))
                            .collect(),
                    )
                } else {
                    related
                        .first()
                        .map(|r| self.render_at(r, path, rules))
                        .unwrap_or(Value::Null)
                };
                map.insert(relation.as_str().to_string(), value);
            }
            path.pop();
        }

        Value::Object(map)
    }

    pub(crate) fn insert(&mut self, record: Record) {
        match record {
            Record::Hero(m) => {
                self.heroes.insert(m.id, m);
            }
            Record::Power(m) => {
                self.powers.insert(m.id, m);
            }
            Record::HeroPower(m) => {
                self.hero_powers.insert(m.id, m);
            }
        }
    }

    pub(crate) fn insert_hero_powers_of_hero(&mut self, hero_id: i32, rows: Vec<hero_power::Model>) {
        let ids = self.insert_links(rows);
        self.of_hero.insert(hero_id, ids);
    }

    pub(crate) fn insert_hero_powers_of_power(
        &mut self,
        power_id: i32,
        rows: Vec<hero_power::Model>,
    ) {
        let ids = self.insert_links(rows);
        self.of_power.insert(power_id, ids);
    }

    fn insert_links(&mut self, rows: Vec<hero_power::Model>) -> Vec<i32> {
        rows.into_iter()
            .map(|row| {
                let id = row.id;
                self.hero_powers.insert(id, row);
                id
            })
            .collect()
    }

    /// Related records already in the snapshot. Unloaded or dangling
    /// relationships resolve to nothing.
    fn related(&self, record: &Record, relation: Relation) -> Vec<Record> {
        let links = |ids: Option<&Vec<i32>>| -> Vec<Record> {
            ids.into_iter()
                .flatten()
                .filter_map(|id| self.hero_powers.get(id))
                .cloned()
                .map(Record::HeroPower)
                .collect()
        };

        match (record, relation) {
            (Record::Hero(h), Relation::HeroPowers) => links(self.of_hero.get(&h.id)),
            (Record::Power(p), Relation::HeroPowers) => links(self.of_power.get(&p.id)),
            (Record::HeroPower(hp), Relation::Hero) => self
                .heroes
                .get(&hp.hero_id)
                .cloned()
                .map(Record::Hero)
                .into_iter()
                .collect(),
            (Record::HeroPower(hp), Relation::Power) => self
                .powers
                .get(&hp.power_id)
                .cloned()
                .map(Record::Power)
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Like `related`, but loads the relationship from the database first if
    /// this snapshot has not seen it yet.
    async fn fetch<C: ConnectionTrait>(
        &mut self,
        db: &C,
        record: &Record,
        relation: Relation,
    ) -> Result<Vec<Record>, DbErr> {
        match (record, relation) {
            (Record::Hero(h), Relation::HeroPowers) if !self.of_hero.contains_key(&h.id) => {
                let rows = graph::hero_powers_of_hero(db, h.id).await?;
                self.insert_hero_powers_of_hero(h.id, rows);
            }
            (Record::Power(p), Relation::HeroPowers) if !self.of_power.contains_key(&p.id) => {
                let rows = graph::hero_powers_of_power(db, p.id).await?;
                self.insert_hero_powers_of_power(p.id, rows);
            }
            (Record::HeroPower(hp), Relation::Hero) if !self.heroes.contains_key(&hp.hero_id) => {
                if let Some(m) = hero::Entity::find_by_id(hp.hero_id).one(db).await? {
                    self.heroes.insert(m.id, m);
                }
            }
            (Record::HeroPower(hp), Relation::Power)
                if !self.powers.contains_key(&hp.power_id) =>
            {
                if let Some(m) = power::Entity::find_by_id(hp.power_id).one(db).await? {
                    self.powers.insert(m.id, m);
                }
            }
            _ => {}
        }

        Ok(self.related(record, relation))
    }
}
