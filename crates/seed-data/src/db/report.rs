use std::collections::BTreeMap;

/// Outcome of upserting one row by its natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upserted {
    pub id: i32,
    pub created: bool,
}

impl Upserted {
    pub fn created(id: i32) -> Self {
        Self { id, created: true }
    }

    pub fn existing(id: i32) -> Self {
        Self { id, created: false }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityCounts {
    pub created: usize,
    pub existing: usize,
}

/// Per-entity tally of rows created versus rows found in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    entities: BTreeMap<&'static str, EntityCounts>,
}

impl SeedReport {
    pub fn record(&mut self, entity: &'static str, outcome: Upserted) {
        let counts = self.entities.entry(entity).or_default();
        if outcome.created {
            counts.created += 1;
        } else {
            counts.existing += 1;
        }
    }

    /// Adds every tally of `other` to this report.
    pub fn merge(&mut self, other: SeedReport) {
        for (entity, counts) in other.entities {
            let total = self.entities.entry(entity).or_default();
            total.created += counts.created;
            total.existing += counts.existing;
        }
    }

    pub fn counts(&self, entity: &str) -> EntityCounts {
        self.entities.get(entity).copied().unwrap_or_default()
    }

    pub fn created(&self) -> usize {
        self.entities.values().map(|c| c.created).sum()
    }

    pub fn existing(&self) -> usize {
        self.entities.values().map(|c| c.existing).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, EntityCounts)> + '_ {
        self.entities.iter().map(|(name, counts)| (*name, *counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_per_entity() {
        let mut report = SeedReport::default();
        report.record("user", Upserted::created(1));
        report.record("user", Upserted::existing(2));
        report.record("cart", Upserted::created(1));

        assert_eq!(
            report.counts("user"),
            EntityCounts {
                created: 1,
                existing: 1
            }
        );
        assert_eq!(report.created(), 2);
        assert_eq!(report.existing(), 1);
        assert_eq!(report.counts("order"), EntityCounts::default());
    }

    #[test]
    fn merge_adds_tallies() {
        let mut total = SeedReport::default();
        total.record("user", Upserted::created(1));

        let mut routine = SeedReport::default();
        routine.record("user", Upserted::existing(2));
        routine.record("order", Upserted::created(1));
        total.merge(routine);

        assert_eq!(
            total.counts("user"),
            EntityCounts {
                created: 1,
                existing: 1
            }
        );
        assert_eq!(total.counts("order").created, 1);
        assert_eq!(total.created(), 2);
    }

    #[test]
    fn iterates_in_entity_order() {
        let mut report = SeedReport::default();
        report.record("user", Upserted::created(1));
        report.record("category", Upserted::existing(4));

        let names: Vec<_> = report.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["category", "user"]);
    }
}
