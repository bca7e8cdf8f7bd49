use rand::Rng;
use crate::quiz_engine::error::QuizError;
use crate::quiz_engine::models::Fact;

/// Every multiplier runs `1..=MULTIPLIER_MAX` regardless of the table range.
pub const MULTIPLIER_MAX: u8 = 12;

/// Highest supported table range.
pub const TABLES_MAX: u8 = 12;

/// The complete set of multiplication facts for one table range, shuffled
/// once and consumed one fact at a time.
#[derive(Debug)]
pub struct FactPool {
    facts: Vec<Fact>,
    cursor: usize,
}

impl FactPool {
    /// Build the full fact set for `1..=tables_up_to` and shuffle it with
    /// `rng`.
    ///
    /// Produces exactly `tables_up_to * 12` facts, one per `(table,
    /// multiplier)` pair. Each fact's display order is an independent 50/50
    /// coin flip on the same `rng`. The UI keeps `tables_up_to` in range, but
    /// the pool rejects out-of-range values itself.
    pub fn new_shuffled<R: Rng>(rng: &mut R, tables_up_to: u8) -> Result<Self, QuizError> {
        if tables_up_to < 1 || tables_up_to > TABLES_MAX {
            return Err(QuizError::TablesOutOfRange(tables_up_to));
        }

        let mut facts: Vec<Fact> = (1..=tables_up_to)
            .flat_map(|table| {
                (1..=MULTIPLIER_MAX).map(move |multiplier| (table, multiplier))
            })
            .map(|(table, multiplier)| Fact {
                table,
                multiplier,
                table_first: rng.gen_bool(0.5),
            })
            .collect();

        // Fisher-Yates shuffle
        for i in (1..facts.len()).rev() {
            let j = rng.gen_range(0..=i);
            facts.swap(i, j);
        }

        Ok(FactPool { facts, cursor: 0 })
    }

    /// Remove and return the next fact.
    pub fn draw(&mut self) -> Result<Fact, QuizError> {
        if self.cursor >= self.facts.len() {
            return Err(QuizError::EmptyPool);
        }
        let fact = self.facts[self.cursor];
        self.cursor += 1;
        Ok(fact)
    }

    /// Facts left to draw.
    pub fn remaining(&self) -> usize {
        self.facts.len() - self.cursor
    }

    /// All facts drawn so far (useful for integrity checks).
    pub fn drawn_facts(&self) -> &[Fact] {
        &self.facts[..self.cursor]
    }
}
