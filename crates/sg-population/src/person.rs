//! `Person` and `Population`.

use serde::{Deserialize, Serialize};

use sg_core::PersonId;

use crate::{Plan, PopulationError, PopulationResult};

// ── Person ────────────────────────────────────────────────────────────────────

/// A synthetic traveler.
///
/// A person may carry several alternative plans, one of which is selected.
/// Synthesis attaches exactly one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    plans: Vec<Plan>,
    selected: Option<usize>,
}

impl Person {
    pub fn new(id: PersonId) -> Self {
        Self { id, plans: Vec::new(), selected: None }
    }

    /// Attach `plan`.  The first plan added becomes the selected one.
    pub fn add_plan(&mut self, plan: Plan) {
        self.plans.push(plan);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.selected.and_then(|i| self.plans.get(i))
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// All travelers of one synthesis run, indexed by `PersonId`.
///
/// Persons are stored in generation order, so `persons()[i].id == PersonId(i)`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    persons: Vec<Person>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { persons: Vec::with_capacity(n) }
    }

    /// Append `person`, whose id must equal the current length.
    ///
    /// # Errors
    ///
    /// [`PopulationError::PersonOutOfOrder`] otherwise; the population is
    /// left unchanged.
    pub fn push(&mut self, person: Person) -> PopulationResult<()> {
        let expected = self.persons.len();
        if person.id.index() != expected {
            return Err(PopulationError::PersonOutOfOrder { expected, found: person.id });
        }
        self.persons.push(person);
        Ok(())
    }

    /// The person with id `id`.  `None` if absent, including when a
    /// deserialized population is not in id order.
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(id.index()).filter(|p| p.id == id)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl TryFrom<Vec<Person>> for Population {
    type Error = PopulationError;

    /// Accepts `persons` only if `persons[i].id == PersonId(i)` for all `i`.
    fn try_from(persons: Vec<Person>) -> PopulationResult<Self> {
        if let Some((expected, p)) = persons.iter().enumerate().find(|(i, p)| p.id.index() != *i) {
            return Err(PopulationError::PersonOutOfOrder { expected, found: p.id });
        }
        Ok(Self { persons })
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}
