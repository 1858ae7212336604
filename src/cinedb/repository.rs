//! # Entity Repository
//!
//! In-memory view of a [`Dataset`] that enforces the one rule the data has:
//! no two records in the same collection share an ID.
//!
//! The repository is append-only. There is no update or delete; records
//! disappear only when someone edits the document by hand. Uniqueness is
//! scoped per collection, so an actor and a director may both be
//! `"clint-eastwood"`.
//!
//! Lookups go through a set of IDs per collection, built once when the
//! repository is created from a loaded dataset and kept in step with every
//! insert.
//!
//! Nothing here touches the disk. Callers load a dataset, add to it, and
//! persist [`Repository::into_dataset`] themselves.

use crate::error::{CinedbError, Result};
use crate::model::{Collection, Dataset, Person, Project, Record, Role};
use crate::slug::validate_id;
use std::collections::{HashMap, HashSet};
use tracing::debug;

pub struct Repository {
    dataset: Dataset,
    ids: HashMap<Collection, HashSet<String>>,
}

impl Repository {
    pub fn new(dataset: Dataset) -> Self {
        let ids = Collection::ALL
            .iter()
            .map(|&collection| {
                let set: HashSet<String> = dataset
                    .ids(collection)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                (collection, set)
            })
            .collect();
        Self { dataset, ids }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    pub fn contains(&self, collection: Collection, id: &str) -> bool {
        self.ids
            .get(&collection)
            .is_some_and(|set| set.contains(id))
    }

    /// Appends a person to the collection for `role`.
    pub fn add_person(&mut self, role: Role, person: Person) -> Result<&Person> {
        self.claim(role.collection(), &person)?;
        let people = self.dataset.people_mut(role);
        people.push(person);
        Ok(&people[people.len() - 1])
    }

    pub fn add_project(&mut self, project: Project) -> Result<&Project> {
        self.claim(Collection::Projects, &project)?;
        self.dataset.projects.push(project);
        Ok(&self.dataset.projects[self.dataset.projects.len() - 1])
    }

    fn claim(&mut self, collection: Collection, record: &impl Record) -> Result<()> {
        let id = record.id();
        validate_id(id)?;
        let set = self.ids.entry(collection).or_default();
        if !set.insert(id.to_string()) {
            debug!(%collection, id, "duplicate id rejected");
            return Err(CinedbError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
