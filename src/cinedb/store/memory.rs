use super::DataStore;
use crate::error::Result;
use crate::model::Dataset;

/// Dataset held in memory. Used by tests in place of [`super::fs::FileStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    dataset: Dataset,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { dataset, saves: 0 }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Number of successful `save_all` calls.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_all(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }

    fn save_all(&mut self, dataset: &Dataset) -> Result<()> {
        self.dataset = dataset.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::{Person, Project};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_actor(mut self, id: &str, name: &str) -> Self {
            self.store.dataset.actors.push(Person::new(id, name));
            self
        }

        pub fn with_director(mut self, id: &str, name: &str) -> Self {
            self.store.dataset.directors.push(Person::new(id, name));
            self
        }

        pub fn with_project(mut self, id: &str, title: &str, year: i64) -> Self {
            self.store.dataset.projects.push(Project::new(id, title, year));
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
