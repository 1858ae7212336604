//! # API Facade
//!
//! Single entry point for every cinedb operation, whatever the front end.
//! It owns the [`DataStore`] and the [`RemoteSync`] and dispatches to the
//! command layer; it holds no logic of its own.
//!
//! `CinedbApi<S, T>` is generic over both adapters:
//! - Production: `CinedbApi<FileStore, CommandTransfer>`
//! - Testing: `CinedbApi<InMemoryStore, RecordingTransfer>`

use crate::commands::{self, add::ProjectInput, CmdResult};
use crate::error::Result;
use crate::model::Role;
use crate::store::DataStore;
use crate::sync::{RemoteSync, TransferTool};

pub struct CinedbApi<S: DataStore, T: TransferTool> {
    store: S,
    remote: RemoteSync<T>,
}

impl<S: DataStore, T: TransferTool> CinedbApi<S, T> {
    pub fn new(store: S, remote: RemoteSync<T>) -> Self {
        Self { store, remote }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn remote(&self) -> &RemoteSync<T> {
        &self.remote
    }

    pub fn add_actor(&mut self, typed_id: &str, name: &str) -> Result<CmdResult> {
        commands::add::person(&mut self.store, Role::Actor, typed_id, name)
    }

    pub fn add_director(&mut self, typed_id: &str, name: &str) -> Result<CmdResult> {
        commands::add::person(&mut self.store, Role::Director, typed_id, name)
    }

    pub fn add_casting_director(&mut self, typed_id: &str, name: &str) -> Result<CmdResult> {
        commands::add::person(&mut self.store, Role::CastingDirector, typed_id, name)
    }

    pub fn add_project(&mut self, input: &ProjectInput) -> Result<CmdResult> {
        commands::add::project(&mut self.store, input)
    }

    pub fn pull(&self) -> Result<CmdResult> {
        commands::sync::pull(&self.remote)
    }

    pub fn push(&self) -> Result<CmdResult> {
        commands::sync::push(&self.remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::sync::fake::RecordingTransfer;

    fn api() -> CinedbApi<InMemoryStore, RecordingTransfer> {
        CinedbApi::new(
            InMemoryStore::new(),
            RemoteSync::new("s3://cinema-web", "data.json", "data.json", RecordingTransfer::default()),
        )
    }

    #[test]
    fn add_methods_target_their_collections() {
        let mut api = api();
        api.add_actor("", "A Person").unwrap();
        api.add_director("", "A Person").unwrap();
        api.add_casting_director("", "A Person").unwrap();
        let dataset = api.store().dataset();
        assert_eq!(dataset.actors[0].id, "a-person");
        assert_eq!(dataset.directors[0].id, "a-person");
        assert_eq!(dataset.casting_directors[0].id, "a-person");
    }

    #[test]
    fn add_project_goes_through_store() {
        let mut api = api();
        let input = ProjectInput {
            title: "Up".into(),
            year: 2009,
            ..Default::default()
        };
        api.add_project(&input).unwrap();
        assert_eq!(api.store().saves(), 1);
    }

    #[test]
    fn sync_goes_through_remote() {
        let api = api();
        api.pull().unwrap();
        api.push().unwrap();
        assert_eq!(api.remote().tool().calls.borrow().len(), 2);
        assert_eq!(api.store().saves(), 0);
    }
}
