use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Dataset, Person, Project, Role};
use crate::repository::Repository;
use crate::slug::{resolve_id, validate_name};
use crate::store::DataStore;
use tracing::info;

/// Raw answers for a new project, as typed.
#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    pub id: String,
    pub title: String,
    pub year: i64,
    pub director: String,
    pub casting_director: String,
    /// Comma-separated actor IDs.
    pub cast: String,
}

/// Adds a person. `name` is stored as typed; only its trimmed value must be
/// non-empty.
pub fn person<S: DataStore>(
    store: &mut S,
    role: Role,
    typed_id: &str,
    name: &str,
) -> Result<CmdResult> {
    validate_name(name)?;
    let id = resolve_id(typed_id, name)?;

    let mut repo = Repository::new(store.load_all()?);
    repo.add_person(role, Person::new(id.clone(), name))?;
    store.save_all(repo.dataset())?;
    info!(%role, id = %id, "record added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {}: {} ({})",
        role, name, id
    )));
    Ok(result)
}

pub fn project<S: DataStore>(store: &mut S, input: &ProjectInput) -> Result<CmdResult> {
    validate_name(&input.title)?;
    let title = input.title.as_str();
    let id = resolve_id(&input.id, title)?;

    let project = Project::new(id.clone(), title, input.year)
        .with_director(&input.director)
        .with_casting_director(&input.casting_director)
        .with_cast_list(&input.cast);

    let mut repo = Repository::new(store.load_all()?);
    let stored = repo.add_project(project)?.clone();
    store.save_all(repo.dataset())?;
    info!(id = %id, "project added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added project: {} ({})",
        title, id
    )));
    for note in unknown_references(repo.dataset(), &stored) {
        result.add_message(CmdMessage::warning(note));
    }
    Ok(result)
}

// Relations are stored even when they point nowhere; this only reports them.
fn unknown_references(dataset: &Dataset, project: &Project) -> Vec<String> {
    let known = |role: Role, id: &str| dataset.people(role).iter().any(|p| p.id == id);

    let mut notes = Vec::new();
    if !project.director.is_empty() && !known(Role::Director, &project.director) {
        notes.push(format!("No director with ID '{}' yet", project.director));
    }
    if !project.casting_director.is_empty()
        && !known(Role::CastingDirector, &project.casting_director)
    {
        notes.push(format!(
            "No casting director with ID '{}' yet",
            project.casting_director
        ));
    }
    for actor in project.cast.iter().filter(|a| !a.is_empty()) {
        if !known(Role::Actor, actor) {
            notes.push(format!("No actor with ID '{}' yet", actor));
        }
    }
    notes
}
