use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The four independent collections of a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Actors,
    Directors,
    CastingDirectors,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Projects,
        Collection::Actors,
        Collection::Directors,
        Collection::CastingDirectors,
    ];

    /// Singular, human-facing name of one record in the collection.
    pub fn record_label(self) -> &'static str {
        match self {
            Collection::Projects => "project",
            Collection::Actors => "actor",
            Collection::Directors => "director",
            Collection::CastingDirectors => "casting director",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.record_label())
    }
}

/// Which people collection a [`Person`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Actor,
    Director,
    CastingDirector,
}

impl Role {
    pub fn collection(self) -> Collection {
        match self {
            Role::Actor => Collection::Actors,
            Role::Director => Collection::Directors,
            Role::CastingDirector => Collection::CastingDirectors,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.collection().fmt(f)
    }
}

/// Anything stored in a collection keyed by a slug ID.
pub trait Record {
    fn id(&self) -> &str;
}

/// An actor, director or casting director.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Record for Person {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A film or series. `director`, `casting_director` and `cast` hold person IDs
/// as typed; they are never checked against the people collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub year: i64,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub cast: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub director: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub casting_director: String,
}

impl Project {
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: i64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            cast: Vec::new(),
            director: String::new(),
            casting_director: String::new(),
        }
    }

    pub fn with_director(mut self, director: &str) -> Self {
        self.director = director.trim().to_string();
        self
    }

    pub fn with_casting_director(mut self, casting_director: &str) -> Self {
        self.casting_director = casting_director.trim().to_string();
        self
    }

    /// Takes a comma-separated list of actor IDs.
    pub fn with_cast_list(mut self, cast: &str) -> Self {
        self.cast = parse_cast_list(cast);
        self
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Splits on commas and trims each entry. Empty entries are kept in place;
/// only an empty answer yields no cast at all.
pub fn parse_cast_list(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(|entry| entry.trim().to_string()).collect()
}

/// The whole document: four ordered collections, in on-disk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actors: Vec<Person>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub directors: Vec<Person>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub casting_directors: Vec<Person>,
}

impl Dataset {
    pub fn people(&self, role: Role) -> &[Person] {
        match role {
            Role::Actor => &self.actors,
            Role::Director => &self.directors,
            Role::CastingDirector => &self.casting_directors,
        }
    }

    pub(crate) fn people_mut(&mut self, role: Role) -> &mut Vec<Person> {
        match role {
            Role::Actor => &mut self.actors,
            Role::Director => &mut self.directors,
            Role::CastingDirector => &mut self.casting_directors,
        }
    }

    /// IDs of one collection, in stored order.
    pub fn ids(&self, collection: Collection) -> Vec<&str> {
        match collection {
            Collection::Projects => self.projects.iter().map(Record::id).collect(),
            Collection::Actors => self.actors.iter().map(Record::id).collect(),
            Collection::Directors => self.directors.iter().map(Record::id).collect(),
            Collection::CastingDirectors => {
                self.casting_directors.iter().map(Record::id).collect()
            }
        }
    }
}

// Documents written by older tooling carry `null` for empty collections and
// absent relations.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_omits_empty_relations() {
        let project = Project::new("heat", "Heat", 1995)
            .with_director("  ")
            .with_casting_director("")
            .with_cast_list("");
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value, json!({"id": "heat", "title": "Heat", "year": 1995}));
    }

    #[test]
    fn test_project_serializes_relations_in_camel_case() {
        let project = Project::new("heat", "Heat", 1995)
            .with_director(" michael-mann ")
            .with_casting_director("bonnie-timmermann")
            .with_cast_list("al-pacino, robert-de-niro");
        let text = serde_json::to_string(&project).unwrap();
        assert_eq!(
            text,
            r#"{"id":"heat","title":"Heat","year":1995,"cast":["al-pacino","robert-de-niro"],"director":"michael-mann","castingDirector":"bonnie-timmermann"}"#
        );
    }

    #[test]
    fn test_cast_entries_are_trimmed_not_normalized() {
        assert_eq!(
            parse_cast_list(" Al Pacino ,robert-de-niro"),
            vec!["Al Pacino".to_string(), "robert-de-niro".to_string()]
        );
        assert!(parse_cast_list("").is_empty());
    }

    #[test]
    fn test_cast_keeps_empty_entries() {
        assert_eq!(parse_cast_list("a,,b"), vec!["a", "", "b"]);
        assert_eq!(parse_cast_list(" , "), vec!["", ""]);

        let project = Project::new("heat", "Heat", 1995).with_cast_list("  ");
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["cast"], json!([""]));
    }

    #[test]
    fn test_dataset_key_order() {
        let text = serde_json::to_string(&Dataset::default()).unwrap();
        assert_eq!(
            text,
            r#"{"projects":[],"actors":[],"directors":[],"castingDirectors":[]}"#
        );
    }

    #[test]
    fn test_dataset_tolerates_missing_null_and_unknown_fields() {
        let text = r#"{
            "projects": [{"id": "heat", "title": "Heat", "year": 1995, "director": null, "rating": 5}],
            "actors": null,
            "version": 3
        }"#;
        let dataset: Dataset = serde_json::from_str(text).unwrap();
        assert_eq!(dataset.projects, vec![Project::new("heat", "Heat", 1995)]);
        assert!(dataset.actors.is_empty());
        assert!(dataset.directors.is_empty());
        assert!(dataset.casting_directors.is_empty());
    }

    #[test]
    fn test_dataset_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Dataset>(r#"{"actors": {"id": "x"}}"#).is_err());
        assert!(serde_json::from_str::<Dataset>(
            r#"{"projects": [{"id": "heat", "title": "Heat", "year": "1995"}]}"#
        )
        .is_err());
    }

    #[test]
    fn test_ids_by_collection() {
        let dataset = Dataset {
            actors: vec![Person::new("a", "A"), Person::new("b", "B")],
            projects: vec![Project::new("p", "P", 2000)],
            ..Default::default()
        };
        assert_eq!(dataset.ids(Collection::Actors), vec!["a", "b"]);
        assert_eq!(dataset.ids(Collection::Projects), vec!["p"]);
        assert!(dataset.ids(Collection::Directors).is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Role::CastingDirector.to_string(), "casting director");
        assert_eq!(Collection::Projects.to_string(), "project");
    }
}
