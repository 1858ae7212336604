//! # Interactive Shell
//!
//! One action per invocation:
//!
//! ```text
//! MainMenu ─┬─ Add Actor ────────────┐
//!           ├─ Add Director ─────────┤
//!           ├─ Add Casting Director ─┤
//!           ├─ Add Project ──────────┼──▶ exit
//!           ├─ Sync from remote ─────┤
//!           ├─ Upload to remote ─────┤
//!           └─ Exit ─────────────────┘
//! ```
//!
//! Add flows ask for every field first. Names, titles and years are checked
//! as they are typed and asked again until valid. Everything else (ID shape,
//! duplicates, file and transfer failures) surfaces once the answers are in,
//! aborting the action with nothing written.
//!
//! The shell is generic over its input and output so tests can script a
//! session without a terminal.

use crate::api::CinedbApi;
use crate::commands::add::ProjectInput;
use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::error::{CinedbError, Result};
use crate::model::Role;
use crate::slug::{parse_year, validate_name};
use crate::store::DataStore;
use crate::sync::TransferTool;
use clap::ValueEnum;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    #[value(name = "actor")]
    AddActor,
    #[value(name = "director")]
    AddDirector,
    #[value(name = "casting-director")]
    AddCastingDirector,
    #[value(name = "project")]
    AddProject,
    #[value(name = "sync")]
    Sync,
    #[value(name = "upload")]
    Upload,
    #[value(name = "exit")]
    Exit,
}

impl Action {
    /// Menu order.
    pub const MENU: [Action; 7] = [
        Action::AddActor,
        Action::AddDirector,
        Action::AddCastingDirector,
        Action::AddProject,
        Action::Sync,
        Action::Upload,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::AddActor => "Add Actor",
            Action::AddDirector => "Add Director",
            Action::AddCastingDirector => "Add Casting Director",
            Action::AddProject => "Add Project",
            Action::Sync => "Sync from remote",
            Action::Upload => "Upload to remote",
            Action::Exit => "Exit",
        }
    }

    /// Accepts a menu number, a value name (`casting-director`) or a label.
    pub fn from_choice(choice: &str) -> Option<Action> {
        let choice = choice.trim();
        if let Ok(n) = choice.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::MENU.get(i).copied());
        }
        Self::MENU.iter().copied().find(|action| {
            action.label().eq_ignore_ascii_case(choice)
                || action
                    .to_possible_value()
                    .is_some_and(|v| v.matches(choice, true))
        })
    }
}

fn role_title(role: Role) -> &'static str {
    match role {
        Role::Actor => "Actor",
        Role::Director => "Director",
        Role::CastingDirector => "Casting Director",
    }
}

/// Line-oriented question and answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn heading(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text.bold())?;
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Ask once. Returns the answer without its line ending.
    pub fn ask(&mut self, label: &str, hint: &str) -> Result<String> {
        if hint.is_empty() {
            write!(self.output, "{}: ", label)?;
        } else {
            write!(self.output, "{} {}: ", label, format!("({})", hint).as_str().dimmed())?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CinedbError::InputClosed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Ask until `check` accepts the answer, showing each rejection.
    pub fn ask_until<T, E: std::fmt::Display>(
        &mut self,
        label: &str,
        hint: &str,
        check: impl Fn(&str) -> std::result::Result<T, E>,
    ) -> Result<T> {
        loop {
            let answer = self.ask(label, hint)?;
            match check(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.render_message(&CmdMessage::error(format!("  ✗ {}", e)))?,
            }
        }
    }

    pub fn render(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            self.render_message(message)?;
        }
        Ok(())
    }

    fn render_message(&mut self, message: &CmdMessage) -> Result<()> {
        let content = message.content.as_str();
        match message.level {
            MessageLevel::Info => writeln!(self.output, "{}", content.dimmed())?,
            MessageLevel::Success => writeln!(self.output, "{}", content.green())?,
            MessageLevel::Warning => writeln!(self.output, "{}", content.yellow())?,
            MessageLevel::Error => writeln!(self.output, "{}", content.red())?,
        }
        Ok(())
    }
}

pub struct Shell<'a, S: DataStore, T: TransferTool, R, W> {
    api: &'a mut CinedbApi<S, T>,
    prompt: Prompter<R, W>,
}

impl<'a, S, T, R, W> Shell<'a, S, T, R, W>
where
    S: DataStore,
    T: TransferTool,
    R: BufRead,
    W: Write,
{
    pub fn new(api: &'a mut CinedbApi<S, T>, prompt: Prompter<R, W>) -> Self {
        Self { api, prompt }
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompt
    }

    /// Runs exactly one action, from the menu unless `preselected` is given.
    pub fn run(&mut self, preselected: Option<Action>) -> Result<()> {
        let action = match preselected {
            Some(action) => action,
            None => self.choose_action()?,
        };
        debug!(?action, "action selected");

        let result = match action {
            Action::AddActor => self.add_person(Role::Actor)?,
            Action::AddDirector => self.add_person(Role::Director)?,
            Action::AddCastingDirector => self.add_person(Role::CastingDirector)?,
            Action::AddProject => self.add_project()?,
            Action::Sync => self.api.pull()?,
            Action::Upload => self.api.push()?,
            Action::Exit => {
                self.prompt.say("Goodbye!")?;
                return Ok(());
            }
        };
        self.prompt.render(&result)
    }

    fn choose_action(&mut self) -> Result<Action> {
        self.prompt.heading("What would you like to do?")?;
        for (i, action) in Action::MENU.iter().enumerate() {
            self.prompt.say(&format!("  {}) {}", i + 1, action.label()))?;
        }
        self.prompt.ask_until("Choice", "1-7", |answer| {
            Action::from_choice(answer).ok_or_else(|| format!("unknown choice '{}'", answer.trim()))
        })
    }

    fn add_person(&mut self, role: Role) -> Result<CmdResult> {
        let title = role_title(role);
        let id = self.prompt.ask(
            &format!("{} ID", title),
            "leave empty to auto-generate from name",
        )?;
        let name = self.prompt.ask_until(
            &format!("{} Name", title),
            &format!("full name of the {}", role),
            |answer| validate_name(answer).map(|_| answer.to_string()),
        )?;

        match role {
            Role::Actor => self.api.add_actor(&id, &name),
            Role::Director => self.api.add_director(&id, &name),
            Role::CastingDirector => self.api.add_casting_director(&id, &name),
        }
    }

    fn add_project(&mut self) -> Result<CmdResult> {
        self.prompt.heading("Project (1/2)")?;
        let id = self
            .prompt
            .ask("Project ID", "leave empty to auto-generate from title")?;
        let title = self.prompt.ask_until(
            "Project Title",
            "full title of the project",
            |answer| validate_name(answer).map(|_| answer.to_string()),
        )?;
        let year = self
            .prompt
            .ask_until("Year", "release year, e.g. 2025", parse_year)?;

        self.prompt.heading("Relations (2/2, optional)")?;
        let director = self.prompt.ask("Director ID", "ID of the director")?;
        let casting_director = self
            .prompt
            .ask("Casting Director ID", "ID of the casting director")?;
        let cast = self
            .prompt
            .ask("Cast IDs", "comma-separated list of actor IDs")?;

        self.api.add_project(&ProjectInput {
            id,
            title,
            year,
            director,
            casting_director,
            cast,
        })
    }
}
