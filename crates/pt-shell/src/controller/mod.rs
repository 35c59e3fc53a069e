//! Line-oriented navigation controller.
//!
//! Renders the current screen of the session, parses one command per line
//! and maps it onto session operations. Form input is collected into drafts
//! here and validated before anything is dispatched.

mod command;
mod render;

pub use command::{Command, HELP};

use pt_app::{AppSession, SessionError};
use pt_core::drafts::{FamilyDraft, PetDraft, PetValidationError};
use pt_core::ids::PetId;
use pt_core::navigation::{NavEvent, Screen};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info_span, Instrument};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("unknown command '{0}' (try `help`)")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("`{command}` is not available on {screen}")]
    NotAvailableHere {
        command: &'static str,
        screen: &'static str,
    },

    #[error("no pet with id {0}")]
    UnknownPet(PetId),

    #[error(transparent)]
    Pet(#[from] PetValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// What the loop does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Say(String),
    Quit,
}

pub struct Controller {
    session: AppSession,
    family: FamilyDraft,
    pet: PetDraft,
}

impl Controller {
    pub fn new(session: AppSession) -> Self {
        let family = session
            .store()
            .user()
            .map(FamilyDraft::from_user)
            .unwrap_or_default();
        Self {
            session,
            family,
            pet: PetDraft::new_pet(),
        }
    }

    pub fn session(&self) -> &AppSession {
        &self.session
    }

    pub fn into_session(self) -> AppSession {
        self.session
    }

    pub fn render(&self) -> String {
        render::render(&self.session, &self.family, &self.pet)
    }

    pub async fn handle_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let command: Command = line.parse()?;
        self.handle(command).await
    }

    pub async fn handle(&mut self, command: Command) -> Result<Flow, ShellError> {
        let span = info_span!("shell.command", command = ?command);
        self.dispatch(command).instrument(span).await
    }

    async fn dispatch(&mut self, command: Command) -> Result<Flow, ShellError> {
        let screen = self.session.current_screen().clone();
        debug!(screen = screen.title(), "handling command");

        match (command, &screen) {
            (Command::Quit, _) => return Ok(Flow::Quit),
            (Command::Help, _) => return Ok(Flow::Say(HELP.to_string())),
            (Command::Back, _) => self.go(NavEvent::Back).await?,

            (Command::Next, Screen::Welcome) => self.go(NavEvent::Start).await?,

            (Command::Name(name), Screen::FamilyContext { .. }) => self.family.owner_name = name,
            (Command::Family(members), Screen::FamilyContext { .. }) => {
                self.family.family_members = members
            }
            (Command::Next | Command::Save, Screen::FamilyContext { .. }) => {
                self.session
                    .save_family_profile(self.family.clone())
                    .await?;
            }

            (Command::AddPet, Screen::PetManagement { .. }) => {
                self.pet = PetDraft::new_pet();
                self.go(NavEvent::AddPet).await?;
            }
            (Command::Edit(pet_id), Screen::PetManagement { .. }) => {
                let pet = self
                    .session
                    .store()
                    .find_pet(&pet_id)
                    .ok_or_else(|| ShellError::UnknownPet(pet_id.clone()))?;
                self.pet = PetDraft::edit(pet);
                self.go(NavEvent::EditPet { pet_id }).await?;
            }
            (Command::Delete(pet_id), Screen::PetManagement { .. } | Screen::PetDetails { .. }) => {
                if self.session.store().find_pet(&pet_id).is_none() {
                    return Err(ShellError::UnknownPet(pet_id));
                }
                self.session.delete_pet(pet_id).await?;
            }
            (Command::Next | Command::Finish, Screen::PetManagement { .. }) => {
                self.go(NavEvent::PetManagementPrimary).await?
            }

            (Command::Field(field, value), Screen::PetDetails { .. }) => {
                self.pet.set_field(field, value)
            }
            (Command::Trait(label), Screen::PetDetails { .. }) => {
                self.pet.toggle_trait(&label)?;
            }
            (Command::Next | Command::Save, Screen::PetDetails { .. }) => {
                let pet = self.session.save_pet(self.pet.clone()).await?;
                self.pet = PetDraft::new_pet();
                return Ok(Flow::Say(format!("Saved {} [{}]", pet.name, pet.id)));
            }

            (Command::Next, Screen::Home) => self.go(NavEvent::OpenCapture).await?,
            (Command::Capture(source), Screen::Home | Screen::CaptureSource) => {
                if screen == Screen::Home {
                    self.go(NavEvent::OpenCapture).await?;
                }
                if self.session.capture(source).await?.is_none() {
                    return Ok(Flow::Say("Capture cancelled".to_string()));
                }
            }
            (Command::Pets, Screen::Home) => self.go(NavEvent::OpenPetsOverview).await?,
            (Command::Pets, Screen::PetsOverview) => {
                self.go(NavEvent::OpenPetManagement).await?
            }
            (Command::Profile, Screen::PetsOverview) => {
                if let Some(user) = self.session.store().user() {
                    self.family = FamilyDraft::from_user(user);
                }
                self.go(NavEvent::OpenFamily).await?;
            }

            (Command::Next | Command::Reveal, Screen::PhotoPreview { .. }) => {
                self.go(NavEvent::RevealThoughts).await?
            }
            (Command::Next | Command::Again, Screen::PhotoResult { .. }) => {
                self.go(NavEvent::TakeAnother).await?
            }

            (command, screen) => {
                return Err(ShellError::NotAvailableHere {
                    command: command.word(),
                    screen: screen.title(),
                })
            }
        }
        Ok(Flow::Continue)
    }

    async fn go(&mut self, event: NavEvent) -> Result<(), ShellError> {
        self.session.navigate(event).await?;
        Ok(())
    }

    /// Reads commands until `quit` or end of input, rendering after each one.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        writer.write_all(self.render().as_bytes()).await?;
        writer.flush().await?;

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let mut out = String::new();
            match self.handle_line(&line).await {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => out.push_str(&self.render()),
                Ok(Flow::Say(message)) => {
                    out.push_str(&message);
                    out.push('\n');
                    out.push_str(&self.render());
                }
                Err(err) => {
                    out.push_str(&format!("! {err}\n"));
                }
            }
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }

        writer.write_all(b"Bye!\n").await?;
        writer.flush().await?;
        Ok(())
    }
}
