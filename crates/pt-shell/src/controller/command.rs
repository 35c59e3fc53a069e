use std::path::PathBuf;
use std::str::FromStr;

use pt_core::drafts::PetField;
use pt_core::ids::PetId;
use pt_core::ports::CaptureSource;

use super::ShellError;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Primary action of the current screen.
    Next,
    Back,
    Name(String),
    Family(String),
    AddPet,
    Edit(PetId),
    Delete(PetId),
    Field(PetField, String),
    Trait(String),
    Save,
    Finish,
    Capture(CaptureSource),
    Reveal,
    Again,
    Pets,
    Profile,
    Help,
    Quit,
}

impl Command {
    /// The word that invokes this command.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Back => "back",
            Self::Name(_) => "name",
            Self::Family(_) => "family",
            Self::AddPet => "add-pet",
            Self::Edit(_) => "edit",
            Self::Delete(_) => "delete",
            Self::Field(..) => "field",
            Self::Trait(_) => "trait",
            Self::Save => "save",
            Self::Finish => "finish",
            Self::Capture(_) => "capture",
            Self::Reveal => "reveal",
            Self::Again => "again",
            Self::Pets => "pets",
            Self::Profile => "profile",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |name: &'static str| {
            if rest.is_empty() {
                Err(ShellError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next),
            "back" | "b" => Ok(Self::Back),
            // An empty name is a fact; validation happens on save.
            "name" => Ok(Self::Name(rest.to_string())),
            "family" => Ok(Self::Family(rest.to_string())),
            "add-pet" | "add" => Ok(Self::AddPet),
            "edit" => Ok(Self::Edit(PetId::from(required("pet id")?))),
            "delete" => Ok(Self::Delete(PetId::from(required("pet id")?))),
            "field" => {
                let (key, value) = match rest.split_once(char::is_whitespace) {
                    Some((key, value)) => (key, value.trim()),
                    None => (rest, ""),
                };
                if key.is_empty() {
                    return Err(ShellError::MissingArgument("field name"));
                }
                Ok(Self::Field(key.parse()?, value.to_string()))
            }
            "trait" => Ok(Self::Trait(required("trait label")?)),
            "save" => Ok(Self::Save),
            "finish" | "done" => Ok(Self::Finish),
            "capture" => {
                let source = match rest {
                    "camera" => CaptureSource::Camera,
                    // An empty path is a cancelled pick.
                    path => CaptureSource::Gallery(PathBuf::from(path)),
                };
                Ok(Self::Capture(source))
            }
            "reveal" => Ok(Self::Reveal),
            "again" => Ok(Self::Again),
            "pets" => Ok(Self::Pets),
            "profile" => Ok(Self::Profile),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  next                 primary action of this screen
  back                 previous screen
  name <owner>         owner name (family screen)
  family <a, b>        family members, comma separated
  add-pet              open the editor for a new pet
  edit <pet id>        open the editor for a pet
  delete <pet id>      remove a pet
  field <key> <value>  name | type | breed | traits | quirks | favorites
  trait <label>        toggle a suggested trait
  save                 save the open form
  finish               finish setup / done managing pets
  capture <path>       pick an image file (or `capture camera`)
  reveal               reveal the pet's thoughts
  again                take another photo
  pets                 your pets' world / manage pets
  profile              edit the family profile
  quit                 leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            "name  Ann Lee ".parse::<Command>().unwrap(),
            Command::Name("Ann Lee".to_string())
        );
        assert_eq!(
            "field breed Border Collie".parse::<Command>().unwrap(),
            Command::Field(PetField::Breed, "Border Collie".to_string())
        );
        assert_eq!(
            "edit pet_1".parse::<Command>().unwrap(),
            Command::Edit(PetId::from("pet_1"))
        );
        assert_eq!(
            "capture /tmp/cat.png".parse::<Command>().unwrap(),
            Command::Capture(CaptureSource::Gallery(PathBuf::from("/tmp/cat.png")))
        );
        assert_eq!(
            "capture camera".parse::<Command>().unwrap(),
            Command::Capture(CaptureSource::Camera)
        );
    }

    #[test]
    fn word_is_the_canonical_spelling() {
        let command: Command = "field name Rex".parse().unwrap();
        assert_eq!(command.word(), "field");
        assert_eq!("add".parse::<Command>().unwrap().word(), "add-pet");
        assert_eq!("done".parse::<Command>().unwrap().word(), "finish");
    }

    #[test]
    fn reports_unknown_and_incomplete_commands() {
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(ShellError::UnknownCommand(word)) if word == "dance"
        ));
        assert!(matches!(
            "edit".parse::<Command>(),
            Err(ShellError::MissingArgument("pet id"))
        ));
        assert!(matches!(
            "field colour red".parse::<Command>(),
            Err(ShellError::Pet(_))
        ));
    }
}
