//! Text rendering of the current screen.

use std::fmt::Write;

use pt_app::AppSession;
use pt_core::drafts::{FamilyDraft, PetDraft};
use pt_core::model::{Pet, SUGGESTED_TRAITS};
use pt_core::navigation::{PetManagementView, Progress, Screen};

const BAR_WIDTH: usize = 12;

pub fn render(session: &AppSession, family: &FamilyDraft, pet: &PetDraft) -> String {
    let screen = session.current_screen();
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "== {} ==", screen.title());
    if let Some(progress) = screen.progress() {
        let _ = writeln!(out, "{}", progress_bar(progress));
    }

    match screen {
        Screen::Welcome => {
            let _ = writeln!(out, "Ever wondered what your pets are really thinking?");
            let _ = writeln!(out, "Tell us about your household and find out.");
            let _ = writeln!(out, "> next to get started");
        }
        Screen::FamilyContext { .. } => {
            let _ = writeln!(out, "Owner:   {}", blank_as_dash(&family.owner_name));
            let _ = writeln!(out, "Family:  {}", blank_as_dash(&family.family_members));
            let _ = writeln!(out, "> name <owner>, family <a, b>, then save");
        }
        Screen::PetManagement {
            reached_from_onboarding,
        } => {
            let view = PetManagementView::new(*reached_from_onboarding);
            let _ = writeln!(out, "{}", view.heading);
            render_pet_list(&mut out, session.store().pets());
            if *reached_from_onboarding && !session.can_finish_onboarding() {
                let _ = writeln!(out, "> add-pet to continue");
            } else {
                let _ = writeln!(
                    out,
                    "> add-pet, edit <id>, delete <id>, finish ({})",
                    view.primary_label
                );
            }
        }
        Screen::PetDetails { .. } => render_pet_form(&mut out, pet),
        Screen::Home => {
            if let Some(user) = session.store().user() {
                let _ = writeln!(out, "Hi {}!", user.name);
            }
            let _ = writeln!(out, "Snap a photo of your pet to see what they're thinking.");
            let _ = writeln!(out, "> capture <path>, pets");
        }
        Screen::PetsOverview => {
            if let Some(user) = session.store().user() {
                let _ = writeln!(out, "Owner:   {}", user.name);
                if !user.family_members.is_empty() {
                    let _ = writeln!(out, "Family:  {}", user.family_members.join(", "));
                }
            }
            render_pet_list(&mut out, session.store().pets());
            let _ = writeln!(out, "> pets (manage), profile, back");
        }
        Screen::CaptureSource => {
            let _ = writeln!(out, "Choose a photo from your gallery or use the camera.");
            let _ = writeln!(out, "> capture <path>, capture camera, back");
        }
        Screen::PhotoPreview { photo } => {
            let _ = writeln!(out, "Photo:   {}", photo.uri);
            if let (Some(width), Some(height)) = (photo.width, photo.height) {
                let _ = writeln!(out, "Size:    {width}x{height}");
            }
            let _ = writeln!(out, "> reveal, back");
        }
        Screen::PhotoResult { photo } => {
            let _ = writeln!(out, "Photo:   {}", photo.uri);
            if let Some(thought) = &session.state().current_thought {
                let _ = writeln!(out, "\"{thought}\"");
            }
            let _ = writeln!(out, "> again");
        }
    }
    out
}

fn progress_bar(progress: Progress) -> String {
    let percent = usize::from(progress.percent());
    let filled = BAR_WIDTH * percent / 100;
    format!(
        "[{}{}] step {} of {}",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        progress.step,
        progress.of
    )
}

fn render_pet_list(out: &mut String, pets: &[Pet]) {
    if pets.is_empty() {
        let _ = writeln!(out, "No companions yet.");
        return;
    }
    for pet in pets {
        let _ = writeln!(out, "- {} ({})  [{}]", pet.name, pet.subtitle(), pet.id);
        if let Some(traits) = pet.traits.as_ref().filter(|traits| !traits.is_empty()) {
            let labels: Vec<&str> = traits.labels().collect();
            let _ = writeln!(out, "    {}", labels.join(", "));
        }
    }
}

fn render_pet_form(out: &mut String, pet: &PetDraft) {
    let _ = writeln!(out, "Name:       {}", blank_as_dash(&pet.name));
    let _ = writeln!(out, "Type:       {}", blank_as_dash(&pet.kind));
    let _ = writeln!(out, "Breed:      {}", blank_as_dash(&pet.breed));
    let palette: Vec<String> = SUGGESTED_TRAITS
        .iter()
        .map(|label| {
            let mark = if pet.suggested_traits.iter().any(|t| t == label) {
                'x'
            } else {
                ' '
            };
            format!("[{mark}] {label}")
        })
        .collect();
    let _ = writeln!(out, "Traits:     {}", palette.join("  "));
    let _ = writeln!(out, "Custom:     {}", blank_as_dash(&pet.custom_traits));
    let _ = writeln!(out, "Quirks:     {}", blank_as_dash(&pet.quirks));
    let _ = writeln!(out, "Favorites:  {}", blank_as_dash(&pet.favorite_things));
    if pet.is_edit() {
        let _ = writeln!(out, "> field <key> <value>, trait <label>, save, delete <id>, back");
    } else {
        let _ = writeln!(out, "> field <key> <value>, trait <label>, save, back");
    }
}

fn blank_as_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_reflects_step() {
        assert_eq!(
            progress_bar(Progress { step: 1, of: 3 }),
            "[###.........] step 1 of 3"
        );
        assert_eq!(
            progress_bar(Progress { step: 2, of: 3 }),
            "[#######.....] step 2 of 3"
        );
    }
}
