//! Window contents keyed by registry id.

mod profile;
mod skills;

use leptos::*;

pub use profile::{ProfileCard, PROFILE};
pub use skills::{Skill, SKILLS};

use crate::model::WindowId;

/// Builds the view for a window id, or `None` when the id has no content (the caller renders a
/// fallback panel).
pub fn render_window_contents(window_id: &WindowId) -> Option<View> {
    match window_id.as_str() {
        "profile" => Some(view! { <profile::ProfileWindow /> }.into_view()),
        "skills" => Some(view! { <skills::SkillsWindow /> }.into_view()),
        _ => None,
    }
}
