//! Profile window: a static card.

use leptos::*;

/// Content of the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileCard {
    /// Full name.
    pub name: &'static str,
    /// Short handle shown under the name.
    pub handle: &'static str,
    /// Preferred pronouns.
    pub pronouns: &'static str,
    /// Photo path under the site root.
    pub photo: &'static str,
    /// One-line motto.
    pub tagline: &'static str,
    /// Role badges in display order.
    pub roles: &'static [&'static str],
}

/// The site owner's card.
pub const PROFILE: ProfileCard = ProfileCard {
    name: "Supun Tharinda Edirisuriya",
    handle: "supTE",
    pronouns: "He/him",
    photo: "/images/profile.jpg",
    tagline: "😉 Love to Learn!",
    roles: &["Developer", "Designer"],
};

#[component]
pub(super) fn ProfileWindow() -> impl IntoView {
    let profile = PROFILE;
    view! {
        <div class="profile-window">
            <aside class="profile-card">
                <div class="profile-photo">
                    <img src=profile.photo alt="profile-img" />
                    <span class="profile-tagline">{profile.tagline}</span>
                </div>
                <h1 class="profile-name">
                    {profile.name}
                    <div class="profile-handle">"(" {profile.handle} ")"</div>
                    <div class="profile-pronouns">{profile.pronouns}</div>
                </h1>
                <h5 class="profile-roles">{profile.roles.join(" | ")}</h5>
            </aside>
        </div>
    }
}
