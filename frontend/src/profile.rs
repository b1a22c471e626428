use yew::{function_component, html, Html, Properties};

use crate::types::Profile;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub profile: Profile,
}

#[function_component(ProfileCard)]
pub fn view(props: &ProfileCardProps) -> Html {
    let profile = &props.profile;

    html! {
      <aside class="card profile">
        <div class="avatar">
          <img src={profile.avatar.clone()} alt="Profile photo" width="220" height="220" />
        </div>
        <h1 class="h1">{&profile.name}</h1>
        <div class="role">{&profile.role}</div>
        <div class="subtitle">
          {profile.subtitle.iter().map(|line| html! {
            <div>{line}</div>
          }).collect::<Html>()}
        </div>
        <div class="pill-row">
          <span class="pill">{&profile.pill}</span>
        </div>
        <div class="icon-row">
          {profile.links.iter().map(|link| {
            let (target, rel) = if link.kind.external() {
              (Some("_blank"), Some("noreferrer"))
            } else {
              (None, None)
            };

            html! {
              <a
                class="icon-btn"
                href={link.href.clone()}
                target={target}
                rel={rel}
                aria-label={link.label.clone()}
                title={link.label.clone()}
              >
                {link.kind.glyph()}
              </a>
            }
          }).collect::<Html>()}
        </div>
      </aside>
    }
}
