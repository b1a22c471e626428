use web_sys::MouseEvent;
use yew::{function_component, html, Callback, Html, Properties};

use crate::{content::SECTIONS, theme::Theme, types::Brand};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub brand: Option<Brand>,
    pub theme: Theme,
    pub toggle_theme: Callback<MouseEvent>,
}

#[function_component(NavBar)]
pub fn view(props: &NavBarProps) -> Html {
    // show the theme the button switches to
    let icon = match props.theme {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    html! {
      <nav class="nav">
        <div class="container nav-inner">
          if let Some(brand) = &props.brand {
            <div class="brand">
              <div class="brand-mark" />
              <div>
                <div class="brand-name">{&brand.name}</div>
                <div class="brand-tagline">{&brand.tagline}</div>
              </div>
            </div>
          }
          <div class="nav-links">
            {SECTIONS.iter().map(|(id, title)| html! {
              <a key={*id} href={format!("#{id}")}>{*title}</a>
            }).collect::<Html>()}
            <button
              class="btn theme-toggle"
              aria-label="Toggle theme"
              title="Toggle theme"
              onclick={props.toggle_theme.clone()}
            >
              {icon}
            </button>
          </div>
        </div>
      </nav>
    }
}
