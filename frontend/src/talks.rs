use yew::{function_component, html, Html, Properties};

use crate::{content::MAX_CONFERENCE_PHOTOS, types::Conference};

#[derive(Properties, PartialEq)]
pub struct ConferenceCardProps {
    pub conference: Conference,
}

/// "Country • City", or just the country when no city is known
pub fn location(conference: &Conference) -> String {
    match &conference.city {
        Some(city) if !city.is_empty() => format!("{} • {}", conference.country, city),
        _ => conference.country.clone(),
    }
}

#[function_component(ConferenceCard)]
pub fn view(props: &ConferenceCardProps) -> Html {
    let conference = &props.conference;
    let alt = format!("{} photo", conference.event);

    html! {
      <div class="card conference">
        <div class="conference-head">
          <div class="conference-title">
            <div class="flag" aria-label={conference.country.clone()} title={conference.country.clone()}>
              <img
                src={format!("/flags/4x3/{}.svg", conference.country_code)}
                alt={conference.country.clone()}
                width="28"
                height="20"
              />
            </div>
            <div>
              <div class="card-title">{&conference.event}</div>
              <div class="muted location">{location(conference)}</div>
            </div>
          </div>
          <div class="muted year">{&conference.year}</div>
        </div>
        <div class="gallery">
          {conference.photos.iter().take(MAX_CONFERENCE_PHOTOS).map(|src| html! {
            <div key={src.clone()} class="frame">
              <img src={src.clone()} alt={alt.clone()} width="900" height="600" />
            </div>
          }).collect::<Html>()}
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conference(city: Option<&str>) -> Conference {
        Conference {
            country: "Peru".to_owned(),
            country_code: "pe".to_owned(),
            event: "BIMFIC".to_owned(),
            city: city.map(str::to_owned),
            year: "2025".to_owned(),
            photos: vec![],
        }
    }

    #[test]
    fn location_with_and_without_city() {
        assert_eq!(location(&conference(Some("Lima"))), "Peru • Lima");
        assert_eq!(location(&conference(None)), "Peru");
        assert_eq!(location(&conference(Some(""))), "Peru");
    }
}
