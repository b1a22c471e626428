use yew::{function_component, html, Html, Properties};

use crate::types::Recommendation;

#[derive(Properties, PartialEq)]
pub struct RecommendationCardProps {
    pub recommendation: Recommendation,
}

#[function_component(RecommendationCard)]
pub fn view(props: &RecommendationCardProps) -> Html {
    let recommendation = &props.recommendation;

    html! {
      <div class="card recommendation">
        <div class="recommendation-head">
          <div class="portrait">
            <img src={recommendation.photo.clone()} alt={recommendation.name.clone()} width="120" height="120" />
          </div>
          <div class="recommendation-who">
            <div class="card-title">{&recommendation.name}</div>
            <div class="muted">{&recommendation.role}</div>
          </div>
          if let Some(linkedin) = &recommendation.linkedin {
            <a href={linkedin.clone()} target="_blank" rel="noreferrer" class="btn btn-small">
              {"LinkedIn"}
            </a>
          }
        </div>
        <p class="muted quote">{format!("“{}”", recommendation.text)}</p>
      </div>
    }
}
