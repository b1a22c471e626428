use yew::{function_component, html, Html, Properties};

use crate::{section::Tags, types::Paper};

#[derive(Properties, PartialEq)]
pub struct PaperCardProps {
    pub paper: Paper,
}

#[function_component(PaperCard)]
pub fn view(props: &PaperCardProps) -> Html {
    let paper = &props.paper;

    html! {
      <div class="card paper">
        <div class="paper-head">
          <div class="paper-main">
            <div class="paper-venue">
              {&paper.venue}{" "}
              <span class="muted">{format!("• {} • {}", paper.kind, paper.year)}</span>
            </div>
            <div class="paper-title">{&paper.title}</div>
          </div>
          <div class="paper-side">
            <a href={paper.link.clone()} target="_blank" rel="noreferrer" class="doi-link">
              {"View DOI"}
            </a>
            <div class="logo">
              <img src={paper.logo.clone()} alt={format!("{} logo", paper.venue)} width="56" height="56" />
            </div>
          </div>
        </div>
        <div class="muted doi">{format!("DOI: {}", paper.doi)}</div>
        <Tags tags={paper.tags.clone()} />
      </div>
    }
}
