use yew::{function_component, html, Children, Html, Properties};

use crate::content::section_title;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: &'static str,
    #[prop_or_default]
    pub intro: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn view(props: &SectionProps) -> Html {
    let class = if props.id == "about" {
        "section"
    } else {
        "section section-block"
    };

    html! {
      <div class={class} id={props.id}>
        <div class="section-head">
          <h2 class="section-title">{section_title(props.id)}</h2>
          <div class="section-line" />
        </div>
        if let Some(intro) = &props.intro {
          <p class="section-text section-intro">{intro}</p>
        }
        {props.children.clone()}
      </div>
    }
}

/// a list of tags rendered as pills
#[derive(Properties, PartialEq)]
pub struct TagsProps {
    pub tags: Vec<String>,
}

#[function_component(Tags)]
pub fn tags(props: &TagsProps) -> Html {
    html! {
      <div class="tags">
        {props.tags.iter().map(|t| html! {
          <span key={t.clone()} class="tag">{t}</span>
        }).collect::<Html>()}
      </div>
    }
}
