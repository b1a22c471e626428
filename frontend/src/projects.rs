use yew::{function_component, html, Html, Properties};

use crate::{section::Tags, types::Project};

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn view(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    html! {
      <div class="card project">
        <div class="card-head">
          <div class="icon-bubble" aria-hidden="true">{project.icon.glyph()}</div>
          <div class="card-title">{&project.title}</div>
        </div>
        <div class="muted description">{&project.desc}</div>
        if !project.highlights.is_empty() {
          <ul class="highlights">
            {project.highlights.iter().map(|h| html! {
              <li key={h.clone()}>{h}</li>
            }).collect::<Html>()}
          </ul>
        }
        if !project.images.is_empty() {
          <div class="gallery">
            {project.images.iter().map(|src| html! {
              <div key={src.clone()} class="frame">
                <img src={src.clone()} alt="Project visual" width="500" height="300" />
              </div>
            }).collect::<Html>()}
          </div>
        }
        <div class="impact">
          <div class="impact-title">{"Impact"}</div>
          <div class="impact-items">
            {project.impact.iter().map(|x| html! {
              <div key={x.clone()} class="impact-item">{x}</div>
            }).collect::<Html>()}
          </div>
          if !project.links.is_empty() {
            <div class="links">
              {project.links.iter().map(|l| html! {
                <a key={l.label.clone()} href={l.href.clone()} target="_blank" rel="noreferrer" class="btn">
                  {&l.label}
                </a>
              }).collect::<Html>()}
            </div>
          }
        </div>
        <Tags tags={project.tags.clone()} />
      </div>
    }
}
