use yew::{function_component, html, Html, Properties};

use crate::types::{ExpertGroup, Skill};

#[derive(Properties, PartialEq)]
pub struct ExpertCardProps {
    pub group: ExpertGroup,
}

#[function_component(ExpertCard)]
pub fn view(props: &ExpertCardProps) -> Html {
    html! {
      <div class="card expert">
        <div class="card-title">{&props.group.title}</div>
        <div class="skills">
          {props.group.items.iter().map(|skill| html! {
            <SkillChip key={skill.label.clone()} skill={skill.clone()} />
          }).collect::<Html>()}
        </div>
      </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillChipProps {
    pub skill: Skill,
}

#[function_component(SkillChip)]
pub fn chip(props: &SkillChipProps) -> Html {
    let skill = &props.skill;

    html! {
      <div class="skill">
        <div class="icon-bubble" aria-hidden="true">{skill.icon.glyph()}</div>
        <div class="skill-text">
          <div class="skill-label">{&skill.label}</div>
          if let Some(hint) = &skill.hint {
            <div class="skill-hint" title={hint.clone()}>{hint}</div>
          }
        </div>
      </div>
    }
}
