use gloo_console::error;
use yew::prelude::*;

use crate::{
    content,
    expertise::ExpertCard,
    nav::NavBar,
    profile::ProfileCard,
    projects::ProjectCard,
    recommendations::RecommendationCard,
    research::PaperCard,
    section::Section,
    talks::ConferenceCard,
    theme::{DocumentRoot, LocalStorage, ThemeController},
    types::Portfolio,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Msg {
    InitTheme,
    ToggleTheme,
}

pub struct Page {
    theme: ThemeController<LocalStorage, DocumentRoot>,
    portfolio: Option<Portfolio>,
}

impl Component for Page {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let portfolio = match content::load() {
            Ok(portfolio) => Some(portfolio),
            Err(e) => {
                error!(format!("could not load portfolio content: {e}"));
                None
            }
        };

        Self {
            theme: ThemeController::new(LocalStorage, DocumentRoot),
            portfolio,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::InitTheme => self.theme.initialize(),
            Msg::ToggleTheme => self.theme.toggle(),
        };

        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        let Some(msg) = after_render(first_render) else {
            return;
        };

        ctx.link().send_message(msg);

        if let Some(portfolio) = &self.portfolio {
            gloo_utils::document().set_title(&portfolio.meta.title);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
          <>
            <NavBar
              brand={self.portfolio.as_ref().map(|p| p.brand.clone())}
              theme={self.theme.current()}
              toggle_theme={link.callback(|_| Msg::ToggleTheme)}
            />
            <div class="container">
              if let Some(portfolio) = &self.portfolio {
                {body(portfolio)}
              } else {
                <div class="card empty">
                  {"The portfolio content could not be loaded."}
                </div>
              }
            </div>
          </>
        }
    }
}

/// the first paint is always light, the stored theme is loaded once after it
fn after_render(first_render: bool) -> Option<Msg> {
    first_render.then_some(Msg::InitTheme)
}

fn body(portfolio: &Portfolio) -> Html {
    let about = &portfolio.about;

    html! {
      <div class="grid">
        <ProfileCard profile={portfolio.profile.clone()} />
        <section class="card content">
          <Section id="about">
            <div class="section-text narrow">
              {about.paragraphs.iter().map(|p| html! { <p>{p}</p> }).collect::<Html>()}
              <p>
                {"If you want to collaborate on research, academic projects, or innovative engineering solutions, feel free to "}
                <a class="accent" href={about.contact_href.clone()}>{&about.contact_label}</a>
                {"."}
              </p>
            </div>
          </Section>
          <Section id="expertise">
            <div class="cards3">
              {portfolio.expertise.iter().map(|group| html! {
                <ExpertCard key={group.title.clone()} group={group.clone()} />
              }).collect::<Html>()}
            </div>
          </Section>
          <Section id="projects">
            <div class="stack">
              {portfolio.projects.iter().map(|project| html! {
                <ProjectCard key={project.title.clone()} project={project.clone()} />
              }).collect::<Html>()}
            </div>
          </Section>
          <Section id="research">
            <div class="stack narrow">
              {portfolio.research.iter().map(|paper| html! {
                <PaperCard key={paper.title.clone()} paper={paper.clone()} />
              }).collect::<Html>()}
            </div>
          </Section>
          <Section id="talks" intro={portfolio.talks_intro.clone()}>
            <div class="stack">
              {portfolio.talks.iter().map(|conference| html! {
                <ConferenceCard key={conference.event.clone()} conference={conference.clone()} />
              }).collect::<Html>()}
            </div>
          </Section>
          <Section id="recommendations" intro={portfolio.recommendations_intro.clone()}>
            <div class="recommendations">
              {portfolio.recommendations.iter().enumerate().map(|(i, recommendation)| html! {
                <RecommendationCard key={i} recommendation={recommendation.clone()} />
              }).collect::<Html>()}
            </div>
          </Section>
        </section>
      </div>
    }
}
