use serde::Deserialize;

use crate::icons::{LinkKind, ProjectIcon, SkillIcon};

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Meta {
    pub title: String,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileLink {
    pub kind: LinkKind,
    pub href: String,
    pub label: String,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub subtitle: Vec<String>,
    pub pill: String,
    pub avatar: String,
    pub links: Vec<ProfileLink>,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub contact_label: String,
    pub contact_href: String,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub icon: SkillIcon,
    pub label: String,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ExpertGroup {
    pub title: String,
    pub items: Vec<Skill>,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub icon: ProjectIcon,
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub impact: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Paper {
    pub venue: String,
    pub title: String,
    pub year: String,
    pub kind: String,
    pub doi: String,
    pub link: String,
    pub tags: Vec<String>,
    pub logo: String,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Conference {
    pub country: String,
    pub country_code: String,
    pub event: String,
    #[serde(default)]
    pub city: Option<String>,
    pub year: String,
    pub photos: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub role: String,
    pub photo: String,
    pub text: String,
    #[serde(default)]
    pub linkedin: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    pub meta: Meta,
    pub brand: Brand,
    pub profile: Profile,
    pub about: About,
    pub expertise: Vec<ExpertGroup>,
    pub projects: Vec<Project>,
    pub research: Vec<Paper>,
    pub talks_intro: String,
    pub talks: Vec<Conference>,
    pub recommendations_intro: String,
    pub recommendations: Vec<Recommendation>,
}
