use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Python,
    Revit,
    Node,
    Bim,
    Cloud,
    Twin,
    Iot,
    Write,
    Paper,
    Talk,
    #[serde(other)]
    Other,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SkillIcon::Python => "{ }",
            SkillIcon::Revit => "📦",
            SkillIcon::Node => "</>",
            SkillIcon::Bim => "▤",
            SkillIcon::Cloud => "☁",
            SkillIcon::Twin => "▦",
            SkillIcon::Iot => "⌬",
            SkillIcon::Write => "✎",
            SkillIcon::Paper => "📄",
            SkillIcon::Talk => "📊",
            // workflow
            SkillIcon::Other => "⇄",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectIcon {
    Navis,
    Dalux,
    Scan2bim,
    Iot,
    Revitqa,
    #[serde(other)]
    Other,
}

impl ProjectIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ProjectIcon::Navis => "📏",
            ProjectIcon::Dalux => "▩",
            ProjectIcon::Scan2bim => "⌗",
            ProjectIcon::Iot => "⌬",
            ProjectIcon::Revitqa => "✔",
            // boxes
            ProjectIcon::Other => "▦",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Linkedin,
    Github,
    Researchgate,
    Mail,
    Resume,
    Youtube,
    Twitter,
    #[serde(other)]
    Website,
}

impl LinkKind {
    pub fn glyph(self) -> &'static str {
        match self {
            LinkKind::Linkedin => "in",
            LinkKind::Github => "gh",
            LinkKind::Researchgate => "RG",
            LinkKind::Mail => "✉",
            LinkKind::Resume => "⤓",
            LinkKind::Youtube => "▶",
            LinkKind::Twitter => "𝕏",
            LinkKind::Website => "🔗",
        }
    }

    /// links that stay on the page (mail) are not opened in a new tab
    pub fn external(self) -> bool {
        !matches!(self, LinkKind::Mail)
    }
}
