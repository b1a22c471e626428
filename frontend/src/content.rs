use crate::types::Portfolio;

const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");

/// anchors and navigation labels of the page sections, in page order
pub const SECTIONS: [(&str, &str); 6] = [
    ("about", "About"),
    ("expertise", "Expertise"),
    ("projects", "Projects"),
    ("research", "Research & Publications"),
    ("talks", "Talks & Conferences"),
    ("recommendations", "Recommendations"),
];

/// conference cards never show more photos than this
pub const MAX_CONFERENCE_PHOTOS: usize = 3;

pub fn load() -> Result<Portfolio, serde_json_wasm::de::Error> {
    parse(PORTFOLIO_JSON)
}

pub fn parse(json: &str) -> Result<Portfolio, serde_json_wasm::de::Error> {
    serde_json_wasm::from_str(json)
}

/// navigation label for a section anchor
pub fn section_title(anchor: &str) -> &'static str {
    SECTIONS
        .iter()
        .find(|(id, _)| *id == anchor)
        .map(|(_, title)| *title)
        .unwrap_or_default()
}
