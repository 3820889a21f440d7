//! Fixed phrase tables used by the generators.

pub const COST_CUTTING_INITIATIVES: [&str; 8] = [
    "printer paper rationing",
    "mandatory BYOT (Bring Your Own Toilet-paper) policy",
    "subscription to oxygen in common areas",
    "replacing office chairs with exercise balls",
    "elimination of free water cooler privileges",
    "conversion of sick days to 'productivity opportunity days'",
    "implementation of BYO-lightbulb energy savings program",
    "introduction of elevator usage fees",
];

pub const BUZZWORDS: [&str; 27] = [
    "synergy",
    "paradigm shift",
    "disruptive innovation",
    "value-added",
    "best practices",
    "thought leadership",
    "deep dive",
    "low-hanging fruit",
    "holistic approach",
    "ecosystem",
    "bandwidth",
    "circle back",
    "scalable",
    "leverage",
    "mission-critical",
    "streamline",
    "game-changer",
    "drill down",
    "value proposition",
    "deliverable",
    "actionable insights",
    "ideation",
    "agile",
    "lean",
    "robust",
    "bleeding edge",
    "blue sky thinking",
];

pub const ACRONYMS: [&str; 11] = [
    "KPI", "ROI", "ASAP", "EOD", "COB", "B2B", "SOP", "SWOT", "MVP", "OKR", "EBITDA",
];

pub const VAGUE_POSITIVE: [&str; 8] = [
    "demonstrates strong potential",
    "exhibits a positive attitude",
    "is a team player",
    "has good communication skills",
    "shows initiative when needed",
    "is reliable and dependable",
    "contributes to the team atmosphere",
    "displays professional behavior",
];

pub const VAGUE_NEGATIVE: [&str; 8] = [
    "could improve visibility",
    "should demonstrate more leadership",
    "needs to think more strategically",
    "would benefit from better prioritization",
    "could enhance their executive presence",
    "should focus more on big-picture thinking",
    "needs to improve cross-functional collaboration",
    "would benefit from more proactive communication",
];

pub const VAGUE_DEVELOPMENT: [&str; 8] = [
    "continue to develop in this role",
    "seek opportunities for growth",
    "take on more challenging projects",
    "expand their knowledge base",
    "improve their skillset",
    "work on professional development",
    "broaden their perspective",
    "strengthen their core competencies",
];

/// Format each entry as a `• ` bullet, one per line.
pub fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
