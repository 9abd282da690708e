use crate::records::Fortune;

/// Highest priority first; the first keyword contained in the text wins.
const FORTUNE_KEYWORDS: &[(&str, Fortune)] = &[
    ("大吉", Fortune::GreatFortune),
    ("吉", Fortune::Fortune),
    ("凶", Fortune::Misfortune),
];

const CAREER_KEYWORDS: &[&str] = &["事业", "创业", "工作"];
const WEALTH_KEYWORDS: &[&str] = &["财运", "财富", "投资"];
const LOVE_KEYWORDS: &[&str] = &["感情", "爱情", "婚姻"];
const HEALTH_KEYWORDS: &[&str] = &["健康", "身体"];

const CLAUSE_BREAKS: &[char] = &[',', '，', '。', '.'];

pub fn classify_fortune(text: &str) -> Fortune {
    FORTUNE_KEYWORDS
        .iter()
        .find(|(kw, _)| text.contains(kw))
        .map(|(_, fortune)| *fortune)
        .unwrap_or(Fortune::Neutral)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aspects {
    pub career: String,
    pub love: String,
    pub health: String,
    pub wealth: String,
}

/// Per-topic guidance pulled out of the application note.
pub fn split_aspects(application: &str) -> Aspects {
    Aspects {
        career: extract_aspect(application, CAREER_KEYWORDS),
        love: extract_aspect(application, LOVE_KEYWORDS),
        health: extract_aspect(application, HEALTH_KEYWORDS),
        wealth: extract_aspect(application, WEALTH_KEYWORDS),
    }
}

/// First clause mentioning a keyword, or the whole text when none appear.
fn extract_aspect(text: &str, keywords: &[&str]) -> String {
    keywords
        .iter()
        .find(|kw| text.contains(*kw))
        .and_then(|kw| text.split(CLAUSE_BREAKS).find(|clause| clause.contains(kw)))
        .map(|clause| clause.trim().to_string())
        .unwrap_or_else(|| text.to_string())
}
