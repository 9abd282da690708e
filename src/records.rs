use serde::Serialize;

/// Coarse fortune read off the application note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fortune {
    #[serde(rename = "大吉")]
    GreatFortune,
    #[serde(rename = "吉")]
    Fortune,
    #[serde(rename = "凶")]
    Misfortune,
    #[serde(rename = "中平")]
    Neutral,
}

impl Fortune {
    pub fn label(self) -> &'static str {
        match self {
            Fortune::GreatFortune => "大吉",
            Fortune::Fortune => "吉",
            Fortune::Misfortune => "凶",
            Fortune::Neutral => "中平",
        }
    }
}

/// One of up to six line statements of a hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YaoLine {
    /// 1..=6, assigned in order of acceptance.
    pub position: u8,
    /// Label as written, e.g. `初九`.
    pub name: String,
    pub text: String,
    pub xiang_text: String,
    /// Plain-language translation.
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexagramRecord {
    pub id: u32,
    pub name: String,
    pub upper_trigram: String,
    pub lower_trigram: String,
    /// Six `0`/`1` characters, lower trigram first.
    pub lines: String,
    /// Hexagram glyph from the header, empty when absent.
    pub unicode: String,
    pub gua_ci: String,
    pub xiang_ci: String,
    pub tuan_ci: String,
    pub application: String,
    pub meaning: String,
    pub fortune: Fortune,
    pub career: String,
    pub love: String,
    pub health: String,
    pub wealth: String,
    pub yaos: Vec<YaoLine>,
}

/// Top-level JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct HexagramCollection {
    pub hexagrams: Vec<HexagramRecord>,
}
