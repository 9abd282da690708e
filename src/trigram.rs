/// The eight trigrams. Each maps to a fixed 3-bit string read bottom line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigram {
    Qian,
    Kun,
    Kan,
    Li,
    Zhen,
    Xun,
    Gen,
    Dui,
}

/// Bits used for a trigram name that is not in the table.
pub const UNKNOWN_BITS: &str = "111";

/// Reserved glyphs. Trigram names in a diagram line never contain these.
pub const GLYPHS: &[char] = &['☰', '☷', '☵', '☲', '☳', '☴', '☶', '☱'];

impl Trigram {
    pub const ALL: [Trigram; 8] = [
        Trigram::Qian,
        Trigram::Kun,
        Trigram::Kan,
        Trigram::Li,
        Trigram::Zhen,
        Trigram::Xun,
        Trigram::Gen,
        Trigram::Dui,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Trigram::Qian => "乾",
            Trigram::Kun => "坤",
            Trigram::Kan => "坎",
            Trigram::Li => "离",
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Gen => "艮",
            Trigram::Dui => "兑",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Trigram::Qian => '☰',
            Trigram::Kun => '☷',
            Trigram::Kan => '☵',
            Trigram::Li => '☲',
            Trigram::Zhen => '☳',
            Trigram::Xun => '☴',
            Trigram::Gen => '☶',
            Trigram::Dui => '☱',
        }
    }

    /// Natural image: heaven, earth, water, fire, thunder, wind, mountain, lake.
    pub fn nature(self) -> &'static str {
        match self {
            Trigram::Qian => "天",
            Trigram::Kun => "地",
            Trigram::Kan => "水",
            Trigram::Li => "火",
            Trigram::Zhen => "雷",
            Trigram::Xun => "风",
            Trigram::Gen => "山",
            Trigram::Dui => "泽",
        }
    }

    pub fn bits(self) -> &'static str {
        match self {
            Trigram::Qian => "111",
            Trigram::Kun => "000",
            Trigram::Kan => "010",
            Trigram::Li => "101",
            Trigram::Zhen => "001",
            Trigram::Xun => "110",
            Trigram::Gen => "100",
            Trigram::Dui => "011",
        }
    }

    pub fn from_name(name: &str) -> Option<Trigram> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn from_bits(bits: &str) -> Option<Trigram> {
        Self::ALL.into_iter().find(|t| t.bits() == bits)
    }
}

/// Bits for a trigram name, falling back to `UNKNOWN_BITS`.
pub fn bits_for(name: &str) -> &'static str {
    Trigram::from_name(name).map_or(UNKNOWN_BITS, Trigram::bits)
}

/// Six-line code: lower trigram first, then upper.
pub fn encode_lines(lower: &str, upper: &str) -> String {
    let mut code = String::with_capacity(6);
    code.push_str(bits_for(lower));
    code.push_str(bits_for(upper));
    code
}
