use std::num::ParseIntError;

use thiserror::Error;

/// Why a section produced no record.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("无法解析卦标题: {line}")]
    MalformedHeader { line: String },

    #[error("卦序号无效 '{raw}': {source}")]
    InvalidId {
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

/// Non-fatal data-quality issue on a parsed section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    #[error("第 {id} 卦的卦象无法解析，使用默认上下卦 {fallback}")]
    DefaultTrigrams { id: u32, fallback: &'static str },
}
