//! Language codes the bot understands.

/// Every Chinese variant the detector reports starts with this (`zh`, `zh-TW`, `zh-CN`).
pub const CHINESE_PREFIX: &str = "zh";
pub const TRADITIONAL_CHINESE: &str = "zh-TW";
pub const SIMPLIFIED_CHINESE: &str = "zh-CN";
pub const VIETNAMESE: &str = "vi";

pub fn is_chinese(code: &str) -> bool {
    code.starts_with(CHINESE_PREFIX)
}

pub fn is_vietnamese(code: &str) -> bool {
    code == VIETNAMESE
}
