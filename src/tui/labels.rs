//! 本地化标签映射
//!
//! 用于将枚举值映射为稳定的翻译键，避免依赖 Debug 输出。

use crate::campaign::{Gender, InfluencerTier};
use crate::tui::state::DetailTab;
use rust_i18n::t;
use std::borrow::Cow;

/// 性别标签
pub fn gender_label(gender: Gender) -> Cow<'static, str> {
    match gender {
        Gender::All => t!("gender_all"),
        Gender::Male => t!("gender_male"),
        Gender::Female => t!("gender_female"),
    }
}

/// 达人量级标签
pub fn tier_label(tier: InfluencerTier) -> Cow<'static, str> {
    match tier {
        InfluencerTier::Nano => t!("tier_nano"),
        InfluencerTier::Micro => t!("tier_micro"),
        InfluencerTier::Mid => t!("tier_mid"),
        InfluencerTier::Macro => t!("tier_macro"),
        InfluencerTier::Mega => t!("tier_mega"),
    }
}

/// 详情标签页标题
pub fn tab_label(tab: DetailTab) -> Cow<'static, str> {
    t!(tab.title_key())
}

/// 勾选标记
pub fn check_mark(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
