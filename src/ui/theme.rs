//! Theme-specific class helpers for consistent styling across pages.

use crate::domain::{Difficulty, RankTier, StatColor, Theme, Trend};

// ============================================
// LAYOUT
// ============================================

pub fn page(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "theme-dark min-h-screen bg-slate-950 text-slate-100 font-sans",
        Theme::Light => "theme-light min-h-screen bg-slate-50 text-slate-900 font-sans",
    }
}

pub fn header_bar(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "sticky top-0 z-50 border-b border-slate-900/60 bg-slate-950/80 backdrop-blur px-6 py-4",
        Theme::Light => "sticky top-0 z-50 border-b border-slate-200 bg-white/80 backdrop-blur px-6 py-4",
    }
}

pub fn footer_bar(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "border-t border-slate-900/60 px-6 py-4 text-xs text-slate-500",
        Theme::Light => "border-t border-slate-200 px-6 py-4 text-xs text-slate-500",
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400",
        Theme::Light => "rounded-lg bg-indigo-600 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-700",
    }
}

pub fn btn_outline(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800",
        Theme::Light => "rounded-lg border border-slate-300 px-4 py-2 text-sm font-semibold text-slate-700 hover:bg-slate-100",
    }
}

pub fn btn_ghost(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "inline-flex items-center gap-2 rounded-lg px-3 py-1.5 text-sm text-slate-300 hover:bg-slate-800 hover:text-white",
        Theme::Light => "inline-flex items-center gap-2 rounded-lg px-3 py-1.5 text-sm text-slate-600 hover:bg-slate-100 hover:text-slate-900",
    }
}

pub fn btn_disabled(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border border-slate-800 px-4 py-2 text-sm text-slate-600 cursor-not-allowed opacity-50",
        Theme::Light => "rounded-lg border border-slate-200 px-4 py-2 text-sm text-slate-400 cursor-not-allowed opacity-60",
    }
}

pub fn btn_small(theme: Theme, active: bool) -> &'static str {
    match (theme, active) {
        (Theme::Dark, true) => "rounded px-3 py-1 text-xs font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40",
        (Theme::Dark, false) => "rounded px-3 py-1 text-xs text-slate-400 border border-slate-700 hover:border-slate-500 hover:text-slate-200",
        (Theme::Light, true) => "rounded px-3 py-1 text-xs font-semibold bg-indigo-600 text-white border border-indigo-600",
        (Theme::Light, false) => "rounded px-3 py-1 text-xs text-slate-600 border border-slate-300 hover:border-slate-400 hover:text-slate-900",
    }
}

pub fn nav_link(theme: Theme, active: bool) -> &'static str {
    match (theme, active) {
        (Theme::Dark, true) => "rounded-lg border border-indigo-500/60 bg-indigo-500/15 px-4 py-2 font-semibold text-indigo-300",
        (Theme::Dark, false) => "rounded-lg border border-transparent px-4 py-2 text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200",
        (Theme::Light, true) => "rounded-lg border border-indigo-300 bg-indigo-50 px-4 py-2 font-semibold text-indigo-700",
        (Theme::Light, false) => "rounded-lg border border-transparent px-4 py-2 text-slate-500 transition hover:border-slate-200 hover:bg-slate-100 hover:text-slate-900",
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "w-full rounded-lg border border-slate-700 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
        Theme::Light => "w-full rounded-lg border border-slate-300 bg-white px-4 py-2.5 text-sm text-slate-900 focus:border-indigo-500 focus:outline-none",
    }
}

pub fn input_invalid(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "w-full rounded-lg border border-rose-500/60 bg-slate-950 px-4 py-2.5 text-sm text-slate-100 focus:border-rose-400 focus:outline-none",
        Theme::Light => "w-full rounded-lg border border-rose-400 bg-white px-4 py-2.5 text-sm text-slate-900 focus:border-rose-500 focus:outline-none",
    }
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn card(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-xl border border-slate-800 bg-slate-900/40",
        Theme::Light => "rounded-xl border border-slate-200 bg-white shadow-sm",
    }
}

pub fn card_emphasis(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-xl border-2 border-slate-700 bg-slate-900/40",
        Theme::Light => "rounded-xl border-2 border-slate-200 bg-white shadow-sm",
    }
}

pub fn row(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-900/60 p-4 transition-colors hover:bg-slate-800/60",
        Theme::Light => "flex items-center justify-between rounded-lg border border-slate-200 bg-white p-4 transition-colors hover:bg-slate-50",
    }
}

pub fn muted_block(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg bg-slate-900/60 p-4",
        Theme::Light => "rounded-lg bg-slate-100 p-4",
    }
}

pub fn total_block(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border-2 border-indigo-500/30 bg-indigo-500/10 p-4",
        Theme::Light => "rounded-lg border-2 border-indigo-200 bg-indigo-50 p-4",
    }
}

pub fn alert_info(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border border-sky-500/40 bg-sky-500/10 p-4 text-sky-100",
        Theme::Light => "rounded-lg border border-blue-200 bg-blue-50 p-4 text-blue-900",
    }
}

pub fn alert_error(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border border-rose-500/40 bg-rose-500/10 p-4 text-rose-200",
        Theme::Light => "rounded-lg border border-red-200 bg-red-50 p-4 text-red-800",
    }
}

pub fn alert_success(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-lg border border-emerald-500/40 bg-emerald-500/10 p-4 text-emerald-200",
        Theme::Light => "rounded-lg border border-green-200 bg-green-50 p-4 text-green-800",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_primary(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-indigo-300",
        Theme::Light => "text-indigo-600",
    }
}

pub fn text_strong(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-slate-100",
        Theme::Light => "text-slate-900",
    }
}

pub fn text_muted(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-slate-400",
        Theme::Light => "text-slate-500",
    }
}

pub fn label_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "block text-xs font-semibold uppercase text-slate-500",
        Theme::Light => "block text-xs font-semibold uppercase text-slate-600",
    }
}

// ============================================
// BADGES / INDICATORS
// ============================================

pub fn rank_badge(theme: Theme, tier: RankTier) -> &'static str {
    match (theme, tier) {
        (Theme::Dark, RankTier::Top) => "rank-badge px-2 py-0.5 text-xs font-semibold bg-indigo-500 text-white",
        (Theme::Dark, RankTier::Standard) => "rank-badge px-2 py-0.5 text-xs bg-slate-800 text-slate-300",
        (Theme::Light, RankTier::Top) => "rank-badge px-2 py-0.5 text-xs font-semibold bg-indigo-600 text-white",
        (Theme::Light, RankTier::Standard) => "rank-badge px-2 py-0.5 text-xs bg-slate-100 text-slate-700",
    }
}

pub fn trend_class(theme: Theme, trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "text-red-500",
        Trend::Down => "text-green-500",
        Trend::Stable => text_muted(theme),
    }
}

pub fn stat_color(theme: Theme, color: Option<StatColor>) -> &'static str {
    match (theme, color) {
        (_, None) => text_primary(theme),
        (Theme::Dark, Some(StatColor::Green)) => "text-emerald-400",
        (Theme::Dark, Some(StatColor::Blue)) => "text-sky-400",
        (Theme::Dark, Some(StatColor::Purple)) => "text-purple-400",
        (Theme::Dark, Some(StatColor::Orange)) => "text-orange-400",
        (Theme::Dark, Some(StatColor::Red)) => "text-rose-400",
        (Theme::Dark, Some(StatColor::Yellow)) => "text-amber-300",
        (Theme::Light, Some(StatColor::Green)) => "text-green-600",
        (Theme::Light, Some(StatColor::Blue)) => "text-blue-600",
        (Theme::Light, Some(StatColor::Purple)) => "text-purple-600",
        (Theme::Light, Some(StatColor::Orange)) => "text-orange-600",
        (Theme::Light, Some(StatColor::Red)) => "text-red-600",
        (Theme::Light, Some(StatColor::Yellow)) => "text-yellow-600",
    }
}

pub fn progress_track(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "progress-track mt-2 bg-slate-800",
        Theme::Light => "progress-track mt-2 bg-slate-200",
    }
}

pub fn progress_fill(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "progress-fill bg-indigo-400",
        Theme::Light => "progress-fill bg-indigo-600",
    }
}

pub fn difficulty_badge(theme: Theme, difficulty: Difficulty) -> &'static str {
    match (theme, difficulty) {
        (Theme::Dark, Difficulty::Easy) => "rounded-full px-2 py-0.5 text-xs bg-green-900 text-green-300",
        (Theme::Dark, Difficulty::Medium) => "rounded-full px-2 py-0.5 text-xs bg-yellow-900 text-yellow-300",
        (Theme::Dark, Difficulty::Hard) => "rounded-full px-2 py-0.5 text-xs bg-red-900 text-red-300",
        (Theme::Light, Difficulty::Easy) => "rounded-full px-2 py-0.5 text-xs bg-green-100 text-green-800",
        (Theme::Light, Difficulty::Medium) => "rounded-full px-2 py-0.5 text-xs bg-yellow-100 text-yellow-800",
        (Theme::Light, Difficulty::Hard) => "rounded-full px-2 py-0.5 text-xs bg-red-100 text-red-800",
    }
}

pub fn pill(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rounded-full border border-slate-700 px-2 py-0.5 text-xs text-slate-300",
        Theme::Light => "rounded-full border border-slate-300 px-2 py-0.5 text-xs text-slate-600",
    }
}

// ============================================
// QUIZ
// ============================================

/// How a quiz option is drawn at the current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Idle,
    Selected,
    /// The right answer, once revealed.
    Correct,
    /// The player's wrong pick, once revealed.
    Wrong,
    /// Any other option after the reveal.
    Dimmed,
}

pub fn quiz_option(theme: Theme, mark: OptionMark) -> &'static str {
    match (theme, mark) {
        (_, OptionMark::Idle) => btn_small(theme, false),
        (_, OptionMark::Selected) => btn_small(theme, true),
        (Theme::Dark, OptionMark::Correct) => "w-full rounded-lg border border-emerald-500 bg-emerald-500/15 px-4 py-3 text-left text-emerald-300",
        (Theme::Dark, OptionMark::Wrong) => "w-full rounded-lg border border-rose-500 bg-rose-500/15 px-4 py-3 text-left text-rose-300",
        (Theme::Dark, OptionMark::Dimmed) => "w-full rounded-lg border border-slate-700/40 px-4 py-3 text-left text-slate-400 opacity-60",
        (Theme::Light, OptionMark::Correct) => "w-full rounded-lg border border-green-500 bg-green-50 px-4 py-3 text-left text-green-800",
        (Theme::Light, OptionMark::Wrong) => "w-full rounded-lg border border-red-400 bg-red-50 px-4 py-3 text-left text-red-800",
        (Theme::Light, OptionMark::Dimmed) => "w-full rounded-lg border border-slate-200 px-4 py-3 text-left text-slate-500 opacity-60",
    }
}
