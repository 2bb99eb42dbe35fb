//! Tariff data, game rules and view state live here.

pub mod app_state;
pub mod fetch;
pub mod games;
pub mod icon;
pub mod quiz;
pub mod stats;
pub mod tariff;

pub use app_state::{AppState, PersistedState, ShippingDate, Theme};
pub use fetch::{pretty_payload, FetchState};
pub use games::{
    filter_games, format_duration, CompletionStats, DailyTask, Difficulty, GameCategory, GameInfo,
    PlayerStats, ScoreRating, DAILY_TASKS, TARIFF_QUIZ_ID,
};
pub use icon::IconId;
pub use quiz::{QuizSession, QUIZ_QUESTIONS};
pub use stats::{StatColor, StatDisplayItem};
pub use tariff::{
    comparison_rows, filter_hts_suggestions, iso_date, CountryCostRow, RankTier, TariffQuote,
    TransportMode, Trend, COUNTRY_TARIFFS,
};
