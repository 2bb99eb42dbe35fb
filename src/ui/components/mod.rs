pub mod country_comparison;
pub mod game_completion;
pub mod game_header;
pub mod game_stats;
pub mod tariff_result;

pub use country_comparison::CountryComparison;
pub use game_completion::GameCompletion;
pub use game_header::GameHeader;
pub use game_stats::GameStats;
pub use tariff_result::TariffResult;
