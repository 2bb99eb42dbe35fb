pub mod calculator;
pub mod forum_test;
pub mod games;
pub mod not_found;
pub mod tariff_quiz;

pub use calculator::CalculatorPage;
pub use forum_test::ForumTestPage;
pub use games::GamesPage;
pub use not_found::NotFoundPage;
pub use tariff_quiz::TariffQuizPage;
