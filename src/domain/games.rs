//! Game catalog, daily tasks and completion scoring shared by the games area.

use super::icon::IconId;
use super::stats::{ratio_percent, StatColor, StatDisplayItem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCategory {
    Quiz,
    Strategy,
    Puzzle,
    Daily,
}

impl GameCategory {
    pub const ALL: [GameCategory; 4] = [
        GameCategory::Quiz,
        GameCategory::Strategy,
        GameCategory::Puzzle,
        GameCategory::Daily,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GameCategory::Quiz => "Quiz",
            GameCategory::Strategy => "Strategy",
            GameCategory::Puzzle => "Puzzle",
            GameCategory::Daily => "Daily",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconId,
    pub difficulty: Difficulty,
    pub points: u32,
    pub estimated_time: &'static str,
    pub category: GameCategory,
    pub is_new: bool,
    pub is_daily: bool,
}

pub const TARIFF_QUIZ_ID: &str = "tariff-quiz";

pub static GAMES: [GameInfo; 4] = [
    GameInfo {
        id: TARIFF_QUIZ_ID,
        title: "Tariff Knowledge Quiz",
        description: "Test your understanding of tariff classifications and trade regulations",
        icon: IconId::Brain,
        difficulty: Difficulty::Easy,
        points: 100,
        estimated_time: "5-10 min",
        category: GameCategory::Quiz,
        is_new: true,
        is_daily: false,
    },
    GameInfo {
        id: "trade-routes",
        title: "Trade Route Builder",
        description: "Build optimal trade routes while managing costs and regulations",
        icon: IconId::Route,
        difficulty: Difficulty::Medium,
        points: 200,
        estimated_time: "15-20 min",
        category: GameCategory::Strategy,
        is_new: false,
        is_daily: false,
    },
    GameInfo {
        id: "import-export-match",
        title: "Import/Export Matching",
        description: "Match products with their correct HTS codes and tariff rates",
        icon: IconId::Puzzle,
        difficulty: Difficulty::Easy,
        points: 150,
        estimated_time: "8-12 min",
        category: GameCategory::Puzzle,
        is_new: false,
        is_daily: false,
    },
    GameInfo {
        id: "daily-challenge",
        title: "Daily Challenge",
        description: "Complete today's special challenge for bonus points",
        icon: IconId::Target,
        difficulty: Difficulty::Hard,
        points: 300,
        estimated_time: "20-30 min",
        category: GameCategory::Daily,
        is_new: false,
        is_daily: true,
    },
];

/// Games in catalog order, optionally restricted to one category.
pub fn filter_games(category: Option<GameCategory>) -> Vec<&'static GameInfo> {
    GAMES
        .iter()
        .filter(|game| category.map_or(true, |wanted| game.category == wanted))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct DailyTask {
    pub title: &'static str,
    pub description: &'static str,
    pub points: u32,
    pub completed: bool,
    pub progress: u32,
    pub max_progress: u32,
}

impl DailyTask {
    pub fn percent(&self) -> f64 {
        ratio_percent(self.progress, self.max_progress)
    }

    pub fn to_stat(&self) -> StatDisplayItem {
        let (icon, color) = if self.completed {
            (IconId::CheckCircle, StatColor::Green)
        } else {
            (IconId::Clock, StatColor::Orange)
        };
        StatDisplayItem::new(
            self.title,
            format!("{}/{} · +{} pts", self.progress, self.max_progress, self.points),
            icon,
        )
        .with_color(color)
        .with_progress(self.percent())
        .with_caption(self.description)
    }
}

pub const DAILY_TASKS: [DailyTask; 3] = [
    DailyTask {
        title: "Complete a Quiz",
        description: "Finish any quiz game",
        points: 50,
        completed: true,
        progress: 1,
        max_progress: 1,
    },
    DailyTask {
        title: "Achieve High Score",
        description: "Get a score above 80% in any game",
        points: 100,
        completed: false,
        progress: 0,
        max_progress: 1,
    },
    DailyTask {
        title: "Complete Daily Challenge",
        description: "Solve today's daily challenge",
        points: 200,
        completed: false,
        progress: 0,
        max_progress: 1,
    },
];

/// Player summary shown at the top of the games hub.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub total_points: u32,
    pub games_played: u32,
    pub streak_days: u32,
    pub rank: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            total_points: 1250,
            games_played: 12,
            streak_days: 5,
            rank: 23,
        }
    }
}

impl PlayerStats {
    pub fn to_stats(&self) -> Vec<StatDisplayItem> {
        vec![
            StatDisplayItem::new(
                "Total Points",
                group_thousands(u64::from(self.total_points)),
                IconId::Star,
            ),
            StatDisplayItem::new("Games Played", self.games_played, IconId::Gamepad)
                .with_color(StatColor::Blue),
            StatDisplayItem::new("Streak", format!("{} days", self.streak_days), IconId::Zap)
                .with_color(StatColor::Orange),
            StatDisplayItem::new("Rank", format!("#{}", self.rank), IconId::Trophy)
                .with_color(StatColor::Purple),
        ]
    }
}

/// Figures reported when a game finishes.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionStats {
    /// Percentage of the maximum score.
    pub score: u32,
    pub correct_answers: Option<u32>,
    pub time_spent: u64,
    pub points_earned: u32,
    pub perfect_score: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreRating {
    Perfect,
    Excellent,
    Good,
    Fair,
}

impl ScoreRating {
    /// Bands on the percentage score: 100, 50 and 20.
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= 100 => ScoreRating::Perfect,
            s if s >= 50 => ScoreRating::Excellent,
            s if s >= 20 => ScoreRating::Good,
            _ => ScoreRating::Fair,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreRating::Perfect => "Perfect",
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
        }
    }

    pub fn icon(&self) -> IconId {
        match self {
            ScoreRating::Perfect => IconId::Trophy,
            ScoreRating::Excellent => IconId::Star,
            ScoreRating::Good => IconId::Target,
            ScoreRating::Fair => IconId::TriangleAlert,
        }
    }
}

/// `m:ss`, minutes unbounded.
pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Inserts `,` every three digits of an unsigned integer string.
pub fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_category() {
        assert_eq!(filter_games(None).len(), 4);
        let quiz = filter_games(Some(GameCategory::Quiz));
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].id, TARIFF_QUIZ_ID);
        assert!(filter_games(Some(GameCategory::Daily))[0].is_daily);
    }

    #[test]
    fn rating_bands() {
        assert_eq!(ScoreRating::for_score(100), ScoreRating::Perfect);
        assert_eq!(ScoreRating::for_score(80), ScoreRating::Excellent);
        assert_eq!(ScoreRating::for_score(50), ScoreRating::Excellent);
        assert_eq!(ScoreRating::for_score(40), ScoreRating::Good);
        assert_eq!(ScoreRating::for_score(0), ScoreRating::Fair);
    }

    #[test]
    fn durations_are_minutes_and_padded_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1250), "1,250");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn daily_tasks_become_progress_stats() {
        let stats: Vec<_> = DAILY_TASKS.iter().map(DailyTask::to_stat).collect();
        assert_eq!(stats[0].bounded_progress(), Some(100.0));
        assert_eq!(stats[1].bounded_progress(), Some(0.0));
        assert_eq!(stats[0].color, Some(StatColor::Green));
        assert_eq!(
            stats[1].caption.as_deref(),
            Some("Get a score above 80% in any game")
        );
    }

    #[test]
    fn player_stats_render_in_order() {
        let stats = PlayerStats::default().to_stats();
        let labels: Vec<_> = stats.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Total Points", "Games Played", "Streak", "Rank"]);
        assert_eq!(stats[0].value.to_string(), "1,250");
        assert_eq!(stats[3].value.to_string(), "#23");
    }
}
