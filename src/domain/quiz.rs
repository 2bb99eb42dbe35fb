use super::games::{CompletionStats, Difficulty};

#[derive(Clone, Debug, PartialEq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
}

pub static QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        prompt: "What is a tariff?",
        options: [
            "A tax imposed on imported goods",
            "A subsidy given to domestic producers",
            "A quota limit on exports",
            "A trade agreement between countries",
        ],
        correct: 0,
        explanation: "A tariff is a tax imposed by a government on imported goods to protect domestic industries and generate revenue.",
        category: "Basic Concepts",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        prompt: "Which organization oversees global trade rules?",
        options: [
            "United Nations",
            "World Trade Organization (WTO)",
            "International Monetary Fund",
            "World Bank",
        ],
        correct: 1,
        explanation: "The WTO is responsible for overseeing global trade rules and resolving trade disputes between countries.",
        category: "Trade Organizations",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        prompt: "What does HTS code stand for?",
        options: [
            "Harmonized Tariff Schedule",
            "High Trade Standards",
            "Heavy Transport System",
            "Human Trade Services",
        ],
        correct: 0,
        explanation: "HTS stands for Harmonized Tariff Schedule, a standardized system for classifying goods for import/export.",
        category: "Classification",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        prompt: "Which type of tariff is calculated as a percentage of the product's value?",
        options: [
            "Specific tariff",
            "Ad valorem tariff",
            "Compound tariff",
            "Prohibitive tariff",
        ],
        correct: 1,
        explanation: "Ad valorem tariffs are calculated as a percentage of the product's value, making them proportional to price changes.",
        category: "Tariff Types",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        prompt: "What is the purpose of a free trade agreement (FTA)?",
        options: [
            "To increase tariffs between countries",
            "To eliminate or reduce tariffs between participating countries",
            "To establish trade quotas",
            "To create trade barriers",
        ],
        correct: 1,
        explanation: "FTAs are designed to eliminate or significantly reduce tariffs and other trade barriers between participating countries.",
        category: "Trade Agreements",
        difficulty: Difficulty::Medium,
    },
];

const POINTS_PER_CORRECT: u32 = 10;
const PERFECT_BONUS: u32 = 50;

/// One pass through a question set.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    questions: &'static [QuizQuestion],
    current: usize,
    selected: Option<usize>,
    answers: Vec<Option<usize>>,
    revealed: bool,
    result: Option<CompletionStats>,
}

impl QuizSession {
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            current: 0,
            selected: None,
            answers: vec![None; questions.len()],
            revealed: false,
            result: None,
        }
    }

    pub fn question(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.current)
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn result(&self) -> Option<&CompletionStats> {
        self.result.as_ref()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    /// Position through the set, counting the current question as reached.
    pub fn progress_percent(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn correct_so_far(&self) -> u32 {
        self.answers
            .iter()
            .zip(self.questions)
            .filter(|(answer, question)| **answer == Some(question.correct))
            .count() as u32
    }

    /// Whether the revealed answer for the current question was right.
    pub fn current_is_correct(&self) -> Option<bool> {
        if !self.revealed {
            return None;
        }
        let question = self.question()?;
        Some(self.answers.get(self.current).copied().flatten() == Some(question.correct))
    }

    pub fn select(&mut self, option: usize) {
        if self.revealed || self.result.is_some() {
            return;
        }
        if let Some(question) = self.question() {
            if option < question.options.len() {
                self.selected = Some(option);
            }
        }
    }

    pub fn submit(&mut self) {
        let Some(choice) = self.selected else {
            return;
        };
        if self.result.is_some() {
            return;
        }
        if let Some(slot) = self.answers.get_mut(self.current) {
            *slot = Some(choice);
            self.revealed = true;
        }
    }

    /// Moves to the next question, or finishes after the last one.
    pub fn advance(&mut self, elapsed_secs: u64) {
        if !self.revealed || self.result.is_some() {
            return;
        }
        if self.is_last() {
            self.result = Some(self.score(elapsed_secs));
            return;
        }
        self.current += 1;
        self.selected = self.answers.get(self.current).copied().flatten();
        self.revealed = false;
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.questions);
    }

    fn score(&self, elapsed_secs: u64) -> CompletionStats {
        let correct = self.correct_so_far();
        let total = self.questions.len().max(1) as f64;
        let score = (f64::from(correct) / total * 100.0).round() as u32;
        let perfect_score = score == 100;
        let bonus = if perfect_score { PERFECT_BONUS } else { 0 };
        CompletionStats {
            score,
            correct_answers: Some(correct),
            time_spent: elapsed_secs,
            points_earned: correct * POINTS_PER_CORRECT + bonus,
            perfect_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(session: &mut QuizSession, picks: &[usize]) {
        for pick in picks {
            session.select(*pick);
            session.submit();
            session.advance(42);
        }
    }

    #[test]
    fn perfect_run_earns_bonus() {
        let mut session = QuizSession::new(&QUIZ_QUESTIONS);
        let picks: Vec<_> = QUIZ_QUESTIONS.iter().map(|q| q.correct).collect();
        answer_all(&mut session, &picks);

        let result = session.result().expect("quiz finished");
        assert_eq!(result.score, 100);
        assert_eq!(result.correct_answers, Some(5));
        assert_eq!(result.points_earned, 5 * 10 + 50);
        assert!(result.perfect_score);
        assert_eq!(result.time_spent, 42);
    }

    #[test]
    fn partial_run_rounds_score() {
        let mut session = QuizSession::new(&QUIZ_QUESTIONS);
        // Correct on the first three only.
        answer_all(&mut session, &[0, 1, 0, 0, 0]);

        let result = session.result().expect("quiz finished");
        assert_eq!(result.correct_answers, Some(3));
        assert_eq!(result.score, 60);
        assert_eq!(result.points_earned, 30);
        assert!(!result.perfect_score);
    }

    #[test]
    fn submit_without_selection_is_ignored() {
        let mut session = QuizSession::new(&QUIZ_QUESTIONS);
        session.submit();
        assert!(!session.is_revealed());
        session.advance(0);
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn selection_locks_after_reveal() {
        let mut session = QuizSession::new(&QUIZ_QUESTIONS);
        session.select(2);
        session.submit();
        session.select(0);
        assert_eq!(session.selected(), Some(2));
        assert_eq!(session.current_is_correct(), Some(false));
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut session = QuizSession::new(&QUIZ_QUESTIONS);
        session.select(9);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn progress_counts_current_question() {
        let mut session = QuizSession::new(&QUIZ_QUESTIONS);
        assert_eq!(session.progress_percent(), 20.0);
        session.select(0);
        session.submit();
        session.advance(1);
        assert_eq!(session.progress_percent(), 40.0);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn restart_clears_everything() {
        let mut session = QuizSession::new(&QUIZ_QUESTIONS);
        answer_all(&mut session, &[0, 0, 0, 0, 0]);
        assert!(session.result().is_some());

        session.restart();
        assert_eq!(session, QuizSession::new(&QUIZ_QUESTIONS));
    }
}
