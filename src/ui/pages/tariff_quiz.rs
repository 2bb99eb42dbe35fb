use std::time::Duration;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::{
    domain::{
        format_duration, AppState, IconId, QuizSession, StatColor, StatDisplayItem, QUIZ_QUESTIONS,
    },
    ui::{
        components::{GameCompletion, GameHeader, GameStats},
        icons::Icon,
        theme::{self, OptionMark},
    },
};

const TICK: Duration = Duration::from_secs(1);

#[component]
pub fn TariffQuizPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme = state.with(|st| st.theme);
    let mut session = use_signal(|| QuizSession::new(&QUIZ_QUESTIONS));
    let mut elapsed = use_signal(|| 0_u64);

    let _clock = use_future(move || {
        let mut elapsed = elapsed;
        async move {
            loop {
                tokio::time::sleep(TICK).await;
                if session.with(|quiz| quiz.result().is_none()) {
                    elapsed.with_mut(|secs| *secs += 1);
                }
            }
        }
    });

    let on_restart = move |_| {
        session.with_mut(QuizSession::restart);
        elapsed.set(0);
        info!("Tariff quiz restarted");
    };

    let quiz = session();

    if let Some(result) = quiz.result().cloned() {
        return rsx! {
            GameCompletion {
                title: "Quiz Complete!".to_string(),
                description: format!(
                    "You answered {} of {} questions correctly.",
                    result.correct_answers.unwrap_or_default(),
                    quiz.len()
                ),
                stats: result,
                on_restart,
                theme,
            }
        };
    }

    let Some(question) = quiz.question() else {
        return rsx! {
            p { class: "{theme::alert_info(theme)}", "No questions available." }
        };
    };

    let stats = quiz_stats(&quiz, elapsed());
    let selected = quiz.selected();
    let revealed = quiz.is_revealed();
    let verdict = quiz.current_is_correct();
    let is_last = quiz.is_last();
    let answer = revealed.then_some(question.correct);
    let verdict_class = match verdict {
        Some(true) => theme::alert_success(theme),
        _ => theme::alert_error(theme),
    };
    let submit_class = if selected.is_some() {
        theme::btn_primary(theme)
    } else {
        theme::btn_disabled(theme)
    };

    rsx! {
        div { class: "space-y-6",
            GameHeader {
                title: "Tariff Knowledge Quiz".to_string(),
                description: "Test your understanding of tariff classifications and trade regulations".to_string(),
                icon: IconId::Brain,
                theme,
            }

            GameStats { stats, theme }

            section { class: "{theme::card(theme)} space-y-5 p-6",
                div { class: "flex flex-wrap gap-2 text-xs",
                    span { class: "{theme::pill(theme)}", "{question.category}" }
                    span { class: "{theme::difficulty_badge(theme, question.difficulty)}", "{question.difficulty.label()}" }
                }
                h2 { class: "text-xl font-semibold {theme::text_strong(theme)}", "{question.prompt}" }

                div { class: "grid gap-3",
                    for (index, option) in question.options.iter().enumerate() {
                        button {
                            key: "{index}",
                            class: "{theme::quiz_option(theme, option_mark(index, selected, answer))}",
                            disabled: revealed,
                            onclick: move |_| session.with_mut(|quiz| quiz.select(index)),
                            span { class: "mr-3 font-mono text-xs opacity-70", "{option_letter(index)}" }
                            "{option}"
                        }
                    }
                }

                if let Some(correct) = verdict {
                    div { class: "{verdict_class}",
                        p { class: "flex items-center gap-2 font-semibold",
                            if correct {
                                Icon { id: IconId::CheckCircle }
                                "Correct!"
                            } else {
                                Icon { id: IconId::XCircle }
                                "Incorrect"
                            }
                        }
                        p { class: "mt-1 text-sm", "{question.explanation}" }
                    }
                }

                div { class: "flex justify-end",
                    if !revealed {
                        button {
                            class: "{submit_class}",
                            disabled: selected.is_none(),
                            onclick: move |_| session.with_mut(QuizSession::submit),
                            "Submit Answer"
                        }
                    } else {
                        button {
                            class: "{theme::btn_primary(theme)}",
                            onclick: move |_| {
                                let spent = elapsed();
                                session.with_mut(|quiz| quiz.advance(spent));
                                if let Some(result) = session.with(|quiz| quiz.result().cloned()) {
                                    info!(
                                        "Tariff quiz finished: score {}%, {} points in {}s",
                                        result.score, result.points_earned, result.time_spent
                                    );
                                }
                            },
                            if is_last { "Finish Quiz" } else { "Next Question" }
                        }
                    }
                }
            }
        }
    }
}

fn quiz_stats(quiz: &QuizSession, elapsed_secs: u64) -> Vec<StatDisplayItem> {
    vec![
        StatDisplayItem::new(
            "Question",
            format!("{}/{}", quiz.index() + 1, quiz.len()),
            IconId::Target,
        )
        .with_color(StatColor::Blue),
        StatDisplayItem::new("Correct", quiz.correct_so_far(), IconId::CheckCircle)
            .with_color(StatColor::Green),
        StatDisplayItem::new("Time", format_duration(elapsed_secs), IconId::Clock)
            .with_color(StatColor::Purple),
        StatDisplayItem::new(
            "Progress",
            format!("{:.0}%", quiz.progress_percent()),
            IconId::TrendingUp,
        )
        .with_color(StatColor::Orange)
        .with_progress(quiz.progress_percent()),
    ]
}

fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// `correct` is only known once the answer has been revealed.
fn option_mark(index: usize, selected: Option<usize>, correct: Option<usize>) -> OptionMark {
    match correct {
        Some(answer) if index == answer => OptionMark::Correct,
        Some(_) if selected == Some(index) => OptionMark::Wrong,
        Some(_) => OptionMark::Dimmed,
        None if selected == Some(index) => OptionMark::Selected,
        None => OptionMark::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{stats::StatValue, Theme};

    #[test]
    fn letters_follow_option_order() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
    }

    #[test]
    fn revealed_options_mark_answer_and_wrong_pick() {
        assert_eq!(option_mark(1, Some(2), Some(1)), OptionMark::Correct);
        assert_eq!(option_mark(2, Some(2), Some(1)), OptionMark::Wrong);
        assert_eq!(option_mark(0, Some(2), Some(1)), OptionMark::Dimmed);
        assert_eq!(option_mark(2, Some(2), None), OptionMark::Selected);
        assert_eq!(option_mark(0, Some(2), None), OptionMark::Idle);
    }

    #[test]
    fn light_theme_reveal_uses_light_palette() {
        let class = theme::quiz_option(Theme::Light, option_mark(1, Some(1), Some(1)));
        assert!(!class.contains("emerald-300"));
    }

    #[test]
    fn stats_track_position_and_time() {
        let quiz = QuizSession::new(&QUIZ_QUESTIONS);
        let stats = quiz_stats(&quiz, 75);
        assert_eq!(stats[0].value, StatValue::Text(format!("1/{}", QUIZ_QUESTIONS.len())));
        assert_eq!(stats[2].value, StatValue::Text("1:15".to_string()));
        assert_eq!(stats[3].bounded_progress(), Some(20.0));
    }
}
