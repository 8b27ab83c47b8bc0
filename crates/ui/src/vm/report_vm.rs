use quiz_core::{Report, ReportItem};

/// Placeholder shown for a question left unanswered.
const NO_ANSWER: &str = "—";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackLineVm {
    pub heading: String,
    pub your_answer: String,
    pub correct: String,
    pub is_correct: bool,
}

impl FeedbackLineVm {
    fn from_item(number: usize, item: &ReportItem) -> Self {
        Self {
            heading: format!("Q{number}: {}", item.question_text),
            your_answer: format!(
                "Your answer: {}",
                item.chosen_choice_text.as_deref().unwrap_or(NO_ANSWER)
            ),
            correct: format!("Correct: {}", item.correct_choice_text),
            is_correct: item.is_correct,
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_correct {
            "feedback feedback-correct"
        } else {
            "feedback feedback-wrong"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub summary: String,
    pub percent_label: String,
    pub lines: Vec<FeedbackLineVm>,
}

impl From<&Report> for ReportVm {
    fn from(report: &Report) -> Self {
        Self {
            summary: report.summary_line(),
            percent_label: format!("{}%", report.percent()),
            lines: report
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| FeedbackLineVm::from_item(index + 1, item))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Question, QuestionId};

    fn session_report(answers: &[Option<usize>]) -> Report {
        let questions = vec![
            Question::new(
                QuestionId::new(1),
                "Which language runs in a web browser?",
                vec!["Java".into(), "JavaScript".into()],
                1,
            )
            .unwrap(),
            Question::new(
                QuestionId::new(2),
                "What is 2 + 2?",
                vec!["3".into(), "4".into()],
                1,
            )
            .unwrap(),
        ];
        let mut session = quiz_core::QuizSession::start(questions).unwrap();
        for (index, answer) in answers.iter().enumerate() {
            if let Some(choice) = answer {
                session.select_answer(*choice).unwrap();
            }
            if index + 1 < answers.len() {
                session.go_next().unwrap();
            }
        }
        session.submit().clone()
    }

    #[test]
    fn lines_show_answers_and_styling() {
        let report = ReportVm::from(&session_report(&[Some(1), Some(0)]));
        assert_eq!(report.summary, "You scored 1 out of 2.");
        assert_eq!(report.percent_label, "50%");

        let first = &report.lines[0];
        assert_eq!(first.heading, "Q1: Which language runs in a web browser?");
        assert_eq!(first.your_answer, "Your answer: JavaScript");
        assert_eq!(first.correct, "Correct: JavaScript");
        assert_eq!(first.class(), "feedback feedback-correct");

        let second = &report.lines[1];
        assert_eq!(second.your_answer, "Your answer: 3");
        assert_eq!(second.correct, "Correct: 4");
        assert_eq!(second.class(), "feedback feedback-wrong");
    }

    #[test]
    fn unanswered_shows_dash() {
        let report = ReportVm::from(&session_report(&[None, Some(1)]));
        assert_eq!(report.lines[0].your_answer, "Your answer: —");
        assert!(!report.lines[0].is_correct);
        assert_eq!(report.summary, "You scored 1 out of 2.");
    }
}
