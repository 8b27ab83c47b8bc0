use crate::model::{ChoiceIndex, Question, QuestionId};

/// Feedback for one question of a submitted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportItem {
    pub question_id: QuestionId,
    pub question_text: String,
    pub correct_choice_text: String,
    pub chosen_choice_text: Option<String>,
    pub is_correct: bool,
}

/// Scored summary produced on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub score: usize,
    pub total: usize,
    pub items: Vec<ReportItem>,
}

impl Report {
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("You scored {} out of {}.", self.score, self.total)
    }

    /// Score as a whole percentage, rounded half up.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.score * 200 + self.total) / (self.total * 2);
        u32::try_from(pct).unwrap_or(100)
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.total - self.score
    }
}

/// Score `answers` against `questions` by exact index match.
///
/// `answers` is paired with `questions` positionally; an unanswered slot never
/// equals a correct index.
#[must_use]
pub fn score(questions: &[Question], answers: &[Option<ChoiceIndex>]) -> Report {
    let items: Vec<ReportItem> = questions
        .iter()
        .zip(answers)
        .map(|(question, &answer)| {
            let is_correct = answer == Some(question.correct());
            ReportItem {
                question_id: question.id(),
                question_text: question.text().to_owned(),
                correct_choice_text: question.correct_text().to_owned(),
                chosen_choice_text: answer
                    .and_then(|idx| question.choice(idx))
                    .map(str::to_owned),
                is_correct,
            }
        })
        .collect();

    let score = items.iter().filter(|item| item.is_correct).count();
    Report {
        score,
        total: questions.len(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, correct: usize) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Q{id}"),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
        )
        .unwrap()
    }

    #[test]
    fn score_counts_exact_matches_only() {
        let questions = vec![question(1, 0), question(2, 3), question(3, 1)];
        let answers = vec![
            Some(ChoiceIndex::new(0)),
            None,
            Some(ChoiceIndex::new(2)),
        ];

        let report = score(&questions, &answers);
        assert_eq!(report.score, 1);
        assert_eq!(report.total, 3);
        assert_eq!(report.incorrect(), 2);

        assert!(report.items[0].is_correct);
        assert_eq!(report.items[1].chosen_choice_text, None);
        assert!(!report.items[1].is_correct);
        assert_eq!(report.items[2].chosen_choice_text.as_deref(), Some("c"));
        assert_eq!(report.items[2].correct_choice_text, "b");
    }

    #[test]
    fn summary_line_and_percent() {
        let questions = vec![question(1, 0), question(2, 0), question(3, 0)];
        let answers = vec![Some(ChoiceIndex::new(0)), Some(ChoiceIndex::new(0)), None];
        let report = score(&questions, &answers);
        assert_eq!(report.summary_line(), "You scored 2 out of 3.");
        assert_eq!(report.percent(), 67);
    }

    #[test]
    fn empty_report_has_zero_percent() {
        let report = score(&[], &[]);
        assert_eq!(report.percent(), 0);
        assert_eq!(report.summary_line(), "You scored 0 out of 0.");
    }
}
