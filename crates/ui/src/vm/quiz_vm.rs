use quiz_core::SessionError;
use services::{ActiveQuiz, QuizService, QuizServiceError};

use crate::views::ViewError;
use crate::vm::report_vm::ReportVm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Next,
    Previous,
    Submit,
    ConfirmSubmit,
    CancelSubmit,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

impl ChoiceVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.selected {
            "choice choice--selected"
        } else {
            "choice"
        }
    }
}

/// Drives one `ActiveQuiz` from UI intents and tracks the submit
/// confirmation step.
#[derive(Debug)]
pub struct QuizVm {
    quiz: ActiveQuiz,
    confirming: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: ActiveQuiz) -> Self {
        Self {
            quiz,
            confirming: false,
        }
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        self.quiz.topic()
    }

    #[must_use]
    pub fn topic_label(&self) -> String {
        format!("Topic: {}", self.quiz.topic())
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        let progress = self.quiz.session().progress();
        format!("Question {} of {}", progress.position, progress.total)
    }

    #[must_use]
    pub fn question_text(&self) -> &str {
        let session = self.quiz.session();
        session.questions()[session.current_index()].text()
    }

    #[must_use]
    pub fn choices(&self) -> Vec<ChoiceVm> {
        self.quiz
            .session()
            .current_question()
            .choices
            .iter()
            .map(|choice| ChoiceVm {
                index: choice.index.value(),
                text: choice.text.to_string(),
                selected: choice.selected,
            })
            .collect()
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.quiz.session().progress().is_first()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.quiz.session().progress().is_last()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.quiz.session().is_submitted()
    }

    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    #[must_use]
    pub fn confirm_message(&self) -> Option<String> {
        if !self.confirming {
            return None;
        }
        let unanswered = self.quiz.session().unanswered_count();
        Some(format!(
            "You have {unanswered} unanswered question(s). Submit anyway?"
        ))
    }

    #[must_use]
    pub fn report(&self) -> Option<ReportVm> {
        self.quiz.session().report().map(ReportVm::from)
    }

    /// Applies one intent. While the submit confirmation is open only the
    /// confirm, cancel and restart intents are accepted.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        if self.confirming
            && matches!(
                intent,
                QuizIntent::Select(_) | QuizIntent::Next | QuizIntent::Previous
            )
        {
            tracing::debug!(topic = self.topic(), ?intent, "ignored quiz intent while confirming");
            return;
        }
        match intent {
            QuizIntent::Select(choice) => {
                let outcome = self.quiz.session_mut().select_answer(choice).map(|_| ());
                self.note(intent, outcome);
            }
            QuizIntent::Next => {
                let outcome = self.quiz.session_mut().go_next().map(|_| ());
                self.note(intent, outcome);
            }
            QuizIntent::Previous => {
                let outcome = self.quiz.session_mut().go_previous().map(|_| ());
                self.note(intent, outcome);
            }
            QuizIntent::Submit => {
                if self.is_submitted() {
                    return;
                }
                if self.quiz.session().unanswered_count() > 0 {
                    self.confirming = true;
                } else {
                    self.quiz.submit();
                }
            }
            QuizIntent::ConfirmSubmit => {
                self.confirming = false;
                self.quiz.submit();
            }
            QuizIntent::CancelSubmit => {
                self.confirming = false;
            }
            QuizIntent::Restart => {
                self.confirming = false;
                self.quiz.restart();
            }
        }
    }

    fn note(&self, intent: QuizIntent, outcome: Result<(), SessionError>) {
        match outcome {
            Ok(()) => {}
            Err(err @ SessionError::InvalidChoice { .. }) => {
                tracing::error!(topic = self.topic(), ?intent, error = %err, "rejected quiz intent");
            }
            Err(err) => {
                tracing::debug!(topic = self.topic(), ?intent, error = %err, "ignored quiz intent");
            }
        }
    }
}

/// # Errors
///
/// Returns `ViewError::UnknownTopic` when the bank has no such topic.
/// Returns `ViewError::Unknown` for other failures.
pub fn start_quiz(service: &QuizService, topic: &str) -> Result<QuizVm, ViewError> {
    match service.start_quiz(topic) {
        Ok(quiz) => Ok(QuizVm::new(quiz)),
        Err(QuizServiceError::UnknownTopic(_)) => Err(ViewError::UnknownTopic),
        Err(_) => Err(ViewError::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use services::default_bank;

    fn vm(topic: &str) -> QuizVm {
        let service = QuizService::new(Arc::new(default_bank().unwrap()));
        start_quiz(&service, topic).unwrap()
    }

    #[test]
    fn labels_track_position() {
        let mut vm = vm("General");
        assert_eq!(vm.topic_label(), "Topic: General");
        assert_eq!(vm.progress_label(), "Question 1 of 3");
        assert!(!vm.can_go_previous());
        assert!(vm.can_go_next());

        vm.dispatch(QuizIntent::Next);
        vm.dispatch(QuizIntent::Next);
        assert_eq!(vm.progress_label(), "Question 3 of 3");
        assert!(!vm.can_go_next());
        assert_eq!(
            vm.question_text(),
            "Which HTML tag is used to define an unordered list?"
        );
    }

    #[test]
    fn selecting_marks_the_choice() {
        let mut vm = vm("Web");
        vm.dispatch(QuizIntent::Select(1));
        let choices = vm.choices();
        assert_eq!(choices.len(), 4);
        assert!(choices[1].selected);
        assert_eq!(choices[1].class(), "choice choice--selected");
        assert_eq!(choices[0].class(), "choice");
    }

    #[test]
    fn invalid_choice_leaves_state_untouched() {
        let mut vm = vm("Web");
        vm.dispatch(QuizIntent::Select(2));
        vm.dispatch(QuizIntent::Select(9));
        let choices = vm.choices();
        assert!(choices[2].selected);
        assert_eq!(choices.iter().filter(|c| c.selected).count(), 1);
    }

    #[test]
    fn submit_with_gaps_asks_first() {
        let mut vm = vm("General");
        vm.dispatch(QuizIntent::Select(3));
        vm.dispatch(QuizIntent::Submit);

        assert!(!vm.is_submitted());
        assert_eq!(
            vm.confirm_message().as_deref(),
            Some("You have 2 unanswered question(s). Submit anyway?")
        );

        vm.dispatch(QuizIntent::CancelSubmit);
        assert!(vm.confirm_message().is_none());
        assert!(!vm.is_submitted());

        vm.dispatch(QuizIntent::Submit);
        vm.dispatch(QuizIntent::ConfirmSubmit);
        assert!(vm.is_submitted());
        let report = vm.report().unwrap();
        assert_eq!(report.summary, "You scored 1 out of 3.");
        assert_eq!(report.lines[1].your_answer, "Your answer: —");
    }

    #[test]
    fn confirmation_blocks_answer_and_navigation() {
        let mut vm = vm("General");
        vm.dispatch(QuizIntent::Select(3));
        vm.dispatch(QuizIntent::Submit);
        assert!(vm.is_confirming());

        vm.dispatch(QuizIntent::Next);
        vm.dispatch(QuizIntent::Select(0));
        vm.dispatch(QuizIntent::Previous);

        assert_eq!(vm.progress_label(), "Question 1 of 3");
        assert!(vm.choices()[3].selected);
        assert!(!vm.choices()[0].selected);
        assert_eq!(
            vm.confirm_message().as_deref(),
            Some("You have 2 unanswered question(s). Submit anyway?")
        );

        vm.dispatch(QuizIntent::CancelSubmit);
        vm.dispatch(QuizIntent::Next);
        assert_eq!(vm.progress_label(), "Question 2 of 3");
    }

    #[test]
    fn complete_answers_submit_immediately() {
        let mut vm = vm("Science");
        vm.dispatch(QuizIntent::Select(1));
        vm.dispatch(QuizIntent::Next);
        vm.dispatch(QuizIntent::Select(0));
        vm.dispatch(QuizIntent::Submit);

        assert!(!vm.is_confirming());
        assert_eq!(vm.report().unwrap().summary, "You scored 2 out of 2.");
    }

    #[test]
    fn intents_after_submit_do_not_change_report() {
        let mut vm = vm("Science");
        vm.dispatch(QuizIntent::Submit);
        vm.dispatch(QuizIntent::ConfirmSubmit);
        let before = vm.report();

        vm.dispatch(QuizIntent::Select(1));
        vm.dispatch(QuizIntent::Previous);
        vm.dispatch(QuizIntent::Submit);
        assert_eq!(vm.report(), before);
        assert!(!vm.is_confirming());
    }

    #[test]
    fn restart_clears_everything() {
        let mut vm = vm("Web");
        vm.dispatch(QuizIntent::Select(1));
        vm.dispatch(QuizIntent::Next);
        vm.dispatch(QuizIntent::Submit);
        vm.dispatch(QuizIntent::ConfirmSubmit);

        vm.dispatch(QuizIntent::Restart);
        assert!(!vm.is_submitted());
        assert!(vm.report().is_none());
        assert_eq!(vm.progress_label(), "Question 1 of 2");
        assert!(vm.choices().iter().all(|c| !c.selected));
    }

    #[test]
    fn unknown_topic_maps_to_view_error() {
        let service = QuizService::new(Arc::new(default_bank().unwrap()));
        let err = start_quiz(&service, "History").unwrap_err();
        assert_eq!(err, ViewError::UnknownTopic);
    }
}
