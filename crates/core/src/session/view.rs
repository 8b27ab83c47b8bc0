use crate::model::{ChoiceIndex, Question};

/// Position within a session, 1-based for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.position <= 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.position >= self.total
    }
}

/// One choice of the current question, with its selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceView<'a> {
    pub index: ChoiceIndex,
    pub text: &'a str,
    pub selected: bool,
}

/// Everything needed to render the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    pub progress: Progress,
    pub choices: Vec<ChoiceView<'a>>,
}

impl<'a> QuestionView<'a> {
    pub(crate) fn new(
        question: &'a Question,
        progress: Progress,
        answer: Option<ChoiceIndex>,
    ) -> Self {
        let choices = question
            .choices()
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let index = ChoiceIndex::new(idx);
                ChoiceView {
                    index,
                    text,
                    selected: answer == Some(index),
                }
            })
            .collect();

        Self {
            question,
            progress,
            choices,
        }
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        self.question.text()
    }

    /// The selected choice, if the question has been answered.
    #[must_use]
    pub fn selected(&self) -> Option<ChoiceIndex> {
        self.choices.iter().find(|c| c.selected).map(|c| c.index)
    }
}
