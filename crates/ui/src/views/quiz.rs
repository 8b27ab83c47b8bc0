use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{ChoiceVm, QuizIntent, QuizVm, ReportVm, start_quiz};

/// Render-ready copy of the quiz state, taken once per render.
#[derive(Clone, Debug, PartialEq)]
struct QuizScreen {
    topic_label: String,
    progress_label: String,
    question_text: String,
    choices: Vec<ChoiceVm>,
    can_go_previous: bool,
    can_go_next: bool,
    confirm_message: Option<String>,
    report: Option<ReportVm>,
}

impl From<&QuizVm> for QuizScreen {
    fn from(vm: &QuizVm) -> Self {
        Self {
            topic_label: vm.topic_label(),
            progress_label: vm.progress_label(),
            question_text: vm.question_text().to_string(),
            choices: vm.choices(),
            can_go_previous: vm.can_go_previous(),
            can_go_next: vm.can_go_next(),
            confirm_message: vm.confirm_message(),
            report: vm.report(),
        }
    }
}

#[component]
pub fn QuizView(topic: String) -> Element {
    // Keyed so that switching topics remounts the panel with a fresh session.
    rsx! {
        QuizPanel { key: "{topic}", topic: topic.clone() }
    }
}

#[component]
fn QuizPanel(topic: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_service = ctx.quiz();
    let vm = use_signal(move || start_quiz(&quiz_service, &topic));

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        if let Ok(active) = vm.write().as_mut() {
            active.dispatch(intent);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let screen = match &*vm.read() {
        Ok(active) => Ok(QuizScreen::from(active)),
        Err(err) => Err(*err),
    };

    let screen = match screen {
        Ok(screen) => screen,
        Err(err) => return render_error(err),
    };

    if let Some(report) = screen.report.clone() {
        return rsx! {
            div { class: "page quiz-page quiz-result",
                p { class: "quiz-topic", "{screen.topic_label}" }
                h2 { class: "view-title", "Results" }
                p { class: "quiz-score", "{report.summary}" }
                p { class: "quiz-percent", "{report.percent_label}" }
                ol { class: "feedback-list",
                    for (index, line) in report.lines.iter().enumerate() {
                        li { key: "{index}", class: line.class(),
                            p { class: "feedback-question", "{line.heading}" }
                            p { class: "feedback-detail", "{line.your_answer} • {line.correct}" }
                        }
                    }
                }
                div { class: "quiz-actions",
                    button {
                        id: "quiz-restart",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Restart),
                        "Restart"
                    }
                    button {
                        id: "quiz-back",
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Dashboard {});
                        },
                        "Back"
                    }
                }
            }
        };
    }

    let choice_items = screen.choices.iter().map(|choice| {
        let index = choice.index;
        rsx! {
            li {
                key: "{index}",
                class: choice.class(),
                role: "button",
                tabindex: "0",
                "aria-pressed": if choice.selected { "true" } else { "false" },
                onclick: move |_| dispatch.call(QuizIntent::Select(index)),
                onkeydown: move |evt: KeyboardEvent| {
                    let activate = match evt.key() {
                        Key::Enter => true,
                        Key::Character(value) => value == " ",
                        _ => false,
                    };
                    if activate {
                        evt.prevent_default();
                        dispatch.call(QuizIntent::Select(index));
                    }
                },
                "{choice.text}"
            }
        }
    });

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                p { class: "quiz-topic", "{screen.topic_label}" }
                p { class: "quiz-progress", "{screen.progress_label}" }
            }
            div { class: "view-divider" }
            h3 { class: "quiz-question", "{screen.question_text}" }
            ul { class: "choice-list", {choice_items} }
            div { class: "quiz-actions",
                button {
                    id: "quiz-previous",
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !screen.can_go_previous,
                    onclick: move |_| dispatch.call(QuizIntent::Previous),
                    "Previous"
                }
                button {
                    id: "quiz-next",
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !screen.can_go_next,
                    onclick: move |_| dispatch.call(QuizIntent::Next),
                    "Next"
                }
                button {
                    id: "quiz-submit",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuizIntent::Submit),
                    "Submit"
                }
                button {
                    id: "quiz-back",
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Dashboard {});
                    },
                    "Back"
                }
            }
            if let Some(message) = screen.confirm_message.clone() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| dispatch.call(QuizIntent::CancelSubmit),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "Submit quiz?" }
                        p { class: "modal-body", "{message}" }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::CancelSubmit),
                                "Keep answering"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| dispatch.call(QuizIntent::ConfirmSubmit),
                                "Submit anyway"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_error(err: ViewError) -> Element {
    rsx! {
        div { class: "page quiz-page",
            p { class: "quiz-error", "{err.message()}" }
            Link { to: Route::Dashboard {}, "Back to topics" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
