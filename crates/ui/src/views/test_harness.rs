use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{QuestionBank, Theme};
use quiz_core::time::fixed_now;
use services::{AppServices, Clock, IdentityService, QuizService, ThemeService, default_bank};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{AppHeader, DashboardView, QuizView};
use crate::vm::QuizIntent;

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn identity(&self) -> Arc<IdentityService> {
        self.services.identity()
    }

    fn theme(&self) -> Arc<ThemeService> {
        self.services.theme()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Quiz(String),
    Header,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: Option<QuizTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.quiz_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let theme = use_signal(|| Theme::Dark);
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Quiz(topic) => rsx! { QuizView { topic } },
        ViewKind::Header => rsx! { AppHeader { theme } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: AppServices,
    pub quiz_handles: Option<QuizTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Sends one intent to the mounted quiz view and re-renders.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let handles = self.quiz_handles.as_ref().expect("quiz view mounted");
        handles.dispatch().call(intent);
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_bank(view, default_bank().expect("default bank"))
}

pub fn setup_view_harness_with_bank(view: ViewKind, bank: QuestionBank) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = AppServices::new(&storage, bank, Clock::fixed(fixed_now()));
    let app = Arc::new(TestApp {
        services: services.clone(),
    });

    let quiz_handles = match &view {
        ViewKind::Quiz(_) => Some(QuizTestHandles::default()),
        _ => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        services,
        quiz_handles,
    }
}
