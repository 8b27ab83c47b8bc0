use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use quiz_core::model::Theme;

use crate::context::AppContext;
use crate::views::{AppHeader, DashboardView, QuizView};
use crate::vm::loaded_theme;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/quiz/:topic", QuizView)] Quiz { topic: String },
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let theme = use_signal(Theme::default);

    let theme_service = ctx.theme();
    let _theme_loaded = use_resource(move || {
        let theme_service = theme_service.clone();
        let mut theme = theme;
        async move {
            let before_load = *theme.peek();
            match theme_service.load().await {
                Ok(stored) => {
                    let current = *theme.peek();
                    if let Some(next) = loaded_theme(before_load, current, stored) {
                        theme.set(next);
                    }
                }
                Err(err) => tracing::warn!(error = %err, "cannot load theme"),
            }
        }
    });

    rsx! {
        div { class: "app", "data-theme": "{theme}",
            AppHeader { theme }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
