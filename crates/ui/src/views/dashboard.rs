use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_topic_cards;

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = map_topic_cards(&ctx.quiz().topics());

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Choose a topic" }
                p { class: "view-subtitle", "Answer at your own pace, then submit to see your score." }
            }
            div { class: "view-divider" }
            if cards.is_empty() {
                p { class: "dashboard-empty", "No topics available." }
            }
            ul { class: "topic-grid",
                for card in cards {
                    li { key: "{card.name}", class: "topic-card",
                        Link {
                            class: "topic-card-link",
                            to: Route::Quiz { topic: card.name.clone() },
                            span { class: "topic-card-avatar", "{card.avatar}" }
                            span { class: "topic-card-name", "{card.name}" }
                            span { class: "topic-card-count", "{card.count_label}" }
                        }
                    }
                }
            }
        }
    }
}
