use dioxus::prelude::*;
use dioxus_router::Link;
use quiz_core::model::Theme;
use services::IdentityServiceError;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{IdentityBadgeVm, parse_theme_choice, theme_choices};

#[component]
pub fn AppHeader(theme: Signal<Theme>) -> Element {
    rsx! {
        header { class: "app-header",
            Link { class: "app-title", to: Route::Dashboard {}, "Topic Quiz" }
            div { class: "app-header-actions",
                ThemePicker { theme }
                IdentityBadge {}
            }
        }
    }
}

#[component]
fn ThemePicker(theme: Signal<Theme>) -> Element {
    let ctx = use_context::<AppContext>();
    let theme_service = ctx.theme();
    let choices = theme_choices(theme());

    rsx! {
        label { class: "theme-picker",
            span { class: "theme-picker-label", "Theme" }
            select {
                id: "theme-select",
                value: "{theme}",
                onchange: move |evt: FormEvent| {
                    let selected = parse_theme_choice(&evt.value());
                    let mut theme = theme;
                    theme.set(selected);
                    let service = theme_service.clone();
                    spawn(async move {
                        if let Err(err) = service.save(selected).await {
                            tracing::error!(error = %err, "cannot save theme");
                        }
                    });
                },
                for choice in choices {
                    option {
                        key: "{choice.value}",
                        value: choice.value,
                        selected: choice.selected,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn IdentityBadge() -> Element {
    let ctx = use_context::<AppContext>();
    let identity_service = ctx.identity();
    let mut show_sign_in = use_signal(|| false);
    let email = use_signal(String::new);
    let sign_in_error = use_signal(|| None::<String>);

    let service_for_resource = identity_service.clone();
    let resource = use_resource(move || {
        let service = service_for_resource.clone();
        async move {
            let current = service.current().await.map_err(|err| {
                tracing::error!(error = %err, "cannot load identity");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(current.as_ref().map(IdentityBadgeVm::from))
        }
    });
    let state = view_state_from_resource(&resource);

    let sign_in = {
        let service = identity_service.clone();
        use_callback(move |value: String| {
            let service = service.clone();
            let mut show_sign_in = show_sign_in;
            let mut email = email;
            let mut sign_in_error = sign_in_error;
            let mut resource = resource;
            spawn(async move {
                match service.sign_in(&value).await {
                    Ok(_) => {
                        show_sign_in.set(false);
                        email.set(String::new());
                        sign_in_error.set(None);
                        resource.restart();
                    }
                    Err(IdentityServiceError::Identity(err)) => {
                        sign_in_error.set(Some(err.to_string()));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "sign-in failed");
                        sign_in_error.set(Some(ViewError::Unknown.message().to_string()));
                    }
                }
            });
        })
    };

    let sign_out = {
        let service = identity_service.clone();
        use_callback(move |()| {
            let service = service.clone();
            let mut resource = resource;
            spawn(async move {
                if let Err(err) = service.sign_out().await {
                    tracing::error!(error = %err, "sign-out failed");
                }
                resource.restart();
            });
        })
    };

    rsx! {
        div { class: "identity",
            match state {
                ViewState::Ready(Some(badge)) => rsx! {
                    img {
                        class: "identity-avatar",
                        src: "{badge.avatar_uri}",
                        alt: "{badge.initials}",
                        width: "32",
                        height: "32",
                    }
                    span { class: "identity-name", title: "{badge.signed_in_label}", "{badge.display_name}" }
                    button {
                        id: "sign-out",
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| sign_out.call(()),
                        "Sign out"
                    }
                },
                ViewState::Ready(None) => rsx! {
                    button {
                        id: "sign-in",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| show_sign_in.set(true),
                        "Sign in"
                    }
                },
                ViewState::Idle | ViewState::Loading => rsx! {
                    span { class: "identity-loading", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    span { class: "identity-error", "{err.message()}" }
                },
            }
            if show_sign_in() {
                SignInModal {
                    email: email(),
                    error: sign_in_error(),
                    on_input: move |value: String| {
                        let mut email = email;
                        email.set(value);
                    },
                    on_submit: move |()| sign_in.call(email()),
                    on_cancel: move |()| {
                        let mut sign_in_error = sign_in_error;
                        sign_in_error.set(None);
                        show_sign_in.set(false);
                    },
                }
            }
        }
    }
}

#[component]
fn SignInModal(
    email: String,
    error: Option<String>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Sign in" }
                p { class: "modal-body", "Enter any email. Nothing is verified." }
                input {
                    id: "sign-in-email",
                    class: "modal-input",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    oninput: move |evt| on_input.call(evt.value()),
                    onkeydown: move |evt| match evt.data.key() {
                        Key::Enter => {
                            evt.prevent_default();
                            on_submit.call(());
                        }
                        Key::Escape => on_cancel.call(()),
                        _ => {}
                    },
                }
                if let Some(message) = error.as_ref() {
                    p { class: "modal-error", "{message}" }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_submit.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
