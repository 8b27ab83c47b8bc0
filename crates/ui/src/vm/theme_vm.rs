use quiz_core::model::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChoiceVm {
    pub theme: Theme,
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[must_use]
pub fn theme_choices(current: Theme) -> Vec<ThemeChoiceVm> {
    Theme::ALL
        .iter()
        .map(|&theme| ThemeChoiceVm {
            theme,
            value: theme.as_str(),
            label: theme.label(),
            selected: theme == current,
        })
        .collect()
}

/// Map a `<select>` value back to a theme. Unknown values mean `System`.
#[must_use]
pub fn parse_theme_choice(value: &str) -> Theme {
    value.parse().unwrap_or_else(|err| {
        tracing::error!(error = %err, "theme picker sent an unknown value");
        Theme::System
    })
}

/// Theme to apply once the stored preference arrives, or `None` when the
/// user already picked one while it was loading.
#[must_use]
pub fn loaded_theme(before_load: Theme, current: Theme, stored: Theme) -> Option<Theme> {
    (current == before_load).then_some(stored)
}
