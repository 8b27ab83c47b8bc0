use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quiz_core::model::UserIdentity;

use crate::vm::time_fmt::format_datetime;

const AVATAR_FILL: &str = "#4f46e5";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityBadgeVm {
    pub display_name: String,
    pub email: String,
    pub initials: String,
    pub avatar_uri: String,
    pub signed_in_label: String,
}

impl From<&UserIdentity> for IdentityBadgeVm {
    fn from(identity: &UserIdentity) -> Self {
        let initials = identity.initials();
        Self {
            display_name: identity.display_name().to_string(),
            email: identity.email().to_string(),
            avatar_uri: avatar_data_uri(&initials),
            initials,
            signed_in_label: format!("Signed in {}", format_datetime(identity.signed_in_at())),
        }
    }
}

/// A 64x64 square badge with the initials centred.
#[must_use]
pub fn avatar_svg(initials: &str) -> String {
    let label = if initials.is_empty() {
        "?".to_string()
    } else {
        escape_xml(initials)
    };
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='64' height='64'>\
         <rect width='100%' height='100%' fill='{AVATAR_FILL}'/>\
         <text x='50%' y='50%' dominant-baseline='middle' text-anchor='middle' \
         font-family='sans-serif' font-size='28' fill='white'>{label}</text></svg>"
    )
}

#[must_use]
pub fn avatar_data_uri(initials: &str) -> String {
    let encoded = STANDARD.encode(avatar_svg(initials));
    format!("data:image/svg+xml;base64,{encoded}")
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
