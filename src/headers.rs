//! Header names from the htmx wire protocol.
//!
//! Lower-cased because actix-web normalises header names on both the request
//! and response maps; lookups stay case-insensitive either way.

pub(crate) mod request {
    pub(crate) const HX_REQUEST: &str = "hx-request";
    pub(crate) const HX_BOOSTED: &str = "hx-boosted";
    pub(crate) const HX_HISTORY_RESTORE_REQUEST: &str = "hx-history-restore-request";
    pub(crate) const HX_CURRENT_URL: &str = "hx-current-url";
    pub(crate) const HX_PROMPT: &str = "hx-prompt";
    pub(crate) const HX_TARGET: &str = "hx-target";
    pub(crate) const HX_TRIGGER: &str = "hx-trigger";
    pub(crate) const HX_TRIGGER_NAME: &str = "hx-trigger-name";
}

pub(crate) mod response {
    pub(crate) const HX_LOCATION: &str = "hx-location";
    pub(crate) const HX_PUSH_URL: &str = "hx-push-url";
    pub(crate) const HX_REDIRECT: &str = "hx-redirect";
    pub(crate) const HX_REFRESH: &str = "hx-refresh";
    pub(crate) const HX_REPLACE_URL: &str = "hx-replace-url";
    pub(crate) const HX_RESWAP: &str = "hx-reswap";
    pub(crate) const HX_RETARGET: &str = "hx-retarget";
    pub(crate) const HX_RESELECT: &str = "hx-reselect";
    pub(crate) const HX_TRIGGER: &str = "hx-trigger";
    pub(crate) const HX_TRIGGER_AFTER_SETTLE: &str = "hx-trigger-after-settle";
    pub(crate) const HX_TRIGGER_AFTER_SWAP: &str = "hx-trigger-after-swap";
}
