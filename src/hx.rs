use actix_web::dev::{Payload, ServiceRequest};
use actix_web::error::Error;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use indexmap::IndexMap;
use log::warn;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::headers::{request, response};
use crate::trigger::TriggerEvent;

/// Status code htmx interprets as "stop polling this endpoint".
const STOP_POLLING: u16 = 286;

/// Per-request htmx context.
///
/// Reads the `HX-*` request headers into typed accessors and queues `HX-*`
/// response headers (or a response status) for [`HxMiddleware`] to apply once
/// the handler has run. Obtain it as an extractor argument; every clone taken
/// during one request shares the same queued state.
///
/// [`HxMiddleware`]: crate::HxMiddleware
#[derive(Clone)]
pub struct Hx {
    inner: Rc<RefCell<HxInner>>,
    /// `true` when the `HX-Request` header is exactly `"true"`.
    pub request: bool,
    /// `true` when the request came from an element using `hx-boost`.
    pub boosted: bool,
    /// `true` when the request restores history after a local cache miss.
    pub history_restore_request: bool,
}

/// Swap strategy for the `HX-Reswap` response header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapType {
    InnerHtml,
    OuterHtml,
    BeforeBegin,
    AfterBegin,
    BeforeEnd,
    AfterEnd,
    Delete,
    None,
}

impl SwapType {
    /// The literal htmx expects on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SwapType::InnerHtml => "innerHTML",
            SwapType::OuterHtml => "outerHTML",
            SwapType::BeforeBegin => "beforebegin",
            SwapType::AfterBegin => "afterbegin",
            SwapType::BeforeEnd => "beforeend",
            SwapType::AfterEnd => "afterend",
            SwapType::Delete => "delete",
            SwapType::None => "none",
        }
    }
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct HxInner {
    request_headers: HeaderMap,
    response_headers: IndexMap<String, String>,
    status: Option<StatusCode>,
}

impl HxInner {
    fn new(req: &HttpRequest) -> HxInner {
        HxInner {
            request_headers: req.headers().clone(),
            response_headers: IndexMap::new(),
            status: None,
        }
    }

    /// Exact match against the literal `true`; any other value, a missing
    /// header, or non-UTF-8 bytes all read as `false`.
    fn bool_header(&self, name: &str) -> bool {
        self.request_headers
            .get(name)
            .map(|value| value.as_bytes() == b"true")
            .unwrap_or(false)
    }

    fn string_header(&self, name: &str) -> String {
        self.request_headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }
}

impl Hx {
    fn from_inner(inner: Rc<RefCell<HxInner>>) -> Hx {
        let request = inner.borrow().bool_header(request::HX_REQUEST);
        let boosted = inner.borrow().bool_header(request::HX_BOOSTED);
        let history_restore_request = inner
            .borrow()
            .bool_header(request::HX_HISTORY_RESTORE_REQUEST);

        Hx {
            inner,
            request,
            boosted,
            history_restore_request,
        }
    }

    pub(crate) fn new(req: &ServiceRequest) -> Hx {
        let inner = Rc::new(RefCell::new(HxInner::new(req.request())));
        Hx::from_inner(inner)
    }

    /// Whether this request was issued by htmx, either directly or boosted.
    ///
    /// Re-reads the request header map on every call rather than reusing the
    /// snapshot fields.
    pub fn is_htmx(&self) -> bool {
        let inner = self.inner.borrow();
        inner.bool_header(request::HX_REQUEST) || inner.bool_header(request::HX_BOOSTED)
    }

    /// The current URL of the browser, or an empty string.
    pub fn current_url(&self) -> String {
        self.inner.borrow().string_header(request::HX_CURRENT_URL)
    }

    /// The user's response to an `hx-prompt`, or an empty string.
    pub fn prompt(&self) -> String {
        self.inner.borrow().string_header(request::HX_PROMPT)
    }

    /// The id of the target element, or an empty string.
    pub fn target(&self) -> String {
        self.inner.borrow().string_header(request::HX_TARGET)
    }

    /// The id of the triggering element, or an empty string.
    pub fn trigger(&self) -> String {
        self.inner.borrow().string_header(request::HX_TRIGGER)
    }

    /// The name of the triggering element, or an empty string.
    pub fn trigger_name(&self) -> String {
        self.inner.borrow().string_header(request::HX_TRIGGER_NAME)
    }

    /// Client-side navigation to `url` without a full page reload.
    pub fn set_location(&self, url: impl Into<String>) {
        self.set_response_header(response::HX_LOCATION, url.into());
    }

    /// Push `url` onto the browser history stack.
    pub fn push_url(&self, url: impl Into<String>) {
        self.set_response_header(response::HX_PUSH_URL, url.into());
    }

    /// Client-side redirect to `url` with a full page load.
    pub fn redirect(&self, url: impl Into<String>) {
        self.set_response_header(response::HX_REDIRECT, url.into());
    }

    /// Ask the client to do a full refresh of the page.
    pub fn refresh(&self) {
        self.set_response_header(response::HX_REFRESH, "true".to_string());
    }

    /// Replace the current URL in the location bar.
    pub fn replace_url(&self, url: impl Into<String>) {
        self.set_response_header(response::HX_REPLACE_URL, url.into());
    }

    /// Override how the client swaps the response into the page.
    pub fn reswap(&self, swap_type: SwapType) {
        self.set_response_header(response::HX_RESWAP, swap_type.as_str().to_string());
    }

    /// Retarget the content update to a different element.
    pub fn retarget(&self, selector: impl Into<String>) {
        self.set_response_header(response::HX_RETARGET, selector.into());
    }

    /// Choose which part of the response gets swapped in.
    pub fn reselect(&self, selector: impl Into<String>) {
        self.set_response_header(response::HX_RESELECT, selector.into());
    }

    /// Trigger client-side events via the `HX-Trigger` response header.
    ///
    /// Accepts a bare event name (sent verbatim) or a [`TriggerEvent`]
    /// payload map (sent as JSON with keys in insertion order).
    pub fn trigger_event(&self, event: impl Into<TriggerEvent>) {
        match event.into().into_header_value() {
            Ok(value) => self.set_response_header(response::HX_TRIGGER, value),
            Err(err) => warn!("failed to serialize HX-Trigger payload: {}", err),
        }
    }

    /// Mark the response as triggering events after the settle phase.
    pub fn trigger_event_after_settle(&self) {
        self.set_response_header(response::HX_TRIGGER_AFTER_SETTLE, "true".to_string());
    }

    /// Mark the response as triggering events after the swap phase.
    pub fn trigger_event_after_swap(&self) {
        self.set_response_header(response::HX_TRIGGER_AFTER_SWAP, "true".to_string());
    }

    /// Answer a polling request with status 286, telling htmx to stop.
    pub fn stop_polling(&self) {
        self.inner.borrow_mut().status = StatusCode::from_u16(STOP_POLLING).ok();
    }

    fn set_response_header(&self, name: &str, value: String) {
        self.inner
            .borrow_mut()
            .response_headers
            .insert(name.to_string(), value);
    }

    pub(crate) fn response_headers(&self) -> IndexMap<String, String> {
        self.inner.borrow().response_headers.clone()
    }

    pub(crate) fn response_status(&self) -> Option<StatusCode> {
        self.inner.borrow().status
    }
}

impl FromRequest for Hx {
    type Error = Error;
    type Future = Ready<Result<Hx, Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(hx) = req.extensions().get::<Hx>() {
            return ready(Ok(hx.clone()));
        }

        let inner = Rc::new(RefCell::new(HxInner::new(req)));

        ready(Ok(Hx::from_inner(inner)))
    }
}

#[cfg(test)]
mod tests {
    use super::SwapType;

    #[test]
    fn swap_types_use_wire_literals() {
        let cases = [
            (SwapType::InnerHtml, "innerHTML"),
            (SwapType::OuterHtml, "outerHTML"),
            (SwapType::BeforeBegin, "beforebegin"),
            (SwapType::AfterBegin, "afterbegin"),
            (SwapType::BeforeEnd, "beforeend"),
            (SwapType::AfterEnd, "afterend"),
            (SwapType::Delete, "delete"),
            (SwapType::None, "none"),
        ];

        for (swap, expected) in cases {
            assert_eq!(swap.as_str(), expected);
            assert_eq!(swap.to_string(), expected);
        }
    }
}
