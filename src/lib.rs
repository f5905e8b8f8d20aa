//! # actix-hx
//!
//! `actix-hx` bridges htmx and Actix Web. It reads the `HX-*` request
//! headers into a typed per-request context and lets handlers control htmx
//! behaviour through response headers (redirect, refresh, swap, retarget,
//! event triggers) without touching the header map themselves.
//!
//! Register [`HxMiddleware`] on your `App` and take the [`Hx`] extractor in
//! your handlers:
//!
//! ```no_run
//! use actix_hx::{Hx, HxMiddleware};
//! use actix_web::{web, App, HttpResponse, HttpServer, Responder};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| {
//!         App::new()
//!             .wrap(HxMiddleware::new())
//!             .route("/", web::get().to(index))
//!     })
//!     .bind("127.0.0.1:8080")?
//!     .run()
//!     .await
//! }
//!
//! async fn index(hx: Hx) -> impl Responder {
//!     if hx.is_htmx() {
//!         // htmx request - return partial HTML
//!         hx.trigger_event("contentRefreshed");
//!         HttpResponse::Ok().body("<div>Partial content</div>")
//!     } else {
//!         // regular request - return the full page
//!         HttpResponse::Ok().body("<html><body><div>Full page</div></body></html>")
//!     }
//! }
//! ```
//!
//! Building with `HxMiddleware::new().disable_cache()` additionally answers
//! every htmx request with `Cache-Control: no-cache, no-store,
//! must-revalidate`, so partial responses never end up in shared caches.

mod headers;
mod hx;
mod middleware;
mod trigger;

pub use self::{
    hx::{Hx, SwapType},
    middleware::HxMiddleware,
    trigger::TriggerEvent,
};
