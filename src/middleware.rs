use crate::headers::request;
use crate::Hx;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL};
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use log::warn;
use std::future::{ready, Ready};

const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Middleware that injects an [`Hx`] context into every wrapped route and
/// applies the response headers queued by handler code.
///
/// # Example
///
/// ```no_run
/// use actix_hx::{Hx, HxMiddleware};
/// use actix_web::{web, App, HttpResponse, HttpServer, Responder};
///
/// #[actix_web::main]
/// async fn main() -> std::io::Result<()> {
///     HttpServer::new(|| {
///         App::new()
///             .wrap(HxMiddleware::new().disable_cache())
///             .route("/", web::get().to(index))
///     })
///     .bind("127.0.0.1:8080")?
///     .run()
///     .await
/// }
///
/// async fn index(hx: Hx) -> impl Responder {
///     if hx.is_htmx() {
///         hx.push_url("/partial");
///         HttpResponse::Ok().body("<div>Partial content</div>")
///     } else {
///         HttpResponse::Ok().body("<html><body><div>Full page</div></body></html>")
///     }
/// }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HxMiddleware {
    disable_cache: bool,
}

impl HxMiddleware {
    pub fn new() -> Self {
        HxMiddleware::default()
    }

    /// Send `Cache-Control: no-cache, no-store, must-revalidate` on every
    /// htmx request. A cache policy the handler set itself is left alone.
    pub fn disable_cache(mut self) -> Self {
        self.disable_cache = true;
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for HxMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = HxService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HxService {
            service,
            disable_cache: self.disable_cache,
        }))
    }
}

#[doc(hidden)]
#[non_exhaustive]
pub struct HxService<S> {
    service: S,
    disable_cache: bool,
}

impl<S, B> Service<ServiceRequest> for HxService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let hx = Hx::new(&req);

        req.extensions_mut().insert(hx);

        let disable_cache = self.disable_cache;
        let fut = self.service.call(req);

        Box::pin(async move {
            let res: ServiceResponse<B> = fut.await?;

            let (req, mut res) = res.into_parts();

            if let Some(hx) = req.extensions().get::<Hx>() {
                for (name, value) in hx.response_headers() {
                    match name.parse::<HeaderName>() {
                        Ok(name) => match HeaderValue::from_str(&value) {
                            Ok(value) => {
                                res.headers_mut().insert(name, value);
                            }
                            Err(_) => {
                                warn!("failed to parse {} header value: {}", name, value)
                            }
                        },
                        Err(_) => warn!("failed to parse header name: {}", name),
                    }
                }

                if let Some(status) = hx.response_status() {
                    *res.status_mut() = status;
                }
            }

            if disable_cache
                && is_hx_request(req.headers())
                && !res.headers().contains_key(CACHE_CONTROL)
            {
                res.headers_mut()
                    .insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
            }

            Ok(ServiceResponse::new(req, res))
        })
    }
}

/// Same check [`Hx::request`] makes, re-read from the live request headers.
fn is_hx_request(headers: &HeaderMap) -> bool {
    headers
        .get(request::HX_REQUEST)
        .map(|value| value.as_bytes() == b"true")
        .unwrap_or(false)
}
