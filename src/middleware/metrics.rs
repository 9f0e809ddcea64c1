// src/middleware/metrics.rs
use std::future::{ready, Ready};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

use crate::metrics::HttpMetrics;

/// `path` label for requests that matched no route.
pub const UNMATCHED_PATH: &str = "unmatched";

/// `method` label for anything outside the standard HTTP methods.
pub const OTHER_METHOD: &str = "OTHER";

/// Set on responses produced by the app's default service.
#[derive(Debug, Clone, Copy)]
pub struct UnmatchedRoute;

/// Fallback for requests no route accepted, method guards included.
pub async fn unmatched_route() -> HttpResponse {
    let mut response = HttpResponse::NotFound().finish();
    response.extensions_mut().insert(UnmatchedRoute);
    response
}

const STANDARD_METHODS: [&str; 9] = [
    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "CONNECT", "TRACE",
];

pub fn method_label(method: &Method) -> &'static str {
    STANDARD_METHODS
        .iter()
        .copied()
        .find(|standard| *standard == method.as_str())
        .unwrap_or(OTHER_METHOD)
}

/// Counts every finished request by method, final status code and route pattern.
/// The response itself is passed through untouched.
pub struct RequestMetrics {
    metrics: HttpMetrics,
}

impl RequestMetrics {
    pub fn new(metrics: HttpMetrics) -> Self {
        Self { metrics }
    }
}

// Middleware factory
impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestMetricsService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsService {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

pub struct RequestMetricsService<S> {
    service: S,
    metrics: HttpMetrics,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsService<S>
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
        let method = method_label(req.method());
        // The request is gone if the inner service fails, so resolve the pattern up front too
        let requested_pattern = req.match_pattern();
        let metrics = self.metrics.clone();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            // match_pattern() ignores method guards, so the default service marker decides
            let (status, pattern) = match &result {
                Ok(res) if res.response().extensions().contains::<UnmatchedRoute>() => {
                    (res.status(), None)
                }
                Ok(res) => (res.status(), res.request().match_pattern().or(requested_pattern)),
                Err(e) => (e.as_response_error().status_code(), requested_pattern),
            };
            let path = pattern.unwrap_or_else(|| UNMATCHED_PATH.to_string());
            metrics.record_request(method, status.as_u16(), &path);

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_methods_keep_their_name() {
        assert_eq!(method_label(&Method::GET), "GET");
        assert_eq!(method_label(&Method::DELETE), "DELETE");
        assert_eq!(method_label(&Method::OPTIONS), "OPTIONS");
    }

    #[test]
    fn test_extension_methods_share_one_label() {
        for raw in ["BREW", "PROPFIND", "get"] {
            let method = Method::from_bytes(raw.as_bytes()).unwrap();
            assert_eq!(method_label(&method), OTHER_METHOD);
        }
    }

    #[actix_web::test]
    async fn test_unmatched_route_is_marked() {
        let response = unmatched_route().await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        assert!(response.extensions().contains::<UnmatchedRoute>());
    }
}
