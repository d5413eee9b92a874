//! Per-request correlation identifier.
//!
//! The middleware stores a fresh UUID in the request extensions; handlers
//! receive it through the [`RequestId`] extractor and use it only in log
//! records. It is never written to the response.

use std::convert::Infallible;
use std::fmt;

use axum::async_trait;
use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl Default for RequestId {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Attach a new [`RequestId`] to every inbound request.
pub async fn attach_request_id(mut req: Request, next: Next) -> Response {
    req.extensions_mut().insert(RequestId::new());
    next.run(req).await
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Routers built without the middleware still get a usable id.
        Ok(parts.extensions.get::<RequestId>().copied().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    #[tokio::test]
    async fn extractor_reads_extension() {
        let id = RequestId::new();
        let (mut parts, _) = HttpRequest::builder().uri("/").body(()).unwrap().into_parts();
        parts.extensions.insert(id);
        let got = RequestId::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(got, id);
    }

    #[tokio::test]
    async fn extractor_falls_back_to_fresh_id() {
        let (mut parts, _) = HttpRequest::builder().uri("/").body(()).unwrap().into_parts();
        let a = RequestId::from_request_parts(&mut parts, &()).await.unwrap();
        let b = RequestId::from_request_parts(&mut parts, &()).await.unwrap();
        assert_ne!(a, b);
    }
}
