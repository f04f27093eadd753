// HTTP response utilities for the pre-rendered dashboard page
use crate::error::Result;
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use bytes::Bytes;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tokio::io::AsyncReadExt;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// The page body, encoded once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    identity: Bytes,
    brotli: Bytes,
    etag: String,
}

impl RenderedPage {
    pub async fn encode(html: String) -> Result<Self> {
        let identity = Bytes::from(html);

        let cursor = std::io::Cursor::new(identity.clone());
        let mut encoder = BrotliEncoder::new(cursor);
        let mut compressed = Vec::new();
        encoder.read_to_end(&mut compressed).await?;

        let mut hasher = DefaultHasher::new();
        identity.hash(&mut hasher);
        let etag = format!("\"{:016x}\"", hasher.finish());

        tracing::debug!(
            "Compressed page: {} → {} bytes ({:.1}% reduction)",
            identity.len(),
            compressed.len(),
            (1.0 - compressed.len() as f64 / identity.len().max(1) as f64) * 100.0
        );

        Ok(Self {
            identity,
            brotli: Bytes::from(compressed),
            etag,
        })
    }

    pub fn html(&self) -> &Bytes {
        &self.identity
    }

    pub fn compressed_len(&self) -> usize {
        self.brotli.len()
    }

    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Builds the response for a request with the given headers.
    pub fn response(
        &self,
        headers: &HeaderMap,
        debug: bool,
    ) -> std::result::Result<Response<Body>, StatusCode> {
        let cache_control = if debug { "no-store" } else { "no-cache" };

        if etag_matches(headers, &self.etag) {
            return Response::builder()
                .status(StatusCode::NOT_MODIFIED)
                .header(header::ETAG, self.etag_header()?)
                .header(header::CACHE_CONTROL, cache_control)
                .body(Body::empty())
                .map_err(|e| {
                    tracing::error!("Response build error: {}", e);
                    StatusCode::INTERNAL_SERVER_ERROR
                });
        }

        let compress = accepts_brotli(headers);
        let body = if compress {
            self.brotli.clone()
        } else {
            self.identity.clone()
        };

        let mut response_builder = Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
            .header(header::CONTENT_LENGTH, body.len())
            .header(header::ETAG, self.etag_header()?)
            .header(header::CACHE_CONTROL, cache_control)
            .header(header::VARY, "accept-encoding");

        if compress {
            response_builder = response_builder.header(header::CONTENT_ENCODING, "br");
        }

        response_builder.body(Body::from(body)).map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }

    fn etag_header(&self) -> std::result::Result<HeaderValue, StatusCode> {
        HeaderValue::from_str(&self.etag).map_err(|e| {
            tracing::error!("Invalid ETag {}: {}", self.etag, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }
}

/// True when `Accept-Encoding` lists `br` with a non-zero quality.
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| {
            s.split(',').any(|entry| {
                let mut parts = entry.split(';').map(str::trim);
                let coding = parts.next().unwrap_or_default();
                let rejected = parts.any(|p| {
                    p.strip_prefix("q=")
                        .and_then(|q| q.parse::<f32>().ok())
                        .is_some_and(|q| q == 0.0)
                });
                coding.eq_ignore_ascii_case("br") && !rejected
            })
        })
        .unwrap_or(false)
}

fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .map(|s| {
            s.split(',')
                .map(|tag| tag.trim().trim_start_matches("W/"))
                .any(|tag| tag == "*" || tag == etag)
        })
        .unwrap_or(false)
}
