// Chunked NDJSON streaming utilities
use crate::domain::fragment::Fragment;
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

/// Create a chunked NDJSON streaming response, one fragment per line
pub fn chunked_json_stream<S>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = Fragment> + Send + 'static,
{
    let byte_stream = stream.then(move |fragment| async move { serialize_chunk(&fragment, compress).await });

    // Chunks are compressed individually, so no Content-Encoding header
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// One fragment as a JSON line. Compressed chunks are prefixed with their
/// length (4 bytes, big-endian) since Brotli output may contain newlines.
async fn serialize_chunk(fragment: &Fragment, compress: bool) -> Result<Bytes, std::io::Error> {
    let mut line = serde_json::to_vec(fragment).map_err(std::io::Error::other)?;
    line.push(b'\n');

    if !compress {
        return Ok(Bytes::from(line));
    }

    let payload = brotli_compress(line).await?;
    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(payload.len() as u32);
    chunk.put_slice(&payload);
    Ok(chunk.freeze())
}

/// Stream `current` if any, then every fragment published after
/// subscription in order. A receiver that lags skips ahead and keeps going.
pub fn fragment_stream(
    current: Option<Fragment>,
    rx: broadcast::Receiver<Fragment>,
) -> impl Stream<Item = Fragment> + Send + 'static {
    let mut updates = BroadcastStream::new(rx);
    async_stream::stream! {
        if let Some(fragment) = current {
            yield fragment;
        }
        while let Some(next) = updates.next().await {
            match next {
                Ok(fragment) => {
                    yield fragment;
                }
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Fragment stream lagged behind");
                }
            }
        }
    }
}

pub fn stream_from_receiver(
    current: Option<Fragment>,
    rx: broadcast::Receiver<Fragment>,
    compress: bool,
) -> impl IntoResponse {
    match chunked_json_stream(fragment_stream(current, rx), compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
