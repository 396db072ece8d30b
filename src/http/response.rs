//! Client-facing error responses.
//!
//! # Responsibilities
//! - Emit minimal HTML error documents with an accurate Content-Length
//!
//! # Design Decisions
//! - HTTP/1.0 status line; the body text is informational only
//! - Write failures bubble up so the handler can decide to go silent

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// The error statuses the proxy can send on its own behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    /// 400: the request line could not be parsed.
    BadRequest,
    /// 501: any method other than GET.
    NotImplemented,
    /// 502: the origin could not be reached.
    BadGateway,
}

impl ErrorStatus {
    pub fn code(self) -> u16 {
        match self {
            ErrorStatus::BadRequest => 400,
            ErrorStatus::NotImplemented => 501,
            ErrorStatus::BadGateway => 502,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            ErrorStatus::BadRequest => "Bad Request",
            ErrorStatus::NotImplemented => "Not Implemented",
            ErrorStatus::BadGateway => "Bad Gateway",
        }
    }
}

/// Write a full HTML error response for `status` to `sink`.
///
/// `cause` and `detail` end up in the body for a human reading the page.
pub async fn write_error_response<W>(
    sink: &mut W,
    status: ErrorStatus,
    cause: &str,
    detail: &str,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let body = format!(
        "<html><title>Proxy Error</title><body>{}: {}<br>{}: {}<br></body></html>",
        status.code(),
        status.reason(),
        detail,
        cause,
    );
    let head = format!(
        "HTTP/1.0 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\n\r\n",
        status.code(),
        status.reason(),
        body.len(),
    );
    sink.write_all(head.as_bytes()).await?;
    sink.write_all(body.as_bytes()).await?;
    sink.flush().await
}
