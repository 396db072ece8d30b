//! Per-connection request handler.
//!
//! # Responsibilities
//! - Read and validate one HTTP/1.0 request
//! - Replay from the cache on a hit
//! - Otherwise forward to the origin, relay the response, and offer the
//!   captured bytes to the cache
//!
//! # Design Decisions
//! - The raw request URI is the cache key; a hit skips resolution entirely
//! - Response bytes reach the client exactly as the origin sent them
//! - Accumulation stops for good the moment the object cap would be
//!   exceeded; the relay itself continues untouched
//! - All failures terminate this connection only and are reported to the
//!   client at most once (400/501/502); relay-phase failures are silent

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::cache::{Lookup, ObjectCache};
use crate::config::ForwardingConfig;
use crate::http::{
    read_and_filter_headers, read_request_line, resolve, write_error_response, ErrorStatus,
    RequestError, ResolvedTarget,
};
use crate::proxy::error::RelayError;

/// Relay read size. Matches the line-buffer size of the original rio layer.
const CHUNK_SIZE: usize = 8192;

/// Headers the proxy synthesizes itself; client copies are suppressed so
/// they never appear twice in the forwarded request.
const REWRITTEN_HEADERS: &[&str] = &["Host", "User-Agent", "Connection", "Proxy-Connection"];

/// Serve one client connection to completion.
///
/// Never returns an error to the dispatcher; failures are logged and
/// swallowed here.
pub async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    cache: Arc<ObjectCache>,
    forwarding: ForwardingConfig,
) {
    if let Err(e) = serve(stream, &cache, &forwarding).await {
        tracing::debug!(peer_addr = %peer, error = %e, "Connection ended with error");
    }
}

async fn serve(
    stream: TcpStream,
    cache: &ObjectCache,
    forwarding: &ForwardingConfig,
) -> Result<(), RelayError> {
    let (read_half, mut client) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let request = match read_request_line(&mut reader).await {
        Ok(line) => line,
        // Connected and closed without sending anything: not worth a 400.
        Err(RequestError::Empty) => return Ok(()),
        Err(RequestError::Io(e)) => return Err(RelayError::ClientDisconnected(e)),
        Err(RequestError::Malformed(line)) => {
            let _ = write_error_response(
                &mut client,
                ErrorStatus::BadRequest,
                &line,
                "Proxy could not parse the request",
            )
            .await;
            return Err(RelayError::MalformedRequest);
        }
    };

    if !request.method.eq_ignore_ascii_case("GET") {
        let _ = write_error_response(
            &mut client,
            ErrorStatus::NotImplemented,
            &request.method,
            "Proxy does not implement this method",
        )
        .await;
        return Err(RelayError::UnsupportedMethod(request.method));
    }

    match cache.lookup_and_serve(&request.uri, &mut client).await {
        Ok(Lookup::Hit) => {
            tracing::debug!(uri = %request.uri, "Cache hit");
            let _ = client.flush().await;
            return Ok(());
        }
        Ok(Lookup::Miss) => {}
        Err(e) => return Err(RelayError::ClientDisconnected(e)),
    }

    let target = resolve(&request.uri);
    tracing::debug!(
        uri = %request.uri,
        host = %target.host,
        port = target.port,
        "Cache miss, forwarding"
    );

    let extra_headers = read_and_filter_headers(&mut reader, REWRITTEN_HEADERS)
        .await
        .map_err(RelayError::ClientDisconnected)?;

    let mut origin = match TcpStream::connect((target.host.as_str(), target.port)).await {
        Ok(stream) => stream,
        Err(e) => {
            let _ = write_error_response(
                &mut client,
                ErrorStatus::BadGateway,
                &request.uri,
                "Proxy could not reach the origin server",
            )
            .await;
            return Err(RelayError::OriginUnreachable {
                host: target.host,
                port: target.port,
                source: e,
            });
        }
    };

    let forwarded = build_forwarded_request(&target, &forwarding.user_agent, &extra_headers);
    origin
        .write_all(forwarded.as_bytes())
        .await
        .map_err(RelayError::OriginStream)?;

    // Relay origin → client, capturing up to the object cap on the side.
    let max_object = cache.max_object() as usize;
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut object = Vec::new();
    let mut cacheable = true;

    loop {
        let n = origin
            .read(&mut chunk)
            .await
            .map_err(RelayError::OriginStream)?;
        if n == 0 {
            break;
        }
        client
            .write_all(&chunk[..n])
            .await
            .map_err(RelayError::ClientDisconnected)?;
        if cacheable {
            if object.len() + n <= max_object {
                object.extend_from_slice(&chunk[..n]);
            } else {
                cacheable = false;
                object = Vec::new();
            }
        }
    }
    let _ = client.flush().await;

    if cacheable && !object.is_empty() {
        let size = object.len();
        let outcome = cache.store(&request.uri, object);
        tracing::debug!(uri = %request.uri, size, ?outcome, "Offered object to cache");
    } else if !cacheable {
        tracing::debug!(uri = %request.uri, "Response exceeded object cap, not cached");
    }

    Ok(())
}

/// Assemble the origin-facing request: rewritten request line, synthesized
/// headers, then the client's surviving headers verbatim.
fn build_forwarded_request(
    target: &ResolvedTarget,
    user_agent: &str,
    extra_headers: &[String],
) -> String {
    let mut request = format!("GET {} HTTP/1.0\r\n", target.path);
    request.push_str(&format!("Host: {}\r\n", target.host));
    request.push_str(&format!("User-Agent: {}\r\n", user_agent));
    request.push_str("Connection: close\r\n");
    request.push_str("Proxy-Connection: close\r\n");
    for header in extra_headers {
        request.push_str(header);
    }
    request.push_str("\r\n");
    request
}
