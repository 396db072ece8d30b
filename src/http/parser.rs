//! HTTP/1.0 request parsing.
//!
//! # Responsibilities
//! - Read and tokenize the request line from a client stream
//! - Read the header block, filtering out headers the proxy rewrites
//!
//! # Design Decisions
//! - Header lines pass through verbatim, trailing CRLF included; only the
//!   name (up to the colon, case-insensitive) is inspected
//! - EOF before the blank-line terminator yields the partial header set
//!   collected so far, so a misbehaving peer can never hang a handler
//! - Parsing consumes from the stream irreversibly

use tokio::io::AsyncBufReadExt;

/// The three fields of an HTTP request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub uri: String,
    pub version: String,
}

/// Error reading or tokenizing the request line.
#[derive(Debug)]
pub enum RequestError {
    /// The peer closed the connection before sending anything.
    Empty,
    /// The line did not tokenize into exactly three fields.
    Malformed(String),
    /// Underlying socket failure.
    Io(std::io::Error),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::Empty => write!(f, "connection closed before request line"),
            RequestError::Malformed(line) => write!(f, "malformed request line: {:?}", line),
            RequestError::Io(e) => write!(f, "I/O error reading request: {}", e),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<std::io::Error> for RequestError {
    fn from(e: std::io::Error) -> Self {
        RequestError::Io(e)
    }
}

/// Read one line and tokenize it into method, URI, and version.
///
/// Fails with [`RequestError::Malformed`] unless the line splits into
/// exactly three whitespace-separated fields.
pub async fn read_request_line<R>(reader: &mut R) -> Result<RequestLine, RequestError>
where
    R: AsyncBufReadExt + Unpin,
{
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        return Err(RequestError::Empty);
    }

    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(method), Some(uri), Some(version), None) => Ok(RequestLine {
            method: method.to_string(),
            uri: uri.to_string(),
            version: version.to_string(),
        }),
        _ => Err(RequestError::Malformed(line.trim_end().to_string())),
    }
}

/// Read header lines until the blank-line terminator or EOF, dropping any
/// whose name matches an entry in `exclude` (case-insensitive).
///
/// Returned lines keep their original bytes, CRLF included.
pub async fn read_and_filter_headers<R>(
    reader: &mut R,
    exclude: &[&str],
) -> std::io::Result<Vec<String>>
where
    R: AsyncBufReadExt + Unpin,
{
    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        let n = reader.read_line(&mut line).await?;
        // EOF before the terminator: return what we have.
        if n == 0 {
            return Ok(headers);
        }
        if line == "\r\n" || line == "\n" {
            return Ok(headers);
        }
        let name = line.split(':').next().unwrap_or("").trim();
        if exclude.iter().any(|ex| ex.eq_ignore_ascii_case(name)) {
            continue;
        }
        headers.push(line);
    }
}
