// Local HTTP server for the blocking client tests
// Serves one canned response per connection, in order, then stops accepting

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// Raw HTTP/1.1 response bytes
pub struct CannedResponse(Vec<u8>);

impl CannedResponse {
    /// Response with a `Content-Length` header
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let mut raw = format!(
            "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            reason(status),
            body.len()
        )
        .into_bytes();
        raw.extend(body);
        Self(raw)
    }

    /// Response streamed with chunked transfer encoding, no `Content-Length`
    pub fn chunked(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let mut raw = format!(
            "HTTP/1.1 {} {}\r\nTransfer-Encoding: chunked\r\nConnection: close\r\n\r\n",
            status,
            reason(status)
        )
        .into_bytes();
        for chunk in body.chunks(256) {
            raw.extend(format!("{:x}\r\n", chunk.len()).into_bytes());
            raw.extend(chunk);
            raw.extend(b"\r\n");
        }
        raw.extend(b"0\r\n\r\n");
        Self(raw)
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        203 => "Non-Authoritative Information",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

/// Start a server on an ephemeral port.
///
/// Returns the base URL and a handle yielding the request heads it received.
/// Join the handle only once the client has consumed every response.
pub fn serve(responses: Vec<CannedResponse>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("listener addr");

    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for response in responses {
            let (mut stream, _) = listener.accept().expect("accept connection");

            let mut head = String::new();
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) if line == "\r\n" => break,
                    Ok(_) => head.push_str(&line),
                }
            }
            requests.push(head);

            // The client may hang up early once it has seen enough
            let _ = stream.write_all(&response.0);
            let _ = stream.flush();
        }
        requests
    });

    (format!("http://{}", addr), handle)
}
