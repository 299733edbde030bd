//! Minimal HTTP/1.1 server that answers every GET with one canned response.
//!
//! Records the request path of every request so tests can assert the URL the
//! client built.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Status line (without `HTTP/1.1`) and body sent for every request.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: String,
    pub content_type: &'static str,
    pub body: String,
}

impl CannedResponse {
    /// `200 OK` with a JSON body.
    pub fn ok(body: String) -> Self {
        Self {
            status: "200 OK".to_string(),
            content_type: "application/json",
            body,
        }
    }

    /// An error status (e.g. `"404 Not Found"`) with a small JSON body like AMO sends.
    pub fn status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            content_type: "application/json",
            body: r#"{"detail":"Not found."}"#.to_string(),
        }
    }
}

/// Handle to a running server. The server runs until the process exits.
pub struct ApiServer {
    /// Base URL with trailing slash, e.g. "http://127.0.0.1:12345/".
    pub base_url: String,
    paths: Arc<Mutex<Vec<String>>>,
}

impl ApiServer {
    /// Request paths seen so far, in arrival order.
    pub fn requested_paths(&self) -> Vec<String> {
        self.paths.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

/// Starts a server in a background thread answering with `response`.
pub fn start(response: CannedResponse) -> ApiServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let paths = Arc::new(Mutex::new(Vec::new()));
    let paths_srv = Arc::clone(&paths);
    let response = Arc::new(response);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = Arc::clone(&response);
            let paths = Arc::clone(&paths_srv);
            thread::spawn(move || handle(stream, &response, &paths));
        }
    });
    ApiServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        paths,
    }
}

fn handle(mut stream: TcpStream, response: &CannedResponse, paths: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut request_line = request.lines().next().unwrap_or("").split_whitespace();
    let method = request_line.next().unwrap_or("");
    let path = request_line.next().unwrap_or("").to_string();
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    if let Ok(mut p) = paths.lock() {
        p.push(path);
    }
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.content_type,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(response.body.as_bytes());
}
