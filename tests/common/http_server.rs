//! Minimal HTTP/1.1 stub for integration tests.
//!
//! Answers every GET with a fixed status line and body, then closes the
//! connection. A stalled server waits before answering.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct StubServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
    response: Arc<Mutex<(String, Vec<u8>)>>,
}

impl StubServer {
    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Changes what subsequent requests receive.
    pub fn respond_with(&self, status: &str, body: &[u8]) {
        *self.response.lock().unwrap() = (status.to_string(), body.to_vec());
    }
}

/// Starts a server in a background thread. `status` is the status line
/// without the protocol, e.g. "200 OK".
pub fn start(status: &str, body: &[u8]) -> StubServer {
    start_with_delay(status, body, Duration::ZERO)
}

/// Like `start`, but each request is held for `delay` before the answer.
pub fn start_stalled(delay: Duration, body: &[u8]) -> StubServer {
    start_with_delay("200 OK", body, delay)
}

fn start_with_delay(status: &str, body: &[u8], delay: Duration) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let response = Arc::new(Mutex::new((status.to_string(), body.to_vec())));

    let thread_hits = Arc::clone(&hits);
    let thread_response = Arc::clone(&response);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let (status, body) = thread_response.lock().unwrap().clone();
            thread_hits.fetch_add(1, Ordering::SeqCst);
            thread::spawn(move || handle(stream, &status, &body, delay));
        }
    });

    StubServer {
        url: format!("http://127.0.0.1:{}/SpaceData/SW-Last5Years.csv", port),
        hits,
        response,
    }
}

/// A URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/SpaceData/SW-Last5Years.csv", port)
}

fn handle(mut stream: TcpStream, status: &str, body: &[u8], delay: Duration) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    // Drain the request head before answering.
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    if !delay.is_zero() {
        thread::sleep(delay);
    }

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}
