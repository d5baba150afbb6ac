//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request with one canned status and body, counting how many
//! requests it saw.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: &'static str,
    pub body: Vec<u8>,
    /// Advertise this many extra bytes in Content-Length, then close the
    /// connection after sending `body` (simulates a dropped transfer).
    pub missing_bytes: usize,
}

impl Reply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: "200 OK",
            body: body.into(),
            missing_bytes: 0,
        }
    }

    pub fn error(status: &'static str) -> Self {
        Self {
            status,
            body: b"error page".to_vec(),
            missing_bytes: 0,
        }
    }

    pub fn truncated(body: impl Into<Vec<u8>>, missing_bytes: usize) -> Self {
        Self {
            missing_bytes,
            ..Self::ok(body)
        }
    }
}

pub struct MockServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl MockServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts the server on a background thread. It runs until the test process
/// exits.
pub fn start(reply: Reply) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    let reply = Arc::new(reply);

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let reply = Arc::clone(&reply);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &reply, &hits));
        }
    });

    MockServer {
        url: format!("http://127.0.0.1:{}/nba-elo/nbaallelo.csv", port),
        hits,
    }
}

fn handle(mut stream: TcpStream, reply: &Reply, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    if !read_request_head(&mut stream) {
        return;
    }
    hits.fetch_add(1, Ordering::SeqCst);

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reply.body.len() + reply.missing_bytes
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&reply.body);
    let _ = stream.flush();
}

fn read_request_head(stream: &mut TcpStream) -> bool {
    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return false,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
        if request.windows(4).any(|w| w == b"\r\n\r\n") {
            return true;
        }
    }
}
