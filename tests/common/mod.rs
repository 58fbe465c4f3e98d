//! Shared test doubles and mock sites for integration tests.

// Each test binary uses a subset of these helpers.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use bouncer::probe::{Probe, ProbeError};
use bouncer::relay::{Relay, RelayError};

/// Probe that replays a scripted sequence of outcomes (true = success).
///
/// Once the script runs out every further check succeeds. Records the sites
/// it was asked to probe, in order.
pub struct ScriptedProbe {
    outcomes: Mutex<VecDeque<bool>>,
    probed: Mutex<Vec<String>>,
}

impl ScriptedProbe {
    pub fn new(outcomes: &[bool]) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.iter().copied().collect()),
            probed: Mutex::new(Vec::new()),
        }
    }

    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

impl Probe for ScriptedProbe {
    async fn check(&self, site: &Url, _timeout: Duration) -> Result<(), ProbeError> {
        self.probed.lock().unwrap().push(site.as_str().to_string());
        let success = self.outcomes.lock().unwrap().pop_front().unwrap_or(true);
        if success {
            Ok(())
        } else {
            Err(ProbeError::Connect(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "scripted failure",
            )))
        }
    }
}

/// Relay that records pulses instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingRelay {
    triggers: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingRelay {
    /// Handle to the recorded pulses, valid after the relay is consumed.
    pub fn handle(&self) -> Arc<Mutex<Vec<Duration>>> {
        self.triggers.clone()
    }
}

impl Relay for RecordingRelay {
    async fn trigger(&mut self, duration: Duration) {
        self.triggers.lock().unwrap().push(duration);
    }

    fn close(self) -> Result<(), RelayError> {
        Ok(())
    }
}

/// Start a site that answers every request with the given status line.
pub async fn start_mock_site(status_line: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Start a site that accepts connections but never responds.
pub async fn start_silent_site() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                while let Ok(n) = socket.read(&mut buf).await {
                    if n == 0 {
                        break;
                    }
                }
            });
        }
    });

    addr
}

/// Start a site that counts accepted connections and answers 200.
pub async fn start_counting_site() -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let connections = Arc::new(AtomicUsize::new(0));

    let counter = connections.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = "HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, connections)
}
