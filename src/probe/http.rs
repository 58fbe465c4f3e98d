//! Staged HTTP(S) reachability probe.
//!
//! The attempt is built from explicit stages (resolve, connect, handshake,
//! request) rather than a pooled client so each stage can report its own
//! diagnostics: resolved addresses, connected peer, negotiated TLS
//! parameters. Stage events are informational only; the outcome is decided
//! solely by whether a response comes back before the deadline.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use http::{header, Method, Request};
use http_body_util::Empty;
use hyper::client::conn::http1;
use hyper_util::rt::TokioIo;
use rustls::pki_types::ServerName;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{self, TcpStream};
use tokio::time;
use tokio_rustls::TlsConnector;
use url::Url;

use crate::probe::{Probe, ProbeError};

/// HTTP(S) prober with a shared TLS client configuration.
///
/// Cheap to clone; every check is an independent connection.
#[derive(Debug, Clone)]
pub struct HttpProber {
    tls: Arc<rustls::ClientConfig>,
}

impl HttpProber {
    /// Build a prober trusting the Mozilla root certificate store.
    pub fn new() -> Result<Self, rustls::Error> {
        let mut roots = rustls::RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let tls = rustls::ClientConfig::builder_with_provider(
            rustls::crypto::ring::default_provider().into(),
        )
        .with_safe_default_protocol_versions()?
        .with_root_certificates(roots)
        .with_no_client_auth();

        Ok(Self { tls: Arc::new(tls) })
    }

    async fn attempt(&self, site: &Url) -> Result<(), ProbeError> {
        let host = site
            .host_str()
            .ok_or_else(|| ProbeError::InvalidTarget(format!("{site} has no host")))?
            .to_string();
        let port = match site.scheme() {
            "http" => site.port().unwrap_or(80),
            "https" => site.port().unwrap_or(443),
            other => {
                return Err(ProbeError::InvalidTarget(format!(
                    "{site} uses unsupported scheme {other:?}"
                )))
            }
        };

        let started = Instant::now();
        let addrs: Vec<SocketAddr> = net::lookup_host((host.as_str(), port))
            .await
            .map_err(ProbeError::Resolve)?
            .collect();
        tracing::debug!(
            host = %host,
            addrs = ?addrs,
            elapsed = ?started.elapsed(),
            "name resolution complete"
        );
        let addr = *addrs
            .first()
            .ok_or_else(|| ProbeError::NoAddresses(host.clone()))?;

        let stream = TcpStream::connect(addr)
            .await
            .map_err(ProbeError::Connect)?;
        tracing::debug!(%addr, elapsed = ?started.elapsed(), "connection established");

        if site.scheme() == "https" {
            let server_name = ServerName::try_from(host.clone())
                .map_err(|e| ProbeError::InvalidTarget(e.to_string()))?;
            let connector = TlsConnector::from(self.tls.clone());
            let stream = connector
                .connect(server_name, stream)
                .await
                .map_err(ProbeError::Tls)?;
            {
                let (_, tls_conn) = stream.get_ref();
                tracing::debug!(
                    version = ?tls_conn.protocol_version(),
                    cipher_suite = ?tls_conn.negotiated_cipher_suite().map(|s| s.suite()),
                    alpn = ?tls_conn.alpn_protocol(),
                    "TLS handshake complete"
                );
            }
            exchange(stream, site, &host, port).await
        } else {
            exchange(stream, site, &host, port).await
        }
    }
}

/// Send one GET over an established stream and await the response head.
///
/// The body is never read; any response at all counts.
async fn exchange<S>(stream: S, site: &Url, host: &str, port: u16) -> Result<(), ProbeError>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    let io = TokioIo::new(stream);
    let (mut sender, conn) = http1::handshake::<_, Empty<Bytes>>(io).await?;
    tokio::spawn(async move {
        if let Err(e) = conn.await {
            tracing::trace!(error = %e, "probe connection closed with error");
        }
    });

    let authority = if site.port().is_some() {
        format!("{host}:{port}")
    } else {
        host.to_string()
    };
    let target = match site.query() {
        Some(query) => format!("{}?{}", site.path(), query),
        None => site.path().to_string(),
    };
    let request = Request::builder()
        .method(Method::GET)
        .uri(target)
        .header(header::HOST, authority)
        .header(
            header::USER_AGENT,
            concat!("bouncer/", env!("CARGO_PKG_VERSION")),
        )
        .header(header::CONNECTION, "close")
        .body(Empty::<Bytes>::new())
        .map_err(|e| ProbeError::InvalidTarget(e.to_string()))?;

    let response = sender.send_request(request).await?;
    tracing::debug!(status = %response.status(), "response received");
    Ok(())
}

impl Probe for HttpProber {
    async fn check(&self, site: &Url, timeout: Duration) -> Result<(), ProbeError> {
        // timeout drops the attempt future on expiry, cancelling whichever
        // stage was in flight.
        match time::timeout(timeout, self.attempt(site)).await {
            Ok(result) => result,
            Err(_) => Err(ProbeError::DeadlineExceeded),
        }
    }
}
