//! HTTP server implementation.

use std::future::Future;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::time;
use log::{debug, error, info, warn};

use crate::parser::parse_request;
use crate::resolver::Resolver;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::respond;

/// A static file server. Connections are handled one at a time, one request each.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The resolver for the served root, shared with the blocking pool.
    resolver: Arc<Resolver>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let resolver = Resolver::new(config.root.clone()).with_max_file_size(config.max_file_size);
        Self {
            config,
            resolver: Arc::new(resolver),
        }
    }

    /// The resolver requests are served through.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!(
            "Serving {root:?} on http://{addr}",
            root = self.config.root,
            addr = self.config.addr
        );
        Ok(listener)
    }

    /// Wait for Ctrl+C.
    async fn ctrl_c() {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
            Err(e) => {
                error!("Error setting up Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    }

    /// Handle connection errors.
    ///
    /// Accept failures (out of file descriptors, aborted handshakes) are
    /// transient, so the loop keeps going after a short pause.
    async fn handle_connection_error(e: std::io::Error) {
        error!("Error accepting connection: {e}");
        time::sleep(time::Duration::from_millis(100)).await;
    }

    /// Validate the configuration, bind, and serve until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        self.config.validate()?;
        let listener = self.setup_listener().await?;
        self.run(listener, Self::ctrl_c()).await
    }

    /// Serve connections from `listener` until `shutdown` completes.
    ///
    /// Shutdown is also watched while a connection is being handled; the
    /// connection in flight is dropped without a response.
    pub async fn run(
        &self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), Error> {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = &mut shutdown => {
                    info!("Shutting down server...");
                    break;
                }

                // Accept new connections
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            debug!("Connection from {addr}");
                            let stop = tokio::select! {
                                result = Self::handle_connection(
                                    &mut socket,
                                    self.resolver.clone(),
                                    &self.config,
                                ) => {
                                    if let Err(e) = result {
                                        warn!("Error handling connection from {addr}: {e}");
                                    }
                                    false
                                }
                                _ = &mut shutdown => {
                                    info!("Shutting down server, dropping connection from {addr}");
                                    true
                                }
                            };
                            if stop {
                                break;
                            }
                        }
                        Err(e) => Self::handle_connection_error(e).await,
                    }
                }
            }
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Handle a single connection: one read, one response, then close.
    ///
    /// A request that fails to parse gets no response at all.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        resolver: Arc<Resolver>,
        config: &ServerConfig,
    ) -> Result<(), Error> {
        let mut buf = vec![0; config.read_buffer_size];

        // Read data from the socket
        let n = time::timeout(config.read_timeout(), socket.read(&mut buf))
            .await
            .map_err(|_| Error::Timeout("reading the request"))??;
        if n == 0 {
            debug!("Connection closed before a request arrived");
            return Ok(());
        }

        // Parse the HTTP request
        let request = parse_request(&buf[..n])?;
        let summary = format!(
            "{method} {path} {version}",
            method = request.method,
            path = request.path,
            version = request.version
        );

        let response = tokio::task::spawn_blocking(move || respond(&resolver, &request))
            .await
            .map_err(|e| Error::InternalError(e.to_string()))?;
        info!(
            "{summary} -> {status} ({len} bytes)",
            status = response.status.as_u16(),
            len = response.body.len()
        );

        // Send the response and close our side
        let bytes = response.to_bytes();
        let write = async {
            socket.write_all(&bytes).await?;
            socket.flush().await?;
            socket.shutdown().await
        };
        time::timeout(config.write_timeout(), write)
            .await
            .map_err(|_| Error::Timeout("writing the response"))??;

        Ok(())
    }
}
