//! Shared utilities for integration tests.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};

use tokio::task::JoinHandle;

use greeting_server::config::AppConfig;
use greeting_server::http::HttpServer;
use greeting_server::lifecycle::Shutdown;
use greeting_server::net;

/// Start an in-process server on an ephemeral localhost port.
///
/// Returns the bound address, the shutdown handle that stops the server,
/// and the join handle of the serve task.
#[allow(dead_code)]
pub async fn spawn_server(
    mut config: AppConfig,
) -> (SocketAddr, Shutdown, JoinHandle<std::io::Result<()>>) {
    config.listener.bind_address = "127.0.0.1:0".parse().unwrap();

    let listener = net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let mut stop = shutdown.subscribe();
    let server = HttpServer::new(config);

    let task = tokio::spawn(async move {
        server
            .run(listener, async move {
                let _ = stop.recv().await;
            })
            .await
    });

    (addr, shutdown, task)
}

/// Issue a minimal HTTP/1.1 GET over a raw socket and return the whole
/// response, status line and headers included.
#[allow(dead_code)]
pub fn http_get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();

    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}
