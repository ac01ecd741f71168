use super::*;

async fn spawn_base_routes() -> (std::net::SocketAddr, tokio::task::JoinHandle<std::io::Result<()>>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move { axum::serve(listener, base_routes()).await });
    (addr, server)
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn base_routes_serve_healthz_over_http() {
    let (addr, server) = spawn_base_routes().await;

    let resp = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    server.abort();
}

#[tokio::test]
async fn base_routes_reject_unknown_path() {
    let (addr, server) = spawn_base_routes().await;

    let resp = reqwest::get(format!("http://{addr}/nope")).await.unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    server.abort();
}
