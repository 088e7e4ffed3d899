use std::env;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let host = env::var("HOST").ok();
    let port = env::var("PORT").ok();
    let addr = mock_server::bind_addr(host.as_deref(), port.as_deref());
    let listener = TcpListener::bind(&addr).await?;
    println!("task API mock serving http://{addr}/tasks");
    mock_server::run(listener).await
}
