use tracker_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env, config, logging
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        seed_demo_data = config.seed_demo_data,
        "Task tracker server starting..."
    );

    let state = ServerState::initialize(&config);
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
