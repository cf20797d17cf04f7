use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use model::player::Player;
use repository::config::load_shared_config;
use repository::player::{DynamoPlayerRepository, PlayerRepository};
use response::{bad_gateway, bad_request, ok_message};
use service::player::PlayerService;

const RSN: &str = "rsn";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .with_target(false)
        .init();

    let shared_config = load_shared_config().await;
    let service_ref = &PlayerService::new(DynamoPlayerRepository::new(&shared_config));

    run(service_fn(move |event: Request| async move {
        save_player(service_ref, event).await
    }))
    .await?;
    Ok(())
}

async fn save_player<R: PlayerRepository>(
    service: &PlayerService<R>,
    event: Request,
) -> Result<Response<Body>, Error> {
    let rsn = match event.path_parameters().first(RSN) {
        Some(rsn) => rsn.to_string(),
        None => return bad_request("RSN is required in the path"),
    };

    if rsn.trim().is_empty() {
        return bad_request("RSN cannot be empty");
    }

    match service.save_player(Player::new(rsn.as_str())).await {
        Ok(_) => ok_message("Player saved successfully"),
        Err(err) => {
            tracing::error!(rsn = rsn.as_str(), "Error processing request: {}", err);
            bad_gateway(err.to_string())
        }
    }
}
