use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use repository::config::load_shared_config;
use repository::player::{DynamoPlayerRepository, PlayerRepository};
use response::{bad_gateway, bad_request, not_found, ok};
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
        get_player(service_ref, event).await
    }))
    .await?;
    Ok(())
}

async fn get_player<R: PlayerRepository>(
    service: &PlayerService<R>,
    event: Request,
) -> Result<Response<Body>, Error> {
    let rsn = match event.path_parameters().first(RSN) {
        Some(rsn) if !rsn.trim().is_empty() => rsn.to_string(),
        _ => return bad_request("RSN is required"),
    };

    match lookup(service, &rsn).await {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::error!(rsn = rsn.as_str(), "Error processing request: {}", err);
            bad_gateway(err.to_string())
        }
    }
}

async fn lookup<R: PlayerRepository>(
    service: &PlayerService<R>,
    rsn: &str,
) -> Result<Response<Body>, Error> {
    match service.get_player(rsn).await? {
        Some(player) => ok(&player),
        None => not_found("Player not found"),
    }
}
