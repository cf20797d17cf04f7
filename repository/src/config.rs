use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use std::env;

pub const PLAYER_TABLE: &str = "PLAYER_TABLE";
pub const STAGE: &str = "STAGE";
pub const DEFAULT_TABLE_NAME: &str = "Player";
pub const DEFAULT_REGION: &str = "us-west-2";

/// `PLAYER_TABLE` wins; otherwise the table is named after the deployment
/// stage, `Player-{STAGE}`; otherwise plain `Player`.
pub fn table_name_from_env() -> String {
    table_name(env::var(PLAYER_TABLE).ok(), env::var(STAGE).ok())
}

fn table_name(table: Option<String>, stage: Option<String>) -> String {
    match (table, stage) {
        (Some(table), _) if !table.trim().is_empty() => table,
        (_, Some(stage)) if !stage.trim().is_empty() => format!("{}-{}", DEFAULT_TABLE_NAME, stage),
        _ => DEFAULT_TABLE_NAME.to_string(),
    }
}

/// Default AWS provider chain, falling back to `us-west-2` when no region is
/// configured.
pub async fn load_shared_config() -> SdkConfig {
    let region = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
    aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await
}
