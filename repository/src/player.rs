use crate::config::table_name_from_env;
use crate::error::RepositoryError;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use model::player::{Player, ID};

/// Single-item access to the player table, keyed by RSN.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// `Ok(None)` when no item exists for `id`.
    async fn get(&self, id: &str) -> Result<Option<Player>, RepositoryError>;

    /// Full overwrite of the item for `player.id`. The record must already
    /// carry `last_updated`.
    async fn put(&self, player: &Player) -> Result<(), RepositoryError>;
}

pub struct DynamoPlayerRepository {
    client: Client,
    table_name: String,
}

impl DynamoPlayerRepository {
    pub fn new(shared_config: &SdkConfig) -> DynamoPlayerRepository {
        DynamoPlayerRepository::new_with_table_name(shared_config, table_name_from_env())
    }

    pub fn new_with_table_name(shared_config: &SdkConfig, table_name: String) -> DynamoPlayerRepository {
        DynamoPlayerRepository::from_client(Client::new(shared_config), table_name)
    }

    pub fn from_client(client: Client, table_name: String) -> DynamoPlayerRepository {
        tracing::info!("Using player table {}", table_name);
        DynamoPlayerRepository { client, table_name }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl PlayerRepository for DynamoPlayerRepository {
    async fn get(&self, id: &str) -> Result<Option<Player>, RepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|err| logged("getting", id, aws_sdk_dynamodb::Error::from(err).into()))?;

        output
            .item()
            .map(Player::from_dynamo_item)
            .transpose()
            .map_err(|err| logged("getting", id, err.into()))
    }

    async fn put(&self, player: &Player) -> Result<(), RepositoryError> {
        let item = player
            .to_dynamo_item()
            .map_err(|err| logged("saving", &player.id, err.into()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|err| logged("saving", &player.id, aws_sdk_dynamodb::Error::from(err).into()))?;
        Ok(())
    }
}

fn logged(action: &str, id: &str, err: RepositoryError) -> RepositoryError {
    tracing::error!(rsn = id, "Error {} player in DynamoDB: {}", action, err);
    err
}
