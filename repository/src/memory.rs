//! In-process stand-in for the DynamoDB player table.
//!
//! Records go through the same item conversion as `DynamoPlayerRepository`,
//! so a record the table would reject is rejected here too.

use crate::error::RepositoryError;
use crate::player::PlayerRepository;
use async_trait::async_trait;
use model::player::Player;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<String, Player>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> InMemoryPlayerRepository {
        InMemoryPlayerRepository::default()
    }

    pub fn with_players(players: impl IntoIterator<Item = Player>) -> InMemoryPlayerRepository {
        InMemoryPlayerRepository {
            players: RwLock::new(
                players
                    .into_iter()
                    .map(|player| (player.id.clone(), player))
                    .collect(),
            ),
        }
    }

    pub async fn len(&self) -> usize {
        self.players.read().await.len()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn get(&self, id: &str) -> Result<Option<Player>, RepositoryError> {
        Ok(self.players.read().await.get(id).cloned())
    }

    async fn put(&self, player: &Player) -> Result<(), RepositoryError> {
        let stored = Player::from_dynamo_item(&player.to_dynamo_item()?)?;
        self.players.write().await.insert(stored.id.clone(), stored);
        Ok(())
    }
}
