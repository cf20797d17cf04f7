use model::player::Player;
use model::time::now_rfc3339;
use repository::error::RepositoryError;
use repository::player::PlayerRepository;

pub struct PlayerService<R> {
    repository: R,
}

impl<R: PlayerRepository> PlayerService<R> {
    pub fn new(repository: R) -> PlayerService<R> {
        PlayerService { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn get_player(&self, id: &str) -> Result<Option<Player>, RepositoryError> {
        tracing::info!("Fetching player data for RSN: {}", id);
        self.repository.get(id).await
    }

    /// Stamps `last_updated` with the current time, whatever the caller set,
    /// and overwrites the stored record.
    pub async fn save_player(&self, mut player: Player) -> Result<Player, RepositoryError> {
        tracing::info!("Saving player data for RSN: {}", player.id);
        player.last_updated = Some(now_rfc3339());
        self.repository.put(&player).await?;
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use model::player::AttributeError;
    use repository::memory::InMemoryPlayerRepository;

    struct FailingRepository;

    #[async_trait]
    impl PlayerRepository for FailingRepository {
        async fn get(&self, _id: &str) -> Result<Option<Player>, RepositoryError> {
            Err(AttributeError::Missing("id").into())
        }

        async fn put(&self, _player: &Player) -> Result<(), RepositoryError> {
            Err(AttributeError::Missing("id").into())
        }
    }

    fn parse(timestamp: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(timestamp)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn stamp_of(player: &Player) -> DateTime<Utc> {
        parse(player.last_updated.as_deref().unwrap())
    }

    #[tokio::test]
    async fn get_player_returns_none_for_unknown_player() {
        let service = PlayerService::new(InMemoryPlayerRepository::new());

        assert_eq!(service.get_player("nonExistentPlayer").await.unwrap(), None);
    }

    #[tokio::test]
    async fn get_player_returns_stored_record_unchanged() {
        let stored = Player {
            id: "testPlayer".to_string(),
            last_updated: Some("2023-12-05T00:00:00Z".to_string()),
        };
        let service = PlayerService::new(InMemoryPlayerRepository::with_players(vec![stored.clone()]));

        assert_eq!(service.get_player("testPlayer").await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn save_player_stamps_current_time() {
        let service = PlayerService::new(InMemoryPlayerRepository::new());
        let before = Utc::now().timestamp_millis();

        let saved = service.save_player(Player::new("test player")).await.unwrap();

        assert_eq!(saved.id, "test player");
        assert!(stamp_of(&saved).timestamp_millis() >= before);
        assert_eq!(service.get_player("test player").await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn save_player_ignores_caller_supplied_timestamp() {
        let service = PlayerService::new(InMemoryPlayerRepository::new());
        let stale = Player {
            id: "testPlayer".to_string(),
            last_updated: Some("2000-01-01T00:00:00Z".to_string()),
        };

        let saved = service.save_player(stale).await.unwrap();

        assert!(stamp_of(&saved) > parse("2000-01-01T00:00:00Z"));
    }

    #[tokio::test]
    async fn saving_twice_moves_timestamp_forward() {
        let service = PlayerService::new(InMemoryPlayerRepository::new());

        let first = service.save_player(Player::new("testPlayer")).await.unwrap();
        let second = service.save_player(Player::new("testPlayer")).await.unwrap();

        assert!(stamp_of(&second) >= stamp_of(&first));
        assert_eq!(service.repository().len().await, 1);
        assert_eq!(service.get_player("testPlayer").await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn repository_failures_are_passed_through() {
        let service = PlayerService::new(FailingRepository);

        let get_err = service.get_player("testPlayer").await.unwrap_err();
        let save_err = service.save_player(Player::new("testPlayer")).await.unwrap_err();

        assert_eq!(get_err.to_string(), "`id` attribute is missing in the player entry");
        assert_eq!(save_err.to_string(), "`id` attribute is missing in the player entry");
    }
}
