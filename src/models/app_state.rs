use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::{models::error::ServerError, service::defaults::GameDefaults};

#[derive(Clone)]
pub struct AppState {
    pool: Pool<Postgres>,
    game_defaults: Arc<GameDefaults>,
}

impl AppState {
    pub async fn from_connection_string(connection_string: &str) -> Result<Arc<Self>, ServerError> {
        let pool = Pool::<Postgres>::connect(connection_string).await?;
        let game_defaults = Arc::new(GameDefaults::load());

        let state = Arc::new(Self {
            pool,
            game_defaults,
        });

        Ok(state)
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    pub fn game_defaults(&self) -> &GameDefaults {
        &self.game_defaults
    }
}
