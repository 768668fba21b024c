//! RoleRepository - Lettura dei ruoli da `service_user`

use super::RoleRepository;
use crate::core::DbPool;
use async_trait::async_trait;
use sqlx::Error;
use tracing::{debug, instrument};

pub struct PgRoleRepository {
    connection_pool: DbPool,
}

impl PgRoleRepository {
    pub fn new(connection_pool: DbPool) -> Self {
        Self { connection_pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn find_role(&self, user_id: i32) -> Result<Option<String>, Error> {
        debug!("Looking up user role");
        let mut tx = self.connection_pool.begin().await?;

        let role = sqlx::query_scalar::<_, String>("SELECT role FROM service_user WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(role)
    }
}
