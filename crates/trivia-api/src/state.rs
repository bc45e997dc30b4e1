use sqlx::PgPool;

use crate::config::Environment;

#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: PgPool,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(pool: PgPool, environment: Environment) -> Self {
        Self { pool, environment }
    }
}
