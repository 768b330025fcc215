use redis::{aio::MultiplexedConnection, Client};
use redis::{AsyncCommands, SetExpiry, SetOptions};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedisServiceErr {
    #[error("error while connecting to instance: {0}")]
    ConnectionErr(String),

    #[error("error while performing CRUD action: {0}")]
    CRUDErr(String),
}

// Small helper to shorten CRUD error mapping
fn crud<E: ToString>(e: E) -> RedisServiceErr {
    RedisServiceErr::CRUDErr(e.to_string())
}

pub struct RedisService {
    client: Client,
}

impl RedisService {
    pub fn new(host_url: &str) -> Result<Self, RedisServiceErr> {
        let formatted_url = format!("redis://{}/", host_url);
        let client = Client::open(formatted_url)
            .map_err(|e| RedisServiceErr::ConnectionErr(e.to_string()))?;
        Ok(Self { client })
    }

    async fn get_connection(&self) -> Result<MultiplexedConnection, RedisServiceErr> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| RedisServiceErr::ConnectionErr(e.to_string()))
    }

    /// SET with expiry; the store drops the key on its own once the TTL
    /// elapses. A TTL of 0 is clamped to 1 second so the key is never
    /// written without an expiry.
    pub async fn set_key_value(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), RedisServiceErr> {
        let ttl = if ttl_seconds == 0 { 1 } else { ttl_seconds };
        let mut conn = self.get_connection().await?;
        let opts = SetOptions::default().with_expiration(SetExpiry::EX(ttl as usize));
        conn.set_options::<_, _, ()>(key, value, opts)
            .await
            .map_err(crud)
    }

    pub async fn exists(&self, key: &str) -> Result<bool, RedisServiceErr> {
        let mut conn = self.get_connection().await?;
        conn.exists(key).await.map_err(crud)
    }

    pub async fn delete_key(&self, key: &str) -> Result<bool, RedisServiceErr> {
        let mut conn = self.get_connection().await?;
        let deleted: i32 = conn.del(key).await.map_err(crud)?;
        Ok(deleted > 0)
    }
}
