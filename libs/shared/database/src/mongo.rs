use std::time::Duration;

use mongodb::{bson::doc, options::ClientOptions, Client, Collection, Database};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use shared_config::AppConfig;

use crate::DatabaseError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct MongoDatabase {
    client: Client,
    database: Database,
}

impl MongoDatabase {
    /// Connects and pings the server so a bad URI fails at startup rather than on first request.
    pub async fn connect(config: &AppConfig) -> Result<Self, DatabaseError> {
        debug!("Connecting to MongoDB database {}", config.database_name);

        let mut options = ClientOptions::parse(&config.mongo_uri).await?;
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);
        options.app_name = Some("hsb-api".to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.database_name);
        database.run_command(doc! { "ping": 1 }).await?;

        info!("Connected to MongoDB database {}", config.database_name);
        Ok(Self { client, database })
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
    {
        self.database.collection::<T>(name)
    }

    pub async fn shutdown(self) {
        info!("Closing MongoDB connection");
        self.client.shutdown().await;
    }
}
