use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection};
use tracing::info;
use vinyl_core::repository::AlbumRepository;
use vinyl_core::{Album, Result, StorageError};

/// Database holding the albums collection.
const DATABASE: &str = "media";
/// Collection name within [`DATABASE`].
const COLLECTION: &str = "albums";

/// MongoDB implementation of the repository contract.
///
/// Deletion matches on the client-supplied `id` field, not the driver's
/// `_id`. The collection is never paginated; `list_all` runs once at
/// startup against a collection expected to stay small.
#[derive(Debug, Clone)]
pub struct MongoAlbumRepository {
    client: Client,
    collection: Collection<Album>,
}

impl MongoAlbumRepository {
    /// Opens a client for the given connection string, pins the stable
    /// server API, and pings the primary to confirm the deployment is
    /// reachable before any request is served.
    pub async fn connect(uri: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await.map_err(map_mongo_error)?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options).map_err(map_mongo_error)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;
        info!(database = DATABASE, collection = COLLECTION, "connected to mongodb deployment");

        let collection = client.database(DATABASE).collection(COLLECTION);
        Ok(Self { client, collection })
    }

    /// Releases the underlying client. Call once at process exit.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

fn map_mongo_error(err: mongodb::error::Error) -> StorageError {
    let message = err.to_string();

    match *err.kind {
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => StorageError::Unavailable(message),
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            StorageError::InvalidData(message)
        }
        ErrorKind::InvalidArgument { .. } => StorageError::Operation(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl AlbumRepository for MongoAlbumRepository {
    async fn list_all(&self) -> Result<Vec<Album>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?;

        cursor.try_collect().await.map_err(map_mongo_error)
    }

    async fn insert(&self, album: &Album) -> Result<()> {
        self.collection
            .insert_one(album)
            .await
            .map_err(map_mongo_error)?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool> {
        let result = self
            .collection
            .delete_one(doc! { "id": id })
            .await
            .map_err(map_mongo_error)?;

        Ok(result.deleted_count > 0)
    }
}
