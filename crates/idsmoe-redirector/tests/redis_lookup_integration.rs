use idsmoe_redirector::{LookupError, LookupService, RedirectQuery, Redirector};
use idsmoe_storage::RedisStore;
use idsmoe_test_infra::redis::{RedisConfig, RedisServer};
use redis::AsyncCommands;

/// Test fixture that manages a Redis container seeded with two records.
struct RedisFixture {
    #[allow(dead_code)]
    redis: RedisServer,
    store: RedisStore,
}

impl RedisFixture {
    async fn start() -> Self {
        let redis = RedisServer::new(RedisConfig::default())
            .await
            .expect("Failed to start Redis");

        let mut conn = redis.connection().await.expect("Failed to connect");
        let pairs = [
            ("myanimelist/1", "1"),
            ("anilist/1", "1"),
            (
                "1",
                r#"{"title":"Cowboy Bebop","myanimelist":1,"anilist":1,"kitsu":1}"#,
            ),
            ("myanimelist/2", "not-a-number"),
        ];
        for (key, value) in pairs {
            conn.set::<_, _, ()>(key, value)
                .await
                .expect("Failed to seed Redis");
        }

        let url = redis.redis_url().await.expect("Failed to get Redis url");
        let store = RedisStore::connect(&url).await.expect("Failed to open store");
        Self { redis, store }
    }
}

#[tokio::test]
async fn test_two_hop_lookup_against_redis() {
    let fixture = RedisFixture::start().await;
    let service = LookupService::new(fixture.store.clone());

    let record = service.fetch("anilist", "1").await.unwrap();
    assert_eq!(record.title(), Some("Cowboy Bebop"));
    assert_eq!(record.id("kitsu").as_deref(), Some("1"));

    service.check_integrity().await.unwrap();
}

#[tokio::test]
async fn test_miss_and_corruption_against_redis() {
    let fixture = RedisFixture::start().await;
    let service = LookupService::new(fixture.store.clone());

    let err = service.fetch("anilist", "404").await.unwrap_err();
    assert!(matches!(err, LookupError::NotFound(_)));

    let err = service.fetch("myanimelist", "2").await.unwrap_err();
    assert!(matches!(err, LookupError::DataCorruption(_)));
}

#[tokio::test]
async fn test_redirect_against_redis() {
    let fixture = RedisFixture::start().await;
    let redirector = Redirector::new(LookupService::new(fixture.store.clone()));

    let query = RedirectQuery::builder()
        .platform("mal")
        .id("1")
        .target("kitsu")
        .raw(true)
        .build();
    let redirect = redirector.redirect(&query).await.unwrap();
    assert_eq!(redirect.uri, "https://kitsu.app/anime/1");
}
