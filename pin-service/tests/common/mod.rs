#![allow(dead_code)]

pub mod db;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthSettings;
use auth::Authenticator;
use pin_service::domain::pin::errors::PinError;
use pin_service::domain::pin::models::ListPinsQuery;
use pin_service::domain::pin::models::OrderDirection;
use pin_service::domain::pin::models::Pin;
use pin_service::domain::pin::models::PinId;
use pin_service::domain::pin::models::PinOrderField;
use pin_service::domain::pin::ports::PinRepository;
use pin_service::domain::pin::service::PinService;
use pin_service::domain::user::errors::UserError;
use pin_service::domain::user::models::User;
use pin_service::domain::user::models::Username;
use pin_service::domain::user::ports::UserRepository;
use pin_service::domain::user::service::CredentialService;
use pin_service::inbound::http::router::create_router;
use serde_json::json;
use serde_json::Value;
use tokio::sync::RwLock;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Low iteration count keeps registration fast in tests
        let settings = AuthSettings::new(TEST_SECRET).with_hash_iterations(1_000);
        let authenticator =
            Arc::new(Authenticator::new(&settings).expect("Failed to create authenticator"));

        let credential_service = Arc::new(CredentialService::new(
            Arc::new(InMemoryUserRepository::default()),
            Arc::clone(&authenticator),
        ));
        let pin_service = Arc::new(PinService::new(Arc::new(InMemoryPinRepository::default())));

        let router = create_router(credential_service, pin_service, Arc::clone(&authenticator));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            authenticator,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register a user and return the response
    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/api/v1/register")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the response
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/api/v1/token")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user, log in and return (access_token, refresh_token)
    pub async fn register_and_login(&self, username: &str, password: &str) -> (String, String) {
        let response = self.register(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        (
            body["data"]["access_token"].as_str().unwrap().to_string(),
            body["data"]["refresh_token"].as_str().unwrap().to_string(),
        )
    }

    /// Create a pin with the given token and return the parsed response body
    pub async fn create_pin(&self, token: &str, title: &str, author: &str) -> Value {
        let response = self
            .post_authenticated("/api/v1/pins", token)
            .json(&json!({
                "title": title,
                "body": format!("{} body", title),
                "image_link": "https://img.example.com/pin.png",
                "author": author,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        response.json().await.expect("Failed to parse response")
    }
}

/// User repository backed by a map keyed on username.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let key = user.username.as_str().to_string();
        if users.contains_key(&key) {
            return Err(UserError::UsernameAlreadyExists(key));
        }
        users.insert(key, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(username.as_str()).cloned())
    }
}

/// Pin repository backed by a map keyed on pin ID.
#[derive(Default)]
pub struct InMemoryPinRepository {
    pins: RwLock<HashMap<PinId, Pin>>,
}

fn compare_pins(a: &Pin, b: &Pin, field: PinOrderField) -> Ordering {
    match field {
        PinOrderField::Title => a.title.as_str().cmp(b.title.as_str()),
        PinOrderField::DateCreated => a.date_created.cmp(&b.date_created),
        PinOrderField::Author => a.author.as_str().cmp(b.author.as_str()),
    }
}

#[async_trait]
impl PinRepository for InMemoryPinRepository {
    async fn list(&self, query: &ListPinsQuery) -> Result<Vec<Pin>, PinError> {
        let pins = self.pins.read().await;
        let mut matching: Vec<Pin> = pins
            .values()
            .filter(|pin| match &query.author {
                Some(author) => pin.author.as_str().to_lowercase() == author.to_lowercase(),
                None => true,
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = compare_pins(a, b, query.order_by);
            let ordering = match query.order_dir {
                OrderDirection::Asc => ordering,
                OrderDirection::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id.0.cmp(&b.id.0))
        });

        Ok(matching)
    }

    async fn find_by_id(&self, id: &PinId) -> Result<Option<Pin>, PinError> {
        Ok(self.pins.read().await.get(id).cloned())
    }

    async fn create(&self, pin: Pin) -> Result<Pin, PinError> {
        self.pins.write().await.insert(pin.id, pin.clone());
        Ok(pin)
    }

    async fn update(&self, pin: Pin) -> Result<Pin, PinError> {
        let mut pins = self.pins.write().await;
        match pins.get_mut(&pin.id) {
            Some(existing) => {
                *existing = pin.clone();
                Ok(pin)
            }
            None => Err(PinError::NotFound(pin.id.to_string())),
        }
    }

    async fn delete(&self, id: &PinId) -> Result<(), PinError> {
        self.pins
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| PinError::NotFound(id.to_string()))
    }
}
