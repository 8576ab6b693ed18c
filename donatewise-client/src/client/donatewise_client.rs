// donatewise-client/src/client/donatewise_client.rs
// Typed client: session handling plus request helpers shared by the API modules

use std::sync::Arc;

use axum::Router;
use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::authz::Actor;
use shared::client::{LoginRequest, TokenResponse};
use shared::models::{Role, User};
use shared::validation::{self, SignupForm};

use super::http::{ApiRequest, HttpClient, NetworkHttpClient};
use super::oneshot::OneshotHttpClient;
use crate::{ClientConfig, ClientError, ClientResult, Session, TokenStore};

/// DonateWise API client
///
/// Generic over the transport so the same code runs against a live backend
/// ([`NetworkHttpClient`]) or an in-process router ([`OneshotHttpClient`]).
pub struct DonateWiseClient<H: HttpClient> {
    http: Arc<H>,
    session: Session,
    store: Option<TokenStore>,
}

impl<H: HttpClient> Clone for DonateWiseClient<H> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
            store: self.store.clone(),
        }
    }
}

impl DonateWiseClient<NetworkHttpClient> {
    /// Network client from configuration, token store included when configured
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(config)?;
        let client = Self::new(http, Session::new());
        Ok(match &config.token_path {
            Some(path) => client.with_token_store(TokenStore::new(path)),
            None => client,
        })
    }
}

impl DonateWiseClient<OneshotHttpClient> {
    /// Client calling `router` in-process
    pub fn in_process(router: Router) -> Self {
        Self::new(OneshotHttpClient::new(router), Session::new())
    }
}

impl<H: HttpClient> DonateWiseClient<H> {
    pub fn new(http: H, session: Session) -> Self {
        Self {
            http: Arc::new(http),
            session,
            store: None,
        }
    }

    /// Persist tokens to `store` on login and remove them on logout
    pub fn with_token_store(mut self, store: TokenStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token_store(&self) -> Option<&TokenStore> {
        self.store.as_ref()
    }

    // ========== Session lifecycle ==========

    /// Resume the session from the token store, if any
    pub async fn restore(&self) -> ClientResult<Option<User>> {
        match &self.store {
            Some(store) => self.session.restore(store).await,
            None => Ok(None),
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> ClientResult<User> {
        validation::validate_required_text(username, "username")?;
        validation::validate_required_text(password, "password")?;
        let req = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let resp: TokenResponse = self.post("auth/login", &req).await?;
        self.start_session(resp.token).await
    }

    /// Validate the form, register, and log straight in with the returned token
    pub async fn signup(&self, form: &SignupForm) -> ClientResult<User> {
        let req = validation::validate_signup(form)?;
        let resp: TokenResponse = self.post("auth/signup", &req).await?;
        if let Some(message) = &resp.message {
            tracing::info!(username = %req.username, %message, "signup accepted");
        }
        self.start_session(resp.token).await
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.session.clear().await;
        if let Some(store) = &self.store {
            store.delete()?;
        }
        Ok(())
    }

    async fn start_session(&self, token: String) -> ClientResult<User> {
        let user = self.session.set_token(token.as_str()).await?;
        if let Some(store) = &self.store {
            store.save(&token)?;
        }
        Ok(user)
    }

    /// Logged-in user, or [`ClientError::NotLoggedIn`]
    pub async fn current_user(&self) -> ClientResult<User> {
        self.session.user().await.ok_or(ClientError::NotLoggedIn)
    }

    /// Actor for authorization checks.
    ///
    /// DRIVER and STAFF actors get their driver profile / center id looked
    /// up once and cached in the session.
    pub async fn actor(&self) -> ClientResult<Actor> {
        let mut actor = self.session.actor().await.ok_or(ClientError::NotLoggedIn)?;
        match actor.role {
            Role::Driver if actor.driver_id.is_none() => {
                if let Some(driver) = self.drivers().me().await? {
                    self.session.set_driver_id(driver.id).await;
                    actor.driver_id = Some(driver.id);
                }
            }
            Role::Staff if actor.center_id.is_none() => {
                if let Some(center) = self.centers().me().await? {
                    self.session.set_center_id(center.id).await;
                    actor.center_id = Some(center.id);
                }
            }
            _ => {}
        }
        Ok(actor)
    }

    // ========== Request helpers ==========

    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> ClientResult<super::http::ApiResponse> {
        let mut request = ApiRequest::new(method, path).with_token(self.session.token().await);
        request.body = body;
        tracing::debug!(method = %request.method, path, "api request");
        let response = self.http.send(request).await?;
        if !response.status.is_success() {
            tracing::debug!(path, status = %response.status, "api request failed");
        }
        Ok(response)
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> ClientResult<Option<Vec<u8>>> {
        Ok(Some(serde_json::to_vec(body)?))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(Method::GET, path, None).await?.into_result()
    }

    /// GET where 404 means "absent"
    pub(crate) async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        match self.get(path).await {
            Ok(value) => Ok(Some(value)),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<T> {
        self.send(Method::POST, path, Self::encode(body)?).await?.into_result()
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<T> {
        self.send(Method::PUT, path, Self::encode(body)?).await?.into_result()
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(Method::PUT, path, None).await?.into_result()
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send(Method::DELETE, path, None).await?.into_unit()
    }
}
