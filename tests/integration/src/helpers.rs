//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests with
//! session cookies, and checking responses.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use lendhub_api::{create_app, create_app_state};
use lendhub_common::AppConfig;
use reqwest::{header, Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Prefix every API route is mounted under
pub const API: &str = "/api/v1";

/// Session cookies captured from a login response
///
/// The cookies are `Secure`, so they are replayed by hand instead of through
/// a cookie store that would refuse to send them over plain HTTP.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub access: Option<String>,
    pub refresh: Option<String>,
}

impl Session {
    /// Collect `access` and `refresh` from the response's `Set-Cookie` headers
    pub fn from_response(response: &Response) -> Self {
        let mut session = Self::default();
        session.absorb(response);
        session
    }

    /// Overwrite any cookie the response sets
    pub fn absorb(&mut self, response: &Response) {
        for value in response.headers().get_all(header::SET_COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            let pair = raw.split(';').next().unwrap_or_default();
            match pair.split_once('=') {
                Some(("access", v)) => self.access = Some(v.to_string()),
                Some(("refresh", v)) => self.refresh = Some(v.to_string()),
                _ => {}
            }
        }
    }

    fn cookie_header(&self) -> String {
        [("access", &self.access), ("refresh", &self.refresh)]
            .into_iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}={v}")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub config: AppConfig,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server on an ephemeral port
    pub async fn start(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config.clone()).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            config,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url(), path);
        let builder = self.client.request(method, url);
        match session {
            Some(session) => builder.header(header::COOKIE, session.cookie_header()),
            None => builder,
        }
    }

    /// GET without cookies
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path, None).send().await?)
    }

    /// GET with session cookies
    pub async fn get_auth(&self, path: &str, session: &Session) -> Result<Response> {
        Ok(self.request(Method::GET, path, Some(session)).send().await?)
    }

    /// POST a JSON body without cookies
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.request(Method::POST, path, None).json(body).send().await?)
    }

    /// POST a JSON body with session cookies
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        session: &Session,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .request(Method::POST, path, Some(session))
            .json(body)
            .send()
            .await?)
    }

    /// POST without a body, with session cookies
    pub async fn post_empty_auth(&self, path: &str, session: &Session) -> Result<Response> {
        Ok(self.request(Method::POST, path, Some(session)).send().await?)
    }

    /// PATCH a JSON body with session cookies
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        session: &Session,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .request(Method::PATCH, path, Some(session))
            .json(body)
            .send()
            .await?)
    }

    /// DELETE with session cookies
    pub async fn delete_auth(&self, path: &str, session: &Session) -> Result<Response> {
        Ok(self.request(Method::DELETE, path, Some(session)).send().await?)
    }

    /// Log in and capture the session cookies
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let body = serde_json::json!({ "username": username, "password": password });
        let response = self.post(&format!("{API}/auth/login"), &body).await?;
        let session = Session::from_response(&response);
        assert_status(response, StatusCode::OK).await?;
        Ok(session)
    }

    /// Log in as the bootstrap administrator
    pub async fn login_admin(&self) -> Result<Session> {
        let (username, password) = (
            self.config.admin.username.clone(),
            self.config.admin.password.clone(),
        );
        self.login(&username, &password).await
    }
}

/// Configuration from the environment, or `None` when the test environment
/// is not set up
pub fn test_config() -> Option<AppConfig> {
    match AppConfig::from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Skipping test: {e}");
            None
        }
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
