//! HTTP Transport
//!
//! Serves the vector search routes over rocket.
//!
//! # Example
//!
//! ```text
//! POST /api/vector-search HTTP/1.1
//! Content-Type: application/json
//!
//! { "q_b64": "f4E=", "k": 5 }
//! ```

use crate::constants::{CORS_ALLOW_METHODS, MAX_BODY_KIB};
use crate::handlers::SearchState;
use crate::handlers::catchers::json_catcher;
use crate::handlers::health::health;
use crate::handlers::vector_search::{vector_search_form, vector_search_json};
use qvs_infrastructure::config::ServerConfig;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::http::{Header, Status};
use rocket::{Build, Request, Response, Rocket, catchers, options, routes};
use std::net::SocketAddr;
use tracing::info;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS for browser access
    pub enable_cors: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

impl From<&ServerConfig> for HttpTransportConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            enable_cors: server.enable_cors,
        }
    }
}

impl HttpTransportConfig {
    /// Create config for localhost with specified port
    pub fn localhost(port: u16) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port,
            enable_cors: true,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], self.port)))
    }
}

/// HTTP transport server
pub struct HttpTransport {
    config: HttpTransportConfig,
    state: SearchState,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, state: SearchState) -> Self {
        Self { config, state }
    }

    fn figment() -> Figment {
        let limits = Limits::default()
            .limit("bytes", MAX_BODY_KIB.kibibytes())
            .limit("string", MAX_BODY_KIB.kibibytes())
            .limit("form", MAX_BODY_KIB.kibibytes());
        rocket::Config::figment().merge(("limits", limits))
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        Self::build(Self::figment(), self.state.clone(), self.config.enable_cors)
    }

    fn build(figment: Figment, state: SearchState, enable_cors: bool) -> Rocket<Build> {
        let mut rocket = rocket::custom(figment)
            .manage(state)
            .mount(
                "/",
                routes![vector_search_form, vector_search_json, health, preflight],
            )
            .register("/", catchers![json_catcher]);

        if enable_cors {
            rocket = rocket.attach(Cors);
        }

        rocket
    }

    /// Start the HTTP transport server
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = self.config.socket_addr();
        info!(%addr, cors = self.config.enable_cors, "HTTP transport listening");

        let figment = Self::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        Self::build(figment, self.state, self.config.enable_cors)
            .launch()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            CORS_ALLOW_METHODS,
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Answer CORS preflight requests for any path
#[options("/<_..>")]
fn preflight() -> Status {
    Status::NoContent
}
