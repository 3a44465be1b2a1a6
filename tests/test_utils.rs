use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use experience_form::{
    entities::experience_form::ExperienceFormInput,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use reqwest::Client;
use std::{net::TcpListener, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct TestApp {
    pub state: Arc<AppState>,
    pub address: String,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn(reference_year: i32) -> Self {
        let config = test_config(reference_year);
        let state = Arc::new(AppState::new(&config));

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state_clone = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(state_clone.clone()))
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(&format!("{}/api/v1/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            address,
            client,
            config,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub fn test_config(reference_year: i32) -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Experience Form Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        cors_allowed_origins: vec!["*".to_string()],
        year_span: 50,
        reference_year: Some(reference_year),
    }
}

#[async_trait]
pub trait ExperienceTestHelpers: Send + Sync {
    async fn validate_json(&self, input: &ExperienceFormInput) -> reqwest::Response;
    async fn validate_form(&self, fields: &[(&str, &str)]) -> reqwest::Response;
}

#[async_trait]
impl ExperienceTestHelpers for TestApp {
    async fn validate_json(&self, input: &ExperienceFormInput) -> reqwest::Response {
        self.client
            .post(self.url("/api/v1/experience/validate"))
            .json(input)
            .send()
            .await
            .expect("Failed to send validate request")
    }

    async fn validate_form(&self, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url("/api/v1/experience/validate"))
            .form(fields)
            .send()
            .await
            .expect("Failed to send validate request")
    }
}
