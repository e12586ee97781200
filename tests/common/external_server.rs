use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::post,
    Form, Router,
};
use reqwest::StatusCode;
use tokio::{sync::RwLock, task::JoinHandle};

/// One request as received by the stand-in service.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub operation: String,
    pub form: HashMap<String, String>,
}

#[derive(Default)]
pub struct AppState {
    responses: HashMap<String, String>,
    requests: Vec<ReceivedRequest>,
}

/// Stand-in for the remote football data service. Answers
/// `POST /:operation` with the canned XML body registered for that
/// operation and records every received request.
pub struct ExternalServer {
    port: u16,
    handles: Vec<JoinHandle<()>>,
    state: Arc<RwLock<AppState>>,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl ExternalServer {
    pub fn new(port: u16) -> ExternalServer {
        ExternalServer {
            port,
            handles: vec![],
            state: Arc::new(RwLock::new(AppState::default())),
        }
    }

    pub async fn start(&mut self) {
        let handle = {
            let port = self.port;
            let state = self.state.clone();
            tokio::spawn(async move { ExternalServer::serve(state, port).await })
        };
        self.handles.push(handle);

        tokio::time::sleep(Duration::from_millis(300)).await; // wait for mock to start
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub async fn set_response(&self, operation: &str, body: &str) {
        self.state
            .write()
            .await
            .responses
            .insert(operation.to_string(), body.to_string());
    }

    pub async fn get_requests(&self) -> Vec<ReceivedRequest> {
        self.state.read().await.requests.clone()
    }

    async fn serve(state: Arc<RwLock<AppState>>, port: u16) {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let app = Router::new()
            .route("/:operation", post(ExternalServer::handle_operation))
            .with_state(state);

        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await
            .unwrap();
    }

    async fn handle_operation(
        Path(operation): Path<String>,
        State(state): State<Arc<RwLock<AppState>>>,
        Form(form): Form<HashMap<String, String>>,
    ) -> impl IntoResponse {
        let mut safe_state = state.write().await;
        safe_state.requests.push(ReceivedRequest {
            operation: operation.clone(),
            form,
        });
        match safe_state.responses.get(&operation) {
            Some(body) => (StatusCode::OK, body.clone()),
            None => (StatusCode::NOT_FOUND, format!("no response for {operation}")),
        }
    }
}
