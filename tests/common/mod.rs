#![allow(dead_code)]
use async_trait::async_trait;
use bandcamp_wishlist::{ClientConfig, WishlistClient};
use http_client::{Error, HttpClient, Request, Response};
use http_types::StatusCode;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "http://bandcamp.test";

/// A request as the fake transport saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub enum FakeResponse {
    Body { status: u16, body: Vec<u8> },
    TransportError(String),
}

impl FakeResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        FakeResponse::Body {
            status: 200,
            body: body.into(),
        }
    }
}

/// In-process transport that replays canned responses in order and records
/// every request it receives. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeHttpClient {
    responses: Arc<Mutex<VecDeque<FakeResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeHttpClient {
    pub fn new(responses: Vec<FakeResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for FakeHttpClient {
    async fn send(&self, mut req: Request) -> Result<Response, Error> {
        let body = req.body_string().await.unwrap_or_default();
        self.requests.lock().unwrap().push(RecordedRequest {
            method: req.method().to_string(),
            url: req.url().to_string(),
            content_type: req.content_type().map(|mime| mime.essence().to_string()),
            body,
        });

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(FakeResponse::Body { status, body }) => {
                let mut response = Response::new(status);
                response.set_body(body);
                Ok(response)
            }
            Some(FakeResponse::TransportError(msg)) => {
                Err(Error::from_str(StatusCode::BadGateway, msg))
            }
            None => Err(Error::from_str(
                StatusCode::InternalServerError,
                "no canned response left",
            )),
        }
    }
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{name}"))
        .expect("Could not read test fixture file")
}

/// Client wired to a fake transport; the returned handle inspects requests.
pub fn test_client(responses: Vec<FakeResponse>) -> (WishlistClient, FakeHttpClient) {
    let fake = FakeHttpClient::new(responses);
    let config = ClientConfig::new()
        .with_base_url(TEST_BASE_URL)
        .with_username("space-llama");
    let client = WishlistClient::with_config(Box::new(fake.clone()), config);
    (client, fake)
}
