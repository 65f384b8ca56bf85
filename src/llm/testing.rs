use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::llm_interface::{GenerationRequest, GenerativeLlm};
use crate::error::LlmError;

pub enum Reply {
    Text(String),
    NetworkDown,
    Status(u16),
}

/// Scripted backend that records every request it receives
#[derive(Default)]
pub struct FakeLlm {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl FakeLlm {
    pub fn replying(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()))
    }

    pub fn with(reply: Reply) -> Self {
        let fake = Self::default();
        fake.replies.lock().unwrap().push_back(reply);
        fake
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// A real transport error, produced without touching the network
async fn network_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .send()
        .await
        .unwrap_err()
}

#[async_trait]
impl GenerativeLlm for FakeLlm {
    async fn generate_content(&self, request: GenerationRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::NetworkDown) => Err(LlmError::Network(network_error().await)),
            Some(Reply::Status(status)) => Err(LlmError::Status {
                status,
                body: String::new(),
            }),
            None => Err(LlmError::EmptyResponse),
        }
    }
}
