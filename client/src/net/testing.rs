//! In-process transport for exercising the API client without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Transport};

/// Records every request and answers from a queue of canned replies.
/// An exhausted queue answers `200 {}`.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<ApiRequest>>>,
    replies: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.sent.lock().unwrap().last().cloned().expect("no request sent")
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse { status: 200, body: "{}".to_owned() }))
    }
}
