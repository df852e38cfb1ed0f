//! In-memory port fakes shared by the unit tests.
#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};
use url::Url;
use wristo_domain::{ApiRequest, ClientSettings, Notice, TransportResponse};

use crate::client::{ApiClient, ClientPorts};
use crate::ports::{ClientStorage, Clock, HttpTransport, Navigator, Notifier, StorageError, TransportError};

/// Transport that records requests and replays queued outcomes. When the
/// queue is empty it answers with a success envelope and `null` data.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn push(&self, outcome: Result<TransportResponse, TransportError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn push_envelope(&self, envelope: Value) {
        self.push(Ok(TransportResponse::json(200, &envelope)));
    }

    pub fn push_data(&self, data: Value) {
        self.push_envelope(json!({"code": 0, "msg": "success", "data": data}));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TransportResponse::json(200, &json!({"code": 0, "data": null}))))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<(Url, Duration)>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<(Url, Duration)> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn schedule_redirect(&self, target: Url, delay: Duration) {
        self.redirects.lock().unwrap().push((target, delay));
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    broken: bool,
}

impl MemoryStorage {
    pub fn broken() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            broken: true,
        }
    }

    pub fn with(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl ClientStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.broken {
            return Err(StorageError::Unavailable("disk on fire".to_string()));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        if self.broken {
            return Err(StorageError::Unavailable("disk on fire".to_string()));
        }
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.broken {
            return Err(StorageError::Unavailable("disk on fire".to_string()));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A client wired to fakes, with handles kept for assertions.
pub struct Harness {
    pub client: ApiClient,
    pub transport: Arc<ScriptedTransport>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub storage: Arc<MemoryStorage>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::default())
    }

    pub fn with_storage(storage: MemoryStorage) -> Self {
        Self::build(ClientSettings::default(), storage)
    }

    pub fn build(settings: ClientSettings, storage: MemoryStorage) -> Self {
        let transport = Arc::new(ScriptedTransport::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let storage = Arc::new(storage);
        let client = ApiClient::new(
            settings,
            ClientPorts {
                transport: transport.clone(),
                storage: storage.clone(),
                notifier: notifier.clone(),
                navigator: navigator.clone(),
                clock: Arc::new(FixedClock::default()),
            },
        )
        .expect("default settings are valid");
        Self {
            client,
            transport,
            notifier,
            navigator,
            storage,
        }
    }
}
