use crate::domain::ports::{ApiTransport, HttpMethod};
use crate::utils::error::{FormError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub(crate) enum Reply {
    Json(serde_json::Value),
    Status(u16, &'static str),
}

struct Scripted {
    gate: Option<Arc<Notify>>,
    reply: Reply,
}

/// Replays queued replies per path and records every call.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Arc<Mutex<HashMap<String, VecDeque<Scripted>>>>,
    calls: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

impl ScriptedTransport {
    pub(crate) fn reply(&self, path: &str, reply: Reply) {
        self.push(path, None, reply);
    }

    /// The reply is held back until `gate` is notified.
    pub(crate) fn reply_gated(&self, path: &str, gate: Arc<Notify>, reply: Reply) {
        self.push(path, Some(gate), reply);
    }

    fn push(&self, path: &str, gate: Option<Arc<Notify>>, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(Scripted { gate, reply });
    }

    pub(crate) fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ApiTransport for ScriptedTransport {
    async fn call(
        &self,
        _method: HttpMethod,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.calls.lock().unwrap().push((path.to_string(), body));
        let scripted = self
            .replies
            .lock()
            .unwrap()
            .get_mut(path)
            .and_then(VecDeque::pop_front);

        let Some(scripted) = scripted else {
            return Err(FormError::Status {
                status: 404,
                message: format!("no reply scripted for {}", path),
            });
        };

        if let Some(gate) = scripted.gate {
            gate.notified().await;
        }

        match scripted.reply {
            Reply::Json(value) => Ok(value),
            Reply::Status(status, message) => Err(FormError::Status {
                status,
                message: message.to_string(),
            }),
        }
    }
}
