//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reflow_core::{Document, DocumentId, FormattingOptions, Solution};
use reflow_format::{
    CancellationToken, EngineError, FormatEvent, FormatLogger, FormattingEngine, SharedLogger,
};

// ---------------------------------------------------------------------------
// Scripted engine
// ---------------------------------------------------------------------------

/// What the engine does for one document.
#[derive(Debug, Clone)]
pub enum Script {
    Output(&'static str),
    Fail(&'static str),
    /// Reports cancellation whether or not the token fired.
    Cancelled,
    Panic,
}

/// Engine returning canned output per document after a simulated latency.
///
/// Documents without a script come back unchanged. Honours cancellation while
/// waiting.
#[derive(Default)]
pub struct ScriptedEngine {
    scripts: HashMap<DocumentId, (Script, Duration)>,
    calls: AtomicUsize,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, id: &str, script: Script, latency: Duration) -> Self {
        self.scripts.insert(DocumentId::from(id), (script, latency));
        self
    }

    pub fn output(self, id: &str, text: &'static str) -> Self {
        self.script(id, Script::Output(text), Duration::ZERO)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormattingEngine for ScriptedEngine {
    async fn format(
        &self,
        document: &Document,
        _options: &FormattingOptions,
        cancel: &CancellationToken,
    ) -> Result<Document, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let Some((script, latency)) = self.scripts.get(document.id()).cloned() else {
            return Ok(document.clone());
        };

        tokio::select! {
            _ = cancel.cancelled() => return Err(EngineError::Cancelled),
            _ = tokio::time::sleep(latency) => {}
        }

        match script {
            Script::Output(text) => Ok(document.with_text(text)),
            Script::Fail(message) => Err(EngineError::failed(message)),
            Script::Cancelled => Err(EngineError::Cancelled),
            Script::Panic => panic!("engine crashed on {}", document.id()),
        }
    }
}

// ---------------------------------------------------------------------------
// Recording logger
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logged {
    Started(String),
    Formatted(String),
}

/// Records every event; optionally cancels a token after the N-th `Formatted`.
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<Logged>>,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl RecordingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn cancelling_after(formatted: usize, cancel: CancellationToken) -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            cancel_after: Some((formatted, cancel)),
        })
    }

    pub fn formatted(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                Logged::Formatted(file) => Some(file.clone()),
                Logged::Started(_) => None,
            })
            .collect()
    }

    pub fn started(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches!(e, Logged::Started(_)))
            .count()
    }
}

impl FormatLogger for RecordingLogger {
    fn log(&self, event: FormatEvent<'_>) {
        let mut events = self.events.lock().unwrap();
        let file = event.file().to_owned();
        match event {
            FormatEvent::FormattingStarted { .. } => events.push(Logged::Started(file)),
            FormatEvent::Formatted { .. } => events.push(Logged::Formatted(file)),
        }
        if let Some((limit, cancel)) = &self.cancel_after {
            let formatted = events
                .iter()
                .filter(|e| matches!(e, Logged::Formatted(_)))
                .count();
            if formatted >= *limit {
                cancel.cancel();
            }
        }
    }
}

pub fn shared(logger: &Arc<RecordingLogger>) -> SharedLogger {
    logger.clone()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Documents `d1..=dn` at `src/f<i>.cs` with text `text <i>`.
pub fn solution(n: usize) -> Solution {
    Solution::new((1..=n).map(|i| {
        Document::new(
            format!("d{i}"),
            format!("src/f{i}.cs"),
            format!("text {i}"),
        )
    }))
}

/// Every document of `solution` with empty options, in id order.
pub fn batch(solution: &Solution) -> Vec<(Document, FormattingOptions)> {
    solution
        .documents()
        .map(|d| (d.clone(), FormattingOptions::new()))
        .collect()
}

pub fn text_of(solution: &Solution, id: &str) -> String {
    solution
        .document(&DocumentId::from(id))
        .map(|d| d.text().as_str().to_owned())
        .unwrap_or_default()
}
