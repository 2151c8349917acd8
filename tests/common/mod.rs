#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::{anyhow, Result};
use lapwatch_lib::{
    app::StopwatchApp,
    records::RecordStore,
    storage::{Storage, DEFAULT_NAMESPACE, SAVED_TIMES_KEY},
    timer::{ControlState, ManualClock, StopwatchController},
    ui::{Display, Prompt},
};

/// Answers dialogs from a queue and remembers what was asked.
#[derive(Default)]
pub struct ScriptedPrompt {
    confirms: VecDeque<bool>,
    texts: VecDeque<Option<String>>,
    pub asked: Vec<(String, String)>,
}

impl ScriptedPrompt {
    pub fn confirm_with(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    pub fn type_text(mut self, answer: Option<&str>) -> Self {
        self.texts.push_back(answer.map(str::to_string));
        self
    }

    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirms.push_back(answer);
    }

    pub fn queue_text(&mut self, answer: Option<&str>) {
        self.texts.push_back(answer.map(str::to_string));
    }
}

impl Prompt for ScriptedPrompt {
    async fn confirm(&mut self, title: &str, message: &str) -> Result<bool> {
        self.asked.push((title.to_string(), message.to_string()));
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    async fn prompt_text(&mut self, title: &str, message: &str) -> Result<Option<String>> {
        self.asked.push((title.to_string(), message.to_string()));
        Ok(self.texts.pop_front().flatten())
    }
}

/// Reads back nothing and refuses every write.
#[derive(Default, Clone)]
pub struct FailingStorage;

impl Storage for FailingStorage {
    async fn get_string_collection(
        &self,
        _namespace: &str,
        _key: &str,
        default: Vec<String>,
    ) -> Result<Vec<String>> {
        Ok(default)
    }

    async fn put_string_collection(
        &self,
        _namespace: &str,
        _key: &str,
        _items: &[String],
    ) -> Result<()> {
        Err(anyhow!("disk full"))
    }
}

#[derive(Default)]
pub struct RecordingDisplay {
    pub times: Mutex<Vec<String>>,
    pub records: Mutex<Vec<Vec<String>>>,
    pub controls: Mutex<Vec<ControlState>>,
}

impl RecordingDisplay {
    pub fn last_time(&self) -> Option<String> {
        self.times.lock().unwrap().last().cloned()
    }

    pub fn last_records(&self) -> Option<Vec<String>> {
        self.records.lock().unwrap().last().cloned()
    }

    pub fn last_controls(&self) -> Option<ControlState> {
        self.controls.lock().unwrap().last().copied()
    }
}

impl Display for RecordingDisplay {
    fn show_time(&self, formatted: &str) {
        self.times.lock().unwrap().push(formatted.to_string());
    }

    fn show_records(&self, records: &[String]) {
        self.records.lock().unwrap().push(records.to_vec());
    }

    fn set_controls(&self, controls: ControlState) {
        self.controls.lock().unwrap().push(controls);
    }
}

pub struct Harness<S> {
    pub app: StopwatchApp<S, ScriptedPrompt>,
    pub clock: ManualClock,
    pub display: Arc<RecordingDisplay>,
}

pub fn harness<S: Storage>(storage: S, prompt: ScriptedPrompt) -> Harness<S> {
    let clock = ManualClock::new();
    let display = Arc::new(RecordingDisplay::default());
    let controller = StopwatchController::new(
        Arc::new(clock.clone()),
        display.clone(),
        Duration::from_millis(5),
    );
    let records = RecordStore::new(storage, DEFAULT_NAMESPACE, SAVED_TIMES_KEY);
    let app = StopwatchApp::new(controller, records, prompt, display.clone());
    Harness {
        app,
        clock,
        display,
    }
}
