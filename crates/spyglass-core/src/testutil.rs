//! Shared test double for the driver boundary.
//!
//! A configurable in-memory [`UiDriver`] with call counters, so tests
//! can assert not just outcomes but how many driver commands a flow
//! issued (context switches, app restarts, clicks).

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use spyglass_driver::{DriverError, ElementId, Rect, Selector, UiDriver};

pub const NATIVE: &str = "NATIVE_APP";

#[derive(Default)]
pub struct MockDriver {
    /// Selectors currently "on screen".
    present: Mutex<HashSet<String>>,
    /// Rects served by element_rect, keyed by selector.
    rects: Mutex<HashMap<String, Rect>>,
    /// Element handles served by find_elements, keyed by selector.
    elements: Mutex<HashMap<String, Vec<String>>>,
    /// Clicking key removes value from the present set (button closes
    /// a screen).
    click_removes: Mutex<HashMap<String, String>>,
    /// Pressing back removes this selector from the present set.
    back_removes: Mutex<Option<String>>,

    /// Context ids the driver currently enumerates.
    contexts: Mutex<Vec<String>>,
    /// Replacement context list applied on activate_app (simulates a
    /// webview that only re-enumerates after relaunch).
    contexts_after_relaunch: Mutex<Option<Vec<String>>>,
    current_context: Mutex<String>,

    pub switch_calls: AtomicUsize,
    pub context_list_calls: AtomicUsize,
    pub terminate_calls: AtomicUsize,
    pub activate_calls: AtomicUsize,
    pub back_calls: AtomicUsize,
    pub clicks: Mutex<Vec<String>>,
    pub element_clicks: Mutex<Vec<String>>,
}

impl MockDriver {
    pub fn new() -> Self {
        let driver = Self::default();
        *driver.contexts.lock().unwrap() = vec![NATIVE.to_string()];
        *driver.current_context.lock().unwrap() = NATIVE.to_string();
        driver
    }

    /// A driver that already enumerates a webview context alongside
    /// the native one.
    pub fn with_webview(webview_id: &str) -> Self {
        let driver = Self::new();
        driver
            .contexts
            .lock()
            .unwrap()
            .push(webview_id.to_string());
        driver
    }

    pub fn set_present(&self, selector: &str, present: bool) {
        let mut set = self.present.lock().unwrap();
        if present {
            set.insert(selector.to_string());
        } else {
            set.remove(selector);
        }
    }

    pub fn set_rect(&self, selector: &str, x: f64, y: f64, width: f64, height: f64) {
        self.rects.lock().unwrap().insert(
            selector.to_string(),
            Rect {
                x,
                y,
                width,
                height,
            },
        );
    }

    pub fn set_elements(&self, selector: &str, ids: &[&str]) {
        self.elements.lock().unwrap().insert(
            selector.to_string(),
            ids.iter().map(|s| s.to_string()).collect(),
        );
    }

    /// Clicking `button` makes `target` disappear.
    pub fn click_removes(&self, button: &str, target: &str) {
        self.click_removes
            .lock()
            .unwrap()
            .insert(button.to_string(), target.to_string());
    }

    /// Pressing back makes `target` disappear.
    pub fn back_removes(&self, target: &str) {
        *self.back_removes.lock().unwrap() = Some(target.to_string());
    }

    pub fn set_contexts(&self, contexts: &[&str]) {
        *self.contexts.lock().unwrap() = contexts.iter().map(|s| s.to_string()).collect();
    }

    pub fn set_contexts_after_relaunch(&self, contexts: &[&str]) {
        *self.contexts_after_relaunch.lock().unwrap() =
            Some(contexts.iter().map(|s| s.to_string()).collect());
    }

    pub fn set_current_context(&self, id: &str) {
        *self.current_context.lock().unwrap() = id.to_string();
    }

    pub fn current_context_sync(&self) -> String {
        self.current_context.lock().unwrap().clone()
    }

    pub fn click_log(&self) -> Vec<String> {
        self.clicks.lock().unwrap().clone()
    }

    pub fn element_click_log(&self) -> Vec<String> {
        self.element_clicks.lock().unwrap().clone()
    }
}

#[async_trait]
impl UiDriver for MockDriver {
    async fn is_present(
        &self,
        selector: &Selector,
        suppress_errors: bool,
    ) -> Result<bool, DriverError> {
        let present = self.present.lock().unwrap().contains(selector.as_str());
        if !present && !suppress_errors {
            return Err(DriverError::NoSuchElement {
                selector: selector.to_string(),
            });
        }
        Ok(present)
    }

    async fn click(&self, selector: &Selector) -> Result<(), DriverError> {
        if !self.present.lock().unwrap().contains(selector.as_str()) {
            return Err(DriverError::NoSuchElement {
                selector: selector.to_string(),
            });
        }
        self.clicks.lock().unwrap().push(selector.to_string());
        if let Some(target) = self.click_removes.lock().unwrap().get(selector.as_str()) {
            self.present.lock().unwrap().remove(target);
        }
        Ok(())
    }

    async fn element_rect(&self, selector: &Selector) -> Result<Rect, DriverError> {
        self.rects
            .lock()
            .unwrap()
            .get(selector.as_str())
            .copied()
            .ok_or_else(|| DriverError::NoSuchElement {
                selector: selector.to_string(),
            })
    }

    async fn find_elements(&self, selector: &Selector) -> Result<Vec<ElementId>, DriverError> {
        let ids = self
            .elements
            .lock()
            .unwrap()
            .get(selector.as_str())
            .cloned()
            .unwrap_or_default();
        Ok(ids.into_iter().map(ElementId::new).collect())
    }

    async fn click_element(&self, element: &ElementId) -> Result<(), DriverError> {
        self.element_clicks
            .lock()
            .unwrap()
            .push(element.to_string());
        Ok(())
    }

    async fn execute_script(&self, _script: &str, _args: &[Value]) -> Result<Value, DriverError> {
        Ok(Value::Null)
    }

    async fn back(&self) -> Result<(), DriverError> {
        self.back_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(target) = self.back_removes.lock().unwrap().as_ref() {
            self.present.lock().unwrap().remove(target);
        }
        Ok(())
    }

    async fn contexts(&self) -> Result<Vec<String>, DriverError> {
        self.context_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.contexts.lock().unwrap().clone())
    }

    async fn current_context(&self) -> Result<String, DriverError> {
        Ok(self.current_context.lock().unwrap().clone())
    }

    async fn switch_context(&self, id: &str) -> Result<(), DriverError> {
        self.switch_calls.fetch_add(1, Ordering::SeqCst);
        let known = self.contexts.lock().unwrap().contains(&id.to_string());
        if !known && id != NATIVE {
            return Err(DriverError::CommandFailed {
                command: "setContext",
                message: format!("no such context: {}", id),
            });
        }
        *self.current_context.lock().unwrap() = id.to_string();
        Ok(())
    }

    async fn terminate_app(&self, _bundle_id: &str) -> Result<(), DriverError> {
        self.terminate_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn activate_app(&self, _bundle_id: &str) -> Result<(), DriverError> {
        self.activate_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(contexts) = self.contexts_after_relaunch.lock().unwrap().take() {
            *self.contexts.lock().unwrap() = contexts;
        }
        Ok(())
    }
}
