//! Feed Connector
//!
//! Owns the single WebSocket connection to the telemetry feed and the
//! fixed-delay reconnect loop around it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::SignalSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::global::GlobalState;

/// Delay before re-dialing after the socket closes.
pub const RECONNECT_DELAY_MS: u32 = 3_000;

/// Reconnect bookkeeping: whether the connector is live and whether a retry
/// is pending. Kept free of browser types so the arm/cancel rules are
/// testable off the event loop.
#[derive(Debug, Clone)]
pub struct RetryState {
    active: bool,
    pending: bool,
}

impl RetryState {
    pub fn new() -> Self {
        Self {
            active: true,
            pending: false,
        }
    }

    /// A close arms a retry only while the connector is live and none is
    /// already pending, so each close yields exactly one attempt.
    pub fn try_arm(&mut self) -> bool {
        if !self.active || self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// The timer fired; dial again only if still live.
    pub fn fire(&mut self) -> bool {
        self.pending = false;
        self.active
    }

    /// Teardown: refuse future arms and forget any pending attempt.
    pub fn shutdown(&mut self) {
        self.active = false;
        self.pending = false;
    }

    /// Whether a retry is currently pending.
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Handle on the live feed connection.
///
/// At most one socket and one pending reconnect timer exist at a time;
/// `shutdown` releases both on the same path.
#[derive(Clone)]
pub struct FeedConnector {
    url: String,
    ws: Rc<RefCell<Option<WebSocket>>>,
    reconnect: Rc<RefCell<Option<Timeout>>>,
    gate: Rc<RefCell<RetryState>>,
}

impl FeedConnector {
    /// Create a connector for the given feed endpoint
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ws: Rc::new(RefCell::new(None)),
            reconnect: Rc::new(RefCell::new(None)),
            gate: Rc::new(RefCell::new(RetryState::new())),
        }
    }

    /// Dial the feed endpoint and install the event handlers
    pub fn connect(&self, state: GlobalState) {
        match WebSocket::new(&self.url) {
            Ok(ws) => {
                self.install_handlers(&ws, state);
                *self.ws.borrow_mut() = Some(ws);
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Feed connection failed: {:?}", e).into(),
                );
                self.schedule_reconnect(state);
            }
        }
    }

    fn install_handlers(&self, ws: &WebSocket, state: GlobalState) {
        // On open
        let state_clone = state.clone();
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"Feed connected".into());
            state_clone.feed_connected.set(true);
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        // On message
        let state_clone = state.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text: String = text.into();
                state_clone.record_message(&text);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        // On error: flag only. The transport follows up with its own close
        // event, which drives the retry.
        let state_clone = state.clone();
        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("Feed error: {:?}", e).into());
            state_clone.feed_connected.set(false);
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        // On close
        let connector = self.clone();
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!(
                    "Feed closed: code={}, reason={}",
                    event.code(),
                    event.reason()
                )
                .into(),
            );
            state.feed_connected.set(false);
            connector.schedule_reconnect(state.clone());
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();
    }

    /// Arm the reconnect timer when the gate allows it.
    fn schedule_reconnect(&self, state: GlobalState) {
        if !self.gate.borrow_mut().try_arm() {
            return;
        }

        let connector = self.clone();
        let timer = Timeout::new(RECONNECT_DELAY_MS, move || {
            connector.reconnect.borrow_mut().take();
            if connector.gate.borrow_mut().fire() {
                web_sys::console::log_1(&"Feed reconnecting".into());
                connector.connect(state);
            }
        });
        *self.reconnect.borrow_mut() = Some(timer);
    }

    /// Tear down with the view: cancel any pending retry and close the
    /// socket. Dropping the `Timeout` cancels it; the final close event the
    /// browser fires finds the gate closed and does not re-arm.
    pub fn shutdown(&self) {
        self.gate.borrow_mut().shutdown();
        self.reconnect.borrow_mut().take();
        if let Some(ws) = self.ws.borrow_mut().take() {
            let _ = ws.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RetryState;

    #[test]
    fn close_arms_exactly_one_retry() {
        let mut gate = RetryState::new();
        assert!(gate.try_arm());
        // a second close while one is pending must not double-arm
        assert!(!gate.try_arm());
        assert!(gate.is_pending());
    }

    #[test]
    fn fired_retry_allows_rearming() {
        let mut gate = RetryState::new();
        assert!(gate.try_arm());
        assert!(gate.fire());
        assert!(!gate.is_pending());
        assert!(gate.try_arm());
    }

    #[test]
    fn teardown_cancels_pending_retry() {
        let mut gate = RetryState::new();
        assert!(gate.try_arm());
        gate.shutdown();
        assert!(!gate.is_pending());
        // a timer racing teardown must not dial once it fires
        assert!(!gate.fire());
    }

    #[test]
    fn no_rearm_after_teardown() {
        let mut gate = RetryState::new();
        gate.shutdown();
        assert!(!gate.try_arm());
    }
}
