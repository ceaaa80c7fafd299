//! Seams to the host application
//!
//! The registry never renders, translates or persists anything itself. The
//! host plugs these in.

use serde_json::Value;

use crate::types::WindowId;
use crate::window::WindowKind;

/// Notified synchronously when a multi-instance window opens
/// (the host uses it to keep e.g. a conversation history list).
pub trait WindowObserver {
    fn on_window_opened(&mut self, title: &str, id: WindowId);
}

impl<F> WindowObserver for F
where
    F: FnMut(&str, WindowId),
{
    fn on_window_opened(&mut self, title: &str, id: WindowId) {
        self(title, id)
    }
}

/// Opaque translation lookup
pub trait StringTable {
    /// Translated string for `key`, or `None` to use the built-in text
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<F> StringTable for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// String table with no entries; every title uses its built-in English text
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultStrings;

impl StringTable for DefaultStrings {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Produces the content shown inside a window.
///
/// `Output` is whatever the host's UI layer renders (a DOM node handle, a
/// component description, ...). The payload is passed through untouched.
pub trait RenderContent {
    type Output;

    fn render(&self, kind: WindowKind, id: WindowId, payload: &Value) -> Self::Output;
}
