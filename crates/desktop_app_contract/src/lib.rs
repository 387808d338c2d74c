//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! The window manager never looks inside window content. Apps hand it an [`AppContent`]
//! implementation through a [`ContentFactory`]; the runtime keeps the result as an opaque
//! [`ContentHandle`] and only ever asks it to mount or tear down.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, rc::Rc};

use leptos::View;
use serde::{Deserialize, Serialize};

/// Stable identifier for an app package/module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the `segment.segment...` policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected namespaced dotted segments"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time/runtime trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Lifecycle events emitted by the desktop window manager.
pub enum AppLifecycleEvent {
    /// Window was created and its content handle allocated.
    Opened,
    /// Window was brought to the front.
    Focused,
    /// Window was minimized.
    Minimized,
    /// Window was restored from the minimized set.
    Restored,
    /// Window now covers the viewport below the top bar.
    EnteredFullScreen,
    /// Window returned to its responsive geometry.
    ExitedFullScreen,
    /// Window was removed and its content is about to be torn down.
    Closed,
}

impl AppLifecycleEvent {
    /// Returns a stable string token for debugging hooks and DOM data attributes.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Focused => "focused",
            Self::Minimized => "minimized",
            Self::Restored => "restored",
            Self::EnteredFullScreen => "entered-fullscreen",
            Self::ExitedFullScreen => "exited-fullscreen",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Geometry handed to mounted content; content never writes it back.
pub struct ContentGeometry {
    /// Rendered window width in CSS pixels.
    pub width: f64,
    /// Rendered window height in CSS pixels.
    pub height: f64,
    /// Whether the window currently covers the viewport below the top bar.
    pub fullscreen: bool,
}

#[derive(Debug, Clone)]
/// Mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Stable app id from the runtime catalog.
    pub app_id: ApplicationId,
    /// Window geometry at mount time.
    pub geometry: ContentGeometry,
}

/// Capability surface implemented by every piece of window content.
///
/// The runtime depends only on this trait, never on a concrete app type.
pub trait AppContent {
    /// Application this content belongs to.
    fn application_id(&self) -> &ApplicationId;

    /// Builds the view rendered inside the window body.
    fn mount(&self, context: AppMountContext) -> View;

    /// Releases resources held by the content (audio streams, timers, embedded widgets).
    fn teardown(&self) {}
}

/// Static constructor used by the application catalog to create fresh content per window.
pub type ContentFactory = fn(ApplicationId) -> Rc<dyn AppContent>;

/// Opaque, cheaply clonable reference to a window's content.
///
/// Equality is identity: two handles are equal only when they point at the same content
/// instance.
#[derive(Clone)]
pub struct ContentHandle(Rc<dyn AppContent>);

impl ContentHandle {
    /// Wraps freshly created content.
    pub fn new(content: Rc<dyn AppContent>) -> Self {
        Self(content)
    }

    /// Mounts the wrapped content.
    pub fn mount(&self, context: AppMountContext) -> View {
        self.0.mount(context)
    }

    /// Tears down the wrapped content.
    pub fn teardown(&self) {
        self.0.teardown();
    }

    /// Application that produced this content.
    pub fn application_id(&self) -> &ApplicationId {
        self.0.application_id()
    }
}

impl PartialEq for ContentHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ContentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentHandle")
            .field(&self.0.application_id().as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use leptos::IntoView;

    use super::*;

    struct CountingContent {
        app_id: ApplicationId,
        teardowns: Cell<u32>,
    }

    impl AppContent for CountingContent {
        fn application_id(&self) -> &ApplicationId {
            &self.app_id
        }

        fn mount(&self, _context: AppMountContext) -> View {
            ().into_view()
        }

        fn teardown(&self) {
            self.teardowns.set(self.teardowns.get() + 1);
        }
    }

    #[test]
    fn application_id_requires_dotted_namespaces() {
        assert!(ApplicationId::new("system.terminal").is_ok());
        assert!(ApplicationId::new("system.music-player").is_ok());
        assert!(ApplicationId::new("terminal").is_err());
        assert!(ApplicationId::new("System.terminal").is_err());
        assert!(ApplicationId::new("system..terminal").is_err());
        assert!(ApplicationId::new("system.terminal-").is_err());
    }

    #[test]
    fn content_handles_compare_by_identity() {
        let content = Rc::new(CountingContent {
            app_id: ApplicationId::trusted("system.terminal"),
            teardowns: Cell::new(0),
        });
        let first = ContentHandle::new(content.clone());
        let second = first.clone();
        let other = ContentHandle::new(Rc::new(CountingContent {
            app_id: ApplicationId::trusted("system.terminal"),
            teardowns: Cell::new(0),
        }));

        assert_eq!(first, second);
        assert_ne!(first, other);

        second.teardown();
        assert_eq!(content.teardowns.get(), 1);
        assert_eq!(first.application_id().as_str(), "system.terminal");
    }

    #[test]
    fn lifecycle_tokens_are_stable() {
        assert_eq!(AppLifecycleEvent::EnteredFullScreen.token(), "entered-fullscreen");
        assert_eq!(AppLifecycleEvent::Closed.token(), "closed");
    }
}
