//! stencilwin UI - retained-mode window system core
//!
//! Windows form a tree of top-level windows and their children. Every
//! window carries a procedure that receives [`Message`]s, either
//! synchronously through [`Ui::send`] or deferred through [`Ui::post`] and a
//! later [`Ui::flush`]. Top-level windows clip through a stencil buffer in
//! which each one owns an 8-bit id.
//!
//! ## Quick Start
//!
//! ```rust
//! use stencilwin_core::geometry::Rect;
//! use stencilwin_ui::{Message, Procedure, Reply, Ui, UiConfig, WindowFlags};
//!
//! let mut ui = Ui::new(UiConfig::default());
//! let proc = Procedure::from_fn(|_ui, _win, msg| match msg {
//!     Message::Paint => Reply::HANDLED,
//!     _ => Reply::Unhandled,
//! });
//!
//! let window = ui
//!     .create_window("Hello", WindowFlags::NONE, Rect::new(20, 40, 200, 120), None, proc, None)
//!     .unwrap();
//! ui.flush();
//! assert_eq!(ui.focused(), Some(window));
//! ```

pub mod config;
pub mod dialog;
pub mod dispatch;
pub mod draw;
pub mod error;
pub mod flags;
pub mod focus;
pub mod hooks;
pub mod input;
pub mod layout;
pub mod message;
pub mod queue;
pub mod render;
pub mod stencil;
pub mod theme;
pub mod tree;
pub mod window;

pub use config::UiConfig;
pub use error::{UiError, UiResult};
pub use flags::WindowFlags;
pub use hooks::HookId;
pub use input::{InputEvent, MouseButton};
pub use layout::WindowDef;
pub use message::{Dispatch, Key, Message, MessageKind, Payload, Reply, ToolbarButton, notify};
pub use queue::{QueueStats, Target};
pub use render::{DrawCall, NullBackend, RecordingBackend, RenderBackend};
pub use window::{Procedure, Window, WindowId, WindowProc};

use hooks::HookRegistry;
use input::PointerState;
use queue::MessageQueue;
use stencilwin_core::alloc::SparseSet;
use stencilwin_core::geometry::Rect;

/// The window system context.
///
/// Owns every window, the deferred queue, the hook table and the
/// focus/capture/tracking state. All operations go through it.
pub struct Ui {
    pub(crate) config: UiConfig,
    pub(crate) windows: SparseSet<Window>,
    /// Top-level windows, back to front.
    pub(crate) top_level: Vec<WindowId>,
    pub(crate) queue: MessageQueue,
    pub(crate) hooks: HookRegistry,
    pub(crate) focused: Option<WindowId>,
    pub(crate) captured: Option<WindowId>,
    pub(crate) tracked: Option<WindowId>,
    pub(crate) pointer: PointerState,
    pub(crate) renderer: Box<dyn RenderBackend>,
    pub(crate) running: bool,
    pub(crate) dialog_result: i32,
    pub(crate) stencil_passes: u64,
}

impl Ui {
    /// Create a window system that draws nothing.
    pub fn new(config: UiConfig) -> Self {
        Self::with_backend(config, Box::new(NullBackend))
    }

    pub fn with_backend(config: UiConfig, renderer: Box<dyn RenderBackend>) -> Self {
        tracing::debug!(
            "Creating window system for a {}x{} screen",
            config.screen.width,
            config.screen.height
        );
        Self {
            config,
            windows: SparseSet::new(),
            top_level: Vec::new(),
            queue: MessageQueue::new(),
            hooks: HookRegistry::new(),
            focused: None,
            captured: None,
            tracked: None,
            pointer: PointerState::default(),
            renderer,
            running: true,
            dialog_result: 0,
            stencil_passes: 0,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Backend used by procedures to draw their client areas.
    pub fn renderer(&mut self) -> &mut dyn RenderBackend {
        self.renderer.as_mut()
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn RenderBackend>) {
        self.renderer = renderer;
    }

    /// The whole logical screen.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.config.screen.width, self.config.screen.height)
    }

    pub fn window(&self, window: WindowId) -> Option<&Window> {
        self.windows.try_get(window.slot())
    }

    pub fn window_mut(&mut self, window: WindowId) -> Option<&mut Window> {
        self.windows.try_get_mut(window.slot())
    }

    /// Whether `window` still refers to a live window.
    pub fn is_alive(&self, window: WindowId) -> bool {
        self.windows.contains(window.slot())
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Top-level windows, back to front.
    pub fn top_level_windows(&self) -> &[WindowId] {
        &self.top_level
    }

    pub fn children(&self, window: WindowId) -> &[WindowId] {
        self.window(window).map(Window::children).unwrap_or(&[])
    }

    pub fn parent(&self, window: WindowId) -> Option<WindowId> {
        self.window(window).and_then(Window::parent)
    }

    pub fn queue_stats(&self) -> QueueStats {
        self.queue.stats()
    }

    /// Messages waiting for the next [`flush`](Ui::flush).
    pub fn pending_messages(&self) -> usize {
        self.queue.pending()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the event loop and any running dialog.
    pub fn quit(&mut self) {
        tracing::debug!("Quit requested");
        self.running = false;
    }

    pub(crate) fn require(&self, window: WindowId) -> UiResult<&Window> {
        self.window(window).ok_or(UiError::WindowNotFound(window))
    }

    pub(crate) fn require_mut(&mut self, window: WindowId) -> UiResult<&mut Window> {
        self.window_mut(window).ok_or(UiError::WindowNotFound(window))
    }
}
