//! The decorated client: window state seen by a decoration.
//!
//! [`DecoratedClient`] mirrors the state of the managed window (can it be
//! closed, is it maximized, ...) and forwards action requests to the host
//! through a [`WindowBridge`]. The host applies state updates with the `set_*`
//! methods; each update emits the matching change signal only when the value
//! actually changed.
//!
//! Requests are fire-and-forget. The bridge may service them synchronously or
//! later; either way the resulting state arrives through the setters and
//! drives the buttons bound to it.
//!
//! # Example
//!
//! ```
//! use horizon_decoration::{ClientRequest, DecoratedClient, WindowBridge};
//!
//! struct EchoBridge;
//!
//! impl WindowBridge for EchoBridge {
//!     fn request(&self, client: &DecoratedClient, request: ClientRequest) {
//!         if request == ClientRequest::ToggleKeepAbove {
//!             client.set_keep_above(!client.is_keep_above());
//!         }
//!     }
//! }
//!
//! let client = DecoratedClient::new(EchoBridge);
//! client.request_toggle_keep_above();
//! assert!(client.is_keep_above());
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_decoration_core::logging::targets;
use horizon_decoration_core::{Property, Signal};

/// An action a decoration asks the host to perform on its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientRequest {
    Close,
    Minimize,
    ContextHelp,
    ToggleKeepAbove,
    ToggleKeepBelow,
    ToggleShade,
    ToggleOnAllDesktops,
    /// Maximize in both directions, or restore if already fully maximized.
    ToggleMaximization,
    ToggleMaximizeVertical,
    ToggleMaximizeHorizontal,
    ShowWindowMenu,
    ShowApplicationMenu,
}

/// The host side of a decorated client.
///
/// Implemented by the window manager integration. `request` must not block;
/// it may update `client` state before returning or at any later point.
pub trait WindowBridge: Send + Sync {
    /// Perform `request` on the window represented by `client`.
    fn request(&self, client: &DecoratedClient, request: ClientRequest);
}

macro_rules! client_state {
    ($(#[$doc:meta])* $field:ident, $getter:ident, $setter:ident, $signal:ident) => {
        $(#[$doc])*
        pub fn $getter(&self) -> bool {
            self.$field.get()
        }

        #[doc = concat!("Update `", stringify!($field), "`, emitting `", stringify!($signal), "` on change.")]
        pub fn $setter(&self, value: bool) {
            if self.$field.set(value) {
                tracing::trace!(target: targets::CLIENT, state = stringify!($field), value, "client state changed");
                self.$signal.emit(value);
            }
        }
    };
}

/// Window state and action requests for one decorated window.
pub struct DecoratedClient {
    bridge: Box<dyn WindowBridge>,

    closeable: Property<bool>,
    minimizable: Property<bool>,
    maximizable: Property<bool>,
    shadeable: Property<bool>,
    provides_context_help: Property<bool>,
    has_application_menu: Property<bool>,
    maximized_horizontally: Property<bool>,
    maximized_vertically: Property<bool>,
    keep_above: Property<bool>,
    keep_below: Property<bool>,
    shaded: Property<bool>,
    on_all_desktops: Property<bool>,

    pub closeable_changed: Signal<bool>,
    pub minimizable_changed: Signal<bool>,
    pub maximizable_changed: Signal<bool>,
    pub shadeable_changed: Signal<bool>,
    pub provides_context_help_changed: Signal<bool>,
    pub has_application_menu_changed: Signal<bool>,
    pub maximized_horizontally_changed: Signal<bool>,
    pub maximized_vertically_changed: Signal<bool>,
    /// Emitted when the window becomes or stops being maximized in both
    /// directions.
    pub maximized_changed: Signal<bool>,
    pub keep_above_changed: Signal<bool>,
    pub keep_below_changed: Signal<bool>,
    pub shaded_changed: Signal<bool>,
    pub on_all_desktops_changed: Signal<bool>,
}

impl DecoratedClient {
    /// Create a client whose requests go to `bridge`. All state starts `false`.
    pub fn new(bridge: impl WindowBridge + 'static) -> Arc<Self> {
        Arc::new(Self {
            bridge: Box::new(bridge),
            closeable: Property::new(false),
            minimizable: Property::new(false),
            maximizable: Property::new(false),
            shadeable: Property::new(false),
            provides_context_help: Property::new(false),
            has_application_menu: Property::new(false),
            maximized_horizontally: Property::new(false),
            maximized_vertically: Property::new(false),
            keep_above: Property::new(false),
            keep_below: Property::new(false),
            shaded: Property::new(false),
            on_all_desktops: Property::new(false),
            closeable_changed: Signal::new(),
            minimizable_changed: Signal::new(),
            maximizable_changed: Signal::new(),
            shadeable_changed: Signal::new(),
            provides_context_help_changed: Signal::new(),
            has_application_menu_changed: Signal::new(),
            maximized_horizontally_changed: Signal::new(),
            maximized_vertically_changed: Signal::new(),
            maximized_changed: Signal::new(),
            keep_above_changed: Signal::new(),
            keep_below_changed: Signal::new(),
            shaded_changed: Signal::new(),
            on_all_desktops_changed: Signal::new(),
        })
    }

    // =========================================================================
    // Capabilities
    // =========================================================================

    client_state!(
        /// Whether the window can be closed.
        closeable, is_closeable, set_closeable, closeable_changed
    );
    client_state!(
        /// Whether the window can be minimized.
        minimizable, is_minimizable, set_minimizable, minimizable_changed
    );
    client_state!(
        /// Whether the window can be maximized.
        maximizable, is_maximizable, set_maximizable, maximizable_changed
    );
    client_state!(
        /// Whether the window can be shaded (rolled up into its title bar).
        shadeable, is_shadeable, set_shadeable, shadeable_changed
    );
    client_state!(
        /// Whether the window offers context help.
        provides_context_help, provides_context_help, set_provides_context_help,
        provides_context_help_changed
    );
    client_state!(
        /// Whether the window exports an application menu.
        has_application_menu, has_application_menu, set_has_application_menu,
        has_application_menu_changed
    );

    // =========================================================================
    // State
    // =========================================================================

    client_state!(
        /// Whether the window stays above other windows.
        keep_above, is_keep_above, set_keep_above, keep_above_changed
    );
    client_state!(
        /// Whether the window stays below other windows.
        keep_below, is_keep_below, set_keep_below, keep_below_changed
    );
    client_state!(
        /// Whether the window is shaded.
        shaded, is_shaded, set_shaded, shaded_changed
    );
    client_state!(
        /// Whether the window is shown on all virtual desktops.
        on_all_desktops, is_on_all_desktops, set_on_all_desktops, on_all_desktops_changed
    );

    /// Whether the window is maximized horizontally.
    pub fn is_maximized_horizontally(&self) -> bool {
        self.maximized_horizontally.get()
    }

    /// Whether the window is maximized vertically.
    pub fn is_maximized_vertically(&self) -> bool {
        self.maximized_vertically.get()
    }

    /// Whether the window is maximized in both directions.
    pub fn is_maximized(&self) -> bool {
        self.is_maximized_horizontally() && self.is_maximized_vertically()
    }

    /// Update horizontal maximization.
    ///
    /// Emits `maximized_horizontally_changed`, then `maximized_changed` if the
    /// combined state flipped.
    pub fn set_maximized_horizontally(&self, value: bool) {
        let was_maximized = self.is_maximized();
        if self.maximized_horizontally.set(value) {
            tracing::trace!(target: targets::CLIENT, value, "maximized horizontally changed");
            self.maximized_horizontally_changed.emit(value);
            self.notify_maximized(was_maximized);
        }
    }

    /// Update vertical maximization.
    ///
    /// Emits `maximized_vertically_changed`, then `maximized_changed` if the
    /// combined state flipped.
    pub fn set_maximized_vertically(&self, value: bool) {
        let was_maximized = self.is_maximized();
        if self.maximized_vertically.set(value) {
            tracing::trace!(target: targets::CLIENT, value, "maximized vertically changed");
            self.maximized_vertically_changed.emit(value);
            self.notify_maximized(was_maximized);
        }
    }

    /// Maximize or restore in both directions.
    pub fn set_maximized(&self, value: bool) {
        self.set_maximized_horizontally(value);
        self.set_maximized_vertically(value);
    }

    fn notify_maximized(&self, was_maximized: bool) {
        let maximized = self.is_maximized();
        if maximized != was_maximized {
            self.maximized_changed.emit(maximized);
        }
    }

    // =========================================================================
    // Requests
    // =========================================================================

    fn send(&self, request: ClientRequest) {
        tracing::debug!(target: targets::CLIENT, ?request, "client request");
        self.bridge.request(self, request);
    }

    /// Ask the host to close the window.
    pub fn request_close(&self) {
        self.send(ClientRequest::Close);
    }

    /// Ask the host to minimize the window.
    pub fn request_minimize(&self) {
        self.send(ClientRequest::Minimize);
    }

    /// Ask the host to enter context help mode.
    pub fn request_context_help(&self) {
        self.send(ClientRequest::ContextHelp);
    }

    /// Ask the host to toggle keep-above.
    pub fn request_toggle_keep_above(&self) {
        self.send(ClientRequest::ToggleKeepAbove);
    }

    /// Ask the host to toggle keep-below.
    pub fn request_toggle_keep_below(&self) {
        self.send(ClientRequest::ToggleKeepBelow);
    }

    /// Ask the host to toggle shading.
    pub fn request_toggle_shade(&self) {
        self.send(ClientRequest::ToggleShade);
    }

    /// Ask the host to toggle on-all-desktops.
    pub fn request_toggle_on_all_desktops(&self) {
        self.send(ClientRequest::ToggleOnAllDesktops);
    }

    /// Ask the host to maximize fully, or restore if already maximized.
    pub fn request_toggle_maximization(&self) {
        self.send(ClientRequest::ToggleMaximization);
    }

    /// Ask the host to toggle vertical maximization only.
    pub fn request_toggle_maximize_vertical(&self) {
        self.send(ClientRequest::ToggleMaximizeVertical);
    }

    /// Ask the host to toggle horizontal maximization only.
    pub fn request_toggle_maximize_horizontal(&self) {
        self.send(ClientRequest::ToggleMaximizeHorizontal);
    }

    /// Ask the host to show the window operations menu.
    pub fn request_show_window_menu(&self) {
        self.send(ClientRequest::ShowWindowMenu);
    }

    /// Ask the host to show the window's application menu.
    pub fn request_show_application_menu(&self) {
        self.send(ClientRequest::ShowApplicationMenu);
    }
}

impl fmt::Debug for DecoratedClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratedClient")
            .field("closeable", &self.is_closeable())
            .field("minimizable", &self.is_minimizable())
            .field("maximizable", &self.is_maximizable())
            .field("shadeable", &self.is_shadeable())
            .field("maximized_horizontally", &self.is_maximized_horizontally())
            .field("maximized_vertically", &self.is_maximized_vertically())
            .field("keep_above", &self.is_keep_above())
            .field("keep_below", &self.is_keep_below())
            .field("shaded", &self.is_shaded())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(DecoratedClient: Send, Sync);
