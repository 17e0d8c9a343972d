//! Decoration buttons.
//!
//! This module provides [`DecorationButton`], the interactive element shown in
//! a window's title bar, and [`DecorationButtonType`], the closed set of
//! button kinds.
//!
//! # Overview
//!
//! A button owns:
//! - Its geometry in decoration coordinates
//! - The flags enabled, checkable, checked, hovered, pressed and visible
//! - The set of pointer buttons it reacts to
//!
//! Every state change emits the matching `*_changed` signal exactly once,
//! after the new value is stored. Setting a value equal to the current one
//! emits nothing.
//!
//! # Client Bindings
//!
//! On creation a button binds itself to the [`DecoratedClient`] of its
//! decoration according to its type: the close button is enabled while the
//! window is closeable, the maximize button is checked while the window is
//! maximized, and so on. The bindings live exactly as long as the button.
//!
//! # Event Handling
//!
//! [`DecorationButton::handle_event`] consumes hover, press and release events:
//! - Hover is accepted only while enabled
//! - A press is accepted only when visible, enabled, inside the geometry and
//!   made with an accepted pointer button
//! - A release is accepted only for a pointer button the button holds; it
//!   clicks when the pointer is still inside the geometry
//!
//! A click emits [`DecorationButton::clicked`] and sends the type's request to
//! the client.

use std::fmt;
use std::sync::{Arc, Weak};

use horizon_decoration_core::logging::targets;
use horizon_decoration_core::{ConnectionGuard, Property, Signal};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::client::DecoratedClient;
use crate::decoration::{ButtonId, Decoration};
use crate::error::{DecorationError, Result};
use crate::event::{MouseButton, MouseButtons, PointerEvent, PointerEventKind};
use crate::geometry::{Point, Rect, Size};

/// The kind of a decoration button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecorationButtonType {
    /// A theme-defined button with no built-in action.
    Custom,
    Close,
    Minimize,
    Maximize,
    /// Roll the window up into its title bar.
    Shade,
    KeepAbove,
    KeepBelow,
    QuickHelp,
    OnAllDesktops,
    /// The window operations menu.
    Menu,
    ApplicationMenu,
    ContextHelp,
    /// Empty space between buttons.
    Spacer,
}

impl DecorationButtonType {
    /// Every button type, in declaration order.
    pub const ALL: [DecorationButtonType; 13] = [
        Self::Custom,
        Self::Close,
        Self::Minimize,
        Self::Maximize,
        Self::Shade,
        Self::KeepAbove,
        Self::KeepBelow,
        Self::QuickHelp,
        Self::OnAllDesktops,
        Self::Menu,
        Self::ApplicationMenu,
        Self::ContextHelp,
        Self::Spacer,
    ];

    /// The letter naming this type in a button layout string.
    ///
    /// `QuickHelp` and `ContextHelp` share `H`. `Custom` has no code.
    pub fn code(self) -> Option<char> {
        match self {
            Self::Custom => None,
            Self::Menu => Some('M'),
            Self::ApplicationMenu => Some('N'),
            Self::OnAllDesktops => Some('S'),
            Self::QuickHelp | Self::ContextHelp => Some('H'),
            Self::Minimize => Some('I'),
            Self::Maximize => Some('A'),
            Self::Close => Some('X'),
            Self::KeepAbove => Some('F'),
            Self::KeepBelow => Some('B'),
            Self::Shade => Some('L'),
            Self::Spacer => Some('_'),
        }
    }

    /// The type named by a layout letter. `H` resolves to `ContextHelp`.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(Self::Menu),
            'N' => Some(Self::ApplicationMenu),
            'S' => Some(Self::OnAllDesktops),
            'H' => Some(Self::ContextHelp),
            'I' => Some(Self::Minimize),
            'A' => Some(Self::Maximize),
            'X' => Some(Self::Close),
            'F' => Some(Self::KeepAbove),
            'B' => Some(Self::KeepBelow),
            'L' => Some(Self::Shade),
            '_' => Some(Self::Spacer),
            _ => None,
        }
    }

    /// Whether buttons of this type start out checkable.
    pub fn is_checkable(self) -> bool {
        matches!(
            self,
            Self::Maximize | Self::Shade | Self::KeepAbove | Self::KeepBelow | Self::OnAllDesktops
        )
    }

    /// The pointer buttons a new button of this type reacts to.
    pub fn default_accepted_buttons(self) -> MouseButtons {
        match self {
            Self::Maximize => MouseButtons::LEFT | MouseButtons::MIDDLE | MouseButtons::RIGHT,
            _ => MouseButtons::LEFT,
        }
    }
}

/// Parse a layout string such as `"MS"` or `"HIAX"` into button types.
///
/// Whitespace is skipped. Any other unknown letter is an error.
pub fn parse_button_layout(layout: &str) -> Result<Vec<DecorationButtonType>> {
    layout
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|code| {
            DecorationButtonType::from_code(code).ok_or_else(|| {
                DecorationError::UnknownButtonCode {
                    code,
                    layout: layout.to_string(),
                }
            })
        })
        .collect()
}

/// Renders decoration buttons.
///
/// Themes implement this to draw each button; the framework only decides
/// which buttons get painted.
pub trait ButtonPainter {
    /// Paint `button`, restricted to `repaint_region`.
    fn paint_button(&mut self, button: &DecorationButton, repaint_region: Rect);
}

/// An interactive button in a window decoration.
///
/// Buttons are created and owned by a [`Decoration`]; see
/// [`Decoration::create_button`].
pub struct DecorationButton {
    id: ButtonId,
    button_type: DecorationButtonType,
    decoration: Weak<Decoration>,

    geometry: Property<Rect>,
    accepted_buttons: Property<MouseButtons>,
    enabled: Property<bool>,
    checkable: Property<bool>,
    checked: Property<bool>,
    hovered: Property<bool>,
    pressed: Property<bool>,
    visible: Property<bool>,

    /// Pointer buttons currently held down on this button.
    held_buttons: Mutex<MouseButtons>,

    /// Connections to the client's state signals.
    _client_bindings: Vec<ConnectionGuard<bool>>,

    /// Emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,
    /// Emitted when the button is shown or hidden.
    pub visibility_changed: Signal<bool>,
    pub enabled_changed: Signal<bool>,
    pub checkable_changed: Signal<bool>,
    pub checked_changed: Signal<bool>,
    pub hovered_changed: Signal<bool>,
    /// Emitted when the pressed state changes.
    ///
    /// `true` when the first accepted pointer button goes down, `false` when
    /// the last one is released or the press is cancelled.
    pub pressed_changed: Signal<bool>,
    pub accepted_buttons_changed: Signal<MouseButtons>,
    /// Emitted when the button is clicked, with the pointer button used.
    pub clicked: Signal<MouseButton>,
}

/// Initial state of a button derived from its type and the client.
struct InitialState {
    enabled: bool,
    visible: bool,
    checked: bool,
}

impl InitialState {
    fn for_type(button_type: DecorationButtonType, client: &DecoratedClient) -> Self {
        use DecorationButtonType as T;

        let mut state = Self {
            enabled: true,
            visible: true,
            checked: false,
        };
        match button_type {
            T::Close => state.enabled = client.is_closeable(),
            T::Minimize => state.enabled = client.is_minimizable(),
            T::Maximize => {
                state.enabled = client.is_maximizable();
                state.checked = client.is_maximized();
            }
            T::Shade => {
                state.enabled = client.is_shadeable();
                state.checked = client.is_shaded();
            }
            T::KeepAbove => state.checked = client.is_keep_above(),
            T::KeepBelow => state.checked = client.is_keep_below(),
            T::OnAllDesktops => state.checked = client.is_on_all_desktops(),
            T::QuickHelp | T::ContextHelp => state.visible = client.provides_context_help(),
            T::ApplicationMenu => state.visible = client.has_application_menu(),
            T::Custom | T::Menu | T::Spacer => {}
        }
        state
    }
}

/// Forward a client state signal to a button setter while the button lives.
fn bind(
    signal: &Signal<bool>,
    button: &Weak<DecorationButton>,
    apply: fn(&DecorationButton, bool),
) -> ConnectionGuard<bool> {
    let button = button.clone();
    signal.connect_scoped(move |&value| {
        if let Some(button) = button.upgrade() {
            apply(&button, value);
        }
    })
}

fn client_bindings(
    button_type: DecorationButtonType,
    client: &DecoratedClient,
    button: &Weak<DecorationButton>,
) -> Vec<ConnectionGuard<bool>> {
    use DecorationButtonType as T;

    match button_type {
        T::Close => vec![bind(&client.closeable_changed, button, DecorationButton::set_enabled)],
        T::Minimize => {
            vec![bind(&client.minimizable_changed, button, DecorationButton::set_enabled)]
        }
        T::Maximize => vec![
            bind(&client.maximizable_changed, button, DecorationButton::set_enabled),
            bind(&client.maximized_changed, button, DecorationButton::set_checked),
        ],
        T::Shade => vec![
            bind(&client.shadeable_changed, button, DecorationButton::set_enabled),
            bind(&client.shaded_changed, button, DecorationButton::set_checked),
        ],
        T::KeepAbove => {
            vec![bind(&client.keep_above_changed, button, DecorationButton::set_checked)]
        }
        T::KeepBelow => {
            vec![bind(&client.keep_below_changed, button, DecorationButton::set_checked)]
        }
        T::OnAllDesktops => {
            vec![bind(&client.on_all_desktops_changed, button, DecorationButton::set_checked)]
        }
        T::QuickHelp | T::ContextHelp => vec![bind(
            &client.provides_context_help_changed,
            button,
            DecorationButton::set_visible,
        )],
        T::ApplicationMenu => vec![bind(
            &client.has_application_menu_changed,
            button,
            DecorationButton::set_visible,
        )],
        T::Custom | T::Menu | T::Spacer => Vec::new(),
    }
}

impl DecorationButton {
    pub(crate) fn new(
        id: ButtonId,
        button_type: DecorationButtonType,
        decoration: &Arc<Decoration>,
    ) -> Arc<Self> {
        let client = decoration.client();
        let initial = InitialState::for_type(button_type, client);

        Arc::new_cyclic(|this| Self {
            id,
            button_type,
            decoration: Arc::downgrade(decoration),
            geometry: Property::new(Rect::default()),
            accepted_buttons: Property::new(button_type.default_accepted_buttons()),
            enabled: Property::new(initial.enabled),
            checkable: Property::new(button_type.is_checkable()),
            checked: Property::new(initial.checked),
            hovered: Property::new(false),
            pressed: Property::new(false),
            visible: Property::new(initial.visible),
            held_buttons: Mutex::new(MouseButtons::empty()),
            _client_bindings: client_bindings(button_type, client, this),
            geometry_changed: Signal::new(),
            visibility_changed: Signal::new(),
            enabled_changed: Signal::new(),
            checkable_changed: Signal::new(),
            checked_changed: Signal::new(),
            hovered_changed: Signal::new(),
            pressed_changed: Signal::new(),
            accepted_buttons_changed: Signal::new(),
            clicked: Signal::new(),
        })
    }

    /// The handle of this button in its decoration.
    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn button_type(&self) -> DecorationButtonType {
        self.button_type
    }

    /// The owning decoration, if it is still alive.
    pub fn decoration(&self) -> Option<Arc<Decoration>> {
        self.decoration.upgrade()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The button's rectangle in decoration coordinates.
    pub fn geometry(&self) -> Rect {
        self.geometry.get()
    }

    pub fn size(&self) -> Size {
        self.geometry().size
    }

    /// Whether `point` lies inside the geometry.
    pub fn contains(&self, point: Point) -> bool {
        self.geometry().contains(point)
    }

    /// Set the geometry, emitting `geometry_changed` on change.
    pub fn set_geometry(&self, geometry: Rect) {
        if self.geometry.set(geometry) {
            tracing::trace!(target: targets::BUTTON, id = ?self.id, ?geometry, "geometry changed");
            self.geometry_changed.emit(geometry);
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Show or hide the button. Hiding cancels a press in progress.
    pub fn set_visible(&self, visible: bool) {
        if self.visible.set(visible) {
            tracing::trace!(target: targets::BUTTON, id = ?self.id, visible, "visibility changed");
            self.visibility_changed.emit(visible);
            if !visible {
                self.cancel_press();
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Enable or disable the button.
    ///
    /// Disabling clears the hovered and pressed states, each with its own
    /// notification after `enabled_changed`.
    pub fn set_enabled(&self, enabled: bool) {
        if self.enabled.set(enabled) {
            tracing::trace!(target: targets::BUTTON, id = ?self.id, enabled, "enabled changed");
            self.enabled_changed.emit(enabled);
            if !enabled {
                self.set_hovered(false);
                self.cancel_press();
            }
        }
    }

    pub fn is_checkable(&self) -> bool {
        self.checkable.get()
    }

    /// Make the button checkable or not. Turning it off unchecks it.
    pub fn set_checkable(&self, checkable: bool) {
        if self.checkable.set(checkable) {
            tracing::trace!(target: targets::BUTTON, id = ?self.id, checkable, "checkable changed");
            self.checkable_changed.emit(checkable);
            if !checkable && self.checked.set(false) {
                self.checked_changed.emit(false);
            }
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set the checked state. Ignored while the button is not checkable.
    pub fn set_checked(&self, checked: bool) {
        if !self.is_checkable() {
            return;
        }
        if self.checked.set(checked) {
            tracing::trace!(target: targets::BUTTON, id = ?self.id, checked, "checked changed");
            self.checked_changed.emit(checked);
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered.get()
    }

    fn set_hovered(&self, hovered: bool) {
        if self.hovered.set(hovered) {
            tracing::trace!(target: targets::BUTTON, id = ?self.id, hovered, "hovered changed");
            self.hovered_changed.emit(hovered);
        }
    }

    /// Whether at least one accepted pointer button is held on the button.
    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }

    fn set_pressed(&self, pressed: bool) {
        if self.pressed.set(pressed) {
            tracing::trace!(target: targets::BUTTON, id = ?self.id, pressed, "pressed changed");
            self.pressed_changed.emit(pressed);
        }
    }

    /// Forget every held pointer button and leave the pressed state.
    fn cancel_press(&self) {
        *self.held_buttons.lock() = MouseButtons::empty();
        self.set_pressed(false);
    }

    /// The pointer buttons that can press this button.
    pub fn accepted_buttons(&self) -> MouseButtons {
        self.accepted_buttons.get()
    }

    pub fn set_accepted_buttons(&self, buttons: MouseButtons) {
        if self.accepted_buttons.set(buttons) {
            tracing::trace!(target: targets::BUTTON, id = ?self.id, ?buttons, "accepted buttons changed");
            self.accepted_buttons_changed.emit(buttons);
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a pointer event.
    ///
    /// Sets the event's accepted flag to whether the button consumed it and
    /// returns the same value.
    pub fn handle_event(&self, event: &mut PointerEvent) -> bool {
        let accepted = match event.kind {
            PointerEventKind::HoverEnter => self.handle_hover(true),
            PointerEventKind::HoverLeave => self.handle_hover(false),
            PointerEventKind::ButtonPress(button) => self.handle_press(event.position, button),
            PointerEventKind::ButtonRelease(button) => self.handle_release(event.position, button),
        };
        event.base.set_accepted(accepted);
        accepted
    }

    fn handle_hover(&self, entered: bool) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.set_hovered(entered);
        true
    }

    fn handle_press(&self, position: Point, button: MouseButton) -> bool {
        if !self.is_visible()
            || !self.is_enabled()
            || !self.contains(position)
            || !self.accepted_buttons().contains_button(button)
        {
            tracing::trace!(target: targets::BUTTON, id = ?self.id, ?button, "press ignored");
            return false;
        }

        self.held_buttons.lock().insert(button.into());
        self.set_pressed(true);
        true
    }

    fn handle_release(&self, position: Point, button: MouseButton) -> bool {
        let (was_held, none_held) = {
            let mut held = self.held_buttons.lock();
            let was_held = held.contains_button(button);
            held.remove(button.into());
            (was_held, held.is_empty())
        };
        if !was_held {
            return false;
        }

        if none_held {
            self.set_pressed(false);
        }
        if self.contains(position) {
            tracing::debug!(target: targets::BUTTON, id = ?self.id, button_type = ?self.button_type, ?button, "clicked");
            self.clicked.emit(button);
            self.invoke(button);
        }
        true
    }

    /// Send the request belonging to a click with `button`.
    fn invoke(&self, button: MouseButton) {
        use DecorationButtonType as T;

        let Some(decoration) = self.decoration.upgrade() else {
            return;
        };
        let client = decoration.client();
        match self.button_type {
            T::Close => client.request_close(),
            T::Minimize => client.request_minimize(),
            T::QuickHelp | T::ContextHelp => client.request_context_help(),
            T::KeepAbove => client.request_toggle_keep_above(),
            T::KeepBelow => client.request_toggle_keep_below(),
            T::Shade => client.request_toggle_shade(),
            T::OnAllDesktops => client.request_toggle_on_all_desktops(),
            T::Maximize => match button {
                MouseButton::Right => client.request_toggle_maximize_vertical(),
                MouseButton::Middle => client.request_toggle_maximize_horizontal(),
                _ => client.request_toggle_maximization(),
            },
            T::Menu => client.request_show_window_menu(),
            T::ApplicationMenu => client.request_show_application_menu(),
            T::Custom | T::Spacer => {}
        }
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint the button through `painter`.
    pub fn paint(&self, painter: &mut dyn ButtonPainter, repaint_region: Rect) {
        painter.paint_button(self, repaint_region);
    }
}

impl fmt::Debug for DecorationButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecorationButton")
            .field("id", &self.id)
            .field("button_type", &self.button_type)
            .field("geometry", &self.geometry())
            .field("visible", &self.is_visible())
            .field("enabled", &self.is_enabled())
            .field("checked", &self.is_checked())
            .field("pressed", &self.is_pressed())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(DecorationButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientRequest, WindowBridge};
    use crate::settings::DecorationSettings;

    struct NullBridge;

    impl WindowBridge for NullBridge {
        fn request(&self, _client: &DecoratedClient, _request: ClientRequest) {}
    }

    fn button(button_type: DecorationButtonType) -> (Arc<Decoration>, Arc<DecorationButton>) {
        let decoration = Decoration::new(DecoratedClient::new(NullBridge), DecorationSettings::new());
        let id = decoration.create_button(button_type);
        let button = decoration.button(id).unwrap();
        (decoration, button)
    }

    fn record<T: Clone + Send + 'static>(signal: &Signal<T>) -> Arc<Mutex<Vec<T>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        signal.connect(move |value: &T| received_clone.lock().push(value.clone()));
        received
    }

    #[test]
    fn test_layout_codes_round_trip() {
        for button_type in DecorationButtonType::ALL {
            let Some(code) = button_type.code() else {
                assert_eq!(button_type, DecorationButtonType::Custom);
                continue;
            };
            let parsed = DecorationButtonType::from_code(code).unwrap();
            if button_type == DecorationButtonType::QuickHelp {
                assert_eq!(parsed, DecorationButtonType::ContextHelp);
            } else {
                assert_eq!(parsed, button_type);
            }
        }
    }

    #[test]
    fn test_parse_button_layout() {
        let buttons = parse_button_layout("M S _ X").unwrap();
        assert_eq!(
            buttons,
            vec![
                DecorationButtonType::Menu,
                DecorationButtonType::OnAllDesktops,
                DecorationButtonType::Spacer,
                DecorationButtonType::Close,
            ]
        );
        assert!(parse_button_layout("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_button_layout_rejects_unknown_code() {
        let err = parse_button_layout("IAZ").unwrap_err();
        match err {
            DecorationError::UnknownButtonCode { code, layout } => {
                assert_eq!(code, 'Z');
                assert_eq!(layout, "IAZ");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_button_type_serde_names() {
        #[derive(Deserialize)]
        struct Doc {
            buttons: Vec<DecorationButtonType>,
        }

        let doc: Doc = toml::from_str(r#"buttons = ["keep-above", "on-all-desktops", "close"]"#).unwrap();
        assert_eq!(
            doc.buttons,
            vec![
                DecorationButtonType::KeepAbove,
                DecorationButtonType::OnAllDesktops,
                DecorationButtonType::Close,
            ]
        );
    }

    #[test]
    fn test_defaults() {
        let (_decoration, button) = button(DecorationButtonType::Custom);
        assert_eq!(button.geometry(), Rect::default());
        assert_eq!(button.accepted_buttons(), MouseButtons::LEFT);
        assert!(button.is_enabled());
        assert!(button.is_visible());
        assert!(!button.is_checkable());
        assert!(!button.is_checked());
        assert!(!button.is_hovered());
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_setters_emit_once_on_change() {
        let (_decoration, button) = button(DecorationButtonType::Custom);
        let geometry = record(&button.geometry_changed);
        let enabled = record(&button.enabled_changed);

        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        button.set_geometry(rect);
        button.set_geometry(rect);
        button.set_enabled(true);
        button.set_enabled(false);
        button.set_enabled(false);

        assert_eq!(*geometry.lock(), vec![rect]);
        assert_eq!(*enabled.lock(), vec![false]);
    }

    #[test]
    fn test_set_checked_requires_checkable() {
        let (_decoration, button) = button(DecorationButtonType::Custom);
        let checked = record(&button.checked_changed);

        button.set_checked(true);
        assert!(!button.is_checked());

        button.set_checkable(true);
        button.set_checked(true);
        assert!(button.is_checked());
        assert_eq!(*checked.lock(), vec![true]);
    }

    #[test]
    fn test_uncheckable_clears_checked() {
        let (_decoration, button) = button(DecorationButtonType::Custom);
        button.set_checkable(true);
        button.set_checked(true);

        let order = Arc::new(Mutex::new(Vec::new()));
        let order_clone = order.clone();
        button
            .checkable_changed
            .connect(move |&value| order_clone.lock().push(("checkable", value)));
        let order_clone = order.clone();
        button
            .checked_changed
            .connect(move |&value| order_clone.lock().push(("checked", value)));

        button.set_checkable(false);
        assert!(!button.is_checked());
        assert_eq!(*order.lock(), vec![("checkable", false), ("checked", false)]);
    }

    #[test]
    fn test_press_requires_accepted_button() {
        let (_decoration, button) = button(DecorationButtonType::Custom);
        button.set_geometry(Rect::new(0.0, 0.0, 10.0, 10.0));

        let mut event = PointerEvent::press(Point::new(5.0, 5.0), MouseButton::Right);
        assert!(!button.handle_event(&mut event));
        assert!(!event.is_accepted());
        assert!(!button.is_pressed());

        button.set_accepted_buttons(MouseButtons::RIGHT);
        assert!(button.handle_event(&mut event));
        assert!(button.is_pressed());
    }

    #[test]
    fn test_hide_cancels_press() {
        let (_decoration, button) = button(DecorationButtonType::Custom);
        button.set_geometry(Rect::new(0.0, 0.0, 10.0, 10.0));
        let pressed = record(&button.pressed_changed);

        button.handle_event(&mut PointerEvent::press(Point::new(5.0, 5.0), MouseButton::Left));
        button.set_visible(false);
        assert!(!button.is_pressed());
        assert_eq!(*pressed.lock(), vec![true, false]);

        // The cancelled press leaves nothing to release.
        let mut release = PointerEvent::release(Point::new(5.0, 5.0), MouseButton::Left);
        assert!(!button.handle_event(&mut release));
    }
}
