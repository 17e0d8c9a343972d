//! Horizon Decoration - title-bar buttons for window decoration themes.
//!
//! This crate provides the interactive part of a window decoration:
//!
//! - [`DecorationButton`]: a button's state machine (hover, press, click,
//!   enabled/checked/visible), bound to the state of the decorated window
//! - [`DecorationButtonGroup`]: a horizontal row of buttons with automatic
//!   layout, optionally mirroring one side of the [`DecorationSettings`]
//! - [`Decoration`]: the owner of every button of one window
//! - [`DecoratedClient`]: the window state a decoration reflects, and the
//!   [`WindowBridge`] through which it asks the host for actions
//!
//! Drawing is left to the theme through [`ButtonPainter`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizon_decoration::{
//!     ClientRequest, DecoratedClient, Decoration, DecorationButtonGroup,
//!     DecorationButtonType, DecorationSettings, MouseButton, Point, PointerEvent,
//!     Position, Rect, WindowBridge,
//! };
//! use parking_lot::Mutex;
//!
//! #[derive(Default)]
//! struct Host {
//!     requests: Arc<Mutex<Vec<ClientRequest>>>,
//! }
//!
//! impl WindowBridge for Host {
//!     fn request(&self, _client: &DecoratedClient, request: ClientRequest) {
//!         self.requests.lock().push(request);
//!     }
//! }
//!
//! let host = Host::default();
//! let requests = host.requests.clone();
//! let client = DecoratedClient::new(host);
//! client.set_closeable(true);
//!
//! let settings = Arc::new(DecorationSettings::with_buttons(
//!     vec![],
//!     vec![DecorationButtonType::Close],
//! ));
//! let decoration = Decoration::new(client, settings);
//! let group = DecorationButtonGroup::with_position(Position::Right, &decoration, |ty, deco| {
//!     let id = deco.create_button(ty);
//!     deco.button(id)?.set_geometry(Rect::new(0.0, 0.0, 24.0, 24.0));
//!     Some(id)
//! });
//!
//! let close = decoration.button(group.buttons()[0]).unwrap();
//! close.handle_event(&mut PointerEvent::press(Point::new(5.0, 5.0), MouseButton::Left));
//! close.handle_event(&mut PointerEvent::release(Point::new(5.0, 5.0), MouseButton::Left));
//! assert_eq!(*requests.lock(), vec![ClientRequest::Close]);
//! ```

pub mod button;
pub mod button_group;
pub mod client;
pub mod debug;
pub mod decoration;
pub mod error;
pub mod event;
pub mod geometry;
pub mod settings;

pub use button::{ButtonPainter, DecorationButton, DecorationButtonType, parse_button_layout};
pub use button_group::{ButtonFactory, DecorationButtonGroup, Position};
pub use client::{ClientRequest, DecoratedClient, WindowBridge};
pub use debug::{ButtonGroupDebug, TreeFormatOptions, TreeStyle};
pub use decoration::{ButtonId, Decoration};
pub use error::{DecorationError, Result};
pub use event::{EventBase, MouseButton, MouseButtons, PointerEvent, PointerEventKind};
pub use geometry::{Point, Rect, Size};
pub use horizon_decoration_core::{ConnectionGuard, ConnectionId, PerfSpan, Property, Signal};
pub use settings::{
    ButtonLayoutConfig, DEFAULT_BUTTONS_LEFT, DEFAULT_BUTTONS_RIGHT, DecorationSettings,
};
