//! Horizontal layout container for decoration buttons.
//!
//! This module provides [`DecorationButtonGroup`], which arranges a row of
//! [`DecorationButton`]s left to right.
//!
//! # Layout
//!
//! Only visible members take part in layout. The group's width is the sum of
//! the visible members' widths plus `spacing` between each consecutive pair of
//! them; its height is the tallest visible member. The group keeps its origin,
//! and every visible member is moved to the top edge of the group, each one
//! `spacing` to the right of the previous.
//!
//! Layout runs whenever a member is added, removed or destroyed, a member's
//! visibility or geometry changes, the spacing changes, or the group is moved.
//!
//! # Membership
//!
//! The group stores [`ButtonId`] handles, not the buttons themselves. A member
//! destroyed through its [`Decoration`] is dropped from the group and the
//! remaining buttons close the gap immediately.
//!
//! # Example
//!
//! ```
//! use horizon_decoration::{
//!     ClientRequest, DecoratedClient, Decoration, DecorationButtonGroup,
//!     DecorationButtonType, DecorationSettings, Point, Rect, WindowBridge,
//! };
//!
//! struct Host;
//! impl WindowBridge for Host {
//!     fn request(&self, _client: &DecoratedClient, _request: ClientRequest) {}
//! }
//!
//! let decoration = Decoration::new(DecoratedClient::new(Host), DecorationSettings::new());
//! let group = DecorationButtonGroup::new(&decoration);
//! group.set_spacing(2.0);
//!
//! for width in [10.0, 20.0] {
//!     let id = decoration.create_button(DecorationButtonType::Custom);
//!     decoration.button(id).unwrap().set_geometry(Rect::new(0.0, 0.0, width, 8.0));
//!     group.add_button(id);
//! }
//!
//! group.set_pos(Point::new(100.0, 4.0));
//! assert_eq!(group.geometry(), Rect::new(100.0, 4.0, 32.0, 8.0));
//! ```

use std::cell::Cell;
use std::fmt;
use std::sync::{Arc, Weak};

use horizon_decoration_core::logging::targets;
use horizon_decoration_core::{ConnectionGuard, PerfSpan, Property, Signal};
use parking_lot::Mutex;

use crate::button::{ButtonPainter, DecorationButton, DecorationButtonType};
use crate::decoration::{ButtonId, Decoration};
use crate::geometry::{Point, Rect, Size};

/// The side of the title bar a settings-bound group represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Left,
    Right,
}

/// Creates a button of the given type for a decoration.
///
/// Returns `None` to leave the type out of the group.
pub type ButtonFactory =
    dyn Fn(DecorationButtonType, &Arc<Decoration>) -> Option<ButtonId> + Send + Sync;

thread_local! {
    static LAYOUT_IN_PROGRESS: Cell<bool> = const { Cell::new(false) };
}

/// Marks a layout pass as running on this thread until dropped.
///
/// Layout moves buttons, which notifies every group listening to them. The
/// guard turns those nested layout requests into no-ops.
struct LayoutGuard;

impl LayoutGuard {
    fn acquire() -> Option<Self> {
        LAYOUT_IN_PROGRESS.with(|running| {
            if running.replace(true) {
                None
            } else {
                Some(LayoutGuard)
            }
        })
    }
}

impl Drop for LayoutGuard {
    fn drop(&mut self) {
        LAYOUT_IN_PROGRESS.with(|running| running.set(false));
    }
}

/// A button in the group plus the connections that relayout on its changes.
struct Member {
    id: ButtonId,
    button_type: DecorationButtonType,
    _visibility: ConnectionGuard<bool>,
    _geometry: ConnectionGuard<Rect>,
}

/// A horizontal row of decoration buttons.
pub struct DecorationButtonGroup {
    this: Weak<Self>,
    decoration: Weak<Decoration>,
    position: Option<Position>,

    geometry: Property<Rect>,
    spacing: Property<f32>,
    members: Mutex<Vec<Member>>,

    /// Connection to the settings list this group mirrors, if any.
    settings_connection: Mutex<Option<ConnectionGuard<Vec<DecorationButtonType>>>>,
    _destroyed_connection: ConnectionGuard<ButtonId>,

    /// Emitted when the group's geometry changes.
    pub geometry_changed: Signal<Rect>,
    /// Emitted when the spacing changes.
    pub spacing_changed: Signal<f32>,
}

impl DecorationButtonGroup {
    /// Create an empty group with zero spacing at the origin.
    pub fn new(decoration: &Arc<Decoration>) -> Arc<Self> {
        Self::build(decoration, None)
    }

    /// Create a group that mirrors one side of the decoration's settings.
    ///
    /// `factory` is asked for a button for every type in the settings list.
    /// Whenever that list changes, all current members are destroyed and the
    /// group is rebuilt from the new list.
    pub fn with_position<F>(position: Position, decoration: &Arc<Decoration>, factory: F) -> Arc<Self>
    where
        F: Fn(DecorationButtonType, &Arc<Decoration>) -> Option<ButtonId> + Send + Sync + 'static,
    {
        let group = Self::build(decoration, Some(position));
        let factory: Arc<ButtonFactory> = Arc::new(factory);

        let settings = decoration.settings();
        let (buttons, changed) = match position {
            Position::Left => (
                settings.decoration_buttons_left(),
                &settings.decoration_buttons_left_changed,
            ),
            Position::Right => (
                settings.decoration_buttons_right(),
                &settings.decoration_buttons_right_changed,
            ),
        };
        group.populate(&buttons, factory.as_ref());

        let this = Arc::downgrade(&group);
        let connection = changed.connect_scoped(move |buttons| {
            if let Some(group) = this.upgrade() {
                group.recreate_buttons(buttons, factory.as_ref());
            }
        });
        *group.settings_connection.lock() = Some(connection);
        group
    }

    fn build(decoration: &Arc<Decoration>, position: Option<Position>) -> Arc<Self> {
        Arc::new_cyclic(|this: &Weak<Self>| {
            let group = this.clone();
            let destroyed_connection = decoration.button_destroyed.connect_scoped(move |&id| {
                if let Some(group) = group.upgrade() {
                    group.forget_button(id);
                }
            });
            Self {
                this: this.clone(),
                decoration: Arc::downgrade(decoration),
                position,
                geometry: Property::new(Rect::default()),
                spacing: Property::new(0.0),
                members: Mutex::new(Vec::new()),
                settings_connection: Mutex::new(None),
                _destroyed_connection: destroyed_connection,
                geometry_changed: Signal::new(),
                spacing_changed: Signal::new(),
            }
        })
    }

    /// The owning decoration, if it is still alive.
    pub fn decoration(&self) -> Option<Arc<Decoration>> {
        self.decoration.upgrade()
    }

    /// The settings side this group mirrors, if it was created with one.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn geometry(&self) -> Rect {
        self.geometry.get()
    }

    fn set_geometry(&self, geometry: Rect) {
        if self.geometry.set(geometry) {
            tracing::trace!(target: targets::GROUP, ?geometry, "group geometry changed");
            self.geometry_changed.emit(geometry);
        }
    }

    /// The top-left corner of the group.
    pub fn pos(&self) -> Point {
        self.geometry().top_left()
    }

    /// Move the group, keeping its size, and lay the buttons out again.
    pub fn set_pos(&self, pos: Point) {
        let geometry = self.geometry();
        if geometry.top_left() == pos {
            return;
        }
        self.set_geometry(geometry.moved_to(pos));
        self.update_layout();
    }

    /// Horizontal gap between consecutive visible buttons.
    pub fn spacing(&self) -> f32 {
        self.spacing.get()
    }

    /// Set the spacing. Negative values are clamped to zero.
    pub fn set_spacing(&self, spacing: f32) {
        let spacing = spacing.max(0.0);
        if self.spacing.set(spacing) {
            tracing::trace!(target: targets::GROUP, spacing, "spacing changed");
            self.spacing_changed.emit(spacing);
            self.update_layout();
        }
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Append a button to the end of the group.
    ///
    /// The handle must belong to a live button of this group's decoration;
    /// anything else is logged and ignored.
    pub fn add_button(&self, id: ButtonId) {
        let Some(button) = self.decoration().and_then(|decoration| decoration.button(id)) else {
            tracing::warn!(target: targets::GROUP, ?id, "cannot add a destroyed button to a group");
            return;
        };

        let this = self.this.clone();
        let visibility = button.visibility_changed.connect_scoped(move |_| {
            if let Some(group) = this.upgrade() {
                group.update_layout();
            }
        });
        let this = self.this.clone();
        let geometry = button.geometry_changed.connect_scoped(move |_| {
            if let Some(group) = this.upgrade() {
                group.update_layout();
            }
        });

        self.members.lock().push(Member {
            id,
            button_type: button.button_type(),
            _visibility: visibility,
            _geometry: geometry,
        });
        tracing::debug!(target: targets::GROUP, ?id, button_type = ?button.button_type(), "button added");
        self.update_layout();
    }

    /// Remove the member with handle `id`. Returns whether it was a member.
    pub fn remove_button(&self, id: ButtonId) -> bool {
        self.remove_where(|member| member.id == id)
    }

    /// Remove every member of `button_type`. Returns whether any was removed.
    pub fn remove_button_type(&self, button_type: DecorationButtonType) -> bool {
        self.remove_where(|member| member.button_type == button_type)
    }

    fn remove_where(&self, matches: impl Fn(&Member) -> bool) -> bool {
        let removed = self.take_members(matches);
        if removed.is_empty() {
            return false;
        }
        let ids: Vec<ButtonId> = removed.iter().map(|member| member.id).collect();
        // Dropping the members disconnects them before layout moves anything.
        drop(removed);
        tracing::debug!(target: targets::GROUP, ?ids, "buttons removed");
        self.update_layout();
        true
    }

    /// Drop the member a destroyed handle belonged to.
    fn forget_button(&self, id: ButtonId) {
        let forgotten = self.take_members(|member| member.id == id);
        if forgotten.is_empty() {
            return;
        }
        drop(forgotten);
        tracing::debug!(target: targets::GROUP, ?id, "destroyed button left the group");
        self.update_layout();
    }

    fn take_members(&self, matches: impl Fn(&Member) -> bool) -> Vec<Member> {
        let mut members = self.members.lock();
        let (taken, kept): (Vec<Member>, Vec<Member>) = std::mem::take(&mut *members)
            .into_iter()
            .partition(|member| matches(member));
        *members = kept;
        taken
    }

    /// Whether a live member of `button_type` exists.
    pub fn has_button(&self, button_type: DecorationButtonType) -> bool {
        self.live_buttons()
            .iter()
            .any(|button| button.button_type() == button_type)
    }

    /// The live members in order.
    pub fn buttons(&self) -> Vec<ButtonId> {
        self.live_buttons().iter().map(|button| button.id()).collect()
    }

    fn live_buttons(&self) -> Vec<Arc<DecorationButton>> {
        let Some(decoration) = self.decoration() else {
            return Vec::new();
        };
        self.members
            .lock()
            .iter()
            .filter_map(|member| decoration.button(member.id))
            .collect()
    }

    fn recreate_buttons(&self, buttons: &[DecorationButtonType], factory: &ButtonFactory) {
        let _span = PerfSpan::new("recreate_button_group");
        let old = std::mem::take(&mut *self.members.lock());
        if let Some(decoration) = self.decoration() {
            for member in &old {
                decoration.destroy_button(member.id);
            }
        }
        drop(old);

        self.populate(buttons, factory);
        // Runs even for an empty list so the group collapses.
        self.update_layout();
    }

    fn populate(&self, buttons: &[DecorationButtonType], factory: &ButtonFactory) {
        let Some(decoration) = self.decoration() else {
            return;
        };
        tracing::debug!(target: targets::GROUP, position = ?self.position, ?buttons, "populating button group");
        for &button_type in buttons {
            if let Some(id) = factory(button_type, &decoration) {
                self.add_button(id);
            }
        }
    }

    // =========================================================================
    // Layout & Painting
    // =========================================================================

    fn update_layout(&self) {
        let Some(_guard) = LayoutGuard::acquire() else {
            tracing::trace!(target: targets::GROUP, "layout already running, skipping");
            return;
        };

        let visible: Vec<Arc<DecorationButton>> = self
            .live_buttons()
            .into_iter()
            .filter(|button| button.is_visible())
            .collect();
        let spacing = self.spacing();

        let mut size = Size::ZERO;
        for (index, button) in visible.iter().enumerate() {
            let button_size = button.size();
            if index > 0 {
                size.width += spacing;
            }
            size.width += button_size.width;
            size.height = size.height.max(button_size.height);
        }

        let origin = self.pos();
        self.set_geometry(Rect::from_origin_size(origin, size));

        let mut x = origin.x;
        for button in &visible {
            let button_size = button.size();
            button.set_geometry(Rect::from_origin_size(Point::new(x, origin.y), button_size));
            x += button_size.width + spacing;
        }
        tracing::trace!(target: targets::GROUP, visible = visible.len(), ?size, "layout updated");
    }

    /// Paint every visible member through `painter`, in order.
    pub fn paint(&self, painter: &mut dyn ButtonPainter, repaint_region: Rect) {
        for button in self.live_buttons() {
            if button.is_visible() {
                button.paint(painter, repaint_region);
            }
        }
    }
}

impl fmt::Debug for DecorationButtonGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecorationButtonGroup")
            .field("position", &self.position)
            .field("geometry", &self.geometry())
            .field("spacing", &self.spacing())
            .field("buttons", &self.buttons())
            .finish()
    }
}

static_assertions::assert_impl_all!(DecorationButtonGroup: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientRequest, DecoratedClient, WindowBridge};
    use crate::settings::DecorationSettings;

    struct NullBridge;

    impl WindowBridge for NullBridge {
        fn request(&self, _client: &DecoratedClient, _request: ClientRequest) {}
    }

    fn decoration() -> Arc<Decoration> {
        Decoration::new(DecoratedClient::new(NullBridge), DecorationSettings::new())
    }

    fn sized_button(decoration: &Arc<Decoration>, width: f32, height: f32) -> ButtonId {
        let id = decoration.create_button(DecorationButtonType::Custom);
        decoration
            .button(id)
            .unwrap()
            .set_geometry(Rect::new(0.0, 0.0, width, height));
        id
    }

    #[test]
    fn test_layout_guard_is_exclusive() {
        let outer = LayoutGuard::acquire();
        assert!(outer.is_some());
        assert!(LayoutGuard::acquire().is_none());
        drop(outer);
        assert!(LayoutGuard::acquire().is_some());
    }

    #[test]
    fn test_empty_group() {
        let decoration = decoration();
        let group = DecorationButtonGroup::new(&decoration);
        assert_eq!(group.geometry(), Rect::default());
        assert_eq!(group.spacing(), 0.0);
        assert_eq!(group.position(), None);
        assert!(group.buttons().is_empty());
    }

    #[test]
    fn test_layout_example() {
        let decoration = decoration();
        let group = DecorationButtonGroup::new(&decoration);
        group.set_spacing(2.0);

        let ids = [
            sized_button(&decoration, 10.0, 5.0),
            sized_button(&decoration, 20.0, 8.0),
            sized_button(&decoration, 15.0, 6.0),
        ];
        for id in ids {
            group.add_button(id);
        }

        assert_eq!(group.geometry(), Rect::new(0.0, 0.0, 49.0, 8.0));
        let origins: Vec<Point> = ids
            .iter()
            .map(|&id| decoration.button(id).unwrap().geometry().top_left())
            .collect();
        assert_eq!(
            origins,
            vec![Point::new(0.0, 0.0), Point::new(12.0, 0.0), Point::new(34.0, 0.0)]
        );
    }

    #[test]
    fn test_negative_spacing_is_clamped() {
        let decoration = decoration();
        let group = DecorationButtonGroup::new(&decoration);
        group.set_spacing(-3.0);
        assert_eq!(group.spacing(), 0.0);
    }

    #[test]
    fn test_add_destroyed_button_is_ignored() {
        let decoration = decoration();
        let group = DecorationButtonGroup::new(&decoration);
        let id = sized_button(&decoration, 10.0, 10.0);
        decoration.destroy_button(id);

        group.add_button(id);
        assert!(group.buttons().is_empty());
        assert_eq!(group.geometry(), Rect::default());
    }

    #[test]
    fn test_destroyed_member_is_forgotten() {
        let decoration = decoration();
        let group = DecorationButtonGroup::new(&decoration);
        let destroyed = sized_button(&decoration, 10.0, 10.0);
        let live = sized_button(&decoration, 10.0, 10.0);
        group.add_button(destroyed);
        group.add_button(live);

        decoration.destroy_button(destroyed);
        assert_eq!(group.members.lock().len(), 1);
        assert_eq!(group.geometry(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!group.remove_button(destroyed));
        assert!(group.remove_button(live));
        assert!(group.members.lock().is_empty());
    }

    #[test]
    fn test_dropped_group_disconnects_from_decoration() {
        let decoration = decoration();
        let group = DecorationButtonGroup::new(&decoration);
        assert_eq!(decoration.button_destroyed.connection_count(), 1);
        drop(group);
        assert_eq!(decoration.button_destroyed.connection_count(), 0);
    }
}
