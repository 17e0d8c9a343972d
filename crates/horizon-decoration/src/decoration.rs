//! The decoration: owner of buttons for one decorated window.
//!
//! A [`Decoration`] owns every [`DecorationButton`] created for its window in
//! an arena keyed by [`ButtonId`]. The arena holds the only long-lived strong
//! references; groups and other observers keep `ButtonId`s, which stop
//! resolving once the button is destroyed. That makes stale handles harmless:
//! [`Decoration::button`] simply returns `None`.
//!
//! Observers that need to react to a destruction right away connect to
//! [`Decoration::button_destroyed`].

use std::fmt;
use std::sync::Arc;

use horizon_decoration_core::Signal;
use horizon_decoration_core::logging::targets;
use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

use crate::button::{DecorationButton, DecorationButtonType};
use crate::client::DecoratedClient;
use crate::settings::DecorationSettings;

new_key_type! {
    /// Handle to a button owned by a [`Decoration`].
    ///
    /// Handles are generational: once the button is destroyed the handle never
    /// resolves again, even if its slot is reused.
    pub struct ButtonId;
}

/// The frame around one managed window.
pub struct Decoration {
    client: Arc<DecoratedClient>,
    settings: Arc<DecorationSettings>,
    buttons: RwLock<SlotMap<ButtonId, Arc<DecorationButton>>>,

    /// Emitted after a button has been removed from the arena.
    pub button_destroyed: Signal<ButtonId>,
}

impl Decoration {
    /// Create a decoration for `client`, reading its layout from `settings`.
    pub fn new(client: Arc<DecoratedClient>, settings: Arc<DecorationSettings>) -> Arc<Self> {
        Arc::new(Self {
            client,
            settings,
            buttons: RwLock::new(SlotMap::with_key()),
            button_destroyed: Signal::new(),
        })
    }

    /// The window this decoration belongs to.
    pub fn client(&self) -> &Arc<DecoratedClient> {
        &self.client
    }

    /// The settings provider.
    pub fn settings(&self) -> &Arc<DecorationSettings> {
        &self.settings
    }

    /// Create a button of `button_type` owned by this decoration.
    ///
    /// The button binds its enabled, visible and checked state to the client
    /// as appropriate for its type.
    pub fn create_button(self: &Arc<Self>, button_type: DecorationButtonType) -> ButtonId {
        let id = self
            .buttons
            .write()
            .insert_with_key(|id| DecorationButton::new(id, button_type, self));
        tracing::debug!(target: targets::BUTTON, ?id, ?button_type, "created decoration button");
        id
    }

    /// Resolve a handle. Returns `None` once the button has been destroyed.
    pub fn button(&self, id: ButtonId) -> Option<Arc<DecorationButton>> {
        self.buttons.read().get(id).cloned()
    }

    /// Destroy a button. Returns `false` if the handle was already stale.
    ///
    /// [`button_destroyed`](Self::button_destroyed) is emitted once the handle
    /// no longer resolves. The button's client bindings are released as soon
    /// as no caller holds a strong reference to it any more.
    pub fn destroy_button(&self, id: ButtonId) -> bool {
        let Some(button) = self.buttons.write().remove(id) else {
            return false;
        };
        tracing::debug!(target: targets::BUTTON, ?id, "destroyed decoration button");
        drop(button);
        self.button_destroyed.emit(id);
        true
    }

    /// Number of live buttons.
    pub fn button_count(&self) -> usize {
        self.buttons.read().len()
    }
}

impl fmt::Debug for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoration")
            .field("client", &self.client)
            .field("buttons", &self.button_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(Decoration: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientRequest, WindowBridge};

    struct NullBridge;

    impl WindowBridge for NullBridge {
        fn request(&self, _client: &DecoratedClient, _request: ClientRequest) {}
    }

    fn decoration() -> Arc<Decoration> {
        Decoration::new(DecoratedClient::new(NullBridge), DecorationSettings::new())
    }

    #[test]
    fn test_create_and_resolve_button() {
        let decoration = decoration();
        let id = decoration.create_button(DecorationButtonType::Close);

        let button = decoration.button(id).unwrap();
        assert_eq!(button.id(), id);
        assert_eq!(button.button_type(), DecorationButtonType::Close);
        assert!(Arc::ptr_eq(&button.decoration().unwrap(), &decoration));
        assert_eq!(decoration.button_count(), 1);
    }

    #[test]
    fn test_destroyed_handle_is_stale() {
        let decoration = decoration();
        let id = decoration.create_button(DecorationButtonType::Minimize);

        assert!(decoration.destroy_button(id));
        assert!(!decoration.destroy_button(id));
        assert!(decoration.button(id).is_none());

        // A new button must not resurrect the old handle.
        let other = decoration.create_button(DecorationButtonType::Minimize);
        assert_ne!(id, other);
        assert!(decoration.button(id).is_none());
    }

    #[test]
    fn test_destroyed_button_drops_client_bindings() {
        let decoration = decoration();
        let id = decoration.create_button(DecorationButtonType::Close);
        assert_eq!(decoration.client().closeable_changed.connection_count(), 1);

        decoration.destroy_button(id);
        assert_eq!(decoration.client().closeable_changed.connection_count(), 0);
    }

    #[test]
    fn test_destroy_notifies_once() {
        let decoration = decoration();
        let id = decoration.create_button(DecorationButtonType::Shade);
        let destroyed = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let destroyed_clone = destroyed.clone();
        let decoration_weak = Arc::downgrade(&decoration);
        let _guard = decoration.button_destroyed.connect_scoped(move |&id| {
            let resolves = decoration_weak
                .upgrade()
                .is_some_and(|decoration| decoration.button(id).is_some());
            destroyed_clone.lock().push((id, resolves));
        });

        decoration.destroy_button(id);
        decoration.destroy_button(id);
        assert_eq!(*destroyed.lock(), vec![(id, false)]);
    }
}
