//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use horizon_decoration::{
    ClientRequest, DecoratedClient, Decoration, DecorationSettings, Signal, WindowBridge,
};
use parking_lot::Mutex;

static TRACING: Once = Once::new();

/// Route library logs to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A host that records every request and applies the toggles immediately,
/// like a window manager would.
#[derive(Clone, Default)]
pub struct EchoBridge {
    requests: Arc<Mutex<Vec<ClientRequest>>>,
}

impl EchoBridge {
    pub fn requests(&self) -> Vec<ClientRequest> {
        self.requests.lock().clone()
    }

    pub fn count(&self, request: ClientRequest) -> usize {
        self.requests.lock().iter().filter(|&&r| r == request).count()
    }
}

impl WindowBridge for EchoBridge {
    fn request(&self, client: &DecoratedClient, request: ClientRequest) {
        self.requests.lock().push(request);
        match request {
            ClientRequest::ToggleKeepAbove => client.set_keep_above(!client.is_keep_above()),
            ClientRequest::ToggleKeepBelow => client.set_keep_below(!client.is_keep_below()),
            ClientRequest::ToggleShade => client.set_shaded(!client.is_shaded()),
            ClientRequest::ToggleOnAllDesktops => {
                client.set_on_all_desktops(!client.is_on_all_desktops())
            }
            ClientRequest::ToggleMaximization => client.set_maximized(!client.is_maximized()),
            ClientRequest::ToggleMaximizeVertical => {
                client.set_maximized_vertically(!client.is_maximized_vertically())
            }
            ClientRequest::ToggleMaximizeHorizontal => {
                client.set_maximized_horizontally(!client.is_maximized_horizontally())
            }
            ClientRequest::Close
            | ClientRequest::Minimize
            | ClientRequest::ContextHelp
            | ClientRequest::ShowWindowMenu
            | ClientRequest::ShowApplicationMenu => {}
        }
    }
}

/// A decoration over a fresh client whose requests go to the returned bridge.
pub fn decoration_with(settings: Arc<DecorationSettings>) -> (Arc<Decoration>, EchoBridge) {
    init_tracing();
    let bridge = EchoBridge::default();
    let client = DecoratedClient::new(bridge.clone());
    (Decoration::new(client, settings), bridge)
}

pub fn decoration() -> (Arc<Decoration>, EchoBridge) {
    decoration_with(DecorationSettings::new())
}

/// Records every value emitted by a signal while alive.
pub struct SignalSpy<T> {
    values: Arc<Mutex<Vec<T>>>,
    _guard: horizon_decoration::ConnectionGuard<T>,
}

impl<T: Clone + Send + 'static> SignalSpy<T> {
    pub fn new(signal: &Signal<T>) -> Self {
        let values = Arc::new(Mutex::new(Vec::new()));
        let values_clone = values.clone();
        let guard = signal.connect_scoped(move |value: &T| values_clone.lock().push(value.clone()));
        Self {
            values,
            _guard: guard,
        }
    }

    pub fn count(&self) -> usize {
        self.values.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    pub fn first(&self) -> Option<T> {
        self.values.lock().first().cloned()
    }

    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.values.lock().clear();
    }
}
