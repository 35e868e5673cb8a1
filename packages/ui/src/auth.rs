//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the signed-in user, the REST client and the refresh
//! timer. Views reach them through [`use_session`] and [`use_api`].

use std::time::Duration;

use api::{ApiClient, ApiError, AuthUser, Credentials, FaultAction, Registration};
use dioxus::prelude::*;
use store::{BookshelfConfig, SessionStorage, SESSION_USER_KEY};

use crate::notify;
use crate::storage::{make_storage, PlatformStorage};

/// Read the persisted user. A record that no longer parses is discarded.
pub fn restore_user<S: SessionStorage + ?Sized>(storage: &S) -> Option<AuthUser> {
    match store::load_json::<AuthUser, S>(storage, SESSION_USER_KEY) {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Failed to parse stored user: {e}");
            forget_user(storage);
            None
        }
    }
}

pub fn persist_user<S: SessionStorage + ?Sized>(storage: &S, user: &AuthUser) {
    if let Err(e) = store::save_json(storage, SESSION_USER_KEY, user) {
        tracing::warn!("Failed to persist session user: {e}");
    }
}

pub fn forget_user<S: SessionStorage + ?Sized>(storage: &S) {
    storage.remove_item(SESSION_USER_KEY);
}

/// Reactive cells backing the session. Only [`Session`] and its fault hook
/// write them.
#[derive(Clone)]
struct SessionCells {
    user: Signal<Option<AuthUser>>,
    /// Bumped whenever a session begins or ends, which re-arms the refresh timer.
    epoch: Signal<u64>,
    storage: PlatformStorage,
}

impl SessionCells {
    fn begin(&self, user: AuthUser) {
        persist_user(&self.storage, &user);
        let mut cell = self.user;
        cell.set(Some(user));
        let mut epoch = self.epoch;
        *epoch.write() += 1;
    }

    fn update(&self, user: AuthUser) {
        persist_user(&self.storage, &user);
        let mut cell = self.user;
        cell.set(Some(user));
    }

    fn end(&self) {
        forget_user(&self.storage);
        let mut cell = self.user;
        cell.set(None);
        let mut epoch = self.epoch;
        *epoch.write() += 1;
    }

    fn is_authenticated_untracked(&self) -> bool {
        self.user.peek().is_some()
    }
}

/// Clear the local session, then tell the backend. Local state goes first so a
/// 401 from the logout call finds no session to end.
fn end_session(cells: &SessionCells, backend: &ApiClient) {
    if cells.is_authenticated_untracked() {
        tracing::info!("Signing out");
    }
    cells.end();
    let backend = backend.clone();
    spawn_forever(async move {
        if let Err(e) = backend.logout().await {
            tracing::warn!("Logout request failed: {e}");
        }
    });
}

/// Handle to the current session, shared through context.
#[derive(Clone)]
pub struct Session {
    cells: SessionCells,
    client: ApiClient,
}

impl Session {
    /// The signed-in user. Subscribes the caller to changes.
    pub fn user(&self) -> Option<AuthUser> {
        self.cells.user.read().clone()
    }

    /// Whether a user is signed in. Subscribes the caller to changes.
    pub fn is_authenticated(&self) -> bool {
        self.cells.user.read().is_some()
    }

    /// Same as [`Session::is_authenticated`] without subscribing.
    pub fn peek_authenticated(&self) -> bool {
        self.cells.is_authenticated_untracked()
    }

    pub fn client(&self) -> ApiClient {
        self.client.clone()
    }

    pub async fn login(&self, credentials: Credentials) -> Result<AuthUser, ApiError> {
        let response = self.client.login(&credentials).await?;
        let user = AuthUser::from(response.user);
        tracing::info!(user = %user.id, "Signed in");
        self.cells.begin(user.clone());
        Ok(user)
    }

    pub async fn register(&self, registration: Registration) -> Result<AuthUser, ApiError> {
        let response = self.client.register(&registration).await?;
        let user = AuthUser::from(response.user);
        tracing::info!(user = %user.id, "Registered");
        self.cells.begin(user.clone());
        Ok(user)
    }

    /// Renew the session cookie and pick up any profile changes. A 401 here is
    /// handled by the fault hook.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let response = self.client.refresh().await?;
        self.cells.update(AuthUser::from(response.user));
        Ok(())
    }

    pub fn logout(&self) {
        end_session(&self.cells, &self.client.without_fault_hook());
    }

    fn epoch(&self) -> u64 {
        (self.cells.epoch)()
    }
}

/// Wrap `client` with the fault hook: a 401 while signed in ends the session,
/// and 401/403/500/network failures raise their alert.
fn install_fault_hook(client: ApiClient, cells: SessionCells) -> ApiClient {
    let backend = client.without_fault_hook();
    client.with_fault_hook(move |err: &ApiError| {
        let on_login_page = notify::on_login_page();
        let action = FaultAction::resolve(
            err.fault(),
            cells.is_authenticated_untracked(),
            on_login_page,
        );
        if action.logout {
            tracing::warn!("Authentication error - session expired or invalid");
            end_session(&cells, &backend);
        }
        if let Some(message) = action.alert {
            notify::alert(message);
        }
    })
}

/// Get the current session.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Get the REST client of the current session.
pub fn use_api() -> ApiClient {
    use_session().client()
}

/// Provider component that restores the session and keeps it fresh.
/// Wrap your app with this component to enable authentication.
///
/// The user is persisted to a [`PlatformStorage`] provided by an ancestor as
/// context, or else to the one from [`make_storage`].
#[component]
pub fn SessionProvider(config: BookshelfConfig, children: Element) -> Element {
    let storage = use_hook(|| try_consume_context::<PlatformStorage>().unwrap_or_else(make_storage));
    let restore_from = storage.clone();
    let user = use_signal(move || restore_user(&restore_from));
    let epoch = use_signal(|| 0u64);

    let base_url = config.api.base_url.clone();
    let session = use_context_provider(move || {
        let cells = SessionCells {
            user,
            epoch,
            storage,
        };
        let client = install_fault_hook(ApiClient::new(&base_url), cells.clone());
        Session { cells, client }
    });

    // Periodic silent refresh, re-armed whenever a session begins or ends
    let refresh_every = config.refresh_interval();
    let _refresh_timer = use_resource(move || {
        let session = session.clone();
        let epoch = session.epoch();
        async move {
            let Some(period) = refresh_every else {
                return;
            };
            tracing::debug!(epoch, "Refresh timer armed");
            run_refresh_timer(session, period).await;
        }
    });

    rsx! {
        {children}
    }
}

async fn run_refresh_timer(session: Session, period: Duration) {
    loop {
        if !session.peek_authenticated() {
            return;
        }
        crate::time::sleep(period).await;
        if !session.peek_authenticated() {
            return;
        }
        match session.refresh().await {
            Ok(()) => tracing::info!("Session refreshed"),
            Err(e) => tracing::error!("Failed to refresh session: {e}"),
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| session.logout(),
            "{label}"
        }
    }
}
