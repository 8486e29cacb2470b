use leptos::prelude::*;
use log::warn;

use crate::config::{ACCESS_PASSWORD, AUTH_SESSION_KEY};

/// Session-wide gate state. Once unlocked it stays unlocked until the
/// browser session ends; there is no logout.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub is_unlocked: ReadSignal<bool>,
    set_unlocked: WriteSignal<bool>,
}

impl AuthContext {
    /// Checks a candidate against the fixed access secret. On a match the
    /// unlock marker is persisted for the rest of the browser session and
    /// the gate opens; on a mismatch the caller re-prompts.
    pub fn submit_password(&self, candidate: &str) -> bool {
        if candidate != ACCESS_PASSWORD {
            return false;
        }
        remember_unlock();
        self.set_unlocked.set(true);
        true
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (is_unlocked, set_unlocked) = signal(stored_unlock());

    provide_context(AuthContext {
        is_unlocked,
        set_unlocked,
    });

    view! { {children()} }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.session_storage().ok().flatten())
}

fn stored_unlock() -> bool {
    session_storage()
        .and_then(|storage| storage.get_item(AUTH_SESSION_KEY).ok().flatten())
        .is_some_and(|value| value == "true")
}

fn remember_unlock() {
    match session_storage() {
        Some(storage) => {
            let _ = storage.set_item(AUTH_SESSION_KEY, "true");
        }
        None => warn!("session storage unavailable; unlock will not survive a reload"),
    }
}
