use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::auth::context::AuthContext;

/// Renders its children only once the session is unlocked; until then shows
/// the password card. An incorrect attempt is a non-fatal re-prompt.
#[component]
pub fn PasswordGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_context::<AuthContext>().expect("AuthContext not found");
    let (password, set_password) = signal(String::new());
    let (password_error, set_password_error) = signal(String::new());

    let handle_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        if auth.submit_password(&password.get_untracked()) {
            set_password_error(String::new());
        } else {
            set_password_error("Incorrect password. Please try again.".to_string());
        }
    };

    view! {
        <Show
            when=move || auth.is_unlocked.get()
            fallback=move || {
                view! {
                    <div class="min-h-[60vh] flex items-center justify-center">
                        <div class="max-w-md w-full bg-white dark:bg-indigo-900 rounded-lg shadow-md p-6">
                            <h2 class="text-2xl font-bold text-center text-gray-800 dark:text-gray-100 mb-2">
                                "Password Required"
                            </h2>
                            <p class="text-center text-gray-600 dark:text-gray-300 mb-6">
                                "Please enter the password to access bedtime stories."
                            </p>
                            <form on:submit=handle_login class="space-y-4">
                                <input
                                    type="password"
                                    placeholder="Enter password"
                                    prop:value=password
                                    on:input=move |ev| set_password(event_target_value(&ev))
                                    class="w-full px-4 py-2 rounded-md border-2 border-indigo-200 dark:border-indigo-700
                                    bg-white dark:bg-indigo-800 text-gray-800 dark:text-gray-100
                                    focus:border-indigo-500 dark:focus:border-amber-400 focus:outline-none"
                                    required
                                />
                                {move || {
                                    (!password_error.get().is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="text-sm text-rose-600 dark:text-rose-400">
                                                    {password_error.get()}
                                                </div>
                                            }
                                        })
                                }}
                                <button
                                    type="submit"
                                    class="w-full py-2 bg-indigo-600 hover:bg-indigo-700 dark:bg-amber-500 dark:hover:bg-amber-600
                                    text-white font-semibold rounded-md transition-colors"
                                >
                                    "Enter"
                                </button>
                            </form>
                        </div>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
