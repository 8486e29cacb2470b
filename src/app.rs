use leptos::prelude::*;
use leptos_fetch::QueryClient;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::auth::AuthProvider;
use crate::pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    QueryClient::new().provide();

    view! {
        <Title text="Bedtime Story Generator" />
        <AuthProvider>
            <Router>
                <main class="min-h-screen bg-indigo-50 dark:bg-indigo-950">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage />
                    </Routes>
                </main>
            </Router>
        </AuthProvider>
    }
}
