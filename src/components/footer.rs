use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center text-sm text-gray-500 dark:text-gray-400 py-6">
            <p>"© 2025 Bedtime Story Generator - Made with love for sleepy children everywhere"</p>
        </footer>
    }
}
