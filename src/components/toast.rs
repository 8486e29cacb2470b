use leptos::prelude::*;

#[component]
pub fn Toast(
    message: ReadSignal<String>,
    visible: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let opacity_class = move || {
        if visible.get() {
            "opacity-100"
        } else {
            "opacity-0 pointer-events-none"
        }
    };

    view! {
        <div class=move || {
            format!(
                "{} fixed bottom-4 right-4 bg-rose-50 dark:bg-indigo-950 text-rose-700 dark:text-rose-300 px-4 py-2 rounded shadow-lg transition-opacity duration-300",
                opacity_class(),
            )
        }>
            {message}
            <button
                class="ml-2 text-rose-500 hover:text-rose-600 dark:text-rose-400 dark:hover:text-rose-300"
                on:click=move |_| on_close.run(())
            >
                "×"
            </button>
        </div>
    }
}
