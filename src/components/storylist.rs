use leptos::prelude::*;
use leptos_fetch::QueryClient;
use log::error;

use crate::api;
use crate::models::stories::StoryView;

/// Query behind the previous-stories list. Registered with the session
/// [`QueryClient`] so the orchestrator can invalidate it after a successful
/// generation; every refresh replaces the cached list wholesale.
pub async fn get_stories_query() -> Result<Vec<StoryView>, String> {
    api::fetch_stories().await.map_err(|e| e.to_string())
}

#[component]
pub fn StoryList(#[prop(into)] on_select: Callback<StoryView>) -> impl IntoView {
    let client: QueryClient = expect_context();
    let stories = client.local_resource(get_stories_query, || ());

    view! {
        <section class="mt-8">
            <h2 class="text-2xl font-bold text-gray-800 dark:text-gray-100 mb-4">
                "Previous Stories"
            </h2>

            <Transition fallback=move || {
                view! {
                    <p class="text-gray-500 dark:text-gray-400">"Loading previous stories..."</p>
                }
            }>
                {move || {
                    match stories.get() {
                        Some(Ok(story_list)) => {
                            if story_list.is_empty() {
                                view! {
                                    <p class="text-gray-500 dark:text-gray-400">
                                        "No previous stories yet. Generate your first story!"
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="grid gap-4 md:grid-cols-2">
                                        <For
                                            each=move || story_list.clone()
                                            key=|story| story.id.clone()
                                            children=move |story| {
                                                view! { <StoryCard story=story on_select=on_select /> }
                                            }
                                        />
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                        Some(Err(e)) => {
                            error!("Error fetching stories: {e}");
                            view! {
                                <p class="text-rose-600 dark:text-rose-400">
                                    "Failed to load previous stories. Please try again later."
                                </p>
                            }
                                .into_any()
                        }
                        None => view! { <div></div> }.into_any(),
                    }
                }}
            </Transition>
        </section>
    }
}

#[component]
fn StoryCard(story: StoryView, #[prop(into)] on_select: Callback<StoryView>) -> impl IntoView {
    let story_for_select = story.clone();

    view! {
        <div
            class="flex justify-between bg-white dark:bg-indigo-900 rounded-lg shadow-md p-4 cursor-pointer
            hover:shadow-lg hover:bg-indigo-50 dark:hover:bg-indigo-800 transition"
            on:click=move |_| on_select.run(story_for_select.clone())
        >
            <div class="min-w-0">
                <h3 class="font-semibold text-gray-800 dark:text-gray-100 truncate">
                    {story.title().to_string()}
                </h3>
                <p class="text-sm text-gray-600 dark:text-gray-300 truncate">
                    {story.prompt.clone()}
                </p>
                <div class="flex space-x-3 text-xs text-gray-500 dark:text-gray-400 mt-2">
                    <span>{story.created_label()}</span>
                    <span>{format!("{} min", story.duration)}</span>
                </div>
            </div>
            {story
                .image_url
                .as_ref()
                .map(|image| {
                    view! {
                        <img
                            src=image.clone()
                            alt="Story thumbnail"
                            class="w-16 h-16 rounded-md object-cover ml-3 flex-shrink-0"
                        />
                    }
                })}
        </div>
    }
}
