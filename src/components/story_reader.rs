use leptos::html::Audio;
use leptos::prelude::*;

use crate::components::player::PlaybackController;
use crate::models::stories::StoryView;
use crate::state::PlaybackState;

/// Renders the current story and hosts the session's one `<audio>` element.
/// The play control is disabled while the controller is loading or playing.
#[component]
pub fn StoryReader(
    #[prop(into)] story: Signal<Option<StoryView>>,
    playback: PlaybackController,
    audio_ref: NodeRef<Audio>,
) -> impl IntoView {
    let play_label = move || match playback.state() {
        PlaybackState::Loading(_) | PlaybackState::Playing(_) => "Playing...",
        _ => "Read Aloud",
    };

    view! {
        {move || {
            story
                .get()
                .map(|current| {
                    let story_id = current.id.clone();
                    view! {
                        <section class="bg-white dark:bg-indigo-900 rounded-lg shadow-md p-6">
                            <div class="mb-4">
                                <h2 class="text-2xl font-bold text-gray-800 dark:text-gray-100">
                                    {current.title().to_string()}
                                </h2>
                                <div class="flex space-x-4 text-sm text-gray-500 dark:text-gray-400 mt-1">
                                    <span>{current.created_label()}</span>
                                    <span>{format!("{} minute story", current.duration)}</span>
                                </div>
                            </div>

                            {current
                                .image_url
                                .as_ref()
                                .map(|image| {
                                    view! {
                                        <div class="mb-4">
                                            <img
                                                src=image.clone()
                                                alt="Story illustration"
                                                class="rounded-lg w-full max-h-96 object-cover"
                                            />
                                        </div>
                                    }
                                })}

                            <div class="space-y-3 text-gray-700 dark:text-gray-200 leading-relaxed">
                                {current
                                    .body_paragraphs()
                                    .into_iter()
                                    .map(|paragraph| view! { <p>{paragraph}</p> })
                                    .collect_view()}
                            </div>

                            <div class="mt-6">
                                <button
                                    disabled=move || playback.is_busy()
                                    on:click=move |_| playback.play(story_id.clone())
                                    class="px-6 py-2 bg-violet-600 hover:bg-violet-700 dark:bg-amber-500 dark:hover:bg-amber-600
                                    disabled:opacity-70 disabled:cursor-not-allowed
                                    text-white font-semibold rounded-md transition-colors"
                                >
                                    {play_label}
                                </button>
                            </div>
                        </section>
                    }
                })
        }}
        <audio
            node_ref=audio_ref
            on:ended=move |_| playback.handle_ended()
            on:error=move |_| playback.handle_element_error()
        ></audio>
    }
}
