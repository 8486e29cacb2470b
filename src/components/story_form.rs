use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use std::time::Duration;

use crate::api;
use crate::models::stories::{NewStoryRequest, StoryView};
use crate::state::{
    GenerationState, COMPLETED_LINGER_MS, PROGRESS_MAX_STEP, PROGRESS_TICK_MS,
};

/// Prompt form plus the generation lifecycle. While the backend call is
/// suspended, an interval clock advances a simulated progress bar; the clock
/// is cleared before the final state is written so no stray tick can land on
/// top of the forced 100%.
#[component]
pub fn StoryForm(
    #[prop(into)] on_story: Callback<StoryView>,
    #[prop(into)] on_error: Callback<String>,
) -> impl IntoView {
    let (prompt, set_prompt) = signal(String::new());
    let (age, set_age) = signal(5i32);
    let (duration, set_duration) = signal(5i32);
    let (generation, set_generation) = signal(GenerationState::default());
    let progress_clock: StoredValue<Option<IntervalHandle>> = StoredValue::new(None);

    let stop_progress_clock = move || {
        if let Some(handle) = progress_clock.get_value() {
            handle.clear();
            progress_clock.set_value(None);
        }
    };

    let generate_story = move |ev: SubmitEvent| {
        ev.prevent_default();

        if generation.get_untracked().is_generating() {
            return;
        }

        let request = NewStoryRequest {
            prompt: prompt.get_untracked(),
            age: age.get_untracked(),
            duration: duration.get_untracked(),
        };
        let request = match request.validated() {
            Ok(request) => request,
            Err(err) => {
                on_error.run(err.to_string());
                return;
            }
        };

        set_generation.update(|generation| {
            generation.begin();
        });

        let handle = set_interval_with_handle(
            move || {
                set_generation.update(|generation| {
                    generation.tick(js_sys::Math::random() * PROGRESS_MAX_STEP);
                });
            },
            Duration::from_millis(PROGRESS_TICK_MS),
        )
        .expect("Failed to set interval");
        progress_clock.set_value(Some(handle));

        spawn_local(async move {
            match api::generate_story(&request).await {
                Ok(story) => {
                    stop_progress_clock();
                    set_generation.update(|generation| generation.complete());

                    on_story.run(story);

                    // Leave the completed bar visible before the form resets.
                    set_timeout(
                        move || set_generation.update(|generation| generation.reset()),
                        Duration::from_millis(COMPLETED_LINGER_MS),
                    );
                }
                Err(err) => {
                    stop_progress_clock();
                    error!("Error generating story: {err}");
                    set_generation.update(|generation| generation.reset());
                    on_error.run("Failed to generate story. Please try again.".to_string());
                }
            }
        });
    };

    let age_label = move || {
        let age = age.get();
        if age == 0 {
            "Under 1 year".to_string()
        } else {
            format!("{age} years old")
        }
    };

    view! {
        <section class="bg-white dark:bg-indigo-900 rounded-lg shadow-md p-6">
            <form on:submit=generate_story class="space-y-4">
                <div>
                    <label for="prompt" class="block font-medium text-gray-700 dark:text-gray-200 mb-1">
                        "Story Prompt:"
                    </label>
                    <textarea
                        id="prompt"
                        prop:value=prompt
                        on:input=move |ev| set_prompt(event_target_value(&ev))
                        placeholder="Enter a theme or topic for your bedtime story (e.g., 'a brave little dragon learning to fly')"
                        class="w-full px-4 py-2 rounded-md border-2 border-indigo-200 dark:border-indigo-700
                        bg-white dark:bg-indigo-800 text-gray-800 dark:text-gray-100
                        focus:border-indigo-500 dark:focus:border-amber-400 focus:outline-none"
                        required
                    ></textarea>
                </div>

                <div>
                    <label for="age" class="block font-medium text-gray-700 dark:text-gray-200 mb-1">
                        "Child's Age:"
                    </label>
                    <div class="flex items-center space-x-4">
                        <input
                            type="range"
                            id="age"
                            min="0"
                            max="12"
                            step="1"
                            prop:value=move || age.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    set_age(value);
                                }
                            }
                            class="flex-1 accent-indigo-600 dark:accent-amber-400"
                        />
                        <span class="text-sm text-gray-600 dark:text-gray-300 w-28 text-right">
                            {age_label}
                        </span>
                    </div>
                </div>

                <div>
                    <label for="duration" class="block font-medium text-gray-700 dark:text-gray-200 mb-1">
                        "Story Duration (minutes):"
                    </label>
                    <div class="flex items-center space-x-4">
                        <input
                            type="range"
                            id="duration"
                            min="3"
                            max="15"
                            step="1"
                            prop:value=move || duration.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    set_duration(value);
                                }
                            }
                            class="flex-1 accent-indigo-600 dark:accent-amber-400"
                        />
                        <span class="text-sm text-gray-600 dark:text-gray-300 w-28 text-right">
                            {move || format!("{} minutes", duration.get())}
                        </span>
                    </div>
                </div>

                <button
                    type="submit"
                    disabled=move || generation.get().is_generating()
                    class="w-full py-3 bg-indigo-600 hover:bg-indigo-700 dark:bg-amber-500 dark:hover:bg-amber-600
                    disabled:opacity-70 disabled:cursor-not-allowed
                    text-white font-semibold rounded-md transition-colors"
                >
                    {move || {
                        let generation = generation.get();
                        if generation.is_generating() {
                            view! {
                                <div class="space-y-2">
                                    <span>"Generating Story..."</span>
                                    <div class="w-full bg-indigo-200 dark:bg-indigo-800 rounded-full h-2">
                                        <div
                                            class="bg-amber-400 h-2 rounded-full transition-all"
                                            style:width=format!("{}%", generation.progress())
                                        ></div>
                                    </div>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! { <span>"Generate Bedtime Story"</span> }.into_any()
                        }
                    }}
                </button>
            </form>
        </section>
    }
}
