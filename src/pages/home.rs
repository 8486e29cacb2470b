use leptos::html::{Audio, Div};
use leptos::prelude::*;
use leptos_fetch::QueryClient;
use std::time::Duration;

use crate::auth::PasswordGate;
use crate::components::footer::Footer;
use crate::components::player::PlaybackController;
use crate::components::story_form::StoryForm;
use crate::components::story_reader::StoryReader;
use crate::components::storylist::{get_stories_query, StoryList};
use crate::components::toast::Toast;
use crate::models::stories::StoryView;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4">
            <header class="text-center py-8">
                <h1 class="text-4xl font-bold text-indigo-900 dark:text-amber-300">
                    "Bedtime Story Generator"
                </h1>
                <p class="text-gray-600 dark:text-gray-300 mt-2">
                    "Create magical bedtime stories for your child"
                </p>
            </header>

            <PasswordGate>
                <StorySession />
            </PasswordGate>

            <Footer />
        </div>
    }
}

/// Arbitrates the concurrent session concerns: which story is current, who
/// may use the audio output, and the single error channel. Switching stories
/// always stops playback before the reference swaps, so narration can never
/// outlive the story on screen.
#[component]
fn StorySession() -> impl IntoView {
    let client: QueryClient = expect_context();

    let (current_story, set_current_story) = signal(None::<StoryView>);
    let (toast_message, set_toast_message) = signal(String::new());
    let (toast_visible, set_toast_visible) = signal(false);

    // Single error channel: the latest message from any controller wins.
    let show_error = Callback::new(move |message: String| {
        set_toast_message(message);
        set_toast_visible(true);
        set_timeout(move || set_toast_visible(false), Duration::from_secs(5));
    });

    let audio_ref = NodeRef::<Audio>::new();
    let playback = PlaybackController::new(audio_ref, show_error);
    let reader_ref = NodeRef::<Div>::new();

    let select_story = Callback::new(move |story: StoryView| {
        playback.stop();
        set_current_story(Some(story));
    });

    let story_generated = Callback::new(move |story: StoryView| {
        set_current_story(Some(story));
        client.invalidate_query(get_stories_query, ());
    });

    // Scroll cue once a story becomes current, via generation or selection.
    Effect::new(move |_| {
        if current_story.get().is_some() {
            if let Some(reader) = reader_ref.get() {
                reader.scroll_into_view();
            }
        }
    });

    view! {
        <div class="space-y-6">
            <StoryForm on_story=story_generated on_error=show_error />

            <div node_ref=reader_ref>
                <StoryReader story=current_story playback=playback audio_ref=audio_ref />
            </div>

            <StoryList on_select=select_story />
        </div>

        <Toast
            message=toast_message
            visible=toast_visible
            on_close=move |_| set_toast_visible(false)
        />
    }
}
