use leptos::html::Audio;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use wasm_bindgen::JsValue;
use web_sys::Url;

use crate::api;
use crate::state::PlaybackState;

/// Drives the single audio output endpoint. Narration bytes are fetched per
/// story, materialized as an object-URL blob, and bound to the one `<audio>`
/// element; the URL is revoked on every exit path — natural end, explicit
/// stop, and error — so the temporary resource never leaks.
#[derive(Clone, Copy)]
pub struct PlaybackController {
    state: RwSignal<PlaybackState>,
    audio_ref: NodeRef<Audio>,
    object_url: StoredValue<Option<String>>,
    on_error: Callback<String>,
}

impl PlaybackController {
    pub fn new(audio_ref: NodeRef<Audio>, on_error: Callback<String>) -> Self {
        Self {
            state: RwSignal::new(PlaybackState::Idle),
            audio_ref,
            object_url: StoredValue::new(None),
            on_error,
        }
    }

    /// Reactive in signal contexts.
    pub fn is_busy(&self) -> bool {
        self.state.get().is_busy()
    }

    pub fn state(&self) -> PlaybackState {
        self.state.get()
    }

    /// Fetches narration for the story and starts playing it. Any active
    /// output is stopped first; the single endpoint is never shared.
    pub fn play(&self, story_id: String) {
        self.stop();
        self.state.update(|state| {
            state.begin(story_id.clone());
        });

        let this = *self;
        spawn_local(async move {
            match api::synthesize_narration(&story_id).await {
                Ok(bytes) => match this.attach_and_play(&bytes) {
                    Ok(()) => this.state.update(|state| state.started()),
                    Err(err) => {
                        error!("Error starting audio output: {err:?}");
                        this.fail("Failed to play audio. Please try again.");
                    }
                },
                Err(err) => {
                    error!("Error playing story {story_id}: {err}");
                    this.fail("Failed to play the story. Please try again.");
                }
            }
        });
    }

    /// Pauses the output and releases the blob. Called on story switches
    /// before the current-story reference changes hands.
    pub fn stop(&self) {
        if let Some(audio) = self.audio_ref.get_untracked() {
            let _ = audio.pause();
        }
        self.release_url();
        self.state.update(|state| state.stop());
    }

    /// `ended` event from the audio element.
    pub fn handle_ended(&self) {
        self.release_url();
        self.state.update(|state| state.stop());
    }

    /// `error` event from the audio element.
    pub fn handle_element_error(&self) {
        error!("audio element reported a playback error");
        self.fail("Failed to play audio. Please try again.");
    }

    fn attach_and_play(&self, bytes: &[u8]) -> Result<(), JsValue> {
        let audio = self
            .audio_ref
            .get_untracked()
            .ok_or_else(|| JsValue::from_str("audio element not mounted"))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("audio/mpeg");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

        let url = Url::create_object_url_with_blob(&blob)?;
        audio.set_src(&url);
        self.object_url.set_value(Some(url));

        let _ = audio.play()?;
        Ok(())
    }

    fn fail(&self, message: &str) {
        self.release_url();
        self.state.update(|state| state.fail());
        self.on_error.run(message.to_string());
        self.state.update(|state| state.settle());
    }

    fn release_url(&self) {
        if let Some(url) = self.object_url.get_value() {
            let _ = Url::revoke_object_url(&url);
            self.object_url.set_value(None);
        }
    }
}
