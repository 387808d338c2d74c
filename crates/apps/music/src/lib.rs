//! Music desktop app: a looping lofi radio stream with play/pause and volume controls.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod player;

use std::{cell::RefCell, rc::Rc};

use desktop_app_contract::{AppContent, AppMountContext, ApplicationId};
use leptos::*;
use web_sys::HtmlAudioElement;

pub use player::{PlayerState, DEFAULT_VOLUME, LOFI_STREAM_URL};

type AudioSlot = Rc<RefCell<Option<HtmlAudioElement>>>;

/// Window content for the music app.
///
/// The audio element is created on first play, so building content never touches the DOM.
pub struct LofiPlayerContent {
    app_id: ApplicationId,
    state: Rc<RefCell<PlayerState>>,
    audio: AudioSlot,
}

impl LofiPlayerContent {
    fn new(app_id: ApplicationId) -> Self {
        Self {
            app_id,
            state: Rc::new(RefCell::new(PlayerState::default())),
            audio: Rc::new(RefCell::new(None)),
        }
    }

    /// Content factory registered in the desktop app catalog.
    pub fn create(app_id: ApplicationId) -> Rc<dyn AppContent> {
        Rc::new(Self::new(app_id))
    }
}

impl AppContent for LofiPlayerContent {
    fn application_id(&self) -> &ApplicationId {
        &self.app_id
    }

    fn mount(&self, _context: AppMountContext) -> View {
        view! { <LofiPlayer state=self.state.clone() audio=self.audio.clone() /> }.into_view()
    }

    fn teardown(&self) {
        self.state.borrow_mut().stop();
        if let Some(audio) = self.audio.borrow_mut().take() {
            if let Err(err) = audio.pause() {
                logging::warn!("failed to pause lofi stream: {err:?}");
            }
            audio.set_src("");
        }
    }
}

fn ensure_audio(slot: &AudioSlot, volume: f64) -> Option<HtmlAudioElement> {
    if let Some(audio) = slot.borrow().as_ref() {
        return Some(audio.clone());
    }
    let audio = match HtmlAudioElement::new_with_src(LOFI_STREAM_URL) {
        Ok(audio) => audio,
        Err(err) => {
            logging::warn!("failed to create lofi audio element: {err:?}");
            return None;
        }
    };
    audio.set_loop(true);
    audio.set_volume(volume);
    *slot.borrow_mut() = Some(audio.clone());
    Some(audio)
}

#[component]
fn LofiPlayer(state: Rc<RefCell<PlayerState>>, audio: AudioSlot) -> impl IntoView {
    let initial = *state.borrow();
    let playing = create_rw_signal(initial.is_playing());
    let volume = create_rw_signal(initial.volume());
    let state = store_value(state);
    let audio = store_value(audio);

    let toggle = move |_| {
        let (now_playing, current_volume) = state.with_value(|state| {
            let mut state = state.borrow_mut();
            (state.toggle(), state.volume())
        });
        playing.set(now_playing);

        let Some(element) = audio.with_value(|slot| ensure_audio(slot, current_volume)) else {
            return;
        };
        if now_playing {
            if let Err(err) = element.play() {
                logging::warn!("lofi stream refused to play: {err:?}");
            }
        } else if let Err(err) = element.pause() {
            logging::warn!("failed to pause lofi stream: {err:?}");
        }
    };

    let change_volume = move |ev: web_sys::Event| {
        let Ok(requested) = event_target_value(&ev).parse::<f64>() else {
            return;
        };
        let stored = state.with_value(|state| state.borrow_mut().set_volume(requested));
        volume.set(stored);
        audio.with_value(|slot| {
            if let Some(element) = slot.borrow().as_ref() {
                element.set_volume(stored);
            }
        });
    };

    view! {
        <div class="app-shell app-music-shell">
            <div class="music-header">
                <h2>"Lofi Radio"</h2>
                <button
                    type="button"
                    class="music-toggle"
                    aria-label=move || if playing.get() { "Pause" } else { "Play" }
                    on:click=toggle
                >
                    {move || if playing.get() { "\u{23F8}" } else { "\u{25B6}" }}
                </button>
            </div>
            <label class="music-volume">
                <span aria-hidden="true">"\u{1F50A}"</span>
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.01"
                    aria-label="Volume"
                    prop:value=move || volume.get().to_string()
                    on:input=change_volume
                />
            </label>
        </div>
    }
}
