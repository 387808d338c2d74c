//! Terminal desktop app: a novelty command interpreter rendered as a scrolling transcript.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod engine;

use std::{cell::RefCell, rc::Rc};

use desktop_app_contract::{AppContent, AppMountContext, ApplicationId};
use leptos::ev::KeyboardEvent;
use leptos::*;

pub use engine::{interpret, CommandReply, TerminalSession, MAX_TRANSCRIPT_LINES, WELCOME_BANNER};

/// Window content for the terminal app.
///
/// The transcript lives here rather than in the mounted view, so remounting a window body keeps
/// its history.
pub struct TerminalContent {
    app_id: ApplicationId,
    session: Rc<RefCell<TerminalSession>>,
}

impl TerminalContent {
    /// Content factory registered in the desktop app catalog.
    pub fn create(app_id: ApplicationId) -> Rc<dyn AppContent> {
        Rc::new(Self {
            app_id,
            session: Rc::new(RefCell::new(TerminalSession::default())),
        })
    }
}

impl AppContent for TerminalContent {
    fn application_id(&self) -> &ApplicationId {
        &self.app_id
    }

    fn mount(&self, _context: AppMountContext) -> View {
        view! { <TerminalApp session=self.session.clone() /> }.into_view()
    }
}

#[component]
fn TerminalApp(session: Rc<RefCell<TerminalSession>>) -> impl IntoView {
    let lines = create_rw_signal(session.borrow().lines().to_vec());
    let input = create_rw_signal(String::new());
    let screen = create_node_ref::<html::Div>();
    let session = store_value(session);

    let submit = move || {
        let command = input.get_untracked();
        input.set(String::new());
        let transcript = session.with_value(|session| {
            let mut session = session.borrow_mut();
            session.submit(&command);
            session.lines().to_vec()
        });
        lines.set(transcript);
    };

    create_effect(move |_| {
        lines.track();
        if let Some(screen) = screen.get() {
            screen.set_scroll_top(screen.scroll_height());
        }
    });

    let indexed_lines = move || lines.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div class="app-shell app-terminal-shell">
            <div class="terminal-screen" role="log" aria-live="polite" node_ref=screen>
                <For each=indexed_lines key=|(idx, line)| (*idx, line.clone()) let:entry>
                    <div class="terminal-line">{entry.1}</div>
                </For>
            </div>
            <div class="terminal-input-row">
                <span class="terminal-prompt" aria-hidden="true">"$"</span>
                <input
                    class="terminal-input"
                    type="text"
                    aria-label="Terminal command"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                    autofocus=true
                    autocomplete="off"
                    spellcheck="false"
                />
            </div>
        </div>
    }
}
