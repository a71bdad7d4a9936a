//! Main egui application — composes the panels and drives submissions.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, TopBottomPanel};

use chat_core::controller::{self, Completion, ConversationController};
use chat_core::event_bus::EventBus;
use chat_core::ports::ChatBackendPort;
use chat_platform::backend::HttpChatBackend;
use chat_platform::config::load_config;
use chat_ui::panels::{chat, composer, header};
use chat_ui::state::UiState;
use chat_ui::theme;

const COMPOSER_HEIGHT: f32 = 170.0;
const MIN_TRANSCRIPT_HEIGHT: f32 = 200.0;

pub struct ChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    controller: Rc<RefCell<ConversationController>>,
    backend: Rc<dyn ChatBackendPort>,
    endpoint: String,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = load_config();
        let event_bus = EventBus::new();
        let backend: Rc<dyn ChatBackendPort> = Rc::new(HttpChatBackend::new(&config));
        let endpoint = backend.endpoint();
        let controller = ConversationController::new(config, event_bus.clone());

        Self {
            ui_state: UiState::new(),
            event_bus,
            controller: Rc::new(RefCell::new(controller)),
            backend,
            endpoint,
            first_frame: true,
        }
    }

    /// Send the controller's current input (async)
    fn dispatch_submission(&self, ctx: &egui::Context) {
        let controller = self.controller.clone();
        let backend = self.backend.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match controller::submit(&controller, backend.as_ref()).await {
                Some(Completion::Stale) => log::debug!("Reply arrived for a previous session"),
                Some(Completion::Applied(_)) => {}
                None => log::debug!("Submission skipped"),
            }
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        let mut reset = false;
        let mut send = false;

        // ── Header ───────────────────────────────────────────
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            reset = header::header_panel(ui, &self.ui_state.status_text);
            ui.add_space(8.0);
        });

        // ── Transcript + composer ────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let transcript_height =
                (ui.available_height() - COMPOSER_HEIGHT).max(MIN_TRANSCRIPT_HEIGHT);
            {
                let controller = self.controller.borrow();
                chat::chat_panel(ui, controller.messages(), &mut self.ui_state, transcript_height);
            }

            ui.add_space(8.0);

            let mut controller = self.controller.borrow_mut();
            send = composer::composer_panel(ui, &mut controller, &self.endpoint);
        });

        if reset {
            self.controller.borrow_mut().reset();
            ctx.request_repaint();
        }
        if send {
            self.dispatch_submission(ctx);
        }
    }
}
