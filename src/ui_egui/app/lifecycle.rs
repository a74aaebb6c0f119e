use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use super::toast::ToastQueue;
use super::ScheduleApp;
use crate::models::settings::ScheduleSettings;
use crate::services::api::HttpSchedulingApi;
use crate::services::board::ScheduleBoard;
use crate::ui_egui::dialogs::time_prompt::{TimePrompt, TimePromptAction};
use crate::ui_egui::drag::DragBridge;
use crate::ui_egui::links::{address_url, inspection_url, open_in_browser};
use crate::ui_egui::theme::BoardTheme;
use crate::ui_egui::views::week_board::WeekBoardView;
use crate::ui_egui::views::BoardAction;
use crate::utils::date::SystemClock;

impl ScheduleApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: ScheduleSettings,
        api: Arc<HttpSchedulingApi>,
    ) -> Self {
        // First frame loads the list
        let refresh_requested = Rc::new(Cell::new(true));
        let refresh_flag = Rc::clone(&refresh_requested);

        let board = ScheduleBoard::new(Arc::new(SystemClock), settings.default_time.clone())
            .on_schedule_success(move || refresh_flag.set(true));

        let active_theme = BoardTheme::detect(settings.use_system_theme);
        active_theme.apply_to_context(&cc.egui_ctx);

        log::info!(
            "Schedule board ready against {} (week of {})",
            api.base_url(),
            board.navigator().label()
        );

        Self {
            board,
            settings,
            api,
            active_theme,
            refresh_requested,
            load_rx: None,
            commit_rx: None,
            load_error: None,
            toasts: ToastQueue::new(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        self.poll_load(ctx);
        self.poll_commit(ctx);

        // A reload requested mid-load waits for that load to land first.
        if self.load_rx.is_none() && self.refresh_requested.replace(false) {
            self.start_load();
        }

        DragBridge::sync(ctx, &mut self.board);

        let loading = self.load_rx.is_some();
        let prompt_open = self.board.pending().is_some();

        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(error) = &self.load_error {
                    ui.label(egui::RichText::new(error).color(self.active_theme.error));
                    ui.add_space(6.0);
                }

                ui.add_enabled_ui(!prompt_open, |ui| {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            WeekBoardView::show(ui, &mut self.board, &self.active_theme, loading)
                        })
                        .inner
                })
                .inner
            })
            .inner;

        self.handle_board_actions(actions);

        match TimePrompt::show(ctx, &mut self.board, &self.active_theme) {
            TimePromptAction::Save => self.start_commit(),
            TimePromptAction::Cancel => {
                self.board.cancel_pending();
            }
            TimePromptAction::None => {}
        }

        self.toasts.show(ctx, &self.active_theme);
    }

    fn handle_board_actions(&mut self, actions: Vec<BoardAction>) {
        let web_base = self.settings.web_base();
        for action in actions {
            let url = match action {
                BoardAction::Reload => {
                    self.refresh_requested.set(true);
                    continue;
                }
                BoardAction::OpenInspection(id) => inspection_url(web_base, &id),
                BoardAction::OpenAddress(id) => address_url(web_base, &id),
            };

            if let Err(err) = open_in_browser(&url) {
                log::warn!("Failed to open {}: {}", url, err);
                self.toasts.failure(format!("Could not open browser: {}", err));
            }
        }
    }
}
