mod lifecycle;
mod toast;
mod workers;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use self::toast::ToastQueue;
use crate::models::schedule_item::ScheduleItem;
use crate::models::settings::ScheduleSettings;
use crate::services::api::HttpSchedulingApi;
use crate::services::board::ScheduleBoard;
use crate::services::commit::CommitError;
use crate::ui_egui::theme::BoardTheme;

type LoadResult = Result<Vec<ScheduleItem>, String>;

pub struct ScheduleApp {
    board: ScheduleBoard,
    settings: ScheduleSettings,
    api: Arc<HttpSchedulingApi>,
    active_theme: BoardTheme,
    /// Set by the board after a successful commit, consumed once per frame
    refresh_requested: Rc<Cell<bool>>,
    load_rx: Option<Receiver<LoadResult>>,
    commit_rx: Option<Receiver<Result<(), CommitError>>>,
    load_error: Option<String>,
    toasts: ToastQueue,
}

impl eframe::App for ScheduleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}
