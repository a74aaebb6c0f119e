//! "Set a time" modal shown between a drop and the schedule request.

use egui::{Context, RichText};

use crate::services::board::ScheduleBoard;
use crate::ui_egui::theme::BoardTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePromptAction {
    None,
    Cancel,
    Save,
}

pub struct TimePrompt;

impl TimePrompt {
    /// Renders the prompt for the board's pending schedule, if any. Time
    /// edits go straight to the board; Save and Cancel are returned for the
    /// caller to act on.
    pub fn show(ctx: &Context, board: &mut ScheduleBoard, theme: &BoardTheme) -> TimePromptAction {
        let Some(pending) = board.pending() else {
            return TimePromptAction::None;
        };

        let subtitle = format!(
            "{} on {}",
            pending.item.display_title(),
            pending.day.format("%A, %B %-d")
        );
        let saving = pending.saving;
        let error = pending.error.clone();
        let original_time = pending.time.clone();
        let mut time = original_time.clone();
        let can_confirm = board.can_confirm();

        let mut action = TimePromptAction::None;

        egui::Window::new("Set a time")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);

                ui.label(RichText::new(&subtitle).color(theme.text_secondary));
                ui.add_space(10.0);

                ui.label("Time of day");
                let field = ui.add_enabled(
                    !saving,
                    egui::TextEdit::singleline(&mut time)
                        .hint_text("hh:mm")
                        .desired_width(120.0),
                );
                if field.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    && can_confirm
                {
                    action = TimePromptAction::Save;
                }

                if let Some(error) = &error {
                    ui.add_space(6.0);
                    ui.label(RichText::new(error).color(theme.error));
                }

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let save_text = if saving { "Saving…" } else { "Save" };
                    if ui
                        .add_enabled(can_confirm, egui::Button::new(save_text))
                        .clicked()
                    {
                        action = TimePromptAction::Save;
                    }

                    ui.add_space(10.0);

                    if ui
                        .add_enabled(!saving, egui::Button::new("Cancel"))
                        .clicked()
                    {
                        action = TimePromptAction::Cancel;
                    }

                    if saving {
                        ui.spinner();
                    }
                });
            });

        if !saving && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            action = TimePromptAction::Cancel;
        }

        if time != original_time {
            board.change_time(time);
        }

        action
    }
}
