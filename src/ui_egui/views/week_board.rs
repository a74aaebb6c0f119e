use egui::{Frame, Margin, RichText, Stroke, Ui, Vec2};

use super::cards::{scheduled_card, unscheduled_card};
use super::BoardAction;
use crate::services::board::ScheduleBoard;
use crate::services::drag::DragSource;
use crate::services::projector::WeekProjection;
use crate::ui_egui::drag::DragBridge;
use crate::ui_egui::theme::BoardTheme;
use crate::utils::date::{WeekDay, WORK_WEEK_LEN};

const TRAY_CARD_SIZE: Vec2 = Vec2::new(220.0, 110.0);
const DAY_MIN_HEIGHT: f32 = 120.0;
const DAY_MIN_HEIGHT_DRAGGING: f32 = 220.0;
const EMPTY_WEEK_MESSAGE: &str =
    "No inspections need attention this week. Use the controls above to explore other weeks.";

pub struct WeekBoardView;

impl WeekBoardView {
    /// Lays out header, unscheduled tray and the five day columns.
    pub fn show(
        ui: &mut Ui,
        board: &mut ScheduleBoard,
        theme: &BoardTheme,
        loading: bool,
    ) -> Vec<BoardAction> {
        let mut actions = Vec::new();

        Self::render_header(ui, board, theme, loading, &mut actions);
        ui.separator();

        let projection = board.projection();

        if !projection.unscheduled.is_empty() {
            Self::render_tray(ui, board, &projection, theme);
            ui.add_space(12.0);
        }

        Self::render_days(ui, board, &projection, theme, &mut actions);

        if projection.is_empty_week() {
            ui.add_space(12.0);
            ui.label(RichText::new(EMPTY_WEEK_MESSAGE).color(theme.text_secondary));
        }

        actions
    }

    fn render_header(
        ui: &mut Ui,
        board: &mut ScheduleBoard,
        theme: &BoardTheme,
        loading: bool,
        actions: &mut Vec<BoardAction>,
    ) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Your scheduled week");
                ui.label(
                    RichText::new(
                        "Monday through Friday. Drag cards between days to reschedule.",
                    )
                    .color(theme.text_secondary),
                );
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("▶").on_hover_text("Next week").clicked() {
                    board.shift_week(1);
                }
                if ui.button("Today").clicked() {
                    board.reset_to_current_week();
                }
                if ui.button("◀").on_hover_text("Previous week").clicked() {
                    board.shift_week(-1);
                }

                ui.add_space(8.0);
                ui.label(RichText::new(board.navigator().label()).strong());

                ui.add_space(8.0);
                if loading {
                    ui.spinner();
                } else if ui.button("⟳").on_hover_text("Reload inspections").clicked() {
                    actions.push(BoardAction::Reload);
                }
            });
        });
    }

    fn render_tray(
        ui: &mut Ui,
        board: &ScheduleBoard,
        projection: &WeekProjection,
        theme: &BoardTheme,
    ) {
        Frame::none()
            .fill(theme.past_background)
            .stroke(Stroke::new(1.0, theme.column_border))
            .rounding(8.0)
            .inner_margin(Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("Unscheduled inspections").strong());
                        ui.label(
                            RichText::new("Drag a card onto a weekday column to schedule")
                                .small()
                                .color(theme.text_secondary),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!(
                                "{} ready to schedule",
                                projection.unscheduled.len()
                            ))
                            .small()
                            .color(theme.text_secondary),
                        );
                    });
                });

                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for item in &projection.unscheduled {
                        let dragged = board
                            .drag()
                            .is_dragging_item(DragSource::Unscheduled, &item.id);
                        ui.allocate_ui(TRAY_CARD_SIZE, |ui| {
                            unscheduled_card(ui, item, theme, dragged);
                        });
                    }
                });
            });
    }

    fn render_days(
        ui: &mut Ui,
        board: &mut ScheduleBoard,
        projection: &WeekProjection,
        theme: &BoardTheme,
        actions: &mut Vec<BoardAction>,
    ) {
        let window = board.window();
        ui.columns(WORK_WEEK_LEN, |columns| {
            for (column, day) in columns.iter_mut().zip(window.days()) {
                Self::render_day(column, board, day, projection, theme, actions);
            }
        });
    }

    fn render_day(
        ui: &mut Ui,
        board: &mut ScheduleBoard,
        day: &WeekDay,
        projection: &WeekProjection,
        theme: &BoardTheme,
        actions: &mut Vec<BoardAction>,
    ) {
        let is_past = board.navigator().is_past(day.date);
        let stroke = if board.drag().is_highlighted(&day.date_key) {
            Stroke::new(2.0, theme.drop_highlight)
        } else {
            Stroke::new(1.0, theme.column_border)
        };
        let min_height = if board.drag().is_dragging() {
            DAY_MIN_HEIGHT_DRAGGING
        } else {
            DAY_MIN_HEIGHT
        };

        let response = Frame::none()
            .fill(if is_past {
                theme.past_background
            } else {
                theme.column_background
            })
            .stroke(stroke)
            .rounding(8.0)
            .inner_margin(Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_min_height(min_height);
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(day.weekday_label.to_uppercase())
                                .small()
                                .strong()
                                .color(theme.text_secondary),
                        );
                        ui.label(RichText::new(&day.date_label).strong());
                    });
                    if is_past {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            ui.label(RichText::new("Past").small().color(theme.text_secondary));
                        });
                    }
                });
                ui.separator();

                let events = projection.events_for(&day.date_key);
                if events.is_empty() {
                    ui.label(
                        RichText::new("No scheduled work")
                            .small()
                            .color(theme.text_secondary),
                    );
                }
                for event in events {
                    let dragged = board
                        .drag()
                        .is_dragging_item(DragSource::Scheduled, &event.item_id);
                    scheduled_card(ui, event, theme, dragged, actions);
                    ui.add_space(6.0);
                }
            })
            .response;

        DragBridge::track_day(board, &response, day.date, &day.date_key);
    }
}
