use egui::{Frame, Id, Margin, RichText, Stroke, Ui};

use super::BoardAction;
use crate::models::schedule_item::ScheduleItem;
use crate::services::drag::DragSource;
use crate::services::projector::ScheduleEvent;
use crate::ui_egui::drag::CardPayload;
use crate::ui_egui::theme::BoardTheme;

pub(super) fn unscheduled_card(
    ui: &mut Ui,
    item: &ScheduleItem,
    theme: &BoardTheme,
    being_dragged: bool,
) {
    let payload = CardPayload::new(DragSource::Unscheduled, item.id.clone());
    let border = if being_dragged {
        theme.drop_highlight
    } else {
        theme.card_border
    };

    ui.dnd_drag_source(Id::new(("unscheduled", item.id.as_str())), payload, |ui| {
        Frame::none()
            .fill(theme.column_background)
            .stroke(Stroke::new(1.5, border))
            .rounding(6.0)
            .inner_margin(Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(item.display_title()).strong());
                ui.label(
                    RichText::new("Drag to a weekday to schedule")
                        .small()
                        .color(theme.text_secondary),
                );
                if let Some(address) = &item.address_label {
                    ui.label(RichText::new(address).small());
                }
                ui.label(
                    RichText::new(format!("ID #{}", item.id))
                        .small()
                        .color(theme.text_secondary),
                );
            });
    });
}

pub(super) fn scheduled_card(
    ui: &mut Ui,
    event: &ScheduleEvent,
    theme: &BoardTheme,
    being_dragged: bool,
    actions: &mut Vec<BoardAction>,
) {
    let payload = CardPayload::new(DragSource::Scheduled, event.item_id.clone());
    let border = if being_dragged {
        theme.drop_highlight
    } else {
        theme.card_border
    };

    ui.dnd_drag_source(Id::new(("scheduled", event.item_id.as_str())), payload, |ui| {
        Frame::none()
            .fill(theme.card_background)
            .stroke(Stroke::new(1.0, border))
            .rounding(6.0)
            .inner_margin(Margin::same(8.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.label(RichText::new(&event.time_label).strong());
                    if let Some(status) = &event.status {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(status).small().color(theme.text_secondary));
                        });
                    }
                });

                if ui.link(&event.title).clicked() {
                    actions.push(BoardAction::OpenInspection(event.item_id.clone()));
                }

                if let Some(address) = &event.address_label {
                    match &event.address_id {
                        Some(address_id) => {
                            if ui.link(RichText::new(address).small()).clicked() {
                                actions.push(BoardAction::OpenAddress(address_id.clone()));
                            }
                        }
                        None => {
                            ui.label(RichText::new(address).small());
                        }
                    }
                }

                if let Some(inspector) = &event.inspector_name {
                    ui.label(
                        RichText::new(inspector)
                            .small()
                            .color(theme.text_secondary),
                    );
                }

                if let Some(due) = &event.due_status {
                    ui.label(
                        RichText::new(&due.label)
                            .small()
                            .strong()
                            .color(theme.tone_color(due.tone)),
                    );
                }
            });
    });
}
