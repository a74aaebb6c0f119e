//! Transient notices in the bottom-right corner: a confirmation after a
//! schedule is saved, or a failure the board has no other place to show.

use std::time::{Duration, Instant};

use egui::{Align2, Context, RichText, Stroke};

use crate::ui_egui::theme::BoardTheme;

const FADE: Duration = Duration::from_millis(500);
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Scheduled,
    Failure,
}

impl ToastKind {
    /// Failures stay up longer so there is time to read the cause.
    fn lifetime(self) -> Duration {
        match self {
            ToastKind::Scheduled => Duration::from_secs(3),
            ToastKind::Failure => Duration::from_secs(6),
        }
    }

    fn marker(self) -> &'static str {
        match self {
            ToastKind::Scheduled => "✓",
            ToastKind::Failure => "✗",
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    kind: ToastKind,
    message: String,
    shown_at: Instant,
}

impl Toast {
    fn remaining(&self, now: Instant) -> Duration {
        self.kind
            .lifetime()
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    /// 1.0 until the last `FADE` of its lifetime, then linear to 0.0.
    fn alpha(&self, now: Instant) -> f32 {
        let remaining = self.remaining(now);
        if remaining >= FADE {
            1.0
        } else {
            remaining.as_secs_f32() / FADE.as_secs_f32()
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Scheduled, message.into(), Instant::now());
    }

    pub fn failure(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Failure, message.into(), Instant::now());
    }

    fn push(&mut self, kind: ToastKind, message: String, now: Instant) {
        log::debug!("Toast ({:?}): {}", kind, message);
        self.toasts.push(Toast {
            kind,
            message,
            shown_at: now,
        });
        if self.toasts.len() > MAX_VISIBLE {
            self.toasts.remove(0);
        }
    }

    fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.remaining(now).is_zero());
    }

    pub fn show(&mut self, ctx: &Context, theme: &BoardTheme) {
        let now = Instant::now();
        self.prune(now);
        if self.toasts.is_empty() {
            return;
        }
        ctx.request_repaint_after(Duration::from_millis(50));

        egui::Area::new(egui::Id::new("schedule_toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
                    for toast in self.toasts.iter().rev() {
                        let alpha = toast.alpha(now);
                        let accent = match toast.kind {
                            ToastKind::Scheduled => theme.success,
                            ToastKind::Failure => theme.error,
                        }
                        .gamma_multiply(alpha);

                        egui::Frame::popup(ui.style())
                            .fill(theme.card_background.gamma_multiply(alpha))
                            .stroke(Stroke::new(1.0, accent))
                            .show(ui, |ui| {
                                ui.set_max_width(320.0);
                                ui.horizontal_wrapped(|ui| {
                                    ui.label(RichText::new(toast.kind.marker()).color(accent).strong());
                                    ui.label(
                                        RichText::new(&toast.message)
                                            .color(theme.text_primary.gamma_multiply(alpha)),
                                    );
                                });
                            });
                        ui.add_space(6.0);
                    }
                });
            });
    }
}
