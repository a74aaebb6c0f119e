//! Board colours for the light and dark variants.

use egui::Color32;

use crate::services::due_status::DueTone;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    pub app_background: Color32,

    /// Day column fill
    pub column_background: Color32,
    /// Day column fill for days before today
    pub past_background: Color32,
    pub column_border: Color32,

    /// Border drawn around the day cell under a dragged card
    pub drop_highlight: Color32,

    pub card_background: Color32,
    pub card_border: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,

    /// Inline error text in the time prompt and load banner
    pub error: Color32,
    /// Confirmation toasts after a schedule is saved
    pub success: Color32,
}

impl BoardTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            column_background: Color32::from_rgb(255, 255, 255),
            past_background: Color32::from_rgb(238, 238, 240),
            column_border: Color32::from_rgb(220, 220, 220),
            drop_highlight: Color32::from_rgb(100, 150, 255),
            card_background: Color32::from_rgb(230, 240, 255),
            card_border: Color32::from_rgb(190, 205, 235),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            error: Color32::from_rgb(180, 40, 40),
            success: Color32::from_rgb(30, 120, 50),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            column_background: Color32::from_rgb(40, 40, 40),
            past_background: Color32::from_rgb(34, 34, 36),
            column_border: Color32::from_rgb(60, 60, 60),
            drop_highlight: Color32::from_rgb(100, 150, 255),
            card_background: Color32::from_rgb(50, 60, 80),
            card_border: Color32::from_rgb(70, 85, 115),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            error: Color32::from_rgb(255, 120, 120),
            success: Color32::from_rgb(100, 220, 120),
        }
    }

    /// Picks the variant matching the desktop when `follow_system` is set,
    /// light otherwise.
    pub fn detect(follow_system: bool) -> Self {
        if !follow_system {
            return Self::light();
        }
        match dark_light::detect() {
            dark_light::Mode::Dark => Self::dark(),
            dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
        }
    }

    /// Badge colour for a due-status tone.
    pub fn tone_color(&self, tone: DueTone) -> Color32 {
        match (tone, self.is_dark) {
            (DueTone::Overdue, false) => Color32::from_rgb(180, 40, 40),
            (DueTone::Overdue, true) => Color32::from_rgb(255, 120, 120),
            (DueTone::Today, false) => Color32::from_rgb(150, 100, 0),
            (DueTone::Today, true) => Color32::from_rgb(255, 200, 80),
            (DueTone::Soon, false) => Color32::from_rgb(30, 80, 150),
            (DueTone::Soon, true) => Color32::from_rgb(100, 180, 255),
            (DueTone::Upcoming, _) => self.text_secondary,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.noninteractive.bg_fill = self.column_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
