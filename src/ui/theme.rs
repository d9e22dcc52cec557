// TicTacToe - ui/theme.rs
//
// Colour scheme, mark colours and the dark/light switch.
// No dependencies on app state or game logic beyond `Player`.

use crate::core::model::Player;
use egui::Color32;

/// Mirror the dark mode flag onto the egui context.
pub fn apply(ctx: &egui::Context, dark: bool) {
    ctx.set_theme(if dark {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });
    tracing::debug!(dark_mode = dark, "Theme applied");
}

/// Whether the context is currently rendering in dark mode.
pub fn is_dark(ctx: &egui::Context) -> bool {
    ctx.theme() == egui::Theme::Dark
}

/// Re-apply the flag if the context renders the other theme, which happens
/// on the first frame, after a toggle and when the OS theme changes.
/// Returns whether anything was applied.
pub fn sync(ctx: &egui::Context, dark: bool) -> bool {
    if is_dark(ctx) == dark {
        return false;
    }
    apply(ctx, dark);
    true
}

/// Colour of a player's mark.
pub fn mark_colour(player: Player, dark: bool) -> Color32 {
    match (player, dark) {
        (Player::X, true) => Color32::from_rgb(96, 165, 250),  // Blue 400
        (Player::X, false) => Color32::from_rgb(37, 99, 235),  // Blue 600
        (Player::O, true) => Color32::from_rgb(251, 146, 60), // Orange 400
        (Player::O, false) => Color32::from_rgb(234, 88, 12), // Orange 600
    }
}

/// Faint version of the mark colour for the hover preview.
pub fn preview_colour(player: Player, dark: bool) -> Color32 {
    let c = mark_colour(player, dark);
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), crate::util::constants::PREVIEW_ALPHA)
}

/// Cell background.
pub fn cell_fill(dark: bool, hovered: bool) -> Color32 {
    match (dark, hovered) {
        (true, false) => Color32::from_rgb(31, 41, 55),   // Gray 800
        (true, true) => Color32::from_rgb(55, 65, 81),    // Gray 700
        (false, false) => Color32::from_rgb(243, 244, 246), // Gray 100
        (false, true) => Color32::from_rgb(229, 231, 235),  // Gray 200
    }
}

/// Winning line stroke colour.
pub fn win_line_colour(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(74, 222, 128) // Green 400
    } else {
        Color32::from_rgb(22, 163, 74) // Green 600
    }
}

/// Cell highlight behind the winning marks.
pub const WIN_CELL_TINT: Color32 = Color32::from_rgba_premultiplied(34, 197, 94, 40);

/// Score board column width.
pub const SCORE_COLUMN_WIDTH: f32 = 64.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_switches_context_theme() {
        let ctx = egui::Context::default();
        apply(&ctx, true);
        assert!(is_dark(&ctx));
        apply(&ctx, false);
        assert!(!is_dark(&ctx));
    }

    #[test]
    fn test_sync_applies_only_on_mismatch() {
        let ctx = egui::Context::default();
        apply(&ctx, false);
        assert!(!sync(&ctx, false));
        assert!(sync(&ctx, true));
        assert!(is_dark(&ctx));
        assert!(!sync(&ctx, true));

        // Something else flipped the context; the flag wins again.
        ctx.set_theme(egui::Theme::Light);
        assert!(sync(&ctx, true));
        assert!(is_dark(&ctx));
    }

    #[test]
    fn test_preview_is_translucent_mark() {
        let mark = mark_colour(Player::O, false);
        let preview = preview_colour(Player::O, false);
        assert!(preview.a() < mark.a());
    }
}
