// VCScout - ui/theme.rs
//
// Colour scheme, industry badge colours, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Chip colours for the predefined industries, one each.
const POPULAR_INDUSTRY_COLOURS: [(&str, Color32); 10] = [
    ("Fintech", Color32::from_rgb(22, 163, 74)),     // Green 600
    ("Healthcare", Color32::from_rgb(220, 38, 38)),  // Red 600
    ("Automotive", Color32::from_rgb(37, 99, 235)),  // Blue 600
    ("Fashion", Color32::from_rgb(219, 39, 119)),    // Pink 600
    ("EdTech", Color32::from_rgb(147, 51, 234)),     // Purple 600
    ("SaaS", Color32::from_rgb(79, 70, 229)),        // Indigo 600
    ("E-commerce", Color32::from_rgb(234, 88, 12)),  // Orange 600
    ("AI/ML", Color32::from_rgb(8, 145, 178)),       // Cyan 600
    ("Blockchain", Color32::from_rgb(202, 138, 4)),  // Yellow 600
    ("CleanTech", Color32::from_rgb(5, 150, 105)),   // Emerald 600
];

/// Fallback palette for sector tags outside the predefined list.
const TAG_PALETTE: [Color32; 6] = [
    Color32::from_rgb(71, 85, 105),  // Slate 600
    Color32::from_rgb(13, 148, 136), // Teal 600
    Color32::from_rgb(101, 163, 13), // Lime 600
    Color32::from_rgb(217, 119, 6),  // Amber 600
    Color32::from_rgb(124, 58, 237), // Violet 600
    Color32::from_rgb(2, 132, 199),  // Sky 600
];

/// Badge colour for an industry or sector name (case-insensitive).
pub fn industry_colour(industry: &str) -> Color32 {
    if let Some((_, colour)) = POPULAR_INDUSTRY_COLOURS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(industry))
    {
        return *colour;
    }
    let key = industry
        .bytes()
        .map(|b| b.to_ascii_lowercase() as usize)
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b));
    TAG_PALETTE[key % TAG_PALETTE.len()]
}

/// Accent used for primary actions and the user's chat bubbles.
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235); // Blue 600

/// Bot chat bubble background.
pub const BOT_BUBBLE: Color32 = Color32::from_rgb(55, 65, 81); // Gray 700

/// Error banner colour.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Status bar colours.
pub const STATUS_HEALTHY: Color32 = Color32::from_rgb(34, 197, 94); // Green 500
pub const STATUS_UNREACHABLE: Color32 = Color32::from_rgb(239, 68, 68); // Red 500

/// Layout constants.
pub const CARD_WIDTH: f32 = 320.0;
pub const CARD_SPACING: f32 = 12.0;
pub const LOGO_BADGE_SIZE: f32 = 40.0;
pub const DETAIL_WINDOW_WIDTH: f32 = 520.0;
pub const CHAT_WINDOW_WIDTH: f32 = 380.0;
pub const CHAT_WINDOW_HEIGHT: f32 = 480.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants;

    #[test]
    fn test_industry_colour_is_case_insensitive() {
        assert_eq!(industry_colour("Fintech"), industry_colour("FINTECH"));
        assert_eq!(industry_colour("robotics"), industry_colour("Robotics"));
    }

    #[test]
    fn test_each_popular_industry_has_its_own_colour() {
        let industries = constants::POPULAR_INDUSTRIES;
        for (i, a) in industries.iter().enumerate() {
            for b in &industries[i + 1..] {
                assert_ne!(
                    industry_colour(a),
                    industry_colour(b),
                    "{a} and {b} share a chip colour"
                );
            }
        }
    }
}
