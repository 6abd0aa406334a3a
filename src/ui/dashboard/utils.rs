//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::notifications::NotificationKind;
use crate::summary::ColorTier;
use ratatui::prelude::Color;

/// Bar color for a usage tier.
pub fn tier_color(tier: ColorTier) -> Color {
    match tier {
        ColorTier::Normal => Color::Green,
        ColorTier::Warning => Color::Rgb(255, 165, 0),
        ColorTier::Alert => Color::Red,
    }
}

pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    }
}

pub fn notification_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✅",
        NotificationKind::Error => "❌",
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // "YYYY-MM-DD HH:MM:SS" -> "MM-DD HH:MM"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2024-03-09 14:05:59"),
            "03-09 14:05"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_tier_colors_are_distinct() {
        assert_ne!(tier_color(ColorTier::Normal), tier_color(ColorTier::Warning));
        assert_ne!(tier_color(ColorTier::Warning), tier_color(ColorTier::Alert));
        assert_eq!(tier_color(ColorTier::Alert), Color::Red);
    }
}
