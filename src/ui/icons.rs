use dioxus::prelude::*;

use crate::domain::IconId;

/// Something drawable for an [`IconId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconAsset {
    pub glyph: &'static str,
    pub label: &'static str,
}

const fn asset(glyph: &'static str, label: &'static str) -> IconAsset {
    IconAsset { glyph, label }
}

/// Every icon the UI can draw. Each `IconId` appears exactly once.
pub const ICON_TABLE: [(IconId, IconAsset); 26] = [
    (IconId::ArrowLeft, asset("←", "Back")),
    (IconId::Award, asset("🏅", "Award")),
    (IconId::Brain, asset("🧠", "Quiz")),
    (IconId::Calculator, asset("🧮", "Calculator")),
    (IconId::Calendar, asset("📅", "Calendar")),
    (IconId::CheckCircle, asset("✅", "Correct")),
    (IconId::Clock, asset("⏱️", "Time")),
    (IconId::DollarSign, asset("💲", "Cost")),
    (IconId::Gamepad, asset("🎮", "Games")),
    (IconId::Globe, asset("🌐", "Globe")),
    (IconId::Minus, asset("➖", "Stable")),
    (IconId::Plane, asset("✈️", "Air freight")),
    (IconId::Puzzle, asset("🧩", "Puzzle")),
    (IconId::RotateCcw, asset("↺", "Restart")),
    (IconId::Route, asset("🗺️", "Route")),
    (IconId::Ship, asset("🚢", "Sea freight")),
    (IconId::Star, asset("⭐", "Star")),
    (IconId::Target, asset("🎯", "Target")),
    (IconId::TrendingDown, asset("📉", "Trending down")),
    (IconId::TrendingUp, asset("📈", "Trending up")),
    (IconId::Trophy, asset("🏆", "Trophy")),
    (IconId::TriangleAlert, asset("⚠️", "Warning")),
    (IconId::Truck, asset("🚚", "Land transport")),
    (IconId::Users, asset("👥", "Players")),
    (IconId::XCircle, asset("❌", "Incorrect")),
    (IconId::Zap, asset("⚡", "Streak")),
];

const MISSING: IconAsset = asset("•", "Icon");

pub fn icon_asset(id: IconId) -> IconAsset {
    ICON_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, asset)| *asset)
        .unwrap_or(MISSING)
}

#[component]
pub fn Icon(id: IconId, #[props(default)] class: &'static str) -> Element {
    let IconAsset { glyph, label } = icon_asset(id);
    rsx! {
        span {
            class: "inline-flex items-center justify-center leading-none {class}",
            role: "img",
            aria_label: label,
            "{glyph}"
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_has_no_duplicates() {
        let ids: HashSet<_> = ICON_TABLE.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), ICON_TABLE.len());
    }

    #[test]
    fn trend_icons_resolve() {
        assert_eq!(icon_asset(IconId::TrendingUp).glyph, "📈");
        assert_eq!(icon_asset(IconId::TrendingDown).glyph, "📉");
        assert_ne!(icon_asset(IconId::Minus), MISSING);
    }
}
