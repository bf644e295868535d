/// Type colors, matching the palette used by the app's type badges.
pub const TYPE_COLORS: &[(&str, [u8; 3])] = &[
    ("normal", [168, 168, 120]),
    ("fire", [240, 128, 48]),
    ("water", [104, 144, 240]),
    ("electric", [248, 208, 48]),
    ("grass", [120, 200, 80]),
    ("ice", [152, 216, 216]),
    ("fighting", [192, 48, 40]),
    ("poison", [160, 64, 160]),
    ("ground", [224, 192, 104]),
    ("flying", [168, 144, 240]),
    ("psychic", [248, 88, 136]),
    ("bug", [168, 184, 32]),
    ("rock", [184, 160, 56]),
    ("ghost", [112, 88, 152]),
    ("dragon", [112, 56, 248]),
    ("dark", [112, 88, 72]),
    ("steel", [184, 184, 208]),
    ("fairy", [238, 153, 172]),
];

/// Neutral gray used for any label that is not in the table.
pub const FALLBACK_COLOR: [u8; 3] = [204, 204, 204];

pub fn color_for(label: &str) -> [u8; 3] {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, rgb)| *rgb)
        .unwrap_or(FALLBACK_COLOR)
}

pub fn labels() -> impl Iterator<Item = &'static str> {
    TYPE_COLORS.iter().map(|(name, _)| *name)
}
