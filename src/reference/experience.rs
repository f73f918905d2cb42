//! Experience-level ordering and the fixed chart palettes.

/// Experience levels in stacking order, each with its bar colour
///
/// Other views depend on both the order and the colours.
pub const EXPERIENCE_LEVELS: [(&str, &str); 6] = [
    ("Internship", "#DAE1E7"),
    ("Entry level", "#AEDADD"),
    ("Associate", "#9ecae1"),
    ("Mid-Senior level", "#6baed6"),
    ("Director", "#3182bd"),
    ("Executive", "#08519c"),
];

/// Experience level used by postings that do not state one
pub const NOT_SPECIFIED: &str = "Not Specified";

/// Colours of the top skills in the skill flow, by rank
pub const SKILL_PALETTE: [&str; 5] = ["#D3F4FF", "#B2DFFB", "#B1E8ED", "#C6CBEF", "#CDFFEB"];

/// Colour of flow nodes that are not ranked skills
pub const NEUTRAL_NODE_COLOR: &str = "rgba(0, 0, 0, 0.1)";

/// Choropleth bin colours, lowest bin first
pub const BIN_PALETTE: [&str; 3] = ["#deebf7", "#6baed6", "#3182bd"];

/// Position of a level in the stacking order
#[must_use]
pub fn experience_rank(level: &str) -> Option<usize> {
    EXPERIENCE_LEVELS.iter().position(|(name, _)| *name == level)
}

/// Bar colour for a level
#[must_use]
pub fn experience_color(level: &str) -> Option<&'static str> {
    EXPERIENCE_LEVELS
        .iter()
        .find(|(name, _)| *name == level)
        .map(|(_, color)| *color)
}

/// Palette colour for a ranked skill, cycling past the palette length
#[must_use]
pub fn skill_color(rank: usize) -> &'static str {
    SKILL_PALETTE[rank % SKILL_PALETTE.len()]
}

/// Colour for a choropleth bin, cycling past the palette length
#[must_use]
pub fn bin_color(bin: usize) -> &'static str {
    BIN_PALETTE[bin % BIN_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacking_order_is_fixed() {
        assert_eq!(experience_rank("Internship"), Some(0));
        assert_eq!(experience_rank("Mid-Senior level"), Some(3));
        assert_eq!(experience_rank("Executive"), Some(5));
        assert_eq!(experience_rank(NOT_SPECIFIED), None);
        assert_eq!(experience_color("Director"), Some("#3182bd"));
    }

    #[test]
    fn palettes_cycle() {
        assert_eq!(skill_color(0), "#D3F4FF");
        assert_eq!(skill_color(5), "#D3F4FF");
        assert_eq!(bin_color(2), "#3182bd");
    }
}
