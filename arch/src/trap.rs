use bimap::BiMap;
use once_cell::sync::Lazy;

use crate::word::Word;

/// Host operations invoked with the `trap` instruction. Drawing
/// primitives; screen origin is 0,0 at top left.
pub static TRAPS: Lazy<BiMap<&'static str, Word>> = Lazy::new(|| {
    let names = [
        "BLACK",
        "WHITE",
        "DISPLAY_WIDTH",
        "DISPLAY_HEIGHT",
        "CLEARSCREEN",
        "SETDOT",
        "DRAWLINE",
        "DRAWRECT",
        "DRAWROUNDRECT",
        "FILLRECT",
        "INVERTRECT",
        "DRAWCIRCLE",
        "FILLCIRCLE",
        "DRAWBITMAP",
    ];
    let mut traps = BiMap::new();
    for (id, name) in names.into_iter().enumerate() {
        traps.insert(name, id as Word);
    }
    traps
});

/// Trap names are matched exactly, unlike instruction mnemonics.
pub fn parse(s: &str) -> Option<Word> {
    TRAPS.get_by_left(s).copied()
}

pub fn name_of(id: Word) -> Option<&'static str> {
    TRAPS.get_by_right(&id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(parse("BLACK"), Some(0));
        assert_eq!(parse("SETDOT"), Some(5));
        assert_eq!(parse("DRAWBITMAP"), Some(13));
        assert_eq!(parse("setdot"), None);
        assert_eq!(parse("BEEP"), None);
    }

    #[test]
    fn name_round_trip() {
        assert_eq!(name_of(5), Some("SETDOT"));
        assert_eq!(name_of(99), None);
    }
}
