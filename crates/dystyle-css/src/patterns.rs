//! Lexical pattern library
//!
//! Regex source fragments for every value shape and structural token an
//! encoded class name may contain. The constants are open fragments meant to
//! be interpolated into larger alternations; the `*_ONLY` statics are their
//! anchored `^(?:...)$` forms used to validate a single token.

use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! fragment {
    (units) => {
        "(?:px|em|rem|cm|mm|in|pt|pct|pc|vh|vw|vmin|vmax|ch|ex|fr)"
    };
    (fraction) => {
        "(?:1|0[0-9]|0)"
    };
    (digit_length) => {
        concat!("[0-9]+", fragment!(units), "(?:-[0-9]+", fragment!(units), ")*")
    };
    (digit) => {
        "[0-9]+(?:-[0-9]+)*"
    };
    (negative) => {
        concat!("mn[0-9]+", fragment!(units), "?")
    };
    (minmax) => {
        concat!("minmax\\([0-9]+", fragment!(units), "-[0-9]+", fragment!(units), "\\)")
    };
    (fit_content) => {
        concat!("fitcontent\\([0-9]+", fragment!(units), "\\)")
    };
    (calc) => {
        concat!(
            "calc\\([0-9]+",
            fragment!(units),
            "?-(?:pl|mn|mp|dv)-[0-9]+",
            fragment!(units),
            "?\\)"
        )
    };
    (color_function) => {
        concat!("(?:rgb|hsl)a?\\([0-9]+-[0-9]+-[0-9]+(?:-", fragment!(fraction), ")?\\)")
    };
    (hex) => {
        "#[a-f0-9]{3,8}"
    };
    (border) => {
        concat!(
            "(?:",
            fragment!(fraction),
            "|[0-9]+)",
            fragment!(units),
            "-[a-z]{4,}(?:-(?:",
            fragment!(hex),
            "|",
            fragment!(color_function),
            "|[a-z]{3,}))?"
        )
    };
    (text) => {
        "[a-z]{2,}(?:-[a-z]{2,})*"
    };
    (grid_track) => {
        concat!("(?:[0-9]+", fragment!(units), "|", fragment!(fit_content), "|", fragment!(minmax), ")")
    };
    (grid) => {
        concat!(
            "(?:(?:",
            fragment!(fit_content),
            "|",
            fragment!(minmax),
            ")(?:-",
            fragment!(grid_track),
            ")*|repeat\\((?:[0-9]+|autofill|autofit)-(?:",
            fragment!(digit_length),
            "|",
            fragment!(minmax),
            ")\\))"
        )
    };
    (value) => {
        concat!(
            "(?:",
            fragment!(border),
            "|",
            fragment!(grid),
            "|",
            fragment!(digit_length),
            "|",
            fragment!(digit),
            "|",
            fragment!(fraction),
            "|",
            fragment!(negative),
            "|",
            fragment!(calc),
            "|",
            fragment!(color_function),
            "|",
            fragment!(hex),
            "|",
            fragment!(text),
            ")"
        )
    };
    (all_specs) => {
        "All(?:ChildLikeThis|(?:OfType)?(?:Within)?)"
    };
    (child_specs) => {
        "Child(?:OfType(?:First|Last|[0-9]+)?|First|Last|[0-9]+)?"
    };
    (children_specs) => {
        "Children(?:OfType)?(?:Not(?:First|Last|[0-9]+))?"
    };
    (sibling_specs) => {
        "Siblings?(?:Not(?:[0-9]+|First|Last)|OfType(?:[0-9]+)?|[0-9]+)?"
    };
    (media_feature) => {
        "(?:Orientation|(?:Max|Min)(?:Width|Height|Resolution)?)(?:Portrait|Landscape|[0-9]+(?:DPI|DPPX|PX))"
    };
    (media_condition_feature) => {
        concat!(
            "(?:\\(\\s*(?:min|max)-(?:width|height|resolution)\\s*:\\s*[0-9]+",
            "(?:px|em|rem|vh|vw|vmin|vmax|dpi|dpcm|dppx)\\s*\\)",
            "|\\(\\s*orientation\\s*:\\s*(?:landscape|portrait)\\s*\\))"
        )
    };
}

/// Length units; `pct` stands for `%`
pub const LENGTH_UNITS: &str = fragment!(units);

/// Numbers with units, hyphen-joined for multi-value shorthands (`10px-20px`)
pub const DIGIT_LENGTH: &str = fragment!(digit_length);

/// Bare integers, hyphen-joined
pub const DIGIT: &str = fragment!(digit);

/// `mn` sentinel followed by a number and optional unit
pub const NEGATIVE_DIGIT: &str = fragment!(negative);

/// Decimal shorthand: `0`, `0<digit>` or `1`
pub const FRACTION: &str = fragment!(fraction);

pub const MINMAX: &str = fragment!(minmax);

pub const FIT_CONTENT: &str = fragment!(fit_content);

/// Two operands joined by one of the `pl`/`mn`/`mp`/`dv` sentinels
pub const CALC: &str = fragment!(calc);

/// `rgb`/`rgba`/`hsl`/`hsla` with hyphen-separated arguments
pub const COLOR_FUNCTION: &str = fragment!(color_function);

pub const HEX_COLOR: &str = fragment!(hex);

/// `<width>-<style>[-<colour>]`
pub const BORDER_SETTING: &str = fragment!(border);

/// Lowercase keyword, optionally hyphen-joined
pub const TEXT: &str = fragment!(text);

/// `minmax`/`fitcontent` track lists and `repeat(...)`
pub const GRID_TEMPLATE: &str = fragment!(grid);

/// Dot-joined property words, each led by an uppercase letter
pub const PROPERTIES: &str = "[A-Z][a-zA-Z]+(?:\\.[A-Z][a-zA-Z]+)*";

/// Dot-joined value tokens
pub const VALUES: &str = concat!(fragment!(value), "(?:\\.", fragment!(value), ")*");

/// `MQ` followed by one or more feature/value pairs
pub const MEDIA_QUERY: &str = concat!("MQ", fragment!(media_feature), "(?:", fragment!(media_feature), ")*");

pub const ALL_SPECS: &str = fragment!(all_specs);
pub const CHILD_SPECS: &str = fragment!(child_specs);
pub const CHILDREN_SPECS: &str = fragment!(children_specs);
pub const SIBLING_SPECS: &str = fragment!(sibling_specs);

/// The four structural families in one alternation
pub const SPECS_SELECTION: &str = concat!(
    "(?:",
    fragment!(all_specs),
    "|",
    fragment!(children_specs),
    "|",
    fragment!(child_specs),
    "|",
    fragment!(sibling_specs),
    ")"
);

/// Strict syntax of a rendered media condition, e.g. `(max-width: 600px) and (orientation: portrait)`
pub const MEDIA_CONDITION: &str = concat!(
    "^\\s*",
    fragment!(media_condition_feature),
    "(?:\\s*and\\s*",
    fragment!(media_condition_feature),
    ")*\\s*$"
);

fn anchored(fragment: &str) -> Regex {
    Regex::new(&format!("^(?:{fragment})$")).expect("pattern fragments are valid regex")
}

pub static DIGIT_LENGTH_ONLY: Lazy<Regex> = Lazy::new(|| anchored(DIGIT_LENGTH));
pub static DIGIT_ONLY: Lazy<Regex> = Lazy::new(|| anchored(DIGIT));
pub static NEGATIVE_DIGIT_ONLY: Lazy<Regex> = Lazy::new(|| anchored(NEGATIVE_DIGIT));
pub static FRACTION_ONLY: Lazy<Regex> = Lazy::new(|| anchored(FRACTION));
pub static CALC_ONLY: Lazy<Regex> = Lazy::new(|| anchored(CALC));
pub static COLOR_FUNCTION_ONLY: Lazy<Regex> = Lazy::new(|| anchored(COLOR_FUNCTION));
pub static HEX_COLOR_ONLY: Lazy<Regex> = Lazy::new(|| anchored(HEX_COLOR));
pub static BORDER_SETTING_ONLY: Lazy<Regex> = Lazy::new(|| anchored(BORDER_SETTING));
pub static TEXT_ONLY: Lazy<Regex> = Lazy::new(|| anchored(TEXT));
pub static GRID_TEMPLATE_ONLY: Lazy<Regex> = Lazy::new(|| anchored(GRID_TEMPLATE));
pub static SPECS_SELECTION_ONLY: Lazy<Regex> = Lazy::new(|| anchored(SPECS_SELECTION));
pub static MEDIA_QUERY_ONLY: Lazy<Regex> = Lazy::new(|| anchored(MEDIA_QUERY));

pub static MEDIA_CONDITION_CHECK: Lazy<Regex> =
    Lazy::new(|| Regex::new(MEDIA_CONDITION).expect("media condition pattern is valid regex"));

/// Characters that cannot stay in a generated class name
pub static CLASS_NAME_UNSAFE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[.#(),]+").expect("class name sanitising pattern is valid regex"));

/// Shape of a single value token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Border,
    Grid,
    DigitLength,
    Digit,
    Fraction,
    Negative,
    Calc,
    ColorFunction,
    HexColor,
    Text,
}

impl ValueShape {
    /// Shapes in the order the value alternation tries them
    pub const ALL: [ValueShape; 10] = [
        ValueShape::Border,
        ValueShape::Grid,
        ValueShape::DigitLength,
        ValueShape::Digit,
        ValueShape::Fraction,
        ValueShape::Negative,
        ValueShape::Calc,
        ValueShape::ColorFunction,
        ValueShape::HexColor,
        ValueShape::Text,
    ];

    /// First shape whose anchored pattern accepts the whole token
    pub fn classify(token: &str) -> Option<ValueShape> {
        Self::ALL.into_iter().find(|shape| shape.regex().is_match(token))
    }

    pub fn regex(self) -> &'static Regex {
        match self {
            ValueShape::Border => &BORDER_SETTING_ONLY,
            ValueShape::Grid => &GRID_TEMPLATE_ONLY,
            ValueShape::DigitLength => &DIGIT_LENGTH_ONLY,
            ValueShape::Digit => &DIGIT_ONLY,
            ValueShape::Fraction => &FRACTION_ONLY,
            ValueShape::Negative => &NEGATIVE_DIGIT_ONLY,
            ValueShape::Calc => &CALC_ONLY,
            ValueShape::ColorFunction => &COLOR_FUNCTION_ONLY,
            ValueShape::HexColor => &HEX_COLOR_ONLY,
            ValueShape::Text => &TEXT_ONLY,
        }
    }
}

/// Whether a rendered condition passes the strict media syntax check
pub fn is_valid_media_condition(condition: &str) -> bool {
    MEDIA_CONDITION_CHECK.is_match(condition)
}

/// Replace dots, hashes, parens and commas with `_`
pub fn sanitize_class_name(raw: &str) -> String {
    CLASS_NAME_UNSAFE.replace_all(raw, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_shapes() {
        assert_eq!(ValueShape::classify("10px"), Some(ValueShape::DigitLength));
        assert_eq!(ValueShape::classify("10px-20pct"), Some(ValueShape::DigitLength));
        assert_eq!(ValueShape::classify("200"), Some(ValueShape::Digit));
        assert_eq!(ValueShape::classify("mn4rem"), Some(ValueShape::Negative));
        assert_eq!(ValueShape::classify("calc(10px-pl-5px)"), Some(ValueShape::Calc));
        assert_eq!(ValueShape::classify("rgba(0-0-0-05)"), Some(ValueShape::ColorFunction));
        assert_eq!(ValueShape::classify("#fff"), Some(ValueShape::HexColor));
        assert_eq!(ValueShape::classify("1px-solid-red"), Some(ValueShape::Border));
        assert_eq!(ValueShape::classify("minmax(100px-1fr)"), Some(ValueShape::Grid));
        assert_eq!(ValueShape::classify("repeat(autofill-minmax(100px-1fr))"), Some(ValueShape::Grid));
        assert_eq!(ValueShape::classify("red"), Some(ValueShape::Text));
    }

    #[test]
    fn test_classify_rejects() {
        assert_eq!(ValueShape::classify("10PX"), None);
        assert_eq!(ValueShape::classify("#ggg"), None);
        assert_eq!(ValueShape::classify("a"), None);
        assert_eq!(ValueShape::classify("calc(10px-xx-5px)"), None);
        assert_eq!(ValueShape::classify(""), None);
    }

    #[test]
    fn test_unit_alternation_prefers_longest_fit() {
        assert!(DIGIT_LENGTH_ONLY.is_match("50pct"));
        assert!(DIGIT_LENGTH_ONLY.is_match("2pc"));
        assert!(DIGIT_LENGTH_ONLY.is_match("10vmin"));
    }

    #[test]
    fn test_specs_selection() {
        for spec in [
            "All",
            "AllOfType",
            "AllWithin",
            "AllOfTypeWithin",
            "AllChildLikeThis",
            "Child",
            "ChildFirst",
            "Child3",
            "ChildOfTypeLast",
            "Children",
            "ChildrenNotFirst",
            "ChildrenOfTypeNot2",
            "Sibling",
            "Sibling2",
            "SiblingOfType2",
            "Siblings",
            "SiblingsNotLast",
        ] {
            assert!(SPECS_SELECTION_ONLY.is_match(spec), "{spec} should be a structural spec");
        }
        assert!(!SPECS_SELECTION_ONLY.is_match("Parent"));
        assert!(!SPECS_SELECTION_ONLY.is_match("ChildNotFirst"));
    }

    #[test]
    fn test_media_query_token() {
        assert!(MEDIA_QUERY_ONLY.is_match("MQMaxWidth600PX"));
        assert!(MEDIA_QUERY_ONLY.is_match("MQMinWidth300PXOrientationLandscape"));
        assert!(MEDIA_QUERY_ONLY.is_match("MQMinResolution2DPPX"));
        assert!(!MEDIA_QUERY_ONLY.is_match("MQMaxWidth600"));
        assert!(!MEDIA_QUERY_ONLY.is_match("MaxWidth600PX"));
    }

    #[test]
    fn test_media_condition_check() {
        assert!(is_valid_media_condition("(max-width: 600px)"));
        assert!(is_valid_media_condition("(min-width: 300px) and (orientation: landscape)"));
        assert!(!is_valid_media_condition("(max-width: px)"));
        assert!(!is_valid_media_condition("(max-width: 600px) and"));
        assert!(!is_valid_media_condition(""));
    }

    #[test]
    fn test_sanitize_class_name() {
        assert_eq!(sanitize_class_name("_BackgroundColor_red"), "_BackgroundColor_red");
        assert_eq!(sanitize_class_name("_Color.Margin_#fff.0"), "_Color_Margin__fff_0");
        assert_eq!(sanitize_class_name("_W_minmax(1px-2fr)"), "_W_minmax_1px-2fr_");
        assert_eq!(sanitize_class_name("a(),b"), "a_b");
    }
}
