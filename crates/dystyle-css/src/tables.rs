//! Lookup tables
//!
//! Canonical property names, keyword value families and the shorthand
//! abbreviations accepted in encoded class names. Matching goes through
//! [`normalize`], so `BackgroundColor`, `background-color` and
//! `backgroundcolor` all resolve to the same entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Canonical CSS property names accepted in class names
pub const PROPERTIES: &[&str] = &[
    "accent-color", "align-content", "align-items", "align-self", "all", "animation",
    "animation-delay", "animation-direction", "animation-duration", "animation-fill-mode",
    "animation-iteration-count", "animation-name", "animation-play-state",
    "animation-timing-function", "aspect-ratio", "backface-visibility", "background",
    "background-attachment", "background-blend-mode", "background-clip", "background-color",
    "background-image", "background-origin", "background-position", "background-repeat",
    "background-size", "block-size", "border", "border-block", "border-block-color",
    "border-block-end", "border-block-end-color", "border-block-end-style",
    "border-block-end-width", "border-block-start", "border-block-start-color",
    "border-block-start-style", "border-block-start-width", "border-block-style",
    "border-block-width", "border-bottom", "border-bottom-color", "border-bottom-left-radius",
    "border-bottom-right-radius", "border-bottom-style", "border-bottom-width",
    "border-collapse", "border-color", "border-end-end-radius", "border-end-start-radius",
    "border-image", "border-image-outset", "border-image-repeat", "border-image-slice",
    "border-image-source", "border-image-width", "border-inline", "border-inline-color",
    "border-inline-end", "border-inline-end-color", "border-inline-end-style",
    "border-inline-end-width", "border-inline-start", "border-inline-start-color",
    "border-inline-start-style", "border-inline-start-width", "border-inline-style",
    "border-inline-width", "border-left", "border-left-color", "border-left-style",
    "border-left-width", "border-radius", "border-right", "border-right-color",
    "border-right-style", "border-right-width", "border-spacing", "border-start-end-radius",
    "border-start-start-radius", "border-style", "border-top", "border-top-color",
    "border-top-left-radius", "border-top-right-radius", "border-top-style", "border-top-width",
    "border-width", "bottom", "box-decoration-break", "box-shadow", "box-sizing", "break-after",
    "break-before", "break-inside", "caption-side", "caret-color", "clear", "clip", "clip-path",
    "color", "color-adjust", "color-scheme", "column-count", "column-fill", "column-gap",
    "column-rule", "column-rule-color", "column-rule-style", "column-rule-width", "column-span",
    "column-width", "columns", "contain", "content", "content-visibility", "counter-increment",
    "counter-reset", "counter-set", "cursor", "direction", "display", "empty-cells", "filter",
    "flex", "flex-basis", "flex-direction", "flex-flow", "flex-grow", "flex-shrink",
    "flex-wrap", "float", "font", "font-family", "font-feature-settings", "font-kerning",
    "font-language-override", "font-optical-sizing", "font-size", "font-size-adjust",
    "font-stretch", "font-style", "font-synthesis", "font-variant", "font-variant-alternates",
    "font-variant-caps", "font-variant-east-asian", "font-variant-ligatures",
    "font-variant-numeric", "font-variant-position", "font-variation-settings", "font-weight",
    "gap", "grid", "grid-area", "grid-auto-columns", "grid-auto-flow", "grid-auto-rows",
    "grid-column", "grid-column-end", "grid-column-gap", "grid-column-start", "grid-gap",
    "grid-row", "grid-row-end", "grid-row-gap", "grid-row-start", "grid-template",
    "grid-template-areas", "grid-template-columns", "grid-template-rows", "hanging-punctuation",
    "height", "hyphens", "image-orientation", "image-rendering", "inline-size", "inset",
    "inset-block", "inset-block-end", "inset-block-start", "inset-inline", "inset-inline-end",
    "inset-inline-start", "isolation", "justify-content", "justify-items", "justify-self",
    "left", "letter-spacing", "line-break", "line-height", "list-style", "list-style-image",
    "list-style-position", "list-style-type", "margin", "margin-block", "margin-block-end",
    "margin-block-start", "margin-bottom", "margin-inline", "margin-inline-end",
    "margin-inline-start", "margin-left", "margin-right", "margin-top", "mask", "mask-border",
    "mask-border-mode", "mask-border-outset", "mask-border-repeat", "mask-border-slice",
    "mask-border-source", "mask-border-width", "mask-clip", "mask-composite", "mask-image",
    "mask-mode", "mask-origin", "mask-position", "mask-repeat", "mask-size", "mask-type",
    "max-block-size", "max-height", "max-inline-size", "max-width", "min-block-size",
    "min-height", "min-inline-size", "min-width", "mix-blend-mode", "object-fit",
    "object-position", "offset", "offset-anchor", "offset-distance", "offset-path",
    "offset-rotate", "opacity", "order", "orphans", "outline", "outline-color",
    "outline-offset", "outline-style", "outline-width", "overflow", "overflow-anchor",
    "overflow-block", "overflow-clip-margin", "overflow-inline", "overflow-wrap", "overflow-x",
    "overflow-y", "overscroll-behavior", "overscroll-behavior-block",
    "overscroll-behavior-inline", "overscroll-behavior-x", "overscroll-behavior-y", "padding",
    "padding-block", "padding-block-end", "padding-block-start", "padding-bottom",
    "padding-inline", "padding-inline-end", "padding-inline-start", "padding-left",
    "padding-right", "padding-top", "page-break-after", "page-break-before",
    "page-break-inside", "paint-order", "perspective", "perspective-origin", "place-content",
    "place-items", "place-self", "pointer-events", "position", "print-color-adjust", "quotes",
    "resize", "right", "rotate", "row-gap", "ruby-align", "ruby-position", "scale",
    "scroll-behavior", "scroll-margin", "scroll-margin-block", "scroll-margin-block-end",
    "scroll-margin-block-start", "scroll-margin-bottom", "scroll-margin-inline",
    "scroll-margin-inline-end", "scroll-margin-inline-start", "scroll-margin-left",
    "scroll-margin-right", "scroll-margin-top", "scroll-padding", "scroll-padding-block",
    "scroll-padding-block-end", "scroll-padding-block-start", "scroll-padding-bottom",
    "scroll-padding-inline", "scroll-padding-inline-end", "scroll-padding-inline-start",
    "scroll-padding-left", "scroll-padding-right", "scroll-padding-top", "scroll-snap-align",
    "scroll-snap-stop", "scroll-snap-type", "scrollbar-color", "scrollbar-gutter",
    "scrollbar-width", "shape-image-threshold", "shape-margin", "shape-outside", "tab-size",
    "table-layout", "text-align", "text-align-last", "text-combine-upright", "text-decoration",
    "text-decoration-color", "text-decoration-line", "text-decoration-skip-ink",
    "text-decoration-style", "text-decoration-thickness", "text-emphasis",
    "text-emphasis-color", "text-emphasis-position", "text-emphasis-style", "text-indent",
    "text-justify", "text-orientation", "text-overflow", "text-rendering", "text-shadow",
    "text-transform", "text-underline-offset", "text-underline-position", "top", "touch-action",
    "transform", "transform-box", "transform-origin", "transform-style", "transition",
    "transition-delay", "transition-duration", "transition-property",
    "transition-timing-function", "translate", "unicode-bidi", "user-select", "vertical-align",
    "visibility", "white-space", "widows", "width", "will-change", "word-break", "word-spacing",
    "word-wrap", "writing-mode", "z-index", "zoom",
];

/// Named colours
pub const COLOR_NAMES: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkkhaki", "darkmagenta",
    "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon", "darkseagreen",
    "darkslateblue", "darkslategray", "darkturquoise", "darkviolet", "deeppink", "deepskyblue",
    "dimgray", "dodgerblue", "firebrick", "floralwhite", "forestgreen", "fuchsia", "gainsboro",
    "ghostwhite", "gold", "goldenrod", "gray", "green", "greenyellow", "honeydew", "hotpink",
    "indianred", "indigo", "ivory", "khaki", "lavender", "lavenderblush", "lawngreen",
    "lemonchiffon", "lightblue", "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray",
    "lightgreen", "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta", "maroon",
    "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen",
    "mediumslateblue", "mediumspringgreen", "mediumturquoise", "mediumvioletred",
    "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite", "navy", "oldlace",
    "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod", "palegreen",
    "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink", "plum",
    "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue", "saddlebrown",
    "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver", "skyblue", "slateblue",
    "slategray", "snow", "springgreen", "steelblue", "tan", "teal", "thistle", "tomato",
    "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
    "transparent", "currentcolor",
];

pub const DISPLAY_VALUES: &[&str] = &[
    "-webkit-box", "-webkit-inline-box", "block", "contents", "flex", "grid", "inline",
    "inline-block", "inline-flex", "inline-grid", "inline-table", "list-item", "none", "run-in",
    "ruby", "ruby-base", "ruby-base-container", "ruby-container", "ruby-position",
    "ruby-position-container", "ruby-text", "ruby-text-container", "table", "table-caption",
    "table-cell", "table-column", "table-column-group", "table-footer", "table-footer-group",
    "table-header", "table-header-group", "table-row", "table-row-group",
];

/// Border styles; also the style word of the border shorthand
pub const BORDER_STYLE_VALUES: &[&str] = &[
    "border-box", "content-box", "dashed", "dotted", "double", "groove", "hidden", "none",
    "inset", "outset", "ridge", "solid",
];

pub const FLEX_VALUES: &[&str] = &[
    "auto", "column", "column-reverse", "end", "flex", "flex-end", "flex-start", "inherit",
    "initial", "none", "nowrap", "revert", "revert-layer", "row", "row-reverse", "self-end",
    "self-start", "space-around", "space-between", "space-evenly", "start", "stretch", "unset",
    "wrap", "wrap-reverse",
];

pub const LIST_STYLE_POSITION_VALUES: &[&str] = &[
    "inside", "outside", "inherit", "initial", "unset",
];

pub const LIST_STYLE_TYPE_VALUES: &[&str] = &[
    "arabic-indic", "circle", "cjk-earthly-branch", "cjk-heavenly-stem", "cjk-ideographic",
    "cjk-ideographic-nl", "decimal", "decimal-leading-zero", "devanagari", "disc",
    "ethiopic-halehame-aa-er", "ethiopic-halehame-aa-et", "ethiopic-halehame-am-et",
    "ethiopic-halehame-sid-et", "ethiopic-numeric", "flex", "gurmukhi", "gujarati", "hiragana",
    "hiragana-iroha", "hiragana-nl", "hiragana-parenthesized", "katakana", "katakana-iroha",
    "katakana-nl", "katakana-parenthesized", "korean-hanja-formal", "korean-hangul-formal",
    "lower-alpha", "lower-alpha-academic", "lower-alpha-nl", "lower-alpha-traditional",
    "lower-georgian", "lower-greek", "lower-greek-nl", "lower-hexadecimal", "lower-latin",
    "lower-latin-academic", "lower-latin-nl", "lower-norwegian", "lower-roman",
    "lower-roman-nl", "none", "persian", "simp-chinese-formal", "simp-chinese-informal",
    "square", "trad-chinese-formal", "trad-chinese-informal", "upper-alpha",
    "upper-alpha-academic", "upper-alpha-nl", "upper-alpha-traditional", "upper-georgian",
    "upper-greek", "upper-greek-nl", "upper-hexadecimal", "upper-latin", "upper-latin-academic",
    "upper-norwegian", "upper-roman", "upper-roman-nl", "ruby", "ruby-base",
    "ruby-base-container", "ruby-container", "ruby-position", "ruby-position-container",
    "ruby-text", "ruby-text-container",
];

pub const WIDTH_VALUES: &[&str] = &[
    "auto", "available", "contain", "fill-available", "fit-content", "inherit", "initial",
    "max-content", "min-content", "none", "normal", "revert", "unset",
];

pub const HEIGHT_VALUES: &[&str] = &[
    "auto", "available", "fill-available", "fit-content", "inherit", "initial", "max-content",
    "min-content", "none", "normal", "unset",
];

/// Font families; spaces are ignored when matching (`arialblack`)
pub const FONT_FAMILY_VALUES: &[&str] = &[
    "Arial", "Arial Black", "Comic Sans MS", "Courier New", "Georgia", "Helvetica", "Impact",
    "Lucida Console", "Lucida Sans Unicode", "Microsoft Sans Serif", "monospace", "sans-serif",
    "Serif", "system-ui", "Tahoma", "Times New Roman", "Trebuchet MS", "unset", "initial",
    "inherit", "Verdana",
];

pub const FONT_STYLE_VALUES: &[&str] = &[
    "defer", "inherit", "initial", "italic", "normal", "oblique", "unset",
];

pub const FONT_VARIANT_VALUES: &[&str] = &[
    "normal", "small-caps", "inherit", "initial", "unset",
];

pub const FONT_WEIGHT_VALUES: &[&str] = &[
    "bold", "bolder", "lighter", "normal", "inherit", "initial", "unset", "revert",
    "revert-layer",
];

pub const BOX_MODEL_VALUES: &[&str] = &[
    "border-box", "content-box", "inherit", "initial", "margin-box", "padding-box", "revert",
    "revert-layer", "unset",
];

pub const POSITION_VALUES: &[&str] = &[
    "absolute", "fixed", "inherit", "initial", "relative", "static", "sticky", "unset",
    "revert", "revert-layer",
];

pub const TEXT_TRANSFORM_VALUES: &[&str] = &[
    "capitalize", "inherit", "initial", "lowercase", "revert", "revert-layer", "unset",
    "uppercase",
];

pub const GRID_VALUES: &[&str] = &[
    "auto", "auto-fill", "auto-fit", "auto-flow", "column", "column dense", "dense",
    "fit-content", "inherit", "initial", "max-content", "min-content", "none", "repeat", "row",
    "row dense", "revert", "revert-layer", "unset",
];

pub const TEXT_ALIGN_VALUES: &[&str] = &[
    "center", "end", "inherit", "initial", "justify", "left", "right", "unset", "revert",
    "revert-layer",
];

pub const VISIBILITY_VALUES: &[&str] = &[
    "collapse", "hidden", "inherit", "initial", "revert", "revert-layer", "unset", "visible",
];

pub const TEXT_DECORATION_LINE_VALUES: &[&str] = &[
    "blink", "line-through", "none", "overline", "underline", "inherit", "initial", "unset",
    "revert", "revert-layer",
];

pub const TEXT_DECORATION_STYLE_VALUES: &[&str] = &[
    "dashed", "dotted", "double", "inherit", "initial", "line-through", "none", "solid",
    "unset", "revert", "revert-layer",
];

pub const OVERFLOW_VALUES: &[&str] = &[
    "anywhere", "auto", "break-word", "clip", "hidden", "inherit", "initial", "normal",
    "revert", "revert-layer", "scroll", "unset", "visible",
];

pub const FONT_SIZE_VALUES: &[&str] = &[
    "absolute", "auto", "inherit", "initial", "larger", "large", "medium", "revert",
    "revert-layer", "smaller", "small", "unset", "xx-large", "x-large", "xx-small", "x-small",
    "xxx-large",
];

pub const FONT_STRETCH_VALUES: &[&str] = &[
    "condensed", "default", "extra-condensed", "extra-expanded", "expanded", "inherit",
    "initial", "normal", "narrow", "revert", "revert-layer", "semi-condensed", "semi-expanded",
    "unset", "ultra-condensed", "ultra-expanded",
];

pub const TEXT_OVERFLOW_VALUES: &[&str] = &[
    "clip", "ellipsis", "inherit", "initial", "unset", "revert", "revert-layer",
];

pub const TRANSITION_VALUES: &[&str] = &[
    "ease", "ease-in", "ease-in-out", "ease-out", "initial", "inherit", "linear", "step-end",
    "step-start",
];

pub const VERTICAL_ALIGN_VALUES: &[&str] = &[
    "baseline", "bottom", "inherit", "initial", "middle", "sub", "super", "text-bottom",
    "text-top", "top", "unset", "revert", "revert-layer",
];

pub const CURSOR_VALUES: &[&str] = &[
    "alias", "all-scroll", "auto", "cell", "context-menu", "col-resize", "copy", "crosshair",
    "default", "e-resize", "ew-resize", "grab", "grabbing", "help", "move", "n-resize",
    "ne-resize", "nesw-resize", "ns-resize", "nw-resize", "nwse-resize", "no-drop", "none",
    "not-allowed", "pointer", "progress", "row-resize", "s-resize", "se-resize", "sw-resize",
    "text", "url", "vertical-text", "w-resize", "wait", "zoom-in", "zoom-out",
];

pub const IMAGE_VALUES: &[&str] = &[
    "cover",
];

/// Keyword families in lookup precedence order
pub static VALUE_FAMILIES: &[(&str, &[&str])] = &[
    ("color", COLOR_NAMES),
    ("display", DISPLAY_VALUES),
    ("border-style", BORDER_STYLE_VALUES),
    ("flex", FLEX_VALUES),
    ("list-style-position", LIST_STYLE_POSITION_VALUES),
    ("list-style-type", LIST_STYLE_TYPE_VALUES),
    ("width", WIDTH_VALUES),
    ("height", HEIGHT_VALUES),
    ("font-family", FONT_FAMILY_VALUES),
    ("font-style", FONT_STYLE_VALUES),
    ("font-variant", FONT_VARIANT_VALUES),
    ("font-weight", FONT_WEIGHT_VALUES),
    ("box-model", BOX_MODEL_VALUES),
    ("position", POSITION_VALUES),
    ("text-transform", TEXT_TRANSFORM_VALUES),
    ("grid", GRID_VALUES),
    ("text-align", TEXT_ALIGN_VALUES),
    ("visibility", VISIBILITY_VALUES),
    ("text-decoration-line", TEXT_DECORATION_LINE_VALUES),
    ("text-decoration-style", TEXT_DECORATION_STYLE_VALUES),
    ("overflow", OVERFLOW_VALUES),
    ("font-size", FONT_SIZE_VALUES),
    ("font-stretch", FONT_STRETCH_VALUES),
    ("text-overflow", TEXT_OVERFLOW_VALUES),
    ("transition", TRANSITION_VALUES),
    ("vertical-align", VERTICAL_ALIGN_VALUES),
    ("cursor", CURSOR_VALUES),
    ("image", IMAGE_VALUES),
];

/// Lowercased class-name tokens that stand for a longer property name
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("paddingt", "padding-top"),
    ("paddingr", "padding-right"),
    ("paddingb", "padding-bottom"),
    ("paddingl", "padding-left"),
    ("margint", "margin-top"),
    ("marginr", "margin-right"),
    ("marginb", "margin-bottom"),
    ("marginl", "margin-left"),
    ("ai", "align-items"),
    ("bd", "border"),
    ("bdc", "border-color"),
    ("bds", "border-style"),
    ("bdw", "border-width"),
    ("bg", "background"),
    ("bgc", "background-color"),
    ("bgs", "background-size"),
    ("bs", "box-shadow"),
    ("gtc", "grid-template-columns"),
    ("gtr", "grid-template-rows"),
    ("jc", "justify-content"),
];

static PROPERTY_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| index(PROPERTIES.iter().copied()));

static VALUE_INDEX: Lazy<HashMap<String, &'static str>> =
    Lazy::new(|| index(VALUE_FAMILIES.iter().flat_map(|(_, family)| family.iter().copied())));

static COLOR_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| index(COLOR_NAMES.iter().copied()));

static BORDER_STYLE_INDEX: Lazy<HashMap<String, &'static str>> =
    Lazy::new(|| index(BORDER_STYLE_VALUES.iter().copied()));

/// Build a normalised index; the first entry wins on collisions
fn index(entries: impl Iterator<Item = &'static str>) -> HashMap<String, &'static str> {
    let mut map = HashMap::new();
    for entry in entries {
        map.entry(normalize(entry)).or_insert(entry);
    }
    map
}

/// Lowercase and strip hyphens and whitespace
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Canonical property name for a token, if any
pub fn lookup_property(token: &str) -> Option<&'static str> {
    PROPERTY_INDEX.get(&normalize(token)).copied()
}

/// Canonical keyword value for a token, searching every family in order
pub fn lookup_value(token: &str) -> Option<&'static str> {
    VALUE_INDEX.get(&normalize(token)).copied()
}

/// Canonical colour keyword for a token
pub fn lookup_color(token: &str) -> Option<&'static str> {
    COLOR_INDEX.get(&normalize(token)).copied()
}

/// Canonical border style for a token
pub fn lookup_border_style(token: &str) -> Option<&'static str> {
    BORDER_STYLE_INDEX.get(&normalize(token)).copied()
}

/// Expand an abbreviation such as `bgc`; the token must already be lowercase
pub fn expand_abbreviation(token: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == token)
        .map(|(_, long)| *long)
}
