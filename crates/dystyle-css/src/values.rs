//! Typed value tokens
//!
//! A value token from an encoded class name (`mn4rem`, `1px-solid-red`,
//! `calc(10px-pl-5px)`) is classified by its [`ValueShape`] and then parsed
//! into a [`Value`], which renders the CSS text through `Display`.

use std::fmt;

use crate::patterns::ValueShape;
use crate::tables;

/// Length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Em,
    Rem,
    Cm,
    Mm,
    In,
    Pt,
    Percent,
    Pc,
    Vh,
    Vw,
    Vmin,
    Vmax,
    Ch,
    Ex,
    Fr,
}

impl Unit {
    /// Parse the unit suffix as written in a class name
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix {
            "px" => Unit::Px,
            "em" => Unit::Em,
            "rem" => Unit::Rem,
            "cm" => Unit::Cm,
            "mm" => Unit::Mm,
            "in" => Unit::In,
            "pt" => Unit::Pt,
            "pct" => Unit::Percent,
            "pc" => Unit::Pc,
            "vh" => Unit::Vh,
            "vw" => Unit::Vw,
            "vmin" => Unit::Vmin,
            "vmax" => Unit::Vmax,
            "ch" => Unit::Ch,
            "ex" => Unit::Ex,
            "fr" => Unit::Fr,
            _ => return None,
        })
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Percent => "%",
            Unit::Pc => "pc",
            Unit::Vh => "vh",
            Unit::Vw => "vw",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Ch => "ch",
            Unit::Ex => "ex",
            Unit::Fr => "fr",
        }
    }
}

/// Unsigned number as written; a leading zero marks a decimal (`05` is `0.5`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeric(String);

impl Numeric {
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(digits.to_string()))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.strip_prefix('0') {
            Some(rest) if !rest.is_empty() => write!(f, "0.{rest}"),
            _ => f.write_str(&self.0),
        }
    }
}

/// Number with an optional unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub number: Numeric,
    pub unit: Option<Unit>,
}

impl Dimension {
    /// `10px`, `50pct`, or a bare `10`
    pub fn parse(token: &str) -> Option<Self> {
        let split = token.find(|c: char| !c.is_ascii_digit()).unwrap_or(token.len());
        let (digits, suffix) = token.split_at(split);
        let number = Numeric::parse(digits)?;
        let unit = if suffix.is_empty() {
            None
        } else {
            Some(Unit::from_suffix(suffix)?)
        };
        Some(Self { number, unit })
    }

    /// Like [`Dimension::parse`] but the unit is mandatory
    pub fn parse_length(token: &str) -> Option<Self> {
        Self::parse(token).filter(|d| d.unit.is_some())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)?;
        if let Some(unit) = self.unit {
            f.write_str(unit.as_css())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl CalcOp {
    /// `pl`, `mn`, `mp`, `dv`
    pub fn from_sentinel(sentinel: &str) -> Option<Self> {
        match sentinel {
            "pl" => Some(CalcOp::Add),
            "mn" => Some(CalcOp::Sub),
            "mp" => Some(CalcOp::Mul),
            "dv" => Some(CalcOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CalcOp::Add => '+',
            CalcOp::Sub => '-',
            CalcOp::Mul => '*',
            CalcOp::Div => '/',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFunctionName {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl ColorFunctionName {
    fn as_css(self) -> &'static str {
        match self {
            ColorFunctionName::Rgb => "rgb",
            ColorFunctionName::Rgba => "rgba",
            ColorFunctionName::Hsl => "hsl",
            ColorFunctionName::Hsla => "hsla",
        }
    }

    fn is_hsl(self) -> bool {
        matches!(self, ColorFunctionName::Hsl | ColorFunctionName::Hsla)
    }
}

/// `rgb(255-0-0)`, `hsla(120-100-50-05)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFunction {
    pub name: ColorFunctionName,
    pub args: Vec<Numeric>,
}

impl ColorFunction {
    pub fn parse(token: &str) -> Option<Self> {
        let (name, inner) = split_call(token)?;
        let name = match name {
            "rgb" => ColorFunctionName::Rgb,
            "rgba" => ColorFunctionName::Rgba,
            "hsl" => ColorFunctionName::Hsl,
            "hsla" => ColorFunctionName::Hsla,
            _ => return None,
        };
        let args = inner.split('-').map(Numeric::parse).collect::<Option<Vec<_>>>()?;
        if !(3..=4).contains(&args.len()) {
            return None;
        }
        Some(Self { name, args })
    }
}

impl fmt::Display for ColorFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name.as_css())?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
            if self.name.is_hsl() && (i == 1 || i == 2) {
                f.write_str("%")?;
            }
        }
        f.write_str(")")
    }
}

/// Colour accepted inside a border shorthand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Keyword(&'static str),
    Hex(String),
    Function(ColorFunction),
    /// Not a known colour, written as found
    Raw(String),
}

impl Color {
    pub fn parse(token: &str) -> Option<Self> {
        if token.starts_with('#') {
            ValueShape::HexColor
                .regex()
                .is_match(token)
                .then(|| Color::Hex(token.to_string()))
        } else if token.contains('(') {
            ColorFunction::parse(token).map(Color::Function)
        } else {
            tables::lookup_color(token).map(Color::Keyword)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Keyword(name) => f.write_str(name),
            Color::Hex(hex) => f.write_str(hex),
            Color::Function(func) => write!(f, "{func}"),
            Color::Raw(word) => f.write_str(word),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatCount {
    Times(Numeric),
    AutoFill,
    AutoFit,
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatCount::Times(n) => write!(f, "{n}"),
            RepeatCount::AutoFill => f.write_str("auto-fill"),
            RepeatCount::AutoFit => f.write_str("auto-fit"),
        }
    }
}

/// One entry of a grid template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridTrack {
    Length(Dimension),
    MinMax(Dimension, Dimension),
    FitContent(Dimension),
    Repeat { count: RepeatCount, tracks: Vec<GridTrack> },
}

impl GridTrack {
    fn parse(token: &str) -> Option<Self> {
        match split_call(token) {
            Some(("minmax", inner)) => {
                let (min, max) = inner.split_once('-')?;
                Some(GridTrack::MinMax(Dimension::parse_length(min)?, Dimension::parse_length(max)?))
            }
            Some(("fitcontent", inner)) => Dimension::parse_length(inner).map(GridTrack::FitContent),
            Some(("repeat", inner)) => {
                let parts = split_top_level(inner);
                let (count, rest) = parts.split_first()?;
                let count = match *count {
                    "autofill" => RepeatCount::AutoFill,
                    "autofit" => RepeatCount::AutoFit,
                    n => RepeatCount::Times(Numeric::parse(n)?),
                };
                if rest.is_empty() {
                    return None;
                }
                let tracks = rest.iter().map(|t| GridTrack::parse(t)).collect::<Option<Vec<_>>>()?;
                Some(GridTrack::Repeat { count, tracks })
            }
            Some(_) => None,
            None => Dimension::parse_length(token).map(GridTrack::Length),
        }
    }
}

impl fmt::Display for GridTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridTrack::Length(d) => write!(f, "{d}"),
            GridTrack::MinMax(min, max) => write!(f, "minmax({min}, {max})"),
            GridTrack::FitContent(d) => write!(f, "fit-content({d})"),
            GridTrack::Repeat { count, tracks } => {
                write!(f, "repeat({count}, {})", join(tracks, " "))
            }
        }
    }
}

/// A parsed value token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Length(Vec<Dimension>),
    Number(Vec<Numeric>),
    Negative(Dimension),
    HexColor(String),
    ColorFunction(ColorFunction),
    Calc { lhs: Dimension, op: CalcOp, rhs: Dimension },
    Grid(Vec<GridTrack>),
    /// `<length>-<word>[-<word>]`: border shorthands and other spaced pairs
    /// such as `10px-auto`
    Border { width: Dimension, style: String, color: Option<Color> },
    Keyword(&'static str),
}

impl Value {
    /// Parse one value token; `None` when no shape or table accepts it
    pub fn parse(token: &str) -> Option<Self> {
        if token.starts_with("calc") {
            return Self::parse_calc(token);
        }
        match ValueShape::classify(token)? {
            ValueShape::Border => Self::parse_border(token),
            ValueShape::Grid => split_top_level(token)
                .into_iter()
                .map(GridTrack::parse)
                .collect::<Option<Vec<_>>>()
                .map(Value::Grid),
            ValueShape::DigitLength => token
                .split('-')
                .map(Dimension::parse_length)
                .collect::<Option<Vec<_>>>()
                .map(Value::Length),
            ValueShape::Digit | ValueShape::Fraction => token
                .split('-')
                .map(Numeric::parse)
                .collect::<Option<Vec<_>>>()
                .map(Value::Number),
            ValueShape::Negative => token.strip_prefix("mn").and_then(Dimension::parse).map(Value::Negative),
            ValueShape::Calc => Self::parse_calc(token),
            ValueShape::ColorFunction => ColorFunction::parse(token).map(Value::ColorFunction),
            ValueShape::HexColor => Some(Value::HexColor(token.to_string())),
            ValueShape::Text => tables::lookup_value(token).map(Value::Keyword),
        }
    }

    fn parse_calc(token: &str) -> Option<Self> {
        let (name, inner) = split_call(token)?;
        if name != "calc" {
            return None;
        }
        let mut parts = inner.split('-');
        let lhs = Dimension::parse(parts.next()?)?;
        let op = CalcOp::from_sentinel(parts.next()?)?;
        let rhs = Dimension::parse(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Value::Calc { lhs, op, rhs })
    }

    fn parse_border(token: &str) -> Option<Self> {
        let parts = split_top_level(token);
        let (width, style, color) = match parts.as_slice() {
            [width, style] => (*width, *style, None),
            [width, style, color] => (*width, *style, Some(*color)),
            _ => return None,
        };
        let style = match tables::lookup_border_style(style) {
            Some(canonical) => canonical.to_string(),
            None => {
                tracing::trace!("`{}` in `{}` is not a border style, kept as written", style, token);
                style.to_string()
            }
        };
        let color = color.map(|color| Color::parse(color).unwrap_or_else(|| Color::Raw(color.to_string())));
        Some(Value::Border {
            width: Dimension::parse_length(width)?,
            style,
            color,
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Length(dims) => f.write_str(&join(dims, " ")),
            Value::Number(nums) => f.write_str(&join(nums, " ")),
            Value::Negative(d) => write!(f, "-{d}"),
            Value::HexColor(hex) => f.write_str(hex),
            Value::ColorFunction(func) => write!(f, "{func}"),
            Value::Calc { lhs, op, rhs } => write!(f, "calc({lhs} {} {rhs})", op.symbol()),
            Value::Grid(tracks) => f.write_str(&join(tracks, " ")),
            Value::Border { width, style, color } => {
                write!(f, "{width} {style}")?;
                if let Some(color) = color {
                    write!(f, " {color}")?;
                }
                Ok(())
            }
            Value::Keyword(word) => f.write_str(word),
        }
    }
}

/// Split `name(inner)` into its parts
fn split_call(token: &str) -> Option<(&str, &str)> {
    let open = token.find('(')?;
    let inner = token[open + 1..].strip_suffix(')')?;
    Some((&token[..open], inner))
}

/// Split on hyphens that are not inside parentheses
fn split_top_level(token: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in token.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '-' if depth == 0 => {
                parts.push(&token[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&token[start..]);
    parts
}

fn join<T: fmt::Display>(items: &[T], sep: &str) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(sep)
}
