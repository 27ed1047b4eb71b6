//! Media query tokens
//!
//! Turns `MQMaxWidth600PXOrientationLandscape` into the condition
//! `(max-width: 600px) and (orientation: landscape)`.

use std::fmt;

use crate::patterns;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaUnit {
    Px,
    Dpi,
    Dppx,
}

impl MediaUnit {
    fn as_css(self) -> &'static str {
        match self {
            MediaUnit::Px => "px",
            MediaUnit::Dpi => "dpi",
            MediaUnit::Dppx => "dppx",
        }
    }

    fn is_resolution(self) -> bool {
        matches!(self, MediaUnit::Dpi | MediaUnit::Dppx)
    }
}

/// Number with its media unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaLength {
    pub value: u32,
    pub unit: MediaUnit,
}

impl fmt::Display for MediaLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_css())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFeature {
    Orientation(Orientation),
    MinWidth(MediaLength),
    MaxWidth(MediaLength),
    MinHeight(MediaLength),
    MaxHeight(MediaLength),
    MinResolution(MediaLength),
    MaxResolution(MediaLength),
}

impl fmt::Display for MediaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaFeature::Orientation(Orientation::Portrait) => f.write_str("(orientation: portrait)"),
            MediaFeature::Orientation(Orientation::Landscape) => f.write_str("(orientation: landscape)"),
            MediaFeature::MinWidth(len) => write!(f, "(min-width: {len})"),
            MediaFeature::MaxWidth(len) => write!(f, "(max-width: {len})"),
            MediaFeature::MinHeight(len) => write!(f, "(min-height: {len})"),
            MediaFeature::MaxHeight(len) => write!(f, "(max-height: {len})"),
            MediaFeature::MinResolution(len) => write!(f, "(min-resolution: {len})"),
            MediaFeature::MaxResolution(len) => write!(f, "(max-resolution: {len})"),
        }
    }
}

/// Why a media token was not turned into a condition
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("media token must start with MQ: {0}")]
    MissingPrefix(String),
    #[error("unknown media feature at `{0}`")]
    UnknownFeature(String),
    #[error("media feature `{feature}` needs a range (Min/Max) and a dimension")]
    IncompleteFeature { feature: String },
    #[error("invalid value `{value}` for media feature `{feature}`")]
    InvalidValue { feature: String, value: String },
    #[error("media token has no features")]
    Empty,
    #[error("rendered media condition `{0}` is not valid")]
    Malformed(String),
}

/// Conjunction of media features
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCondition {
    pub features: Vec<MediaFeature>,
}

const FEATURE_WORDS: [&str; 9] = [
    "Orientation",
    "MaxWidth",
    "MaxHeight",
    "MaxResolution",
    "MinWidth",
    "MinHeight",
    "MinResolution",
    "Max",
    "Min",
];

impl MediaCondition {
    /// Parse an `MQ...` token and check the rendered condition
    pub fn parse(token: &str) -> Result<Self, MediaError> {
        let mut rest = token
            .strip_prefix("MQ")
            .ok_or_else(|| MediaError::MissingPrefix(token.to_string()))?;
        let mut features = Vec::new();

        while !rest.is_empty() {
            let word = FEATURE_WORDS
                .iter()
                .find(|w| rest.starts_with(*w))
                .ok_or_else(|| MediaError::UnknownFeature(rest.to_string()))?;
            rest = &rest[word.len()..];
            let (value, tail) = split_value(rest);
            rest = tail;
            features.push(feature(word, value)?);
        }

        if features.is_empty() {
            return Err(MediaError::Empty);
        }
        let condition = Self { features };
        let rendered = condition.to_string();
        if !patterns::is_valid_media_condition(&rendered) {
            return Err(MediaError::Malformed(rendered));
        }
        Ok(condition)
    }

    /// `@media <condition>`
    pub fn at_rule(&self) -> String {
        format!("@media {self}")
    }
}

impl fmt::Display for MediaCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, feature) in self.features.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{feature}")?;
        }
        Ok(())
    }
}

/// Split the value that follows a feature word from the next feature
fn split_value(input: &str) -> (&str, &str) {
    for word in ["Portrait", "Landscape"] {
        if input.starts_with(word) {
            return input.split_at(word.len());
        }
    }
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    let unit = input[digits..].bytes().take_while(u8::is_ascii_uppercase).count();
    let unit = ["DPPX", "DPI", "PX"]
        .iter()
        .find(|u| input[digits..digits + unit].starts_with(*u))
        .map_or(0, |u| u.len());
    input.split_at(digits + unit)
}

fn feature(word: &str, value: &str) -> Result<MediaFeature, MediaError> {
    let invalid = || MediaError::InvalidValue {
        feature: word.to_string(),
        value: value.to_string(),
    };

    if word == "Orientation" {
        return match value {
            "Portrait" => Ok(MediaFeature::Orientation(Orientation::Portrait)),
            "Landscape" => Ok(MediaFeature::Orientation(Orientation::Landscape)),
            _ => Err(invalid()),
        };
    }
    if word == "Max" || word == "Min" {
        return Err(MediaError::IncompleteFeature { feature: word.to_string() });
    }

    let length = media_length(value).ok_or_else(invalid)?;
    let resolution = word.ends_with("Resolution");
    if resolution != length.unit.is_resolution() {
        return Err(invalid());
    }
    Ok(match word {
        "MaxWidth" => MediaFeature::MaxWidth(length),
        "MinWidth" => MediaFeature::MinWidth(length),
        "MaxHeight" => MediaFeature::MaxHeight(length),
        "MinHeight" => MediaFeature::MinHeight(length),
        "MaxResolution" => MediaFeature::MaxResolution(length),
        _ => MediaFeature::MinResolution(length),
    })
}

fn media_length(value: &str) -> Option<MediaLength> {
    let split = value.find(|c: char| !c.is_ascii_digit())?;
    let (digits, unit) = value.split_at(split);
    let unit = match unit {
        "PX" => MediaUnit::Px,
        "DPI" => MediaUnit::Dpi,
        "DPPX" => MediaUnit::Dppx,
        _ => return None,
    };
    Some(MediaLength {
        value: digits.parse().ok()?,
        unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_width() {
        let condition = MediaCondition::parse("MQMaxWidth600PX").unwrap();
        assert_eq!(
            condition.features,
            vec![MediaFeature::MaxWidth(MediaLength { value: 600, unit: MediaUnit::Px })]
        );
        assert_eq!(condition.to_string(), "(max-width: 600px)");
        assert_eq!(condition.at_rule(), "@media (max-width: 600px)");
    }

    #[test]
    fn test_compound_condition() {
        let condition = MediaCondition::parse("MQMinWidth300PXOrientationLandscape").unwrap();
        assert_eq!(condition.to_string(), "(min-width: 300px) and (orientation: landscape)");

        let condition = MediaCondition::parse("MQMinResolution2DPPXMaxHeight800PX").unwrap();
        assert_eq!(condition.to_string(), "(min-resolution: 2dppx) and (max-height: 800px)");
    }

    #[test]
    fn test_unit_mismatch() {
        assert!(matches!(
            MediaCondition::parse("MQMaxWidth600DPI"),
            Err(MediaError::InvalidValue { .. })
        ));
        assert!(matches!(
            MediaCondition::parse("MQMinResolution2PX"),
            Err(MediaError::InvalidValue { .. })
        ));
        assert!(matches!(
            MediaCondition::parse("MQOrientation600PX"),
            Err(MediaError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_bare_range_is_incomplete() {
        assert_eq!(
            MediaCondition::parse("MQMax600PX"),
            Err(MediaError::IncompleteFeature { feature: "Max".into() })
        );
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(MediaCondition::parse("MQ"), Err(MediaError::Empty));
        assert!(matches!(MediaCondition::parse("MaxWidth600PX"), Err(MediaError::MissingPrefix(_))));
        assert!(matches!(MediaCondition::parse("MQWidth600PX"), Err(MediaError::UnknownFeature(_))));
        assert!(matches!(MediaCondition::parse("MQMaxWidth"), Err(MediaError::InvalidValue { .. })));
    }
}
