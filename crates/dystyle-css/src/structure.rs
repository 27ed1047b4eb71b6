//! Structural specs
//!
//! A structural spec (`Child`, `SiblingsNotFirst`, `AllOfType`, ...) widens
//! the target of a rule from the element itself to its relatives. Each spec
//! derives a selector from the generated class name and the element's tag.

use crate::grammar::Pseudo;
use crate::patterns::SPECS_SELECTION_ONLY;

/// Longest `+` chain a `Sibling<n>` spec may ask for
pub const MAX_SIBLING_COUNT: u32 = 64;

/// Which relative a positional spec picks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Last,
    Nth(u32),
}

impl Position {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "First" => Some(Position::First),
            "Last" => Some(Position::Last),
            digits => digits.parse().ok().map(Position::Nth),
        }
    }

    fn pseudo_class(self, of_type: bool) -> String {
        let kind = if of_type { "of-type" } else { "child" };
        match self {
            Position::First => format!(":first-{kind}"),
            Position::Last => format!(":last-{kind}"),
            Position::Nth(n) => format!(":nth-{kind}({n})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralSpec {
    /// The element and everything inside it
    All,
    /// Every element with the same tag
    AllOfType,
    /// Everything inside the element
    AllWithin,
    /// Same-tag elements inside the element
    AllOfTypeWithin,
    /// Every element with the same tag under a parent with the same tag
    AllChildLikeThis,
    Child { of_type: bool, position: Position },
    Children { of_type: bool, except: Option<Position> },
    /// The element and the `count`-th following sibling
    Sibling { of_type: bool, count: u32 },
    /// The element and all following siblings
    Siblings { of_type: bool },
    /// The element and its following siblings, except one position
    SiblingsExcept(Position),
}

/// What a selector is derived from
#[derive(Debug, Clone, Copy)]
pub struct SelectorContext<'a> {
    /// Generated class name, without the leading dot
    pub class_name: &'a str,
    pub tag: &'a str,
    pub parent_tag: Option<&'a str>,
}

/// A derived selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub parts: Vec<String>,
    /// Whether the selector relies on the generated class being on the element
    pub uses_class: bool,
}

impl Selector {
    /// `.class`
    pub fn class(class_name: &str) -> Self {
        Self {
            parts: vec![format!(".{class_name}")],
            uses_class: true,
        }
    }

    fn tag(parts: Vec<String>) -> Self {
        Self { parts, uses_class: false }
    }

    fn classed(parts: Vec<String>) -> Self {
        Self { parts, uses_class: true }
    }

    /// Selector text with the pseudo suffix applied to every part
    pub fn render(&self, pseudo: Option<Pseudo>) -> String {
        let suffix = pseudo.map_or("", Pseudo::as_css);
        self.parts
            .iter()
            .map(|part| format!("{part}{suffix}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl StructuralSpec {
    pub fn parse(token: &str) -> Option<Self> {
        if !SPECS_SELECTION_ONLY.is_match(token) {
            return None;
        }

        if let Some(rest) = token.strip_prefix("All") {
            return match rest {
                "" => Some(StructuralSpec::All),
                "OfType" => Some(StructuralSpec::AllOfType),
                "Within" => Some(StructuralSpec::AllWithin),
                "OfTypeWithin" => Some(StructuralSpec::AllOfTypeWithin),
                "ChildLikeThis" => Some(StructuralSpec::AllChildLikeThis),
                _ => None,
            };
        }

        if let Some(rest) = token.strip_prefix("Children") {
            let (of_type, rest) = strip_flag(rest, "OfType");
            let except = match rest.strip_prefix("Not") {
                Some(position) => Some(Position::parse(position)?),
                None if rest.is_empty() => None,
                None => return None,
            };
            return Some(StructuralSpec::Children { of_type, except });
        }

        if let Some(rest) = token.strip_prefix("Child") {
            let (of_type, rest) = strip_flag(rest, "OfType");
            let position = if rest.is_empty() {
                Position::First
            } else {
                Position::parse(rest)?
            };
            return Some(StructuralSpec::Child { of_type, position });
        }

        let rest = token.strip_prefix("Sibling")?;
        let (plural, rest) = strip_flag(rest, "s");
        if let Some(position) = rest.strip_prefix("Not") {
            return Position::parse(position).map(StructuralSpec::SiblingsExcept);
        }
        let (of_type, rest) = strip_flag(rest, "OfType");
        if rest.is_empty() {
            return Some(if plural {
                StructuralSpec::Siblings { of_type }
            } else {
                StructuralSpec::Sibling { of_type, count: 1 }
            });
        }
        let count: u32 = rest.parse().ok()?;
        if count > MAX_SIBLING_COUNT {
            return None;
        }
        Some(StructuralSpec::Sibling {
            of_type,
            count: count.max(1),
        })
    }

    pub fn selector(&self, ctx: &SelectorContext<'_>) -> Selector {
        let c = format!(".{}", ctx.class_name);
        let t = ctx.tag;
        match *self {
            StructuralSpec::AllChildLikeThis => match ctx.parent_tag {
                Some(parent) => Selector::tag(vec![format!("{parent} > {t}")]),
                None => Selector::class(ctx.class_name),
            },
            StructuralSpec::AllOfType => Selector::tag(vec![t.to_string()]),
            StructuralSpec::All => Selector::classed(vec![c.clone(), format!("{c} *")]),
            StructuralSpec::AllWithin => Selector::classed(vec![format!("{c} *")]),
            StructuralSpec::AllOfTypeWithin => Selector::classed(vec![format!("{c} {t}")]),
            StructuralSpec::Child { of_type, position } => {
                let target = if of_type { t } else { "" };
                Selector::classed(vec![format!("{c} > {target}{}", position.pseudo_class(of_type))])
            }
            StructuralSpec::Children { of_type, except } => {
                let target = if of_type { t } else { "*" };
                let part = match except {
                    None => format!("{c} > {target}"),
                    Some(position) => {
                        let target = if of_type { t } else { "" };
                        format!("{c} > {target}:not({})", position.pseudo_class(of_type))
                    }
                };
                Selector::classed(vec![part])
            }
            StructuralSpec::Sibling { of_type, count } => {
                let step = if of_type { format!(" + {t}") } else { " + *".to_string() };
                let chain = step.repeat(count as usize);
                Selector::classed(vec![c.clone(), format!("{c}{chain}")])
            }
            StructuralSpec::Siblings { of_type } => {
                let target = if of_type { t } else { "*" };
                Selector::classed(vec![c.clone(), format!("{c} ~ {target}")])
            }
            StructuralSpec::SiblingsExcept(position) => {
                let not = format!(":not({})", position.pseudo_class(false));
                Selector::classed(vec![format!("{c}{not}"), format!("{c} ~ {not}")])
            }
        }
    }
}

fn strip_flag<'a>(input: &'a str, flag: &str) -> (bool, &'a str) {
    match input.strip_prefix(flag) {
        Some(rest) => (true, rest),
        None => (false, input),
    }
}
