//! Spacing and sizing primitives. All lengths are in design units (inches).
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Edge insets, e.g. the gap between a section's outline and its content text.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Parse a CSS-style shorthand of 1, 2 or 4 lengths, e.g. `"1.5 0.5 0.5 0.5"`.
    /// A trailing `in` unit is accepted and ignored.
    fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(|part| {
                let number = part.strip_suffix("in").unwrap_or(part);
                number
                    .parse::<f32>()
                    .map_err(|e| format!("Invalid length '{}': {}", part, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [y, x] => Ok(Margins::new(*y, *x, *y, *x)),
            [top, right, bottom, left] => Ok(Margins::new(*top, *right, *bottom, *left)),
            _ => Err(format!(
                "Invalid margin shorthand: expected 1, 2, or 4 values, got {}",
                values.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MarginsDef {
            Num(f32),
            Str(String),
            Map {
                #[serde(default)]
                top: f32,
                #[serde(default)]
                right: f32,
                #[serde(default)]
                bottom: f32,
                #[serde(default)]
                left: f32,
            },
        }

        match MarginsDef::deserialize(deserializer)? {
            MarginsDef::Num(v) => Ok(Margins::all(v)),
            MarginsDef::Str(s) => Margins::parse_shorthand(&s).map_err(de::Error::custom),
            MarginsDef::Map { top, right, bottom, left } => Ok(Margins { top, right, bottom, left }),
        }
    }
}

/// How wide each section column is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// A literal width. Too many columns overflow the canvas.
    Fixed(f32),
    /// Columns share whatever width is left after margins and spacing.
    Fill,
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Fixed(15.0)
    }
}

impl Serialize for ColumnWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColumnWidth::Fixed(w) => serializer.serialize_f32(*w),
            ColumnWidth::Fill => serializer.serialize_str("fill"),
        }
    }
}

impl<'de> Deserialize<'de> for ColumnWidth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColumnWidthDef {
            Num(f32),
            Str(String),
        }

        match ColumnWidthDef::deserialize(deserializer)? {
            ColumnWidthDef::Num(w) if w > 0.0 => Ok(ColumnWidth::Fixed(w)),
            ColumnWidthDef::Num(w) => Err(de::Error::custom(format!(
                "column width must be positive, got {}",
                w
            ))),
            ColumnWidthDef::Str(s) if s.eq_ignore_ascii_case("fill") => Ok(ColumnWidth::Fill),
            ColumnWidthDef::Str(s) => Err(de::Error::custom(format!(
                "Invalid column width '{}': expected a number or \"fill\"",
                s
            ))),
        }
    }
}
