use serde::{Deserialize, Deserializer, Serialize, de};

/// Font weight. Numeric CSS weights of 600 and above count as bold.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "regular" | "normal" => Ok(FontWeight::Regular),
            "bold" => Ok(FontWeight::Bold),
            other => other
                .parse::<u16>()
                .map(Self::from_numeric)
                .map_err(|_| format!("Invalid font weight: '{}'", s)),
        }
    }

    fn from_numeric(weight: u16) -> Self {
        if weight >= 600 { FontWeight::Bold } else { FontWeight::Regular }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum FontWeightDef {
            Str(String),
            Num(u16),
        }

        match FontWeightDef::deserialize(deserializer)? {
            FontWeightDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            FontWeightDef::Num(n) => Ok(Self::from_numeric(n)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_from_names_and_numbers() {
        let parse = |json: &str| serde_json::from_str::<FontWeight>(json).unwrap();
        assert_eq!(parse(r#""bold""#), FontWeight::Bold);
        assert_eq!(parse(r#""Normal""#), FontWeight::Regular);
        assert_eq!(parse("700"), FontWeight::Bold);
        assert_eq!(parse(r#""400""#), FontWeight::Regular);
        assert!(serde_json::from_str::<FontWeight>(r#""heavy""#).is_err());
    }
}
