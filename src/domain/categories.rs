use anyhow::{Context, Result};
use regex::Regex;

/// Renders federation category codes (`JE U13 [SG]`) as English labels
pub struct CategoryTranslator {
    code: Regex,
}

impl CategoryTranslator {
    pub fn new() -> Result<Self> {
        let code = Regex::new(r"(?i)^(JE|JD|ME|MD|MX|GD)\s*(U\d+)")
            .context("Failed to compile category code regex")?;
        Ok(Self { code })
    }

    /// Unrecognised codes are returned unchanged.
    pub fn translate(&self, category: &str) -> String {
        let Some(caps) = self.code.captures(category) else {
            return category.to_string();
        };

        let prefix = caps[1].to_uppercase();
        let age_class = caps[2].to_uppercase();
        format!("{} {}", Self::label(&prefix), age_class)
    }

    fn label(prefix: &str) -> &str {
        match prefix {
            "JE" => "Boys Singles",
            "JD" => "Boys Doubles",
            "ME" => "Girls Singles",
            "MD" => "Girls Doubles",
            "MX" | "GD" => "Mixed",
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_known_codes() {
        let translator = CategoryTranslator::new().unwrap();
        let cases = [
            ("JE U13 [SG]", "Boys Singles U13"),
            ("JD U11 Sa [SG]", "Boys Doubles U11"),
            ("ME U15", "Girls Singles U15"),
            ("MD U17", "Girls Doubles U17"),
            ("MX U13", "Mixed U13"),
            ("GD U19", "Mixed U19"),
            ("je u13", "Boys Singles U13"),
            ("JEU13", "Boys Singles U13"),
        ];

        for (code, expected) in cases {
            assert_eq!(translator.translate(code), expected);
        }
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        let translator = CategoryTranslator::new().unwrap();
        for code in ["XX U99", "JE O19", "Herren Einzel", ""] {
            assert_eq!(translator.translate(code), code);
        }
    }
}
