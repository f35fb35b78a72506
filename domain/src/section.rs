//! Named content sections and their fixed catalog order

use crate::catalog::entities::Part;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// A named content section of the module.
///
/// Sections are fixed: an introductory `Part 0`, the four question parts
/// A-D, and three narrative appendices. Each maps to one markdown file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    PartZero,
    Part(Part),
    Appendix(u8),
}

impl Section {
    /// All sections in fixed catalog order.
    pub fn all() -> [Section; 8] {
        [
            Section::PartZero,
            Section::Part(Part::A),
            Section::Part(Part::B),
            Section::Part(Part::C),
            Section::Part(Part::D),
            Section::Appendix(1),
            Section::Appendix(2),
            Section::Appendix(3),
        ]
    }

    /// The appendices in fixed catalog order.
    pub fn appendices() -> [Section; 3] {
        [Section::Appendix(1), Section::Appendix(2), Section::Appendix(3)]
    }

    /// Display label, e.g. `"Part A"` or `"Appendix 2"`.
    pub fn label(&self) -> String {
        match self {
            Section::PartZero => "Part 0".to_string(),
            Section::Part(part) => format!("Part {part}"),
            Section::Appendix(n) => format!("Appendix {n}"),
        }
    }

    /// The question part of this section, when it carries questions.
    pub fn part(&self) -> Option<Part> {
        match self {
            Section::Part(part) => Some(*part),
            _ => None,
        }
    }

    pub fn is_appendix(&self) -> bool {
        matches!(self, Section::Appendix(_))
    }

    /// Parse a user-supplied section name.
    ///
    /// Accepts the full label (`"Part A"`, `"appendix 2"`) and the bare
    /// shorthand (`"a"`, `"0"`, `"2"` is NOT an appendix — appendices
    /// require the keyword to stay unambiguous with part letters).
    pub fn parse(s: &str) -> Result<Section, DomainError> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        if let Some(rest) = lower.strip_prefix("appendix").map(str::trim) {
            return match rest {
                "1" => Ok(Section::Appendix(1)),
                "2" => Ok(Section::Appendix(2)),
                "3" => Ok(Section::Appendix(3)),
                _ => Err(DomainError::InvalidSection(trimmed.to_string())),
            };
        }

        let name = lower.strip_prefix("part").map_or(lower.as_str(), str::trim);

        if name == "0" || name == "zero" {
            return Ok(Section::PartZero);
        }
        if let Some(part) = Part::parse(name) {
            return Ok(Section::Part(part));
        }

        Err(DomainError::InvalidSection(trimmed.to_string()))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let all = Section::all();
        assert_eq!(all[0], Section::PartZero);
        assert_eq!(all[4], Section::Part(Part::D));
        assert_eq!(all[7], Section::Appendix(3));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Section::PartZero.label(), "Part 0");
        assert_eq!(Section::Part(Part::C).label(), "Part C");
        assert_eq!(Section::Appendix(2).label(), "Appendix 2");
    }

    #[test]
    fn test_parse_labels_and_shorthand() {
        assert_eq!(Section::parse("Part A").unwrap(), Section::Part(Part::A));
        assert_eq!(Section::parse("part b").unwrap(), Section::Part(Part::B));
        assert_eq!(Section::parse("c").unwrap(), Section::Part(Part::C));
        assert_eq!(Section::parse("0").unwrap(), Section::PartZero);
        assert_eq!(Section::parse("appendix 3").unwrap(), Section::Appendix(3));
        assert!(Section::parse("appendix 4").is_err());
        assert!(Section::parse("part e").is_err());
        assert!(Section::parse("").is_err());
    }
}
