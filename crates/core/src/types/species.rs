//! Pet species and the adoptable-listing filter over it.

use serde::{Deserialize, Serialize};

/// Species of a pet available on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PetSpecies {
    #[default]
    Dog,
    Cat,
}

impl PetSpecies {
    /// Default card glyph assigned when a pet is registered without a photo.
    #[must_use]
    pub const fn default_glyph(self) -> &'static str {
        match self {
            Self::Dog => "🐕",
            Self::Cat => "🐱",
        }
    }

    /// Plural label used by the listing filter tabs (pt-BR).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dog => "Cães",
            Self::Cat => "Gatos",
        }
    }
}

impl std::fmt::Display for PetSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dog => write!(f, "dog"),
            Self::Cat => write!(f, "cat"),
        }
    }
}

impl std::str::FromStr for PetSpecies {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            _ => Err(format!("invalid pet species: {s}")),
        }
    }
}

/// An adoptable-listing filter: one species or the "all" tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeciesFilter {
    /// Keep every pet.
    #[default]
    All,
    /// Keep only pets of exactly this species.
    Only(PetSpecies),
}

impl SpeciesFilter {
    /// Whether a pet of `species` passes this filter.
    #[must_use]
    pub fn matches(self, species: PetSpecies) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == species,
        }
    }
}

impl From<PetSpecies> for SpeciesFilter {
    fn from(species: PetSpecies) -> Self {
        Self::Only(species)
    }
}

impl std::fmt::Display for SpeciesFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(species) => write!(f, "{species}"),
        }
    }
}

impl std::str::FromStr for SpeciesFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse::<PetSpecies>().map(Self::Only)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_glyphs() {
        assert_eq!(PetSpecies::Dog.default_glyph(), "🐕");
        assert_eq!(PetSpecies::Cat.default_glyph(), "🐱");
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&PetSpecies::Dog).unwrap(),
            "\"dog\""
        );
        let parsed: PetSpecies = serde_json::from_str("\"cat\"").unwrap();
        assert_eq!(parsed, PetSpecies::Cat);
    }

    #[test]
    fn test_filter_matches() {
        assert!(SpeciesFilter::All.matches(PetSpecies::Cat));
        assert!(SpeciesFilter::Only(PetSpecies::Dog).matches(PetSpecies::Dog));
        assert!(!SpeciesFilter::Only(PetSpecies::Dog).matches(PetSpecies::Cat));
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<SpeciesFilter>().unwrap(), SpeciesFilter::All);
        assert_eq!(
            "dog".parse::<SpeciesFilter>().unwrap(),
            SpeciesFilter::Only(PetSpecies::Dog)
        );
        assert!("bird".parse::<SpeciesFilter>().is_err());
    }
}
