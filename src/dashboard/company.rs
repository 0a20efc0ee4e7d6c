use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Alias sets for the known business units, tested in this fixed order.
static CHURRASCO_ALIASES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "companhia do churrasco",
        "cia. do churrasco",
        "cia do churrasco",
        "churrasco",
    ]
});

static JOHNNY_ALIASES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["johnny rockets", "johnny"]);

static CAMERINO_ALIASES: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["camerino"]);

/// Canonical business unit derived from a free-text company name.
///
/// Unrecognized names pass through as [`Company::Other`] carrying the
/// trimmed lower-cased input, so no record is ever silently dropped for
/// belonging to an unmapped company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Company {
    Churrasco,
    Johnny,
    Camerino,
    Other(String),
}

impl Company {
    /// Normalizes a free-text company name to its canonical key.
    pub fn parse(raw: &str) -> Self {
        let needle = raw.trim().to_lowercase();
        if matches_family(&needle, &CHURRASCO_ALIASES) {
            Company::Churrasco
        } else if matches_family(&needle, &JOHNNY_ALIASES) {
            Company::Johnny
        } else if matches_family(&needle, &CAMERINO_ALIASES) {
            Company::Camerino
        } else {
            Company::Other(needle)
        }
    }

    /// Canonical string key for grouping and display.
    pub fn key(&self) -> &str {
        match self {
            Company::Churrasco => "churrasco",
            Company::Johnny => "johnny",
            Company::Camerino => "camerino",
            Company::Other(name) => name,
        }
    }

    /// Whether `raw` refers to this business unit.
    pub fn matches(&self, raw: &str) -> bool {
        Company::parse(raw) == *self
    }
}

fn matches_family(needle: &str, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .any(|alias| needle == *alias || needle.contains(alias))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_aliases_map_to_canonical_keys() {
        assert_eq!(Company::parse("Companhia do Churrasco"), Company::Churrasco);
        assert_eq!(Company::parse("Cia. do Churrasco"), Company::Churrasco);
        assert_eq!(Company::parse("  JOHNNY ROCKETS  "), Company::Johnny);
        assert_eq!(Company::parse("Camerino"), Company::Camerino);
    }

    #[test]
    fn unknown_companies_pass_through_lowercased() {
        assert_eq!(
            Company::parse("  Padaria Silva "),
            Company::Other("padaria silva".into())
        );
    }

    #[test]
    fn parse_is_idempotent() {
        for raw in ["Cia. do Churrasco", "Johnny", "Mercearia Nova"] {
            let once = Company::parse(raw);
            let twice = Company::parse(once.key());
            assert_eq!(once, twice, "normalization must be idempotent for {raw}");
        }
    }
}
