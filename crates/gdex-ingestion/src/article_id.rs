//! Publication identifier parsing.

use std::fmt;
use std::str::FromStr;

use gdex_common::GdexError;

/// A parsed publication identifier.
///
/// Accepted input forms: `PMC11127317`, `PMID38790019`, or bare digits
/// (treated as a PMID).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleId {
    Pmid(String),
    Pmcid(String),
}

impl FromStr for ArticleId {
    type Err = GdexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ident = s.trim();
        if ident.to_ascii_uppercase().starts_with("PMC") {
            let digits = &ident[3..];
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return Ok(ArticleId::Pmcid(format!("PMC{digits}")));
            }
        } else if let Some(digits) = ident
            .strip_prefix("PMID")
            .or_else(|| ident.strip_prefix("pmid"))
        {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return Ok(ArticleId::Pmid(digits.to_string()));
            }
        } else if !ident.is_empty() && ident.chars().all(|c| c.is_ascii_digit()) {
            return Ok(ArticleId::Pmid(ident.to_string()));
        }
        Err(GdexError::Fetch(format!(
            "identifier {ident:?} is not a PMID or PMCID (e.g. 'PMID38790019' or 'PMC11127317')"
        )))
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Pmid(pmid) => write!(f, "PMID{pmid}"),
            ArticleId::Pmcid(pmcid) => write!(f, "{pmcid}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pmcid() {
        assert_eq!("PMC11127317".parse::<ArticleId>().unwrap(), ArticleId::Pmcid("PMC11127317".into()));
        assert_eq!("pmc123".parse::<ArticleId>().unwrap(), ArticleId::Pmcid("PMC123".into()));
    }

    #[test]
    fn test_parse_pmid_forms() {
        assert_eq!("PMID38790019".parse::<ArticleId>().unwrap(), ArticleId::Pmid("38790019".into()));
        assert_eq!("38790019".parse::<ArticleId>().unwrap(), ArticleId::Pmid("38790019".into()));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("doi:10.1000/x".parse::<ArticleId>().is_err());
        assert!("PMC".parse::<ArticleId>().is_err());
        assert!("".parse::<ArticleId>().is_err());
    }
}
