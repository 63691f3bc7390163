use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Named group of allow-listed internet domains used to scope a policy
/// search. The catalog is static configuration; the page offers these as
/// checkboxes and sends the selected identifiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DomainCategory {
    EuInstitutions,
    Government,
    InternationalBodies,
    NonProfit,
}

impl DomainCategory {
    pub const ALL: [DomainCategory; 4] = [
        DomainCategory::EuInstitutions,
        DomainCategory::Government,
        DomainCategory::InternationalBodies,
        DomainCategory::NonProfit,
    ];

    /// Stable identifier used over the boundary.
    pub fn id(&self) -> &'static str {
        match self {
            DomainCategory::EuInstitutions => "eu",
            DomainCategory::Government => "government",
            DomainCategory::InternationalBodies => "international",
            DomainCategory::NonProfit => "nonprofit",
        }
    }

    pub fn from_id(id: &str) -> Option<DomainCategory> {
        match id {
            "eu" => Some(DomainCategory::EuInstitutions),
            "government" => Some(DomainCategory::Government),
            "international" => Some(DomainCategory::InternationalBodies),
            "nonprofit" => Some(DomainCategory::NonProfit),
            _ => None,
        }
    }

    /// Concrete domain allow-list for this category.
    pub fn domains(&self) -> &'static [&'static str] {
        match self {
            DomainCategory::EuInstitutions => {
                &["europa.eu", "ec.europa.eu", "edpb.europa.eu", "gdpr.eu"]
            }
            DomainCategory::Government => &["gov", "gov.uk", "ftc.gov", "nist.gov"],
            DomainCategory::InternationalBodies => &["un.org", "who.int", "oecd.org"],
            DomainCategory::NonProfit => &["iapp.org", "edri.org", "privacyinternational.org"],
        }
    }
}

/// Map selected category identifiers to a flat domain allow-list.
///
/// Selection order is preserved and duplicates are dropped. An empty
/// selection or an unknown identifier is a validation error; no search is
/// attempted in either case.
pub fn resolve_categories(ids: &[String]) -> Result<Vec<String>, AppError> {
    if ids.is_empty() {
        return Err(AppError::validation(
            "Select at least one policy domain category to search",
        ));
    }

    let mut domains: Vec<String> = Vec::new();
    for id in ids {
        let category = DomainCategory::from_id(id).ok_or_else(|| {
            AppError::validation("Unknown policy domain category")
                .with_details(format!("category={id}"))
        })?;
        for domain in category.domains() {
            if !domains.iter().any(|d| d == domain) {
                domains.push((*domain).to_string());
            }
        }
    }
    Ok(domains)
}
