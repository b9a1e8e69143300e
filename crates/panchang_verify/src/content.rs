//! Content validation policy for material shown alongside the panchang.
//!
//! Every check defaults to "not valid" when evidence is missing: content with
//! no sources, untrusted sources, uncleared full text, or unlabeled
//! traditional claims is rejected with a reason.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use panchang_base::Language;

use crate::gate::UNVERIFIED_DISCLAIMER;
use crate::registry::{TrustedSource, TrustedSourceRegistry};

/// Marker a traditional claim must contain.
pub const TRADITION_MARKER: &str = "according to tradition";

/// Outcome of a content check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentValidation {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub sources_verified: bool,
    pub sect_appropriate: bool,
    pub copyright_compliant: bool,
    pub historical_accuracy: bool,
}

impl ContentValidation {
    fn valid(historical_accuracy: bool) -> Self {
        Self {
            is_valid: true,
            error_message: None,
            sources_verified: true,
            sect_appropriate: true,
            copyright_compliant: true,
            historical_accuracy,
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.to_owned()),
            ..Self::valid(true)
        }
    }
}

/// Copyright standing of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyrightStatus {
    PublicDomain,
    Licensed,
    #[default]
    SummaryOnly,
}

/// A user's sect. An undecided user is `None` at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sect {
    Svetambara,
    Digambara,
}

/// Which sect a piece of content addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectScope {
    Svetambara,
    Digambara,
    Both,
}

impl SectScope {
    /// Whether content in this scope may be shown to `user`.
    pub fn suits(self, user: Option<Sect>) -> bool {
        match (self, user) {
            (_, None) | (Self::Both, _) => true,
            (Self::Svetambara, Some(s)) => s == Sect::Svetambara,
            (Self::Digambara, Some(s)) => s == Sect::Digambara,
        }
    }
}

/// Content tagged with the sect it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "sect", content = "content", rename_all = "lowercase")]
pub enum SectSpecific<T> {
    Svetambara(T),
    Digambara(T),
    Both(T),
}

impl<T> SectSpecific<T> {
    pub fn scope(&self) -> SectScope {
        match self {
            Self::Svetambara(_) => SectScope::Svetambara,
            Self::Digambara(_) => SectScope::Digambara,
            Self::Both(_) => SectScope::Both,
        }
    }

    pub fn content(&self) -> &T {
        match self {
            Self::Svetambara(c) | Self::Digambara(c) | Self::Both(c) => c,
        }
    }

    /// The content, if appropriate for `user`.
    pub fn for_sect(&self, user: Option<Sect>) -> Option<&T> {
        self.scope().suits(user).then(|| self.content())
    }
}

/// Every source must match the registry; an empty list is not valid.
pub fn validate_sources(sources: &[TrustedSource]) -> bool {
    let registry = TrustedSourceRegistry;
    !sources.is_empty() && sources.iter().all(|s| registry.is_trusted(&s.name))
}

/// Full text needs public-domain or licensed status; summaries always pass.
pub fn validate_copyright(status: CopyrightStatus, has_full_text: bool) -> bool {
    !has_full_text || matches!(status, CopyrightStatus::PublicDomain | CopyrightStatus::Licensed)
}

pub fn validate_sect_content<T>(content: &SectSpecific<T>, user: Option<Sect>) -> bool {
    content.scope().suits(user)
}

/// Traditional claims must say so; historical claims need evidence.
pub fn validate_historical_claim(
    is_traditional: bool,
    has_historical_evidence: bool,
    claim: &str,
) -> ContentValidation {
    let failure = |message: &str| ContentValidation {
        sources_verified: false,
        historical_accuracy: false,
        ..ContentValidation::rejected(message)
    };
    if is_traditional && !claim.contains(TRADITION_MARKER) {
        return failure("Traditional claims must be clearly labeled as such");
    }
    if !is_traditional && !has_historical_evidence {
        return failure("Historical claims require documented evidence");
    }
    ContentValidation::valid(true)
}

/// A piece of content submitted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentClaim<'a> {
    pub sources: &'a [TrustedSource],
    pub copyright_status: CopyrightStatus,
    pub has_full_text: bool,
    pub sect: Option<SectScope>,
    pub is_traditional: bool,
    pub has_historical_evidence: bool,
    pub user_sect: Option<Sect>,
}

impl<'a> ContentClaim<'a> {
    /// A traditional summary with no sect restriction.
    pub fn new(sources: &'a [TrustedSource]) -> Self {
        Self {
            sources,
            copyright_status: CopyrightStatus::SummaryOnly,
            has_full_text: false,
            sect: None,
            is_traditional: true,
            has_historical_evidence: false,
            user_sect: None,
        }
    }
}

/// Run sources, copyright, and sect checks in that order; first failure wins.
pub fn validate_content(claim: &ContentClaim<'_>) -> ContentValidation {
    if !validate_sources(claim.sources) {
        return ContentValidation {
            sources_verified: false,
            ..ContentValidation::rejected(UNVERIFIED_DISCLAIMER)
        };
    }
    if !validate_copyright(claim.copyright_status, claim.has_full_text) {
        return ContentValidation {
            copyright_compliant: false,
            ..ContentValidation::rejected(
                "Copyright violation: Full text requires public domain or license",
            )
        };
    }
    if let Some(scope) = claim.sect {
        if !scope.suits(claim.user_sect) {
            return ContentValidation {
                sect_appropriate: false,
                ..ContentValidation::rejected("Content not appropriate for user's sect")
            };
        }
    }
    ContentValidation::valid(claim.is_traditional || claim.has_historical_evidence)
}

/// Check a stored panchang record's date, source, and verification flag.
///
/// `date` is `YYYY-MM-DD`. `source` must contain a registry name in full.
pub fn validate_panchang_data(date: &str, source: &str, verified: bool) -> ContentValidation {
    let unverified = ContentValidation {
        sources_verified: false,
        historical_accuracy: false,
        ..ContentValidation::rejected(UNVERIFIED_DISCLAIMER)
    };
    if NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").is_err() {
        return unverified;
    }
    if !verified || TrustedSourceRegistry.contains_entry(source).is_none() {
        return unverified;
    }
    ContentValidation::valid(true)
}

/// Kind of date claimed for a tirthankara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateClaim {
    Birth,
    Nirvana,
}

/// Only Parshvanath (23rd) and Mahavira (24th) have historically verifiable
/// dates; all others are traditional.
pub fn can_verify_date(tirthankara_number: u8, _claim: DateClaim) -> bool {
    matches!(tirthankara_number, 23 | 24)
}

/// Label distinguishing documented history from tradition.
pub fn historical_label(is_historical: bool, lang: Language) -> &'static str {
    match (is_historical, lang) {
        (true, Language::En) => "Historically documented",
        (true, Language::Hi) => "ऐतिहासिक रूप से प्रलेखित",
        (true, Language::Mr) => "ऐतिहासिकदृष्ट्या दस्तऐवजीकृत",
        (true, Language::Gu) => "ઐતિહાસિક રીતે દસ્તાવેજીકૃત",
        (false, Language::En) => "According to Jain tradition",
        (false, Language::Hi) => "जैन परंपरा के अनुसार",
        (false, Language::Mr) => "जैन परंपरेनुसार",
        (false, Language::Gu) => "જૈન પરંપરા અનુસાર",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SourceKind;

    fn src(name: &str) -> TrustedSource {
        TrustedSource::new(name, SourceKind::Academic)
    }

    #[test]
    fn sources_all_must_match() {
        assert!(validate_sources(&[src("Jain eLibrary"), src("Tattvartha Sutra")]));
        assert!(!validate_sources(&[src("Jain eLibrary"), src("Random Forum")]));
        assert!(!validate_sources(&[]));
    }

    #[test]
    fn copyright_rules() {
        assert!(validate_copyright(CopyrightStatus::SummaryOnly, false));
        assert!(!validate_copyright(CopyrightStatus::SummaryOnly, true));
        assert!(validate_copyright(CopyrightStatus::PublicDomain, true));
        assert!(validate_copyright(CopyrightStatus::Licensed, true));
    }

    #[test]
    fn sect_scoping() {
        let sv = SectSpecific::Svetambara("Paryushan, 8 days");
        assert!(validate_sect_content(&sv, Some(Sect::Svetambara)));
        assert!(!validate_sect_content(&sv, Some(Sect::Digambara)));
        assert!(validate_sect_content(&sv, None));
        assert_eq!(sv.for_sect(Some(Sect::Digambara)), None);
        let both = SectSpecific::Both(());
        assert!(validate_sect_content(&both, Some(Sect::Digambara)));
    }

    #[test]
    fn sect_specific_serde_is_tagged() {
        let d = SectSpecific::Digambara(10u8);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"sect":"digambara","content":10}"#);
        let back: SectSpecific<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn historical_claims() {
        let v = validate_historical_claim(true, false, "Rishabhdev lived for ages");
        assert!(!v.is_valid);
        assert_eq!(
            v.error_message.as_deref(),
            Some("Traditional claims must be clearly labeled as such")
        );
        let v = validate_historical_claim(true, false, "according to tradition, Rishabhdev ...");
        assert!(v.is_valid);
        let v = validate_historical_claim(false, false, "Mahavira was born in 599 BCE");
        assert_eq!(
            v.error_message.as_deref(),
            Some("Historical claims require documented evidence")
        );
        assert!(validate_historical_claim(false, true, "Mahavira ...").is_valid);
    }

    #[test]
    fn content_checks_in_order() {
        let bad = [src("Unknown Blog")];
        let v = validate_content(&ContentClaim {
            has_full_text: true,
            ..ContentClaim::new(&bad)
        });
        assert_eq!(v.error_message.as_deref(), Some("This is not Factually correct."));
        assert!(!v.sources_verified);

        let good = [src("Jainworld.com")];
        let v = validate_content(&ContentClaim {
            has_full_text: true,
            ..ContentClaim::new(&good)
        });
        assert!(!v.copyright_compliant);

        let v = validate_content(&ContentClaim {
            sect: Some(SectScope::Digambara),
            user_sect: Some(Sect::Svetambara),
            ..ContentClaim::new(&good)
        });
        assert!(!v.sect_appropriate);
        assert_eq!(
            v.error_message.as_deref(),
            Some("Content not appropriate for user's sect")
        );

        let v = validate_content(&ContentClaim {
            is_traditional: false,
            ..ContentClaim::new(&good)
        });
        assert!(v.is_valid);
        assert!(!v.historical_accuracy);
    }

    #[test]
    fn panchang_data_checks() {
        assert!(validate_panchang_data("2024-03-20", "Drik Panchang", true).is_valid);
        assert!(!validate_panchang_data("2024-03-20", "Drik Panchang", false).is_valid);
        assert!(!validate_panchang_data("2024-13-40", "Drik Panchang", true).is_valid);
        assert!(!validate_panchang_data("2024-03-20", "meeus", true).is_valid);
    }

    #[test]
    fn panchang_source_must_name_an_entry_in_full() {
        for source in ["a", "Panchang", "Jain", "Swiss"] {
            assert!(!validate_panchang_data("2024-03-20", source, true).is_valid, "{source}");
        }
        assert!(validate_panchang_data("2024-03-20", "Drik Panchang (online)", true).is_valid);
    }

    #[test]
    fn verifiable_tirthankaras() {
        assert!(can_verify_date(23, DateClaim::Birth));
        assert!(can_verify_date(24, DateClaim::Nirvana));
        assert!(!can_verify_date(1, DateClaim::Birth));
        assert!(!can_verify_date(22, DateClaim::Nirvana));
    }

    #[test]
    fn labels() {
        assert_eq!(historical_label(false, Language::En), "According to Jain tradition");
        assert_eq!(historical_label(true, Language::Gu), "ઐતિહાસિક રીતે દસ્તાવેજીકૃત");
    }
}
