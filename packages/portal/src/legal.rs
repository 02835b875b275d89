//! Static legal documents, authored as markdown.

use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegalDocument {
    Terms,
    Privacy,
    UserAgreement,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown legal document: {0}")]
pub struct UnknownDocument(pub String);

impl LegalDocument {
    pub const ALL: [LegalDocument; 3] = [
        LegalDocument::Terms,
        LegalDocument::Privacy,
        LegalDocument::UserAgreement,
    ];

    pub fn title(self) -> &'static str {
        match self {
            LegalDocument::Terms => "Terms of Service",
            LegalDocument::Privacy => "Privacy Policy",
            LegalDocument::UserAgreement => "User Agreement",
        }
    }

    /// URL path segment.
    pub fn slug(self) -> &'static str {
        match self {
            LegalDocument::Terms => "terms",
            LegalDocument::Privacy => "privacy",
            LegalDocument::UserAgreement => "agreement",
        }
    }

    pub fn last_updated(self) -> &'static str {
        "January 15, 2025"
    }

    pub fn markdown(self) -> &'static str {
        match self {
            LegalDocument::Terms => TERMS,
            LegalDocument::Privacy => PRIVACY,
            LegalDocument::UserAgreement => AGREEMENT,
        }
    }

    /// Top-level section headings, in order.
    pub fn headings(self) -> impl Iterator<Item = &'static str> {
        self.markdown()
            .lines()
            .filter_map(|line| line.strip_prefix("## "))
            .map(str::trim)
    }
}

impl FromStr for LegalDocument {
    type Err = UnknownDocument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LegalDocument::ALL
            .into_iter()
            .find(|doc| doc.slug() == s)
            .ok_or_else(|| UnknownDocument(s.to_string()))
    }
}

const TERMS: &str = r#"
## 1. Acceptance of Terms

By creating an account or using CipherLuma services you agree to be bound by
these Terms of Service. If you do not agree, do not use the services.

## 2. Eligibility

You must be at least 18 years old and legally able to enter into contracts in
your country of residence. Some features are only available in supported
countries.

## 3. Your Account

You are responsible for keeping your credentials confidential and for all
activity under your account. Notify us immediately of any unauthorised use.

## 4. Payments and Fees

Fees for transfers, currency conversion and card services are shown before you
confirm a transaction. Exchange rates may change between quote and execution.

## 5. Prohibited Use

You may not use the services for unlawful purposes, to evade sanctions, or to
interfere with the security of the platform.

## 6. Termination

We may suspend or close accounts that breach these terms. You may close your
account at any time from the account settings.

## 7. Limitation of Liability

To the extent permitted by law, CipherLuma is not liable for indirect or
consequential losses arising from use of the services.
"#;

const PRIVACY: &str = r#"
## 1. Information We Collect

- **Identity data**: name, date of birth, country of residence.
- **Contact data**: email address and phone number.
- **Usage data**: device information and interaction with the app.

## 2. How We Use Information

We use your information to provide and secure the services, to meet legal
obligations such as identity verification, and to improve the product.

## 3. Sharing

We share data only with service providers acting on our behalf, with
regulators when required by law, and never sell personal data.

## 4. Retention

Records are kept for as long as the law requires, typically five years after
the end of the customer relationship.

## 5. Your Rights

You may request access to, correction of, or deletion of your personal data by
contacting privacy@cipherluma.com.
"#;

const AGREEMENT: &str = r#"
## 1. Parties

This User Agreement is between you and CipherLuma Ltd. It supplements the
Terms of Service and the Privacy Policy.

## 2. Services

CipherLuma provides multi-currency accounts, international transfers and
developer APIs. Availability depends on your country.

## 3. Verification

We may ask for documents to confirm your identity before enabling transfers.
Services may be limited until verification completes.

## 4. Communications

You agree to receive service messages electronically at the email address and
phone number on your account.

## 5. Changes

We will notify you of material changes to this agreement at least 30 days
before they take effect.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_roundtrip() {
        for doc in LegalDocument::ALL {
            assert_eq!(doc.slug().parse::<LegalDocument>(), Ok(doc));
        }
        assert!("cookies".parse::<LegalDocument>().is_err());
    }

    #[test]
    fn test_every_document_has_sections() {
        for doc in LegalDocument::ALL {
            let headings: Vec<_> = doc.headings().collect();
            assert!(headings.len() >= 5, "{} has {} sections", doc.title(), headings.len());
            assert!(headings[0].starts_with("1."));
        }
    }
}
