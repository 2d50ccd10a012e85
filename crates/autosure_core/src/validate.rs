//! Media type validation for picked artifacts.
//!
//! Classification looks only at the declared media type. File content is
//! never inspected, so a PNG renamed to `.pdf` with a PDF media type is
//! accepted as a document.

pub const MEDIA_PDF: &str = "application/pdf";
pub const MEDIA_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// Legacy Word type; only the legacy single-slot affordance accepts it.
pub const MEDIA_DOC: &str = "application/msword";
pub const MEDIA_PNG: &str = "image/png";
pub const MEDIA_JPEG: &str = "image/jpeg";

pub const DOCUMENT_REJECTED: &str = "Only PDF or DOCX files are allowed.";
pub const IMAGE_REJECTED: &str = "Only PNG or JPG image files are allowed.";

const DOCUMENT_TYPES: &[&str] = &[MEDIA_PDF, MEDIA_DOCX];
const LEGACY_DOCUMENT_TYPES: &[&str] = &[MEDIA_PDF, MEDIA_DOCX, MEDIA_DOC];
const IMAGE_TYPES: &[&str] = &[MEDIA_PNG, MEDIA_JPEG];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Document,
    Image,
    Rejected,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Image => "image",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Upload entry point a pick came through. Each one carries its own accepted
/// media types and rejection message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Affordance {
    Image,
    Document,
    /// Single-slot document picker. Also accepts `application/msword`, which
    /// the primary document picker does not.
    LegacyDocument,
}

impl Affordance {
    pub fn accepted_types(&self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_TYPES,
            Self::Document => DOCUMENT_TYPES,
            Self::LegacyDocument => LEGACY_DOCUMENT_TYPES,
        }
    }

    pub fn rejection_message(&self) -> &'static str {
        match self {
            Self::Image => IMAGE_REJECTED,
            Self::Document | Self::LegacyDocument => DOCUMENT_REJECTED,
        }
    }

    /// Category an accepted pick through this affordance belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Image => Category::Image,
            Self::Document | Self::LegacyDocument => Category::Document,
        }
    }

    pub fn classify(&self, media_type: &str) -> Category {
        if matches_any(media_type, self.accepted_types()) {
            self.category()
        } else {
            Category::Rejected
        }
    }

    /// Like [`Affordance::classify`], but returns the rejection message for
    /// anything outside this affordance's set.
    pub fn validate(&self, media_type: &str) -> Result<Category, &'static str> {
        match self.classify(media_type) {
            Category::Rejected => Err(self.rejection_message()),
            category => Ok(category),
        }
    }
}

/// Classifies against the primary document and image pickers' rules.
pub fn classify(media_type: &str) -> Category {
    if matches_any(media_type, DOCUMENT_TYPES) {
        Category::Document
    } else if matches_any(media_type, IMAGE_TYPES) {
        Category::Image
    } else {
        Category::Rejected
    }
}

fn matches_any(media_type: &str, accepted: &[&str]) -> bool {
    let essence = essence(media_type);
    accepted
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(essence))
}

/// Strips parameters such as `; charset=binary` and surrounding whitespace.
fn essence(media_type: &str) -> &str {
    media_type
        .split(';')
        .next()
        .unwrap_or(media_type)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn essence_drops_parameters() {
        assert_eq!(essence(" image/png ; q=1"), "image/png");
        assert_eq!(essence(""), "");
    }

    #[test]
    fn affordance_category_is_fixed() {
        assert_eq!(Affordance::LegacyDocument.category(), Category::Document);
        assert_eq!(Affordance::Image.category(), Category::Image);
    }
}
