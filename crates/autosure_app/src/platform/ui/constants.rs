pub const TITLE: &str = "AutoSure AI";
pub const TAGLINE: &str = "Multimodal Risk Engine";

pub const LABEL_IMAGE_PICKER: &str = "Upload Image (JPG/PNG)";
pub const LABEL_DOCUMENT_PICKER: &str = "Upload Document (PDF/DOCX)";
pub const LABEL_SELECTED_FILE: &str = "Selected File:";
pub const LABEL_NOTHING_SELECTED: &str = "(none)";

pub const ROW_STATUS: &str = "Status:";
pub const ROW_RISK: &str = "Risk Level:";
pub const ROW_COMPLIANCE: &str = "Compliance:";
pub const ROW_CONFIDENCE: &str = "Confidence:";
pub const ROW_SUMMARY: &str = "Summary:";
