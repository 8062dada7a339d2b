pub mod api_keys;
pub mod sections;

pub use api_keys::{ApiKeyDialog, ApiKeyList, RevealedKeyNotice};
pub use sections::{BrandingSection, PrivacySection, SecuritySection};
