//! JSON document persistence under the app directory.

pub mod contacts_json;
pub mod json_doc;
pub mod profile_json;

pub use contacts_json::ContactsJson;
pub use profile_json::ProfileJson;
