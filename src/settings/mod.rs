mod dictionary;
mod secret;
mod store;
mod user;

pub use dictionary::{merge_replacements, similar, DictionaryManager};
pub use secret::SecretString;
pub use store::{FilePropertyStore, MemoryPropertyStore, PropertyStore};
pub use user::{Language, UserSettings};
