mod bundle;
mod render;

pub use bundle::{I18nBundle, current_lang, with_bundle};
pub use render::{t, tr};
