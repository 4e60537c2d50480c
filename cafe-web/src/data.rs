//! Static site data embedded at build time.
use cafe_cart::{MenuCatalog, Profile};
use once_cell::sync::Lazy;

static CATALOG: Lazy<MenuCatalog> = Lazy::new(|| {
    MenuCatalog::from_json(include_str!("../static/assets/data/menu.json")).unwrap_or_else(|err| {
        log::error!("menu catalog failed to load: {err}");
        MenuCatalog::default()
    })
});

static DEMO_PROFILE: Lazy<Option<Profile>> = Lazy::new(|| {
    Profile::from_json(include_str!("../static/assets/data/account.json"))
        .map_err(|err| log::error!("demo profile failed to load: {err}"))
        .ok()
});

/// The cafe menu.
#[must_use]
pub fn catalog() -> &'static MenuCatalog {
    &CATALOG
}

/// The signed-in customer shown on the account page.
#[must_use]
pub fn demo_profile() -> Option<&'static Profile> {
    DEMO_PROFILE.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_loads() {
        assert!(catalog().item_count() > 20);
        assert_eq!(demo_profile().map(|p| p.name.as_str()), Some("John Doe"));
    }
}
