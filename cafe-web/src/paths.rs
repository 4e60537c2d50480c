//! Helpers for constructing URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/cafe` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router.
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Link to a section anchor on the home page, e.g. `/#menu`.
#[must_use]
pub fn section_href(section: &str) -> String {
    format!("{}#{section}", asset_path(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_images_are_root_anchored_without_base() {
        assert_eq!(
            asset_path("placeholder.svg?height=96&width=96"),
            "/placeholder.svg?height=96&width=96"
        );
        assert_eq!(asset_path("/placeholder.svg"), "/placeholder.svg");
    }

    #[test]
    fn base_path_prefixes_assets() {
        assert_eq!(
            asset_path_with_base("/placeholder.svg", "/cafe/"),
            "/cafe/placeholder.svg"
        );
    }

    #[test]
    fn section_links_point_at_home_anchors() {
        assert_eq!(section_href("menu"), "/#menu");
    }

    #[test]
    fn router_base_trims_trailing_slash() {
        assert_eq!(router_base(), None);
        assert_eq!(router_base_with_base("/cafe/"), Some(String::from("/cafe")));
        assert_eq!(router_base_with_base("  "), None);
    }
}
