use log::Level;

/// Trunk copies `assets/` next to the wasm bundle.
pub fn get_asset_base() -> &'static str {
    "/assets"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Builds the URL for an image listed in the content table. Path segments are
/// percent-encoded since file names may carry spaces.
pub fn asset_url(path: &str) -> String {
    let encoded: Vec<String> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("{}/{}", get_asset_base(), encoded.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_encodes_spaces_but_keeps_separators() {
        let url = asset_url("/projects/Smart City.jpeg");
        assert_eq!(url, format!("{}/projects/Smart%20City.jpeg", get_asset_base()));
    }

    #[test]
    fn asset_url_accepts_paths_without_leading_slash() {
        assert_eq!(asset_url("Engineering.jpeg"), asset_url("/Engineering.jpeg"));
    }
}
