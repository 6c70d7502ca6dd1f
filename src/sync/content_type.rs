use std::path::Path;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Web asset types pinned regardless of what the platform table says.
const WEB_TYPES: &[(&str, &str)] = &[
    ("js", "application/javascript"),
    ("css", "text/css"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("json", "application/json"),
    ("svg", "image/svg+xml"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
];

/// Resolve the Content-Type for an uploaded file from its extension.
///
/// Lookup order is the pinned web table, then `mime_guess`, then
/// `application/octet-stream`. Extensions are compared case-insensitively.
#[must_use]
pub fn content_type_for(path: &Path) -> String {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_CONTENT_TYPE.to_string();
    };
    let ext = ext.to_ascii_lowercase();

    if let Some((_, mime)) = WEB_TYPES.iter().find(|(e, _)| *e == ext) {
        return (*mime).to_string();
    }

    mime_guess::from_ext(&ext)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_text_css() {
        assert_eq!(content_type_for(Path::new("style.css")), "text/css");
    }

    #[test]
    fn unknown_extension_falls_back_to_binary() {
        assert_eq!(
            content_type_for(Path::new("app.unknownext")),
            DEFAULT_CONTENT_TYPE
        );
    }

    #[test]
    fn no_extension_falls_back_to_binary() {
        assert_eq!(content_type_for(Path::new("LICENSE")), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn pinned_web_types() {
        let cases = [
            ("build/app.js", "application/javascript"),
            ("index.HTML", "text/html"),
            ("legacy.htm", "text/html"),
            ("manifest.json", "application/json"),
            ("icons/logo.svg", "image/svg+xml"),
            ("fonts/inter.woff", "font/woff"),
            ("fonts/inter.woff2", "font/woff2"),
        ];
        for (name, expected) in cases {
            assert_eq!(content_type_for(Path::new(name)), expected, "{name}");
        }
    }

    #[test]
    fn platform_table_covers_the_rest() {
        assert_eq!(content_type_for(Path::new("hero.png")), "image/png");
        assert_eq!(content_type_for(Path::new("notes.txt")), "text/plain");
    }
}
