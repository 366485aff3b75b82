//! Content classification for fetched resources
//!
//! Maps a (URL path, declared media type) pair to a storage category. The
//! category determines both the destination subdirectory and the default
//! file extension.

/// Storage classification for a fetched resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// JavaScript sources
    Script,
    /// Server-side markup (PHP)
    ServerMarkup,
    /// Everything else, stored as HTML
    Generic,
}

impl Category {
    /// Default file extension for this category, including the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Script => ".js",
            Self::ServerMarkup => ".php",
            Self::Generic => ".html",
        }
    }

    /// Subdirectory name under the storage root for this category
    pub fn subdir(&self) -> &'static str {
        match self {
            Self::Script => "javascript",
            Self::ServerMarkup => "php",
            Self::Generic => "other",
        }
    }

    /// All categories, in classification order
    pub fn all() -> [Category; 3] {
        [Self::Script, Self::ServerMarkup, Self::Generic]
    }
}

/// Classifies a resource by its URL path and declared media type
///
/// Decision order, first match wins:
/// 1. Media type contains "javascript" OR path ends with ".js" → Script
/// 2. Media type contains "php" OR path ends with ".php" → ServerMarkup
/// 3. Otherwise → Generic
///
/// Within each tier the media-type and path-suffix signals carry equal
/// weight, and the script tier is checked before the markup tier, so a
/// ".php" path served as JavaScript classifies as Script.
pub fn classify(path: &str, content_type: &str) -> Category {
    if content_type.contains("javascript") || path.ends_with(".js") {
        Category::Script
    } else if content_type.contains("php") || path.ends_with(".php") {
        Category::ServerMarkup
    } else {
        Category::Generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_media_type() {
        assert_eq!(classify("/bundle", "application/javascript"), Category::Script);
        assert_eq!(classify("/bundle", "text/javascript"), Category::Script);
        assert_eq!(classify("/page", "application/x-php"), Category::ServerMarkup);
    }

    #[test]
    fn test_classify_by_path_suffix() {
        assert_eq!(classify("/a/b.js", ""), Category::Script);
        assert_eq!(classify("/x.php", ""), Category::ServerMarkup);
    }

    #[test]
    fn test_classify_generic_fallback() {
        assert_eq!(classify("/", "text/html"), Category::Generic);
        assert_eq!(classify("/doc.pdf", "application/pdf"), Category::Generic);
        assert_eq!(classify("/page", ""), Category::Generic);
    }

    #[test]
    fn test_script_tier_wins_over_markup_tier() {
        // A .php path served as JavaScript is still a script
        assert_eq!(classify("/x.php", "text/javascript"), Category::Script);
        // And a .js path served as PHP is a script too (suffix hits tier 1)
        assert_eq!(classify("/y.js", "application/x-php"), Category::Script);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify("/a.js", "text/html"), Category::Script);
        }
    }

    #[test]
    fn test_category_extension_and_subdir() {
        assert_eq!(Category::Script.extension(), ".js");
        assert_eq!(Category::Script.subdir(), "javascript");
        assert_eq!(Category::ServerMarkup.extension(), ".php");
        assert_eq!(Category::ServerMarkup.subdir(), "php");
        assert_eq!(Category::Generic.extension(), ".html");
        assert_eq!(Category::Generic.subdir(), "other");
    }
}
