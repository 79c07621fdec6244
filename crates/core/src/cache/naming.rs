//! Title-derived cache file names.

/// Prefix of every cached file.
pub const FILE_PREFIX: &str = "svg_";

/// Extension of every cached file.
pub const FILE_EXTENSION: &str = "svg";

/// Compute the cache file name for a logo title.
///
/// Only lowercasing and space replacement are applied. Titles that differ
/// solely in case or in spaces vs underscores collide on the same file.
pub fn file_name_for(title: &str) -> String {
    format!("{FILE_PREFIX}{}.{FILE_EXTENSION}", title.to_lowercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_title() {
        assert_eq!(file_name_for("Firefox"), "svg_firefox.svg");
    }

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(file_name_for("Visual Studio Code"), "svg_visual_studio_code.svg");
    }

    #[test]
    fn test_stability() {
        assert_eq!(file_name_for("GitHub"), file_name_for("GitHub"));
    }

    #[test]
    fn test_case_and_space_collision() {
        assert_eq!(file_name_for("Next JS"), file_name_for("next_js"));
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(file_name_for("C++ (Dark)"), "svg_c++_(dark).svg");
    }
}
