//! Text manipulation utilities

/// Formats `count` followed by `noun`, adding a plural `s` when needed
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_zero() {
        assert_eq!(pluralize(0, "issue"), "0 issues");
    }

    #[test]
    fn test_pluralize_one() {
        assert_eq!(pluralize(1, "package"), "1 package");
    }

    #[test]
    fn test_pluralize_many() {
        assert_eq!(pluralize(12, "file"), "12 files");
    }
}
