/// Case-insensitive equality that also folds non-ASCII letters, so "Харків" == "харків"
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::eq_ignore_case;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Харків'", "харків'"));
        assert!(eq_ignore_case("ХАРКІВ'", "Харків'"));
        assert!(eq_ignore_case("Station A", "station a"));
        assert!(!eq_ignore_case("Харків", "Харків'"));
        assert!(!eq_ignore_case("Kharkiv", "Харків"));
    }
}
