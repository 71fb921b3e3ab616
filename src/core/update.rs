/// Explicit "apply this" / "leave it alone" result.
///
/// `Set(String::new())` means "clear the field", which is different from
/// `Unchanged` meaning "nothing to apply".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update<T> {
    Set(T),
    Unchanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_empty_is_not_unchanged() {
        let cleared: Update<String> = Update::Set(String::new());
        assert_ne!(cleared, Update::Unchanged);
        assert!(matches!(cleared, Update::Set(ref text) if text.is_empty()));
    }
}
