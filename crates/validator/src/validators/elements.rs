//! Collection element validators

use crate::foundation::{Validate, ValidationError};
use crate::validators::whitespace::is_blank;

/// Validates that no element of a text list is null, empty or whitespace-only.
///
/// The error points at the first offending element through the `index`
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoBlankElements;

impl Validate for NoBlankElements {
    type Input = [Option<String>];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match input.iter().position(|element| is_blank(element.as_deref())) {
            Some(index) => Err(ValidationError::blank_element(index)),
            None => Ok(()),
        }
    }
}

/// Creates a [`NoBlankElements`] validator.
#[must_use]
pub const fn no_blank_elements() -> NoBlankElements {
    NoBlankElements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(items: &[Option<&str>]) -> Vec<Option<String>> {
        items.iter().map(|item| item.map(str::to_owned)).collect()
    }

    #[test]
    fn test_all_filled_passes() {
        assert!(
            no_blank_elements()
                .validate(&notes(&[Some("a"), Some(" b ")]))
                .is_ok()
        );
    }

    #[test]
    fn test_empty_list_passes() {
        assert!(no_blank_elements().validate(&[]).is_ok());
    }

    #[test]
    fn test_reports_first_blank_index() {
        for blank in [None, Some(""), Some(" \t")] {
            let input = notes(&[Some("ok"), blank, None]);
            let error = no_blank_elements().validate(&input).unwrap_err();
            assert_eq!(error.code, "blank_element");
            assert_eq!(error.param("index"), Some("1"));
        }
    }
}
