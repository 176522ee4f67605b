//! Rendering directory entries into select options.

use tracing::debug;

use super::surface::{FormSurface, SelectField, SelectOption};

/// Append one option per item, in the order given.
///
/// Existing options are left alone. Returns the number of options appended.
pub fn populate<S, T, I, L>(
    surface: &S,
    field: SelectField,
    items: &[T],
    id_of: I,
    label_of: L,
) -> usize
where
    S: FormSurface + ?Sized,
    I: Fn(&T) -> String,
    L: Fn(&T) -> String,
{
    for item in items {
        surface.append_option(field, SelectOption::new(id_of(item), label_of(item)));
    }
    debug!(?field, count = items.len(), "Populated select");
    items.len()
}

/// Replace all options with a single empty-valued placeholder.
pub fn reset<S>(surface: &S, field: SelectField, placeholder_label: &str)
where
    S: FormSurface + ?Sized,
{
    surface.clear_options(field);
    surface.append_option(field, SelectOption::placeholder(placeholder_label));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemoryForm;

    #[test]
    fn test_populate_is_additive_and_ordered() {
        let form = MemoryForm::new();
        form.append_option(SelectField::Service, SelectOption::new("x", "Existing"));

        let items = vec![("2", "Cut"), ("1", "Beard")];
        let added = populate(
            &form,
            SelectField::Service,
            &items,
            |(id, _)| (*id).to_string(),
            |(_, name)| (*name).to_string(),
        );

        assert_eq!(added, 2);
        assert_eq!(
            form.options(SelectField::Service),
            vec![
                SelectOption::new("x", "Existing"),
                SelectOption::new("2", "Cut"),
                SelectOption::new("1", "Beard"),
            ]
        );
    }

    #[test]
    fn test_populate_empty_items() {
        let form = MemoryForm::new();
        let items: Vec<String> = Vec::new();
        assert_eq!(
            populate(&form, SelectField::Barber, &items, String::clone, String::clone),
            0
        );
        assert!(form.options(SelectField::Barber).is_empty());
    }

    #[test]
    fn test_reset_leaves_only_placeholder() {
        let form = MemoryForm::new();
        form.append_option(SelectField::Hour, SelectOption::new("09:00", "09:00"));
        form.append_option(SelectField::Hour, SelectOption::new("09:30", "09:30"));

        reset(&form, SelectField::Hour, "Select");

        assert_eq!(
            form.options(SelectField::Hour),
            vec![SelectOption::placeholder("Select")]
        );
    }

    #[test]
    fn test_reset_is_idempotent() {
        let once = MemoryForm::new();
        reset(&once, SelectField::Hour, "Select");

        let twice = MemoryForm::new();
        reset(&twice, SelectField::Hour, "Select");
        reset(&twice, SelectField::Hour, "Select");

        assert_eq!(once.options(SelectField::Hour), twice.options(SelectField::Hour));
    }
}
