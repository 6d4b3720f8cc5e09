// SPDX-License-Identifier: MPL-2.0
//! Translated option for `pick_list`.

use std::fmt;

/// A value paired with its display label.
///
/// Equality only looks at the value, so a selection survives a language
/// switch that changes the label.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub value: T,
    pub label: String,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// Builds the option list for `values`, labelling each through `label`.
    pub fn list(values: &[T], label: impl Fn(&T) -> String) -> Vec<Self>
    where
        T: Clone,
    {
        values
            .iter()
            .map(|value| Self::new(value.clone(), label(value)))
            .collect()
    }
}

impl<T: PartialEq> PartialEq for Choice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn equality_ignores_label() {
        assert_eq!(
            Choice::new(Role::Ngo, "NGO"),
            Choice::new(Role::Ngo, "ONG")
        );
        assert_ne!(
            Choice::new(Role::Ngo, "NGO"),
            Choice::new(Role::Donor, "NGO")
        );
    }

    #[test]
    fn list_labels_every_value() {
        let choices = Choice::list(&Role::ALL, |role| role.as_str().to_uppercase());
        let labels: Vec<_> = choices.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["DONOR", "NGO", "FACILITY"]);
    }
}
