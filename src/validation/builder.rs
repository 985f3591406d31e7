//! Path-scoped checking primitives used by every entity's `validate` method.

use std::fmt;

use super::ValidationMessage;

/// One named member of a choice group, reduced to its presence.
///
/// Built explicitly at each call site so that the presence rule for the
/// field's kind is spelled out there: `value` for scalars and nested
/// entities, `list` for collections (a zero-length list counts as absent,
/// consistent with the required check).
#[derive(Debug, Clone, Copy)]
pub struct ChoiceSlot<'a> {
    name: &'a str,
    present: bool,
}

impl<'a> ChoiceSlot<'a> {
    pub fn new(name: &'a str, present: bool) -> Self {
        Self { name, present }
    }

    /// Slot for a scalar or nested-entity field.
    pub fn value<T>(name: &'a str, value: &Option<T>) -> Self {
        Self::new(name, value.is_some())
    }

    /// Slot for a collection field; empty counts as absent.
    pub fn list<T>(name: &'a str, items: &[T]) -> Self {
        Self::new(name, !items.is_empty())
    }
}

/// Stateful validation helper bound to one path prefix and the shared
/// message list for the current document.
///
/// One builder is constructed at entry to each entity-level `validate` call
/// and discarded when the call returns; its appended messages persist in the
/// shared list. Appending is the only mutation it performs on that list.
pub struct ValidationBuilder<'m> {
    path: String,
    path_name: String,
    messages: &'m mut Vec<ValidationMessage>,
}

impl<'m> ValidationBuilder<'m> {
    /// Create a builder scoped to `path`.
    ///
    /// The prefix is accepted with or without a trailing separator: `path()`
    /// always carries one (so child field names can simply be appended) and
    /// `path_name()` never does (used when a violation concerns the entity
    /// as a whole rather than one of its fields). An empty prefix stays
    /// empty, for the document root.
    pub fn new(path: impl Into<String>, messages: &'m mut Vec<ValidationMessage>) -> Self {
        let mut path = path.into();
        let path_name = path.trim_end_matches('.').to_string();
        if !path.is_empty() && !path.ends_with('.') {
            path.push('.');
        }
        Self {
            path,
            path_name,
            messages,
        }
    }

    /// The prefix with trailing separator, for building child-field paths.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The prefix with the trailing separator trimmed.
    pub fn path_name(&self) -> &str {
        &self.path_name
    }

    /// Path of a scalar field under this builder's prefix.
    pub fn field_path(&self, field: &str) -> String {
        format!("{}{}", self.path, field)
    }

    /// Path of one element of a collection field, e.g. `Prefix.Field[3]`.
    pub fn indexed_path(&self, field: &str, index: usize) -> String {
        format!("{}{}[{}]", self.path, field, index)
    }

    /// The shared message list, for threading into child `validate` calls.
    pub fn messages(&mut self) -> &mut Vec<ValidationMessage> {
        &mut *self.messages
    }

    /// Required-field check for a scalar or nested-entity field.
    ///
    /// Returns whether the value is present; callers use the result to guard
    /// the recursive `validate` call on the child so absent children are
    /// never visited.
    pub fn required<T>(&mut self, field: &str, value: &Option<T>) -> bool {
        if value.is_none() {
            let path = self.field_path(field);
            self.add_message(path, None, format!("{field} is a required field"));
            return false;
        }
        true
    }

    /// Required-field check for a collection; absent and empty fail the same
    /// way and produce the same message.
    pub fn required_list<T>(&mut self, field: &str, items: &[T]) -> bool {
        if items.is_empty() {
            let path = self.field_path(field);
            self.add_message(path, None, format!("{field} is a required field"));
            return false;
        }
        true
    }

    /// Cardinality check, inclusive on both ends; `None` means unbounded
    /// above. The common at-least-one guard is `range(field, items, 1, None)`.
    pub fn range<T>(
        &mut self,
        field: &str,
        items: &[T],
        min: usize,
        max: Option<usize>,
    ) -> bool {
        let count = items.len();
        let below = count < min;
        let above = max.is_some_and(|max| count > max);
        if below || above {
            let expected = match max {
                Some(max) => format!("between {min} and {max}"),
                None => format!("at least {min}"),
            };
            let path = self.field_path(field);
            self.add_message(
                path,
                Some(count.to_string()),
                format!("{field} has {count} item(s), expected {expected}"),
            );
            return false;
        }
        true
    }

    /// Choice check: exactly one slot of the group must be present.
    ///
    /// Zero present, or more than one present, appends a single message
    /// naming the whole group, attributed to the entity itself. Fields that
    /// are legitimately optional and exclusive with nothing must be excluded
    /// by the caller before building the group.
    pub fn choice(&mut self, slots: &[ChoiceSlot<'_>]) -> bool {
        let present: Vec<&str> = slots
            .iter()
            .filter(|slot| slot.present)
            .map(|slot| slot.name)
            .collect();
        if present.len() == 1 {
            return true;
        }
        let group = slots
            .iter()
            .map(|slot| slot.name)
            .collect::<Vec<_>>()
            .join(", ");
        let message = if present.is_empty() {
            format!("exactly one of {group} must be provided")
        } else {
            format!(
                "only one of {group} may be provided, found {}",
                present.join(" and ")
            )
        };
        let path = self.path_name.clone();
        self.add_message(path, None, message);
        false
    }

    /// Forbidden-sentinel check: fails when `value` equals `forbidden`,
    /// typically an enum left at its `Undefined` default.
    pub fn no_match<T: PartialEq + fmt::Debug>(
        &mut self,
        field: &str,
        value: &T,
        forbidden: &T,
    ) -> bool {
        if value == forbidden {
            let path = self.field_path(field);
            self.add_message(
                path,
                Some(format!("{forbidden:?}")),
                format!("{field} must not have a value of {forbidden:?}"),
            );
            return false;
        }
        true
    }

    /// Low-level emission for cross-field and domain-specific rules the
    /// other primitives cannot express.
    pub fn add_message(
        &mut self,
        path: impl Into<String>,
        value: Option<String>,
        message: impl Into<String>,
    ) {
        self.messages
            .push(ValidationMessage::new(path, value, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_required_none_fails() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("A.B.", &mut messages);
        let value: Option<String> = None;
        assert!(!builder.required("C", &value));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "A.B.C");
        assert_eq!(messages[0].message, "C is a required field");
    }

    #[test]
    fn test_required_some_passes() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("A.B.", &mut messages);
        assert!(builder.required("C", &Some("x")));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_required_list_empty_fails() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("A.", &mut messages);
        let items: Vec<u32> = Vec::new();
        assert!(!builder.required_list("Items", &items));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "A.Items");
    }

    #[test]
    fn test_required_list_single_item_passes() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("A.", &mut messages);
        assert!(builder.required_list("Items", &[1]));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_path_normalization_without_trailing_separator() {
        let mut messages = Vec::new();
        let builder = ValidationBuilder::new("A.B", &mut messages);
        assert_eq!(builder.path(), "A.B.");
        assert_eq!(builder.path_name(), "A.B");
        assert_eq!(builder.field_path("C"), "A.B.C");
    }

    #[test]
    fn test_path_normalization_empty_prefix() {
        let mut messages = Vec::new();
        let builder = ValidationBuilder::new("", &mut messages);
        assert_eq!(builder.path(), "");
        assert_eq!(builder.path_name(), "");
        assert_eq!(builder.field_path("DocumentId"), "DocumentId");
    }

    #[test]
    fn test_indexed_path() {
        let mut messages = Vec::new();
        let builder = ValidationBuilder::new("SCSContent.", &mut messages);
        assert_eq!(
            builder.indexed_path("ProblemDiagnosis", 2),
            "SCSContent.ProblemDiagnosis[2]"
        );
    }

    #[test]
    fn test_range_boundaries_inclusive() {
        for (len, expected) in [(0, false), (1, true), (2, true), (3, true), (4, false)] {
            let mut messages = Vec::new();
            let mut builder = ValidationBuilder::new("A.", &mut messages);
            let items = vec![0u8; len];
            assert_eq!(builder.range("Items", &items, 1, Some(3)), expected);
            assert_eq!(messages.is_empty(), expected);
        }
    }

    #[test]
    fn test_range_unbounded_above() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("A.", &mut messages);
        let items = vec![0u8; 100];
        assert!(builder.range("Items", &items, 1, None));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_range_failure_reports_count() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("A.", &mut messages);
        let items: Vec<u8> = Vec::new();
        assert!(!builder.range("Items", &items, 1, Some(3)));
        assert_eq!(messages[0].value.as_deref(), Some("0"));
        assert!(messages[0].message.contains("between 1 and 3"));
    }

    #[test]
    fn test_choice_exactly_one_passes() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("Directions", &mut messages);
        let text = Some("with food".to_string());
        let null_flavour: Option<u8> = None;
        assert!(builder.choice(&[
            ChoiceSlot::value("Text", &text),
            ChoiceSlot::value("NullFlavour", &null_flavour),
        ]));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_choice_none_present_single_message() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("Directions", &mut messages);
        let text: Option<String> = None;
        let null_flavour: Option<u8> = None;
        assert!(!builder.choice(&[
            ChoiceSlot::value("Text", &text),
            ChoiceSlot::value("NullFlavour", &null_flavour),
        ]));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "Directions");
        assert!(messages[0].message.contains("Text"));
        assert!(messages[0].message.contains("NullFlavour"));
    }

    #[test]
    fn test_choice_all_present_single_message() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("Group", &mut messages);
        assert!(!builder.choice(&[
            ChoiceSlot::new("A", true),
            ChoiceSlot::new("B", true),
            ChoiceSlot::new("C", true),
        ]));
        assert_eq!(messages.len(), 1);
        assert!(messages[0].message.contains("A and B and C"));
    }

    #[test]
    fn test_choice_empty_list_slot_is_absent() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("Group", &mut messages);
        let items: Vec<u8> = Vec::new();
        let exclusion = Some("none known");
        assert!(builder.choice(&[
            ChoiceSlot::list("Items", &items),
            ChoiceSlot::value("ExclusionStatement", &exclusion),
        ]));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_no_match_sentinel_fails() {
        #[derive(Debug, PartialEq)]
        enum Status {
            Undefined,
            Final,
        }
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("Result.", &mut messages);
        assert!(!builder.no_match("Status", &Status::Undefined, &Status::Undefined));
        assert!(builder.no_match("Status", &Status::Final, &Status::Undefined));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "Result.Status");
        assert_eq!(messages[0].value.as_deref(), Some("Undefined"));
    }

    #[test]
    fn test_add_message_appends_verbatim() {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("A.", &mut messages);
        builder.add_message("A.Custom", None, "cross-field rule violated");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "A.Custom");
    }

    proptest! {
        #[test]
        fn prop_range_passes_iff_count_within_bounds(
            len in 0usize..8,
            min in 0usize..4,
            max in 0usize..8,
        ) {
            prop_assume!(min <= max);
            let mut messages = Vec::new();
            let mut builder = ValidationBuilder::new("A.", &mut messages);
            let items = vec![0u8; len];
            let passed = builder.range("Items", &items, min, Some(max));
            prop_assert_eq!(passed, len >= min && len <= max);
            prop_assert_eq!(messages.is_empty(), passed);
        }

        #[test]
        fn prop_choice_passes_iff_exactly_one_present(mask in proptest::collection::vec(any::<bool>(), 1..6)) {
            let names: Vec<String> = (0..mask.len()).map(|i| format!("Field{i}")).collect();
            let slots: Vec<ChoiceSlot<'_>> = names
                .iter()
                .zip(&mask)
                .map(|(name, present)| ChoiceSlot::new(name, *present))
                .collect();
            let mut messages = Vec::new();
            let mut builder = ValidationBuilder::new("Group", &mut messages);
            let passed = builder.choice(&slots);
            let present = mask.iter().filter(|p| **p).count();
            prop_assert_eq!(passed, present == 1);
            // Never more than one message regardless of how many slots are wrong.
            prop_assert!(messages.len() <= 1);
        }
    }
}
