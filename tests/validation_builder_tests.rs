use aucda::{ChoiceSlot, CodableText, ValidationBuilder};

#[test]
fn test_required_check_nullity_across_types() {
    let mut messages = Vec::new();
    let mut builder = ValidationBuilder::new("Entity.", &mut messages);

    let text: Option<String> = None;
    let number: Option<u32> = None;
    let nested: Option<CodableText> = None;
    assert!(!builder.required("Text", &text));
    assert!(!builder.required("Number", &number));
    assert!(!builder.required("Nested", &nested));
    assert_eq!(messages.len(), 3);
    for message in &messages {
        assert!(message.message.ends_with("is a required field"));
    }
}

#[test]
fn test_required_check_collection_semantics() {
    let mut messages = Vec::new();
    let mut builder = ValidationBuilder::new("Entity.", &mut messages);

    let empty: Vec<u32> = Vec::new();
    assert!(!builder.required_list("Items", &empty));
    assert_eq!(messages.len(), 1);

    let mut messages = Vec::new();
    let mut builder = ValidationBuilder::new("Entity.", &mut messages);
    assert!(builder.required_list("Items", &[42]));
    assert!(messages.is_empty());
}

#[test]
fn test_range_check_inclusive_boundaries() {
    for (len, expected) in [(0usize, false), (1, true), (2, true), (3, true), (4, false)] {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("Entity.", &mut messages);
        let items = vec![(); len];
        assert_eq!(
            builder.range("Items", &items, 1, Some(3)),
            expected,
            "length {len}"
        );
    }
}

#[test]
fn test_choice_check_exactly_one_invariant() {
    // For three slots, every count of populated slots other than one
    // produces exactly one message.
    for populated in [0usize, 2, 3] {
        let mut messages = Vec::new();
        let mut builder = ValidationBuilder::new("Entity", &mut messages);
        let slots: Vec<ChoiceSlot<'_>> = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(index, name)| ChoiceSlot::new(name, index < populated))
            .collect();
        assert!(!builder.choice(&slots));
        assert_eq!(messages.len(), 1, "populated {populated}");
    }

    let mut messages = Vec::new();
    let mut builder = ValidationBuilder::new("Entity", &mut messages);
    assert!(builder.choice(&[
        ChoiceSlot::new("A", true),
        ChoiceSlot::new("B", false),
        ChoiceSlot::new("C", false),
    ]));
    assert!(messages.is_empty());
}

#[test]
fn test_path_composition_has_single_separator() {
    let mut messages = Vec::new();
    let mut builder = ValidationBuilder::new("A.B.", &mut messages);
    let value: Option<u8> = None;
    builder.required("C", &value);
    assert_eq!(messages[0].path, "A.B.C");

    // Same result when the caller omits the trailing separator.
    let mut messages = Vec::new();
    let mut builder = ValidationBuilder::new("A.B", &mut messages);
    builder.required("C", &value);
    assert_eq!(messages[0].path, "A.B.C");
}

#[test]
fn test_nested_builders_share_one_list() {
    let mut messages = Vec::new();
    let mut parent = ValidationBuilder::new("SCSContent.Event", &mut messages);
    let value: Option<u8> = None;
    parent.required("Encounter", &value);

    let child_path = parent.field_path("Encounter");
    let mut child = ValidationBuilder::new(child_path, parent.messages());
    child.required("EncounterPeriod", &value);

    let paths: Vec<&str> = messages.iter().map(|m| m.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "SCSContent.Event.Encounter",
            "SCSContent.Event.Encounter.EncounterPeriod",
        ]
    );
}
