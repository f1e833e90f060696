// End-to-end scenarios over the full pipeline with a fixed vocabulary.

use citydir_engine::{parse_line, OccupationLexicon, SubjectType};

fn lexicon() -> OccupationLexicon {
    OccupationLexicon::new(["carpenter", "laborer", "blacksmith", "clerk"])
}

#[test]
fn name_with_trailing_initial_and_rear_address() {
    let record = parse_line("SMITH JOHN A. r 45 Elm", &lexicon());

    assert_eq!(record.subject.len(), 1);
    assert!(record.subject[0].value.starts_with("SMITH JOHN"));
    // the stray initial continues the name
    assert_eq!(record.subject[0].value, "SMITH JOHN A");
    assert_eq!(record.subject[0].kind, SubjectType::Primary);

    assert_eq!(record.location.len(), 1);
    assert_eq!(record.location[0].value, "45 Elm");
    assert_eq!(
        record.location[0].extra.get("position").map(String::as_str),
        Some("rear")
    );
}

#[test]
fn widow_entry_claims_deceased_spouse() {
    let record = parse_line("DOE JANE, wid, JOHN", &lexicon());

    assert_eq!(record.subject.len(), 2);
    assert_eq!(record.subject[0].value, "DOE JANE");
    assert_eq!(record.subject[0].kind, SubjectType::Primary);
    assert_eq!(record.subject[0].occupation.as_deref(), Some("widow"));
    assert_eq!(record.subject[1].value, "JOHN");
    assert_eq!(record.subject[1].kind, SubjectType::DeceasedSpouse);
    assert!(record.location.is_empty());
}

#[test]
fn occupation_and_home_address() {
    let record = parse_line("BROWN ROBERT, carpenter, h 12 Oak", &lexicon());

    assert_eq!(record.subject.len(), 1);
    assert_eq!(record.subject[0].value, "BROWN ROBERT");
    assert_eq!(record.subject[0].occupation.as_deref(), Some("carpenter"));

    assert_eq!(record.location.len(), 1);
    assert_eq!(record.location[0].value, "12 Oak");
    assert_eq!(
        record.location[0].extra.get("type").map(String::as_str),
        Some("home")
    );
}

#[test]
fn single_token_line_does_not_crash() {
    let record = parse_line("X", &lexicon());
    assert!(record.subject.len() <= 1);
    assert!(record.location.is_empty());
}

#[test]
fn empty_line_yields_empty_record() {
    let record = parse_line("", &lexicon());
    assert!(record.subject.is_empty());
    assert!(record.location.is_empty());
}

#[test]
fn punctuation_only_line_yields_empty_record() {
    let record = parse_line(" , . , ", &lexicon());
    assert!(record.subject.is_empty());
    assert!(record.location.is_empty());
}

#[test]
fn split_address_pieces_merge_into_one_location() {
    // "45" and "Oak" resolve separately (digit vote vs. weak occupation
    // tie-break); the consolidation pass reclassifies and merges them.
    let record = parse_line("HALL GEO, h 45, Oak", &lexicon());

    assert_eq!(record.subject.len(), 1);
    assert_eq!(record.subject[0].value, "HALL GEO");
    assert_eq!(record.location.len(), 1);
    assert_eq!(record.location[0].value, "45 Oak");
    assert_eq!(
        record.location[0].extra.get("type").map(String::as_str),
        Some("home")
    );
}

#[test]
fn record_serializes_to_the_external_contract() {
    let record = parse_line("BROWN ROBERT, carpenter, h 12 Oak", &lexicon());
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "subject": [
                {"value": "BROWN ROBERT", "type": "primary", "occupation": "carpenter"}
            ],
            "location": [
                {"value": "12 Oak", "type": "home"}
            ],
        })
    );
}
