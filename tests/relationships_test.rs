mod utils;

use prosopo_csv::models::relationship::RelationshipDeclaration;
use prosopo_csv::reader::{parse_document, persons};
use prosopo_csv::{RelationshipSet, resolve, resolve_declarations};
use utils::{extract, relationship_triples, tei_document};

#[test]
fn test_person_without_declarations_leaves_set_unchanged() {
    let xml = tei_document(
        r#"<person xml:id="p1"><note type="general">No relations here</note></person>"#,
    );
    let doc = parse_document(&xml).unwrap();
    let people = persons(&doc).unwrap();

    let mut set = RelationshipSet::new();
    set.insert("a", "b", "isFriendOf");
    let before = set.clone();

    let stats = resolve(&people[0], &mut set);

    assert_eq!(set, before);
    assert_eq!(stats.declarations, 0);
}

#[test]
fn test_suppression_depends_on_document_order() {
    let forward = tei_document(
        r##"<person xml:id="a"><note><listRelation>
              <relation name="spouse" active="#b" passive="#a"/>
            </listRelation></note></person>
            <person xml:id="b"><note><listRelation>
              <relation name="spouse" active="#a" passive="#b"/>
            </listRelation></note></person>"##,
    );
    let (sink, _) = extract(&forward);
    assert_eq!(relationship_triples(&sink), vec![("a", "b", "isSpouseOf")]);

    let reversed = tei_document(
        r##"<person xml:id="b"><note><listRelation>
              <relation name="spouse" active="#a" passive="#b"/>
            </listRelation></note></person>
            <person xml:id="a"><note><listRelation>
              <relation name="spouse" active="#b" passive="#a"/>
            </listRelation></note></person>"##,
    );
    let (sink, _) = extract(&reversed);
    assert_eq!(relationship_triples(&sink), vec![("b", "a", "isSpouseOf")]);
}

#[test]
fn test_mutual_pair_suppresses_later_inverse_directed_pair() {
    let xml = tei_document(
        r##"<person xml:id="a"><note><listRelation>
              <relation name="friend" mutual="#a #b"/>
            </listRelation></note></person>
            <person xml:id="b"><note><listRelation>
              <relation name="patron" active="#a" passive="#b"/>
            </listRelation></note></person>"##,
    );

    let (sink, summary) = extract(&xml);

    // (b, a) is the inverse of the accumulated (a, b)
    assert_eq!(relationship_triples(&sink), vec![("a", "b", "isFriendOf")]);
    assert_eq!(summary.relations.suppressed_inverses, 1);
}

#[test]
fn test_multi_valued_lists_expand_to_all_pairs() {
    let mut set = RelationshipSet::new();
    let declarations = [
        RelationshipDeclaration::named("sibling").with_mutual("#a #b #c"),
        RelationshipDeclaration::named("parent").with_directed("#a #b #c", "#m #f"),
    ];

    let stats = resolve_declarations(&declarations, &mut set);

    assert_eq!(set.len(), 3 + 6);
    assert_eq!(stats.staged, 9);
    for parent in ["m", "f"] {
        for child in ["a", "b", "c"] {
            assert_eq!(set.label(parent, child), Some("isParentOf"));
        }
    }
    assert!(!set.contains("b", "a"));
    assert!(!set.contains("c", "a"));
    assert!(!set.contains("c", "b"));
}

#[test]
fn test_placeholder_and_malformed_declarations_in_documents() {
    let xml = tei_document(
        r##"<person xml:id="x"><note><listRelation>
              <relation name="dummy" mutual="#x #y"/>
              <relation mutual="#x #y"/>
              <relation name="sibling"/>
              <relation name="1stCousin" mutual="#x #z"/>
            </listRelation></note></person>"##,
    );

    let (sink, summary) = extract(&xml);

    assert_eq!(relationship_triples(&sink), vec![("x", "z", "isCousinOf")]);
    assert_eq!(summary.relations.declarations, 4);
    assert_eq!(summary.relations.skipped(), 3);
}
