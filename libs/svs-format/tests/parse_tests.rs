use std::fs;
use std::path::PathBuf;
use terbium_svs_format::{parse_retrieve_multiple_value_sets, SvsError};

fn load_response() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("retrieve_multiple_value_sets.xml");
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()))
}

#[test]
fn parses_every_described_value_set() {
    let records = parse_retrieve_multiple_value_sets(&load_response()).unwrap();
    assert_eq!(records.len(), 2);

    let asthma = &records[0];
    assert_eq!(asthma.id, "2.16.840.1.113762.1.4.1034.65");
    assert_eq!(asthma.display_name, "Asthma SCT");
    assert_eq!(asthma.version.as_deref(), Some("20210220"));
    assert_eq!(asthma.source.as_deref(), Some("Joint Commission"));
    assert_eq!(asthma.definition_type.as_deref(), Some("Extensional"));
    assert_eq!(asthma.status.as_deref(), Some("Active"));
    assert_eq!(asthma.revision_date.as_deref(), Some("2021-02-20"));
    assert!(asthma
        .purpose
        .as_deref()
        .unwrap()
        .starts_with("(Clinical Focus: Asthma conditions)"));
}

#[test]
fn parses_concepts_with_their_code_systems() {
    let records = parse_retrieve_multiple_value_sets(&load_response()).unwrap();
    let concepts = &records[0].concepts;
    assert_eq!(concepts.len(), 3);

    assert_eq!(concepts[0].code, "195967001");
    assert_eq!(concepts[0].code_system_name, "SNOMEDCT");
    assert_eq!(
        concepts[0].code_system.as_deref(),
        Some("2.16.840.1.113883.6.96")
    );
    assert_eq!(concepts[0].code_system_version.as_deref(), Some("2021-03"));
    assert_eq!(concepts[0].display_name.as_deref(), Some("Asthma (disorder)"));

    assert_eq!(concepts[2].code_system_name, "ICD10CM");
    assert_eq!(records[0].code_system_names(), vec!["SNOMEDCT", "ICD10CM"]);
}

#[test]
fn empty_concept_list_yields_no_concepts() {
    let xml = r#"<ns0:RetrieveMultipleValueSetsResponse xmlns:ns0="urn:ihe:iti:svs:2008">
  <ns0:DescribedValueSet ID="1.2.3" displayName="Empty Set">
    <ns0:ConceptList/>
  </ns0:DescribedValueSet>
</ns0:RetrieveMultipleValueSetsResponse>"#;
    let records = parse_retrieve_multiple_value_sets(xml).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].concepts.is_empty());
}

#[test]
fn missing_id_attribute_is_an_error() {
    let xml = r#"<ns0:RetrieveMultipleValueSetsResponse xmlns:ns0="urn:ihe:iti:svs:2008">
  <ns0:DescribedValueSet displayName="No OID"/>
</ns0:RetrieveMultipleValueSetsResponse>"#;
    let err = parse_retrieve_multiple_value_sets(xml).unwrap_err();
    assert!(matches!(
        err,
        SvsError::MissingAttribute {
            element: "DescribedValueSet",
            attribute: "ID"
        }
    ));
}

#[test]
fn wrong_root_element_is_an_error() {
    let err = parse_retrieve_multiple_value_sets("<SomethingElse/>").unwrap_err();
    assert!(matches!(err, SvsError::MissingElement(_)));
}
