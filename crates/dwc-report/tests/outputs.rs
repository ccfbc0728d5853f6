//! Output shape tests for the archive writers.

use std::fs;

use dwc_model::rows::{SpeciesProfileRow, TaxonRow};
use dwc_model::{DwcTable, terms};
use dwc_transform::ChecklistTables;
use dwc_report::{archive_raw_input, write_dwc_tables, write_meta_xml, write_table};

fn sample_taxon_row() -> TaxonRow {
    TaxonRow {
        taxon_id: "alien-mammals-checklist:taxon:aa".to_string(),
        language: terms::LANGUAGE.to_string(),
        license: terms::LICENSE.to_string(),
        rights_holder: terms::RIGHTS_HOLDER.to_string(),
        access_rights: terms::ACCESS_RIGHTS.to_string(),
        dataset_id: terms::DATASET_ID.to_string(),
        institution_code: terms::INSTITUTION_CODE.to_string(),
        dataset_name: terms::DATASET_NAME.to_string(),
        scientific_name: Some("Ondatra zibethicus (Linnaeus 1766)".to_string()),
        kingdom: Some("Animalia".to_string()),
        phylum: Some("Chordata".to_string()),
        order: Some("Rodentia".to_string()),
        family: Some("Cricetidae".to_string()),
        genus: Some("Ondatra".to_string()),
        taxon_rank: Some("species".to_string()),
        nomenclatural_code: Some("ICZN".to_string()),
    }
}

#[test]
fn taxon_table_serializes_with_fixed_columns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_table(dir.path(), DwcTable::Taxon, &[sample_taxon_row()]).expect("write");
    let text = fs::read_to_string(path).expect("read back");
    insta::assert_snapshot!(text.trim_end(), @r###"
    taxonID,language,license,rightsHolder,accessRights,datasetID,institutionCode,datasetName,scientificName,kingdom,phylum,order,family,genus,taxonRank,nomenclaturalCode
    alien-mammals-checklist:taxon:aa,en,http://creativecommons.org/publicdomain/zero/1.0/,INBO,https://www.inbo.be/en/norms-data-use,https://doi.org/10.15468/xoida9,INBO,Checklist of alien mammals of Belgium,Ondatra zibethicus (Linnaeus 1766),Animalia,Chordata,Rodentia,Cricetidae,Ondatra,species,ICZN
    "###);
}

#[test]
fn absent_flags_serialize_as_empty_cells() {
    let dir = tempfile::tempdir().expect("temp dir");
    let row = SpeciesProfileRow {
        taxon_id: "alien-mammals-checklist:taxon:aa".to_string(),
        is_marine: None,
        is_freshwater: Some("TRUE".to_string()),
        is_terrestrial: None,
    };
    let path = write_table(dir.path(), DwcTable::SpeciesProfile, &[row]).expect("write");
    let text = fs::read_to_string(path).expect("read back");
    insta::assert_snapshot!(text.trim_end(), @r###"
    taxonID,isMarine,isFreshwater,isTerrestrial
    alien-mammals-checklist:taxon:aa,,TRUE,
    "###);
}

#[test]
fn empty_tables_still_carry_their_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = write_dwc_tables(dir.path(), &ChecklistTables::default()).expect("write");
    for table in DwcTable::ALL {
        let text = fs::read_to_string(paths.for_table(table)).expect("read back");
        let mut lines = text.lines();
        let header = lines.next().expect("header line");
        let expected: Vec<&str> = table.terms().iter().map(|term| term.name).collect();
        assert_eq!(header.split(',').collect::<Vec<_>>(), expected, "{table}");
        assert_eq!(lines.next(), None, "{table}");
    }
}

#[test]
fn meta_xml_describes_all_four_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_meta_xml(dir.path()).expect("write meta");
    let text = fs::read_to_string(path).expect("read back");

    for table in DwcTable::ALL {
        assert!(text.contains(table.row_type()), "{table}");
        assert!(
            text.contains(&format!("<location>{}</location>", table.file_name())),
            "{table}"
        );
    }
    assert_eq!(text.matches("<core ").count(), 1);
    assert_eq!(text.matches("<extension ").count(), 3);
    assert_eq!(text.matches("<id ").count(), 1);
    assert_eq!(text.matches("<coreid ").count(), 3);

    // Core fields are indexed from 0, extension fields from 1 past the
    // coreid column.
    let expected_fields = DwcTable::ALL
        .iter()
        .map(|table| {
            if table.is_core() {
                table.terms().len()
            } else {
                table.terms().len() - 1
            }
        })
        .sum::<usize>();
    assert_eq!(text.matches("<field ").count(), expected_fields);
}

#[test]
fn meta_xml_is_byte_stable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let first = fs::read(write_meta_xml(dir.path()).expect("first write")).expect("read");
    let second = fs::read(write_meta_xml(dir.path()).expect("second write")).expect("read");
    assert_eq!(first, second);
}

#[test]
fn raw_input_is_archived_unmodified() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("checklist.tsv");
    fs::write(&input, "Scientific name\tKingdom\nCapra hircus\tAnimalia\n").expect("write input");
    let output_dir = dir.path().join("output");
    fs::create_dir_all(&output_dir).expect("output dir");

    let archived = archive_raw_input(&input, &output_dir).expect("archive");
    assert_eq!(
        fs::read(&archived).expect("read archived"),
        fs::read(&input).expect("read input")
    );
    assert!(archived.ends_with("raw/checklist.tsv"));
}
