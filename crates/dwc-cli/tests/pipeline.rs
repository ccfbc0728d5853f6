//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use dwc_cli::pipeline::{IngestOptions, OutputConfig, collect_warnings, ingest, output, project};

const SAMPLE_CHECKLIST: &str = "\
Scientific name,Kingdom,Phylum,Order,Family,Genus,Taxon rank,Nomenclatural code,Location,Country code,Occurrence status,Establishment means,Degree of establishment,Introduction pathway 1,Introduction pathway 2,Date first observation,Date last observation,Source,Occurrence remarks,Terrestrial,Marine,Freshwater,Native range,Taxon ID hash
Ondatra zibethicus,Animalia,Chordata,Rodentia,Cricetidae,Ondatra,species,ICZN,Flanders,BE,present,introduced,established,escape_pet,release_hunting,1987,2016,Baert et al. (2015),,TRUE,,TRUE,Asia|Europe,bb
Capra hircus,Animalia,Chordata,Artiodactyla,Bovidae,Capra,species,ICZN,Wallonia,BE,present,introduced,established,escape_farm,,2000,,,,,,,,aa
Ondatra zibethicus,Animalia,Chordata,Rodentia,Cricetidae,Ondatra,species,ICZN,Benelux,BE,present,introduced,established,corridor,,,2010,,,TRUE,,TRUE,Asia,bb
,,,,,,,,,,,,,,,,,,,,,,,
";

fn write_sample(dir: &Path) -> PathBuf {
    let input = dir.join("checklist.csv");
    fs::write(&input, SAMPLE_CHECKLIST).expect("write sample checklist");
    input
}

fn run_output(input: &Path, output_dir: &Path, dry_run: bool) -> dwc_cli::pipeline::OutputResult {
    let records = ingest(input, IngestOptions::default()).expect("ingest");
    let tables = project(&records);
    output(
        input,
        &tables,
        &OutputConfig {
            output_dir: output_dir.to_path_buf(),
            write_meta_xml: true,
            archive_raw: true,
            dry_run,
        },
    )
    .expect("output")
}

#[test]
fn ingest_drops_empty_rows_and_derives_identifiers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sample(dir.path());

    let records = ingest(&input, IngestOptions::default()).expect("ingest");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].taxon_id, "alien-mammals-checklist:taxon:bb");
    assert_eq!(records[1].taxon_id, "alien-mammals-checklist:taxon:aa");
    assert_eq!(
        records[0].introduction_pathways,
        vec!["escape_pet", "release_hunting"]
    );
}

#[test]
fn projection_matches_the_sample_cardinalities() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sample(dir.path());

    let records = ingest(&input, IngestOptions::default()).expect("ingest");
    let tables = project(&records);

    // Two distinct taxa, sorted ascending by identifier.
    assert_eq!(tables.taxa.len(), 2);
    assert_eq!(tables.taxa[0].taxon_id, "alien-mammals-checklist:taxon:aa");
    assert_eq!(tables.taxa[1].taxon_id, "alien-mammals-checklist:taxon:bb");
    // The duplicate taxon keeps its first-record taxonomy.
    assert_eq!(
        tables.taxa[1].scientific_name.as_deref(),
        Some("Ondatra zibethicus")
    );

    // 2 + 1 + 1 populated pathway columns.
    assert_eq!(tables.distributions.len(), 4);
    assert_eq!(
        tables.distributions[0].location_id.as_deref(),
        Some("ISO_3166-2:BE-WAL")
    );
    assert_eq!(tables.distributions[0].event_date.as_deref(), Some("2000/"));
    assert_eq!(tables.distributions[1].event_date.as_deref(), Some("1987/2016"));
    // The unrecognized region row flows through with empty location fields.
    assert_eq!(tables.distributions[3].location_id, None);
    assert_eq!(tables.distributions[3].event_date.as_deref(), Some("/2010"));

    // Only the first muskrat record carries habitat flags; the goat has none.
    assert_eq!(tables.species_profiles.len(), 1);
    assert_eq!(
        tables.species_profiles[0].taxon_id,
        "alien-mammals-checklist:taxon:bb"
    );

    // Native range of the first muskrat record, split on the separator.
    assert_eq!(tables.descriptions.len(), 2);
    assert_eq!(tables.descriptions[0].description, "Asia");
    assert_eq!(tables.descriptions[1].description, "Europe");
}

#[test]
fn unknown_locations_surface_as_warnings() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sample(dir.path());

    let records = ingest(&input, IngestOptions::default()).expect("ingest");
    let warnings = collect_warnings(&records);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Benelux"), "{warnings:?}");
}

#[test]
fn output_writes_the_full_archive() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sample(dir.path());
    let output_dir = dir.path().join("output");

    let written = run_output(&input, &output_dir, false);
    let paths = written.tables.expect("table paths");
    for path in [
        &paths.taxon,
        &paths.distribution,
        &paths.species_profile,
        &paths.description,
    ] {
        assert!(path.exists(), "{}", path.display());
    }
    assert!(written.meta_xml.expect("meta path").exists());
    assert!(written.raw_archive.expect("raw path").exists());

    let taxon_text = fs::read_to_string(&paths.taxon).expect("read taxon.csv");
    let mut lines = taxon_text.lines();
    assert!(lines.next().expect("header").starts_with("taxonID,language,license"));
    assert_eq!(taxon_text.lines().count(), 3);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sample(dir.path());
    let output_dir = dir.path().join("output");

    let written = run_output(&input, &output_dir, true);
    assert!(written.tables.is_none());
    assert!(written.meta_xml.is_none());
    assert!(written.raw_archive.is_none());
    assert!(!output_dir.exists());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_sample(dir.path());
    let first_dir = dir.path().join("first");
    let second_dir = dir.path().join("second");

    run_output(&input, &first_dir, false);
    run_output(&input, &second_dir, false);

    for name in [
        "taxon.csv",
        "distribution.csv",
        "speciesprofile.csv",
        "description.csv",
        "meta.xml",
    ] {
        let first = fs::read(first_dir.join(name)).expect("read first");
        let second = fs::read(second_dir.join(name)).expect("read second");
        assert_eq!(first, second, "{name}");
    }
}
