use carpool_core::model::split_by_role;
use carpool_core::synthetic::{generate_dataset, GeneratorParams};
use carpool_core::{FirstFitMatcher, MatchSummary};
use carpool_io::{export_groups, load_dataset, write_dataset_csv, ExportFormat, RowError};
use tempfile::tempdir;

const TRIPS: &str = "\
driver_rider,name,start_location,destination_location,time_of_travel,gender,max_detour_distance,same_gender,non_smoking
Driver,D,\"0,0\",\"1,1\",09:00,Female,5,false,false
Rider,R,\"0.01,0.01\",\"1.01,1.01\",09:10,Male,,,true
Rider,Late,\"0.01,0.01\",\"1.01,1.01\",09:20,Male,,,true
Rider,Broken,\"0.01;0.01\",\"1.01,1.01\",09:10,Male,,,true
Driver,Lonely,\"40,40\",\"41,41\",09:00,Male,2,true,true
";

#[test]
fn csv_in_groups_out() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("trips.csv");
    let output = dir.path().join("groups.csv");
    std::fs::write(&input, TRIPS).unwrap();

    let dataset = load_dataset(&input).unwrap();
    assert_eq!(dataset.drivers.len(), 2);
    assert_eq!(dataset.riders.len(), 2);
    assert_eq!(dataset.skipped.len(), 1);
    assert_eq!(dataset.skipped[0].line, 5);
    assert!(matches!(dataset.skipped[0].error, RowError::InvalidCoordinates { .. }));

    let outcome = FirstFitMatcher::default().form_groups(&dataset.drivers, &dataset.riders);
    export_groups(&outcome.groups, &output, ExportFormat::Csv).unwrap();

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[0][1], "D");
    assert_eq!(&rows[0][2], "R");
    assert_eq!(&rows[0][5], "09:00:00");
    let carbon: f64 = rows[0][6].parse().unwrap();
    assert!(carbon > 18.7 && carbon < 19.0, "got {carbon}");
}

#[test]
fn generated_dataset_survives_a_trip_through_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("synthetic.csv");
    let params = GeneratorParams::default().with_counts(25, 75).with_seed(8);
    let records = generate_dataset(&params);

    write_dataset_csv(&path, &records).unwrap();
    let dataset = load_dataset(&path).unwrap();

    let (drivers, riders) = split_by_role(records);
    assert!(dataset.skipped.is_empty());
    assert_eq!(dataset.drivers, drivers);
    assert_eq!(dataset.riders, riders);
}

#[test]
fn exported_row_count_equals_matched_pairs() {
    let dir = tempdir().unwrap();
    let params = GeneratorParams {
        num_hubs: 2,
        hub_jitter_km: 1.0,
        min_detour_km: 3.0,
        departure_window_minutes: 30,
        ..GeneratorParams::default()
    }
    .with_counts(20, 60)
    .with_seed(21);
    let (drivers, riders) = split_by_role(generate_dataset(&params));

    let outcome = FirstFitMatcher::default().form_groups(&drivers, &riders);
    let summary = MatchSummary::from_outcome(&drivers, &riders, &outcome);

    let json_path = dir.path().join("groups.json");
    export_groups(&outcome.groups, &json_path, ExportFormat::Json).unwrap();
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(rows.len(), summary.matched_pairs);
    let last_group_id = rows.last().map(|row| row["Group ID"].as_u64().unwrap()).unwrap_or(0);
    assert_eq!(last_group_id as usize, summary.groups_formed);
}
