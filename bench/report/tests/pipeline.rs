use cp2k_bench_report::axis::GroupAxis;
use cp2k_bench_report::grouping::{plan_charts, Selection};
use cp2k_bench_report::parser::parse_file;
use cp2k_bench_report::record::BenchmarkRecord;
use std::io::Write;
use tempfile::NamedTempFile;
use test_case::test_case;

/// (nodes, nrep, time) of every run in the generated log.
const RUNS: [(u32, u32, f64); 5] = [
    (1, 1, 8.814),
    (1, 2, 20.113),
    (1, 3, 41.007),
    (2, 1, 5.120),
    (2, 2, 11.402),
];

fn slurm_run(nodes: u32, nrep: u32, time: f64) -> String {
    let file = format!("slurm-H2O-dft-ls.n{nodes}.1265921{nrep}.o");
    format!(
        "{file}:42: CP2K| Input file name                                      H2O-dft-ls.NREP{nrep}.inp\n\
         {file}-43- CP2K| Input file name                                      \n\
         {file}-44- GLOBAL| Force Environment number                                    1\n\
         --\n\
         {file}:903: - T I M I N G -\n\
         {file}-904- SUBROUTINE                       CALLS  ASD         SELF TIME        TOTAL TIME\n\
         {file}-905- CP2K                                 1  1.0    0.038    0.038 {time:>8.3} {time:>8.3}\n\
         --\n"
    )
}

fn results_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for (nodes, nrep, time) in RUNS {
        file.write_all(slurm_run(nodes, nrep, time).as_bytes())
            .unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn should_parse_one_record_per_run_in_order() {
    let file = results_file();
    let records = parse_file(file.path()).unwrap();
    let expected = RUNS
        .iter()
        .map(|&(nodes, nrep, time)| BenchmarkRecord::new(nrep, nodes, time))
        .collect::<Vec<_>>();
    assert_eq!(records.into_inner(), expected);
}

#[test]
fn should_parse_same_file_identically_twice() {
    let file = results_file();
    let first = parse_file(file.path()).unwrap();
    let second = parse_file(file.path()).unwrap();
    assert_eq!(first, second);
}

#[test_case(0, 0, &[(GroupAxis::Nodes, 1), (GroupAxis::Nodes, 2), (GroupAxis::SystemSize, 1), (GroupAxis::SystemSize, 2)]; "all values")]
#[test_case(1, 0, &[(GroupAxis::Nodes, 1), (GroupAxis::SystemSize, 1), (GroupAxis::SystemSize, 2)]; "single node count")]
#[test_case(0, 3, &[(GroupAxis::Nodes, 1), (GroupAxis::Nodes, 2)]; "size with single node count")]
#[test_case(16, 7, &[]; "absent values")]
fn should_plan_charts_for_selection(nodes: u32, nrep: u32, expected: &[(GroupAxis, u32)]) {
    let file = results_file();
    let records = parse_file(file.path()).unwrap();
    let groups = plan_charts(&records, Selection::from_filters(nodes, nrep));
    let keys = groups
        .iter()
        .map(|g| (g.fixed_axis, g.fixed_value))
        .collect::<Vec<_>>();
    assert_eq!(keys, expected);
}

#[test]
fn should_dump_records_to_json() {
    let file = results_file();
    let records = parse_file(file.path()).unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let path = records.dump_to_json(&output_dir.path().join("out")).unwrap();
    let json = std::fs::read_to_string(path).unwrap();
    let restored: Vec<BenchmarkRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, records.into_inner());
}
