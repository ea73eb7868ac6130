//! Exact format of the exported change report

use crate::common::{sample_data, CliTestRunner};
use rowdiff::report::{export_report, EXPORT_HEADER};
use rowdiff::{classify, parse};

#[test]
fn test_export_report_is_bit_exact() {
    let runner = CliTestRunner::new().unwrap();
    runner
        .fixture()
        .create_csv("base.csv", &sample_data::simple_csv_data())
        .unwrap();
    runner
        .fixture()
        .create_csv("updated.csv", &sample_data::updated_csv_data())
        .unwrap();

    runner.expect_success(&[
        "export",
        &runner.arg("base.csv"),
        &runner.arg("updated.csv"),
        "--output",
        &runner.arg("detailed.csv"),
    ]);

    let expected = [
        "Row,Status,Field,Original Value,New Value,Change Type",
        "1,modified,price,\"1.50\",\"1.60\",field changed",
        "3,modified,id,\"3\",\"4\",field changed",
        "3,modified,name,\"Cherry\",\"Date\",field changed",
        "3,modified,price,\"2.00\",\"3.00\",field changed",
        "4,added,id,,\"5\",new field",
        "4,added,name,,\"Elderberry\",new field",
        "4,added,price,,\"4.25\",new field",
    ]
    .join("\n");
    assert_eq!(runner.fixture().read("detailed.csv"), expected);
}

#[test]
fn test_removed_rows_use_original_headers_and_fallback_labels() {
    let t1 = parse("id,,name\n1,x,Alice,extra\n");
    let t2 = parse("other\n");
    let report = export_report(&classify(&t1, &t2), &t1.headers, &t2.headers);

    let expected = [
        EXPORT_HEADER.join(","),
        "1,removed,id,\"1\",,deleted field".to_string(),
        "1,removed,Column 2,\"x\",,deleted field".to_string(),
        "1,removed,name,\"Alice\",,deleted field".to_string(),
        "1,removed,Column 4,\"extra\",,deleted field".to_string(),
    ]
    .join("\n");
    assert_eq!(report, expected);
}

#[test]
fn test_report_reparses_with_same_tokenizer() {
    let t1 = parse("name,note\n\"Doe, J\",\"a \"\"quoted\"\" note\"\n");
    let t2 = parse("name,note\n\"Doe, J\",changed\n");
    let report = export_report(&classify(&t1, &t2), &t1.headers, &t2.headers);

    let reparsed = parse(&report);
    assert_eq!(reparsed.headers.len(), 6);
    assert_eq!(reparsed.rows.len(), 1);
    assert_eq!(reparsed.rows[0][3], "a \"quoted\" note");
    assert_eq!(reparsed.rows[0][4], "changed");
}

#[test]
fn test_header_names_with_commas_are_quoted() {
    let t1 = parse("\"last, first\"\nA\n");
    let t2 = parse("\"last, first\"\nB\n");
    let report = export_report(&classify(&t1, &t2), &t1.headers, &t2.headers);

    assert!(report.ends_with("1,modified,\"last, first\",\"A\",\"B\",field changed"));
    assert_eq!(parse(&report).rows[0][2], "last, first");
}

#[test]
fn test_export_to_stdout() {
    let runner = CliTestRunner::new().unwrap();
    runner.fixture().create_csv_raw("a.csv", "h\n1\n").unwrap();
    runner.fixture().create_csv_raw("b.csv", "h\n2\n").unwrap();

    runner.expect_success(&["export", &runner.arg("a.csv"), &runner.arg("b.csv"), "-o", "-"]);
}

#[test]
fn test_export_with_missing_input_fails() {
    let runner = CliTestRunner::new().unwrap();
    runner.fixture().create_csv_raw("a.csv", "h\n1\n").unwrap();

    let error = runner.expect_failure(&[
        "export",
        &runner.arg("a.csv"),
        &runner.arg("missing.csv"),
        "-o",
        &runner.arg("report.csv"),
    ]);
    assert!(error.to_string().contains("File not found"));
    assert!(!runner.fixture().path("report.csv").exists());
}
