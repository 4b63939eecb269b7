use std::io::Cursor;

use super::common::*;
use crate::tracking::{ActionCsvImporter, ActionImportError};

#[test]
fn importer_parses_rows_with_optional_cells() {
    let csv = "user_id,action_type,description,quantity,unit,logged_on\n\
ana,biking,Commute to office,12.5,km,2025-03-01\n\
ben,reusable_bag, Grocery run ,,,2025-03-02\n";

    let submissions = ActionCsvImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

    let mut expected = submission("ana", "biking", Some(12.5), Some("km"), date(3, 1));
    expected.description = "Commute to office".to_string();

    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[0], expected);
    assert_eq!(submissions[1].description, "Grocery run");
    assert_eq!(submissions[1].quantity, None);
    assert_eq!(submissions[1].unit, None);
}

#[test]
fn importer_rejects_malformed_dates() {
    let csv = "user_id,action_type,description,quantity,unit,logged_on\n\
ana,biking,Ride,1,km,03/01/2025\n";

    match ActionCsvImporter::from_reader(Cursor::new(csv)) {
        Err(ActionImportError::Csv(_)) => {}
        other => panic!("expected csv error, got {other:?}"),
    }
}

#[test]
fn importer_from_path_propagates_io_errors() {
    match ActionCsvImporter::from_path("./does-not-exist.csv") {
        Err(ActionImportError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
