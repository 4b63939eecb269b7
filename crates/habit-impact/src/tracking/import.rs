use super::domain::{ActionSubmission, UserId};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum ActionImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ActionImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionImportError::Io(err) => write!(f, "failed to read action export: {}", err),
            ActionImportError::Csv(err) => write!(f, "invalid action CSV data: {}", err),
        }
    }
}

impl std::error::Error for ActionImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionImportError::Io(err) => Some(err),
            ActionImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ActionImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ActionImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads `user_id,action_type,description,quantity,unit,logged_on` rows into submissions.
pub struct ActionCsvImporter;

impl ActionCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ActionSubmission>, ActionImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ActionSubmission>, ActionImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut submissions = Vec::new();

        for record in csv_reader.deserialize::<ActionRow>() {
            submissions.push(record?.into_submission());
        }

        Ok(submissions)
    }
}

#[derive(Debug, Deserialize)]
struct ActionRow {
    user_id: String,
    action_type: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    quantity: Option<f64>,
    #[serde(default)]
    unit: Option<String>,
    logged_on: NaiveDate,
}

impl ActionRow {
    fn into_submission(self) -> ActionSubmission {
        ActionSubmission {
            user_id: UserId(self.user_id),
            action_type: self.action_type,
            description: self.description,
            quantity: self.quantity,
            unit: self.unit,
            logged_on: self.logged_on,
        }
    }
}
