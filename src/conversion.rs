//! File conversion pipeline
//!
//! Each input file is loaded, parsed, converted to the mapping tree,
//! extracted and exported on its own. Files share no state, so a failure in
//! one file does not affect the others.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::converters::TreeConverter;
use crate::documents::Document;
use crate::error::{Error, Result};
use crate::exports::{default_output_path, ExportConfig, Exporter};
use crate::limits::Limits;
use crate::loaders::Loader;
use crate::schema::{Extractor, ExtractorConfig, OutputDocument};

/// Outcome of converting one file in a batch
#[derive(Debug)]
pub struct FileOutcome {
    /// Input file
    pub input: PathBuf,
    /// Path of the written JSON file, or the reason it was not written
    pub result: Result<PathBuf>,
}

impl FileOutcome {
    /// Returns true if the JSON file was written
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Batch progress notification
#[derive(Debug)]
pub enum Progress<'a> {
    /// Conversion of a file is about to start
    Started(&'a Path),
    /// Conversion of a file has finished
    Finished(&'a FileOutcome),
}

/// Converts civento export files into JSON overviews
#[derive(Debug, Default)]
pub struct FileConverter {
    loader: Loader,
    converter: TreeConverter,
    extractor: Extractor,
    exporter: Exporter,
}

impl FileConverter {
    /// Create a converter from its configuration parts
    pub fn new(extractor: ExtractorConfig, export: ExportConfig) -> Self {
        Self {
            loader: Loader::new(),
            converter: TreeConverter::with_config(extractor.converter().clone()),
            extractor: Extractor::with_config(extractor),
            exporter: Exporter::new(export),
        }
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.loader = self.loader.with_limits(limits);
        self
    }

    /// Extract the tables of an export given as a string
    pub fn convert_str(&self, xml: &str) -> Result<OutputDocument> {
        let doc = Document::parse(xml.as_bytes(), self.loader.limits())?;
        let tree = self.converter.decode_document(&doc)?;
        self.extractor.extract(&tree)
    }

    /// Convert one file, returning the path of the written JSON file
    ///
    /// Without an explicit `output` the JSON file is placed next to the input.
    pub fn convert_file(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let xml = self.loader.load(input)?;
        let document = self.convert_str(&xml)?;

        let json_path = match output {
            Some(path) => path.to_path_buf(),
            None => default_output_path(input),
        };
        self.exporter.write(&document, &json_path)?;

        info!(
            input = %input.display(),
            output = %json_path.display(),
            tables = document.len(),
            "converted file"
        );
        Ok(json_path)
    }

    /// Convert several files, continuing past files that fail
    ///
    /// An explicit `output` is only valid for a single input; that mistake is
    /// reported before any file is read.
    pub fn convert_batch<F>(
        &self,
        inputs: &[PathBuf],
        output: Option<&Path>,
        mut progress: F,
    ) -> Result<Vec<FileOutcome>>
    where
        F: FnMut(Progress<'_>),
    {
        check_batch(inputs, output)?;

        let mut outcomes = Vec::with_capacity(inputs.len());
        for input in inputs {
            progress(Progress::Started(input));

            let result = self.convert_file(input, output);
            if let Err(ref e) = result {
                warn!(input = %input.display(), error = %e, "conversion failed");
            }

            let outcome = FileOutcome {
                input: input.clone(),
                result,
            };
            progress(Progress::Finished(&outcome));
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

/// Validate a batch invocation before any file is touched
pub fn check_batch(inputs: &[PathBuf], output: Option<&Path>) -> Result<()> {
    if inputs.is_empty() {
        return Err(Error::Config("no input files given".to_string()));
    }
    if output.is_some() && inputs.len() > 1 {
        return Err(Error::Config(
            "cannot process multiple files with an -o argument".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Verbosity;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value as JsonValue};
    use std::fs;
    use tempfile::TempDir;

    const EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ns2:Bibliothek xmlns:ns2="urn:civento">
  <Vorgang Name="Antrag">
    <Metadatendefinition>
      <Objekt Name="Kunde">
        <Metadatenfeld Name="Name" Datentyp="STRING">
          <Textfeld><Titel Standard="Vollständiger Name"/></Textfeld>
        </Metadatenfeld>
      </Objekt>
    </Metadatendefinition>
  </Vorgang>
</ns2:Bibliothek>"#;

    fn detailed() -> FileConverter {
        FileConverter::new(
            ExtractorConfig::new().with_verbosity(Verbosity::Detailed),
            ExportConfig::default(),
        )
    }

    #[test]
    fn test_convert_str() {
        let document = detailed().convert_str(EXPORT).unwrap();
        assert_eq!(
            JsonValue::Object(document),
            json!({"Kunde": {"Name": {"title": "Vollständiger Name", "type": "STRING"}}})
        );
    }

    #[test]
    fn test_convert_file_default_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("antrag.xml");
        fs::write(&input, EXPORT).unwrap();

        let written = FileConverter::default().convert_file(&input, None).unwrap();

        assert_eq!(written, dir.path().join("antrag.json"));
        assert_eq!(
            fs::read_to_string(&written).unwrap(),
            r#"{"Kunde":{"Name":"STRING"}}"#
        );
    }

    #[test]
    fn test_convert_file_structure_error_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("kaputt.xml");
        fs::write(&input, "<ns2:Bibliothek xmlns:ns2=\"urn:civento\"/>").unwrap();

        let err = FileConverter::default().convert_file(&input, None).unwrap_err();

        assert!(matches!(err, Error::Structure(_)));
        assert!(!dir.path().join("kaputt.json").exists());
    }

    #[test]
    fn test_check_batch() {
        let one = vec![PathBuf::from("a.xml")];
        let two = vec![PathBuf::from("a.xml"), PathBuf::from("b.xml")];
        let out = Path::new("out.json");

        assert!(check_batch(&one, Some(out)).is_ok());
        assert!(check_batch(&two, None).is_ok());
        assert!(matches!(check_batch(&two, Some(out)), Err(Error::Config(_))));
        assert!(matches!(check_batch(&[], None), Err(Error::Config(_))));
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("fehlt.xml");
        let good = dir.path().join("gut.xml");
        fs::write(&good, EXPORT).unwrap();

        let mut started = Vec::new();
        let outcomes = FileConverter::default()
            .convert_batch(&[missing.clone(), good.clone()], None, |event| {
                if let Progress::Started(path) = event {
                    started.push(path.to_path_buf());
                }
            })
            .unwrap();

        assert_eq!(started, vec![missing, good]);
        assert!(!outcomes[0].is_success());
        assert!(outcomes[1].is_success());
        assert!(dir.path().join("gut.json").exists());
    }

    #[test]
    fn test_batch_config_error_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.xml");
        let b = dir.path().join("b.xml");
        fs::write(&a, EXPORT).unwrap();
        fs::write(&b, EXPORT).unwrap();

        let mut events = 0;
        let err = FileConverter::default()
            .convert_batch(&[a, b], Some(&dir.path().join("out.json")), |_| events += 1)
            .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        assert_eq!(events, 0);
        assert!(!dir.path().join("out.json").exists());
    }
}
