// File: src/persistence.rs
use crate::core::context::ContextModel;
use crate::core::corrector::Corrector;
use crate::error::Result;
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Shape of the JSON export. BTreeMaps keep the output stable.
#[derive(Serialize)]
struct ModelExport<'a> {
    trigrams: BTreeMap<&'a str, BTreeMap<&'a str, u64>>,
    corrections: BTreeMap<&'a str, &'a str>,
}

/// Exports trigram counts and corrections as JSON.
pub fn export_json(model: &ContextModel, corrector: &Corrector) -> Result<String> {
    let trigrams: BTreeMap<_, _> = model
        .contexts()
        .map(|(context, followers)| {
            let counts: BTreeMap<&str, u64> =
                followers.iter().map(|(w, c)| (w.as_str(), *c)).collect();
            (context, counts)
        })
        .collect();
    let corrections: BTreeMap<_, _> = corrector
        .corrections()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    Ok(serde_json::to_string(&ModelExport { trigrams, corrections })?)
}

/// Writes to a temp file next to `path`, then persists it over `path`.
/// Readers never see a partial file.
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<()>,
{
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn write_json(model: &ContextModel, corrector: &Corrector, path: &Path) -> Result<()> {
    let json = export_json(model, corrector)?;
    write_atomically(path, |writer| Ok(writer.write_all(json.as_bytes())?))?;
    info!("exported model JSON to {}", path.display());
    Ok(())
}

pub fn save_to_disk(model: &ContextModel, path: &Path) -> Result<()> {
    write_atomically(path, |writer| Ok(bincode::serialize_into(writer, model)?))?;
    info!("saved model snapshot to {}", path.display());
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<ContextModel> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let model: ContextModel = bincode::deserialize_from(reader)?;
    debug!("read model snapshot from {}", path.display());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SmartTypeError;
    use tempfile::tempdir;

    #[test]
    fn snapshot_survives_a_disk_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("model.bin");
        let model = ContextModel::seeded(3);

        save_to_disk(&model, &path).unwrap();
        let loaded = load_from_disk(&path).unwrap();

        assert_eq!(loaded.max_suggestions(), 3);
        assert_eq!(loaded.predict_next("i am", 3), model.predict_next("i am", 3));
        assert_eq!(loaded.frequency("going to", "be"), 1);
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = load_from_disk(&dir.path().join("absent.bin"));
        assert!(matches!(result, Err(SmartTypeError::Io(_))));
    }

    #[test]
    fn export_has_trigrams_and_corrections() {
        let mut model = ContextModel::default();
        model.add_sentence("thank you for this");
        model.add_sentence("thank you for that");
        let json = export_json(&model, &Corrector::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["trigrams"]["thank you"]["for"], 2);
        assert_eq!(value["trigrams"]["you for"]["this"], 1);
        assert_eq!(value["corrections"]["teh"], "the");
        assert_eq!(value["corrections"]["im"], "I'm");
    }

    #[test]
    fn json_file_is_written_whole() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model_data.json");
        let model = ContextModel::seeded(5);
        let corrector = Corrector::new();

        write_json(&model, &corrector, &path).unwrap();
        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, export_json(&model, &corrector).unwrap());
    }
}
