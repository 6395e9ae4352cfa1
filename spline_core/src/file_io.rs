//! # File I/O Module
//!
//! JSON files for single spline inputs and whole projects:
//! - **Atomic saves**: Write to `<file>.tmp`, sync, rename over the target
//! - **Version validation**: Project files must match the schema major version
//!
//! ## Example
//!
//! ```rust,no_run
//! use spline_core::file_io::{load_project, save_project};
//! use spline_core::project::Project;
//! use std::path::Path;
//!
//! let project = Project::new("Gearbox input shafts");
//! let path = Path::new("gearbox.json");
//!
//! save_project(&project, path)?;
//! let loaded = load_project(path)?;
//! assert_eq!(loaded.meta.title, "Gearbox input shafts");
//! # Ok::<(), spline_core::errors::CalcError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::calculations::spline::SplineInput;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{HardnessScale, ToothEnd};
use crate::project::{Project, SCHEMA_VERSION};

/// `<path>.tmp`, keeping the original extension
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Serialize `value` as pretty JSON and atomically replace `path`.
fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| CalcError::serialization(e.to_string()))?;

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = json.len(), "saved file");
    Ok(())
}

fn read_json_value(path: &Path) -> CalcResult<Value> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    serde_json::from_str(&contents)
        .map_err(|e| CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e)))
}

fn from_json_value<T: DeserializeOwned>(value: Value, path: &Path) -> CalcResult<T> {
    serde_json::from_value(value)
        .map_err(|e| CalcError::serialization(format!("Invalid data in {}: {}", path.display(), e)))
}

/// Parse the text-valued enums of one input object before serde sees them,
/// so a bad hardness scale or tooth end keeps its own error kind.
fn check_input_text_fields(input: &Value) -> CalcResult<()> {
    if let Some(scale) = input.pointer("/hardness/scale").and_then(Value::as_str) {
        HardnessScale::from_str_flexible(scale)?;
    }
    if let Some(tooth_end) = input.get("tooth_end").and_then(Value::as_str) {
        ToothEnd::from_str_flexible(tooth_end)?;
    }
    Ok(())
}

/// Save a single spline input.
pub fn save_input(input: &SplineInput, path: &Path) -> CalcResult<()> {
    write_json_atomic(input, path)
}

/// Load a single spline input.
///
/// Missing optional fields take their defaults. The input is not validated
/// here; [`crate::calculations::calculate`] does that.
pub fn load_input(path: &Path) -> CalcResult<SplineInput> {
    let value = read_json_value(path)?;
    check_input_text_fields(&value)?;
    from_json_value(value, path)
}

/// Save a project to a file using an atomic write.
///
/// # Arguments
///
/// * `project` - The project to save
/// * `path` - Destination path
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    write_json_atomic(project, path)
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::UnrecognizedHardnessType)` / `UnrecognizedToothEndProfile` - Bad enum text in a case
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let value = read_json_value(path)?;
    if let Some(cases) = value.get("cases").and_then(Value::as_array) {
        for input in cases.iter().filter_map(|case| case.get("input")) {
            check_input_text_fields(input)?;
        }
    }
    let project: Project = from_json_value(value, path)?;
    validate_version(&project.meta.version)?;
    debug!(path = %path.display(), cases = project.case_count(), "loaded project");
    Ok(project)
}

/// Validate that a file version is compatible with the current schema.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .map(|p| p.parse())
        .collect::<Result<_, _>>()
        .map_err(|_| mismatch())?;
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    let (Some(file_major), Some(current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };

    if file_major != current_major {
        return Err(mismatch());
    }

    // 0.x: a newer minor may carry breaking changes
    if *current_major == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::SplineForm;
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("spline_core_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_tmp_path_keeps_extension() {
        assert_eq!(tmp_path_for(Path::new("/jobs/gearbox.json")), Path::new("/jobs/gearbox.json.tmp"));
    }

    #[test]
    fn test_project_save_and_load_roundtrip() {
        let path = temp_path("project_roundtrip");

        let mut project = Project::new("Test project");
        project.add_case(SplineForm::demo().to_input());
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.title, "Test project");
        assert_eq!(loaded.meta.created, project.meta.created);
        assert_eq!(loaded.cases, project.cases);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_input_save_and_load_roundtrip() {
        let path = temp_path("input_roundtrip");
        let input = SplineForm::demo().to_input();
        save_input(&input, &path).unwrap();
        assert_eq!(load_input(&path).unwrap(), input);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");
        let tmp_path = tmp_path_for(&path);

        save_project(&Project::new("Test"), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_errors() {
        let missing = temp_path("does_not_exist");
        let err = load_input(&missing).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");

        let garbage = temp_path("garbage");
        fs::write(&garbage, "{ not json").unwrap();
        let err = load_project(&garbage).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&garbage);
    }

    fn write_demo_input_with(path: &Path, edit: impl FnOnce(&mut Value)) {
        let mut value = serde_json::to_value(SplineForm::demo().to_input()).unwrap();
        edit(&mut value);
        fs::write(path, value.to_string()).unwrap();
    }

    #[test]
    fn test_input_text_fields_keep_error_kind() {
        let path = temp_path("bad_scale");
        write_demo_input_with(&path, |v| v["hardness"]["scale"] = Value::from("Vickers"));
        let err = load_input(&path).unwrap_err();
        assert_eq!(err, CalcError::unrecognized_hardness_type("Vickers"));

        write_demo_input_with(&path, |v| v["tooth_end"] = Value::from("Tapered"));
        let err = load_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "UNRECOGNIZED_TOOTH_END_PROFILE");

        write_demo_input_with(&path, |v| {
            v["hardness"]["scale"] = Value::from("hrc");
            v["tooth_end"] = Value::from("crowned");
        });
        let input = load_input(&path).unwrap();
        assert_eq!(input.hardness.scale, HardnessScale::RockwellC);
        assert_eq!(input.tooth_end, ToothEnd::Crowned);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_project_case_with_bad_scale() {
        let path = temp_path("project_bad_scale");
        let mut project = Project::new("Test");
        project.add_case(SplineForm::demo().to_input());
        let mut value = serde_json::to_value(&project).unwrap();
        value["cases"][0]["input"]["hardness"]["scale"] = Value::from("Shore A");
        fs::write(&path, value.to_string()).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "UNRECOGNIZED_HARDNESS_TYPE");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_newer_project_rejected() {
        let path = temp_path("newer");
        let mut project = Project::new("Test");
        project.meta.version = "0.9.0".to_string();
        save_project(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("0.0.9").is_ok());

        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("latest").is_err());
    }
}
