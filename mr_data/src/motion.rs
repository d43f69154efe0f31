use std::fs::File;
use std::io::Read;
use std::path::Path;
use serde_json::{Map, Value};

use crate::error::DataError;

/// summary fields derived from the record itself; stripped before hand-off
const DROPPED_FIELDS:[&str;3] = ["RMS_displacement","max_displacement","motion_free"];

/// Load a motion-metric record from a JSON file. The per-metric time series
/// pass through unmodified; the derived summary fields are removed so
/// callers recompute them for their own display or storage conventions.
pub fn load_motion_record(path:&Path) -> Result<Map<String,Value>,DataError> {
    let mut f = File::open(path).map_err(|source| DataError::Io {
        path:path.to_owned(),
        source,
    })?;
    let mut s = String::new();
    f.read_to_string(&mut s).map_err(|source| DataError::Io {
        path:path.to_owned(),
        source,
    })?;
    let value:Value = serde_json::from_str(&s).map_err(|e| DataError::Parse {
        path:path.to_owned(),
        detail:e.to_string(),
    })?;
    let mut record = match value {
        Value::Object(map) => map,
        _ => return Err(DataError::NotAnObject { path:path.to_owned() }),
    };
    for field in DROPPED_FIELDS {
        record.remove(field);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn summary_fields_are_removed() {
        let path = std::env::temp_dir().join("motion_record_test.json");
        let mut f = File::create(&path).unwrap();
        f.write_all(
            br#"{"t_z":[0.1,0.2],"r_x":[0.0,0.4],"RMS_displacement":1.2,"max_displacement":3.4,"motion_free":false}"#
        ).unwrap();

        let record = load_motion_record(&path).unwrap();
        assert!(record.contains_key("t_z"));
        assert!(record.contains_key("r_x"));
        for field in DROPPED_FIELDS {
            assert!(!record.contains_key(field),"{} should have been removed",field);
        }
        assert_eq!(record.len(),2);
    }

    #[test]
    fn records_without_summary_fields_pass_through() {
        let path = std::env::temp_dir().join("motion_record_bare_test.json");
        let mut f = File::create(&path).unwrap();
        f.write_all(br#"{"t_x":[1.0]}"#).unwrap();
        let record = load_motion_record(&path).unwrap();
        assert_eq!(record.len(),1);
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let path = std::env::temp_dir().join("motion_record_array_test.json");
        let mut f = File::create(&path).unwrap();
        f.write_all(br#"[1,2,3]"#).unwrap();
        assert!(matches!(load_motion_record(&path),Err(DataError::NotAnObject { .. })));
    }

    #[test]
    fn missing_file_is_an_explicit_error() {
        let result = load_motion_record(Path::new("/nonexistent/motion.json"));
        assert!(matches!(result,Err(DataError::Io { .. })));
    }
}
