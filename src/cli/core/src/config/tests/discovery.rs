/* src/cli/core/src/config/tests/discovery.rs */

use super::*;

#[test]
fn finds_config_in_parent_directory() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("newsdesk.toml"), "[project]\nname = \"found\"\n").unwrap();
  let nested = tmp.path().join("a").join("b");
  std::fs::create_dir_all(&nested).unwrap();

  let path = find_newsdesk_config(&nested).unwrap();
  assert_eq!(path, tmp.path().canonicalize().unwrap().join("newsdesk.toml"));
  let config = load_newsdesk_config(&path).unwrap();
  assert_eq!(config.project.name, "found");
}

#[test]
fn load_reports_invalid_values() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("newsdesk.toml");
  std::fs::write(&path, "[project]\nname = \"x\"\n[server]\nport = 0\n").unwrap();
  let err = load_newsdesk_config(&path).unwrap_err();
  assert!(format!("{err:#}").contains("server.port must not be 0"));
}

#[test]
fn load_reports_parse_errors_with_path() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("newsdesk.toml");
  std::fs::write(&path, "not = [valid").unwrap();
  let err = load_newsdesk_config(&path).unwrap_err().to_string();
  assert!(err.starts_with("failed to parse"), "{err}");
}
