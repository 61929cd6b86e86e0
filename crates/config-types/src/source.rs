use error_stack::Report;
use tracing::debug;

use crate::error::ConfigError;

/// Identifies updates read from static manifest files.
pub const FILE_SOURCE: &str = "file";
/// Identifies updates polled from an HTTP manifest endpoint.
pub const HTTP_SOURCE: &str = "http";
/// Identifies updates streamed from the cluster API server.
pub const API_SERVER_SOURCE: &str = "api";
/// Wildcard that expands to all concrete sources.
pub const ALL_SOURCE: &str = "*";

/// Validate the source names a deployment declares.
///
/// The wildcard dominates: as soon as it is seen, the full concrete set is
/// returned and the rest of the input is not inspected. Concrete names pass
/// through in input order, duplicates included. Empty entries are skipped.
///
/// # Errors
///
/// - [`ConfigError::UnknownSource`] on the first name outside the closed set
pub fn validated_sources<'a>(
    sources: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<String>, Report<ConfigError>> {
    let mut validated = Vec::new();
    for source in sources {
        match source {
            ALL_SOURCE => {
                debug!("wildcard pod source declared, expanding to all sources");
                return Ok(vec![
                    FILE_SOURCE.to_string(),
                    HTTP_SOURCE.to_string(),
                    API_SERVER_SOURCE.to_string(),
                ]);
            }
            FILE_SOURCE | HTTP_SOURCE | API_SERVER_SOURCE => {
                validated.push(source.to_string());
            }
            "" => {}
            unknown => {
                return Err(Report::new(ConfigError::UnknownSource {
                    source_name: unknown.to_string(),
                }));
            }
        }
    }
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;
    use test_log::test;

    use super::*;

    #[test]
    fn wildcard_expands_to_all_sources() {
        let validated = validated_sources(["*"]).unwrap();
        assert_eq!(validated, vec!["file", "http", "api"]);
    }

    #[test]
    fn wildcard_dominates_regardless_of_position() {
        let validated = validated_sources(["http", "*", "bogus"]).unwrap();
        assert_eq!(validated, vec!["file", "http", "api"]);
    }

    #[test]
    fn concrete_sources_pass_through_in_order() {
        let validated = validated_sources(["api", "file"]).unwrap();
        assert_eq!(validated, vec!["api", "file"]);
    }

    #[test]
    fn keeps_duplicates_and_order() {
        // Consumers may rely on order and multiplicity, so no dedup here.
        let validated = validated_sources(["file", "http", "file"]).unwrap();
        assert_eq!(validated, vec!["file", "http", "file"]);
    }

    #[test]
    fn empty_entries_are_skipped() {
        let validated = validated_sources(["", "http", ""]).unwrap();
        assert_eq!(validated, vec!["http"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let validated = validated_sources(Vec::new()).unwrap();
        assert!(validated.is_empty());
    }

    #[test]
    fn unknown_source_fails_fast() {
        let report = validated_sources(["file", "bogus", "http"]).unwrap_err();
        assert!(matches!(
            report.current_context(),
            ConfigError::UnknownSource { source_name } if source_name == "bogus"
        ));
    }
}
