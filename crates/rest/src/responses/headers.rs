//! Response header helpers.

use advisor_persistence::AdvisorId;

use crate::routing::ADVISORS_PATH;

/// Builds the `Location` URL of an advisor.
pub fn location_for(base_url: &str, id: AdvisorId) -> String {
    format!("{}{}/{}", base_url.trim_end_matches('/'), ADVISORS_PATH, id)
}
