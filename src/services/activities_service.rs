use tracing::{debug, info, warn};

use crate::database::activity_registry::{ActivityRegistry, SignupError};
use crate::models::{ActivityMap, SignupConfirmation};

pub fn list_activities(registry: &ActivityRegistry) -> ActivityMap {
    let activities = registry.snapshot();
    debug!(count = activities.len(), "listing activities");
    activities
}

pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    // Student emails stay at debug level.
    debug!(activity = %activity_name, email = %email, "signup requested");
    match registry.sign_up(activity_name, email) {
        Ok(participants) => {
            info!(activity = %activity_name, participants, "signup accepted");
            Ok(SignupConfirmation::new(email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, reason = %e, "signup rejected");
            Err(e)
        }
    }
}
