use parking_lot::RwLock;
use thiserror::Error;

use crate::database::seed;
use crate::models::{Activity, ActivityMap};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,
}

/// Whether `max_participants` gates new signups or is informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    #[default]
    Unchecked,
    Enforced,
}

/// In-memory store of every activity, shared by all requests.
///
/// Names are matched exactly (case and whitespace included). The only write
/// path is [`ActivityRegistry::sign_up`], which validates and appends under a
/// single write guard so two racing signups for the same email cannot both land.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: RwLock<ActivityMap>,
    capacity_policy: CapacityPolicy,
}

impl ActivityRegistry {
    pub fn new(activities: ActivityMap, capacity_policy: CapacityPolicy) -> Self {
        Self {
            activities: RwLock::new(activities),
            capacity_policy,
        }
    }

    pub fn seeded(capacity_policy: CapacityPolicy) -> Self {
        Self::new(seed::seed_activities(), capacity_policy)
    }

    pub fn snapshot(&self) -> ActivityMap {
        self.activities.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Appends `email` to the roster of `activity_name`.
    ///
    /// Returns the roster size after the append. Nothing is written on error.
    pub fn sign_up(&self, activity_name: &str, email: &str) -> Result<usize, SignupError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(SignupError::AlreadySignedUp);
        }
        if self.capacity_policy == CapacityPolicy::Enforced && activity.is_full() {
            return Err(SignupError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(activity.participants.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn tiny_registry(policy: CapacityPolicy) -> ActivityRegistry {
        let mut activities = ActivityMap::new();
        activities.insert(
            "Chess Club".to_string(),
            Activity::new("chess", "Fridays", 3, &["michael@mergington.edu"]),
        );
        activities.insert(
            "Gym Class".to_string(),
            Activity::new("gym", "Mondays", 30, &[]),
        );
        ActivityRegistry::new(activities, policy)
    }

    #[test]
    fn seeded_registry_contains_observed_activities() {
        let registry = ActivityRegistry::seeded(CapacityPolicy::default());
        let chess = registry.get("Chess Club").expect("chess club seeded");

        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
        assert!(registry.get("Programming Class").is_some());
        assert!(registry.get("Gym Class").is_some());
    }

    #[test]
    fn snapshot_keeps_seed_order() {
        let registry = ActivityRegistry::seeded(CapacityPolicy::default());
        let names: Vec<String> = registry.snapshot().keys().take(3).cloned().collect();
        assert_eq!(names, vec!["Chess Club", "Programming Class", "Gym Class"]);
    }

    #[test]
    fn sign_up_appends_at_end() {
        let registry = tiny_registry(CapacityPolicy::Unchecked);
        let count = registry
            .sign_up("Chess Club", "john@mergington.edu")
            .expect("signup");

        assert_eq!(count, 2);
        assert_eq!(
            registry.get("Chess Club").unwrap().participants,
            vec!["michael@mergington.edu", "john@mergington.edu"]
        );
        assert!(registry.get("Gym Class").unwrap().participants.is_empty());
    }

    #[test]
    fn lookup_is_exact_match() {
        let registry = tiny_registry(CapacityPolicy::Unchecked);
        for name in ["chess club", "Chess Club ", " Chess Club", "ChessClub", ""] {
            assert_eq!(
                registry.sign_up(name, "john@mergington.edu"),
                Err(SignupError::ActivityNotFound),
                "{name:?} must not resolve"
            );
        }
    }

    #[test]
    fn rejected_signups_leave_state_untouched() {
        let registry = tiny_registry(CapacityPolicy::Enforced);
        registry.sign_up("Chess Club", "a@mergington.edu").unwrap();
        registry.sign_up("Chess Club", "b@mergington.edu").unwrap();
        let before = registry.snapshot();

        assert_eq!(
            registry.sign_up("Nope", "c@mergington.edu"),
            Err(SignupError::ActivityNotFound)
        );
        assert_eq!(
            registry.sign_up("Chess Club", "a@mergington.edu"),
            Err(SignupError::AlreadySignedUp)
        );
        assert_eq!(
            registry.sign_up("Chess Club", "c@mergington.edu"),
            Err(SignupError::ActivityFull)
        );
        assert_eq!(registry.snapshot(), before);
    }

    #[test]
    fn duplicate_reported_before_full() {
        let registry = tiny_registry(CapacityPolicy::Enforced);
        registry.sign_up("Chess Club", "a@mergington.edu").unwrap();
        registry.sign_up("Chess Club", "b@mergington.edu").unwrap();

        assert_eq!(
            registry.sign_up("Chess Club", "michael@mergington.edu"),
            Err(SignupError::AlreadySignedUp)
        );
    }

    #[test]
    fn unchecked_policy_allows_overflow() {
        let registry = tiny_registry(CapacityPolicy::Unchecked);
        for i in 0..5 {
            registry
                .sign_up("Chess Club", &format!("student{i}@mergington.edu"))
                .unwrap();
        }
        assert_eq!(registry.get("Chess Club").unwrap().participants.len(), 6);
    }

    #[test]
    fn concurrent_duplicate_signups_land_once() {
        let registry = Arc::new(tiny_registry(CapacityPolicy::Unchecked));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    registry
                        .sign_up("Gym Class", "race@mergington.edu")
                        .is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(
            registry.get("Gym Class").unwrap().participants,
            vec!["race@mergington.edu"]
        );
    }
}
