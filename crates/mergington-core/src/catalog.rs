//! The activity [`Catalog`] and its three operations.
//!
//! The set of activity names is fixed when the catalog is built. Each
//! [`Activity`] sits behind its own mutex, so signup and unregister run their
//! check and their mutation under one lock acquisition and never race with
//! another writer on the same activity. Writers on different activities do
//! not contend.

use std::fmt;
use std::io::Read;
use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;

use crate::activity::Activity;
use crate::error::CatalogError;
use crate::seed;

/// Deep copy of the catalog, keyed by activity name, in catalog order.
pub type CatalogSnapshot = IndexMap<String, Activity>;

/// Whether signup rejects activities that are already at `max_participants`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Reject signups once the activity is full.
    #[default]
    Enforce,
    /// Accept signups past capacity.
    Unbounded,
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityPolicy::Enforce => f.write_str("enforce"),
            CapacityPolicy::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Result of a successful write.
///
/// `Display` renders the user-facing confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    SignedUp { activity: String, email: String },
    Unregistered { activity: String, email: String },
}

impl Confirmation {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::SignedUp { activity, email } => {
                write!(f, "Signed up {email} for {activity}")
            }
            Confirmation::Unregistered { activity, email } => {
                write!(f, "Unregistered {email} from {activity}")
            }
        }
    }
}

/// In-memory activity catalog.
#[derive(Debug)]
pub struct Catalog {
    activities: IndexMap<String, Mutex<Activity>>,
    capacity: CapacityPolicy,
}

impl Catalog {
    /// Builds a catalog from `activities`, validating each record.
    ///
    /// Participant lists must be duplicate-free. Under
    /// [`CapacityPolicy::Enforce`] they must also fit `max_participants`.
    pub fn new(
        activities: IndexMap<String, Activity>,
        capacity: CapacityPolicy,
    ) -> Result<Self, CatalogError> {
        for (name, activity) in &activities {
            validate(name, activity, capacity)?;
        }
        Ok(Self::from_parts(activities, capacity))
    }

    /// Builds a catalog from the built-in seed.
    pub fn seeded(capacity: CapacityPolicy) -> Self {
        Self::from_parts(seed::default_activities(), capacity)
    }

    /// Builds a catalog from a JSON object shaped like the
    /// `GET /activities` response body.
    pub fn from_json_reader<R: Read>(
        reader: R,
        capacity: CapacityPolicy,
    ) -> Result<Self, CatalogError> {
        let activities: IndexMap<String, Activity> = serde_json::from_reader(reader)?;
        Self::new(activities, capacity)
    }

    fn from_parts(activities: IndexMap<String, Activity>, capacity: CapacityPolicy) -> Self {
        Catalog {
            activities: activities
                .into_iter()
                .map(|(name, activity)| (name, Mutex::new(activity)))
                .collect(),
            capacity,
        }
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Returns a deep copy of every activity in catalog order.
    ///
    /// Activities are locked one at a time, so the snapshot is consistent per
    /// activity but not across activities.
    pub fn list_activities(&self) -> CatalogSnapshot {
        self.activities
            .iter()
            .map(|(name, slot)| (name.clone(), lock(slot).clone()))
            .collect()
    }

    /// Adds `email` to the end of `activity_name`'s participant list.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<Confirmation, CatalogError> {
        let mut activity = self.activity(activity_name)?;

        if activity.is_registered(email) {
            return Err(CatalogError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }
        if self.capacity == CapacityPolicy::Enforce && activity.is_full() {
            return Err(CatalogError::CapacityExceeded {
                activity: activity_name.to_string(),
                max: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        Ok(Confirmation::SignedUp {
            activity: activity_name.to_string(),
            email: email.to_string(),
        })
    }

    /// Removes one occurrence of `email` from `activity_name`'s participant
    /// list, keeping the order of the rest.
    pub fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Confirmation, CatalogError> {
        let mut activity = self.activity(activity_name)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(CatalogError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(pos);
        Ok(Confirmation::Unregistered {
            activity: activity_name.to_string(),
            email: email.to_string(),
        })
    }

    fn activity(&self, name: &str) -> Result<MutexGuard<'_, Activity>, CatalogError> {
        self.activities
            .get(name)
            .map(lock)
            .ok_or_else(|| CatalogError::ActivityNotFound {
                name: name.to_string(),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded(CapacityPolicy::default())
    }
}

// Every mutation is a single push or remove, so a poisoned guard still holds
// a consistent record.
fn lock(slot: &Mutex<Activity>) -> MutexGuard<'_, Activity> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn validate(name: &str, activity: &Activity, capacity: CapacityPolicy) -> Result<(), CatalogError> {
    for (i, email) in activity.participants.iter().enumerate() {
        if activity.participants[..i].contains(email) {
            return Err(CatalogError::InvalidSeed {
                reason: format!("'{name}' lists participant '{email}' more than once"),
            });
        }
    }
    if capacity == CapacityPolicy::Enforce
        && activity.participants.len() > activity.max_participants as usize
    {
        return Err(CatalogError::InvalidSeed {
            reason: format!(
                "'{name}' has {} participants but max_participants is {}",
                activity.participants.len(),
                activity.max_participants
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn participants(catalog: &Catalog, name: &str) -> Vec<String> {
        catalog.list_activities()[name].participants.clone()
    }

    fn tiny(capacity: CapacityPolicy) -> Catalog {
        let mut activities = IndexMap::new();
        activities.insert(
            "Robotics".to_string(),
            Activity::new("Build robots", "Mondays", 2, ["a@mergington.edu"]),
        );
        Catalog::new(activities, capacity).unwrap()
    }

    #[test]
    fn list_is_repeatable() {
        let catalog = Catalog::default();
        assert_eq!(catalog.list_activities(), catalog.list_activities());
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn list_returns_a_copy() {
        let catalog = Catalog::default();
        let mut snapshot = catalog.list_activities();
        snapshot["Chess Club"].participants.clear();
        assert!(!participants(&catalog, "Chess Club").is_empty());
    }

    #[test]
    fn signup_appends_in_order() {
        let catalog = Catalog::default();
        let before = participants(&catalog, "Science Club");

        catalog.signup("Science Club", "s1@mergington.edu").unwrap();
        catalog.signup("Science Club", "s2@mergington.edu").unwrap();

        let after = participants(&catalog, "Science Club");
        assert_eq!(after.len(), before.len() + 2);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(&after[before.len()..], ["s1@mergington.edu", "s2@mergington.edu"]);
    }

    #[test]
    fn signup_message() {
        let catalog = Catalog::default();
        let conf = catalog.signup("Art Workshop", "workflow@example.edu").unwrap();
        assert_eq!(conf.message(), "Signed up workflow@example.edu for Art Workshop");

        let conf = catalog.unregister("Art Workshop", "workflow@example.edu").unwrap();
        assert_eq!(conf.message(), "Unregistered workflow@example.edu from Art Workshop");
    }

    #[test]
    fn duplicate_signup_rejected() {
        let catalog = Catalog::default();
        let before = catalog.list_activities();

        let err = catalog
            .signup("Chess Club", "michael@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyRegistered { .. }));
        assert_eq!(catalog.list_activities(), before);
    }

    #[test]
    fn unknown_activity() {
        let catalog = Catalog::default();
        let err = catalog.signup("Nonexistent Club", "x@mergington.edu").unwrap_err();
        assert!(matches!(err, CatalogError::ActivityNotFound { ref name } if name == "Nonexistent Club"));

        let err = catalog
            .unregister("Nonexistent Club", "x@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, CatalogError::ActivityNotFound { .. }));
    }

    #[test]
    fn activity_names_are_case_sensitive() {
        let catalog = Catalog::default();
        let err = catalog.signup("chess club", "x@mergington.edu").unwrap_err();
        assert!(matches!(err, CatalogError::ActivityNotFound { .. }));
    }

    #[test]
    fn unregister_existing_member() {
        let catalog = Catalog::default();
        catalog
            .unregister("Chess Club", "michael@mergington.edu")
            .unwrap();
        assert!(!participants(&catalog, "Chess Club").contains(&"michael@mergington.edu".to_string()));
        assert_eq!(participants(&catalog, "Chess Club"), ["daniel@mergington.edu"]);
    }

    #[test]
    fn unregister_non_member() {
        let catalog = Catalog::default();
        let before = catalog.list_activities();
        let err = catalog
            .unregister("Chess Club", "notregistered@mergington.edu")
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotRegistered { .. }));
        assert_eq!(catalog.list_activities(), before);
    }

    #[test]
    fn empty_email_is_accepted() {
        let catalog = Catalog::default();
        catalog.signup("Chess Club", "").unwrap();
        assert!(participants(&catalog, "Chess Club").contains(&String::new()));
        catalog.unregister("Chess Club", "").unwrap();
    }

    #[test]
    fn enforce_rejects_when_full() {
        let catalog = tiny(CapacityPolicy::Enforce);
        catalog.signup("Robotics", "b@mergington.edu").unwrap();

        let err = catalog.signup("Robotics", "c@mergington.edu").unwrap_err();
        assert!(matches!(err, CatalogError::CapacityExceeded { max: 2, .. }));
        assert_eq!(participants(&catalog, "Robotics").len(), 2);
    }

    #[test]
    fn duplicate_checked_before_capacity() {
        let catalog = tiny(CapacityPolicy::Enforce);
        catalog.signup("Robotics", "b@mergington.edu").unwrap();

        let err = catalog.signup("Robotics", "a@mergington.edu").unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyRegistered { .. }));
    }

    #[test]
    fn unbounded_allows_overbooking() {
        let catalog = tiny(CapacityPolicy::Unbounded);
        for email in ["b@mergington.edu", "c@mergington.edu", "d@mergington.edu"] {
            catalog.signup("Robotics", email).unwrap();
        }
        assert_eq!(participants(&catalog, "Robotics").len(), 4);
    }

    #[test]
    fn new_rejects_duplicate_participants() {
        let mut activities = IndexMap::new();
        activities.insert(
            "Robotics".to_string(),
            Activity::new("", "", 5, ["a@x.edu", "a@x.edu"]),
        );
        let err = Catalog::new(activities, CapacityPolicy::Unbounded).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSeed { .. }));
    }

    #[test]
    fn new_checks_capacity_only_when_enforced() {
        let over = || {
            let mut activities = IndexMap::new();
            activities.insert(
                "Robotics".to_string(),
                Activity::new("", "", 1, ["a@x.edu", "b@x.edu"]),
            );
            activities
        };
        assert!(Catalog::new(over(), CapacityPolicy::Enforce).is_err());
        assert!(Catalog::new(over(), CapacityPolicy::Unbounded).is_ok());
    }

    #[test]
    fn from_json_keeps_order() {
        let json = r#"{
            "Zoology": {"description": "d", "schedule": "s", "max_participants": 3, "participants": []},
            "Astronomy": {"description": "d", "schedule": "s", "max_participants": 3, "participants": ["x@y.edu"]}
        }"#;
        let catalog = Catalog::from_json_reader(json.as_bytes(), CapacityPolicy::Enforce).unwrap();
        let names: Vec<_> = catalog.list_activities().into_keys().collect();
        assert_eq!(names, ["Zoology", "Astronomy"]);
    }

    #[test]
    fn from_json_reads_a_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Robotics": {{"description": "Build robots", "schedule": "Mondays",
                "max_participants": 1, "participants": ["a@x.edu", "b@x.edu"]}}}}"#
        )
        .unwrap();

        let open = || std::fs::File::open(file.path()).unwrap();
        let err = Catalog::from_json_reader(open(), CapacityPolicy::Enforce).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSeed { .. }));

        let catalog = Catalog::from_json_reader(open(), CapacityPolicy::Unbounded).unwrap();
        assert_eq!(participants(&catalog, "Robotics"), ["a@x.edu", "b@x.edu"]);
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = Catalog::from_json_reader(&b"{ not json"[..], CapacityPolicy::Enforce).unwrap_err();
        assert!(matches!(err, CatalogError::SeedParse(_)));
    }

    #[test]
    fn concurrent_duplicate_signups_admit_one() {
        let catalog = Catalog::default();
        let successes = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(|| catalog.signup("Gym Class", "racer@mergington.edu").is_ok()))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count()
        });
        assert_eq!(successes, 1);
        let gym = participants(&catalog, "Gym Class");
        assert_eq!(gym.iter().filter(|p| *p == "racer@mergington.edu").count(), 1);
    }

    #[test]
    fn concurrent_signups_respect_capacity() {
        let catalog = tiny(CapacityPolicy::Enforce);
        std::thread::scope(|s| {
            for i in 0..8 {
                let catalog = &catalog;
                s.spawn(move || {
                    let _ = catalog.signup("Robotics", &format!("s{i}@mergington.edu"));
                });
            }
        });
        assert_eq!(participants(&catalog, "Robotics").len(), 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn activity_name() -> impl Strategy<Value = String> {
            (0..9usize).prop_map(|i| {
                seed::default_activities()
                    .get_index(i)
                    .map(|(name, _)| name.clone())
                    .unwrap()
            })
        }

        proptest! {
            #[test]
            fn signup_unregister_round_trip(
                name in activity_name(),
                email in "[a-z]{1,10}@example\\.edu",
            ) {
                let catalog = Catalog::default();
                let before = participants(&catalog, &name);

                catalog.signup(&name, &email).unwrap();
                prop_assert!(participants(&catalog, &name).contains(&email));

                catalog.unregister(&name, &email).unwrap();
                prop_assert_eq!(participants(&catalog, &name), before);
            }

            #[test]
            fn second_signup_is_rejected(
                name in activity_name(),
                email in "[a-z]{1,10}@example\\.edu",
            ) {
                let catalog = Catalog::default();
                catalog.signup(&name, &email).unwrap();
                let snapshot = catalog.list_activities();

                let second = catalog.signup(&name, &email);
                prop_assert!(
                    matches!(second, Err(CatalogError::AlreadyRegistered { .. })),
                    "expected AlreadyRegistered, got {:?}",
                    second
                );
                prop_assert_eq!(catalog.list_activities(), snapshot);
            }

            #[test]
            fn unregister_removes_one_member_and_keeps_order(
                name in activity_name(),
                emails in proptest::collection::hash_set("[a-z]{1,8}@example\\.edu", 1..5),
                pick in any::<prop::sample::Index>(),
            ) {
                let catalog = Catalog::seeded(CapacityPolicy::Unbounded);
                for email in &emails {
                    catalog.signup(&name, email).unwrap();
                }
                let mut expected = participants(&catalog, &name);
                let victim = expected.remove(pick.index(expected.len()));

                catalog.unregister(&name, &victim).unwrap();
                prop_assert_eq!(participants(&catalog, &name), expected);
            }
        }
    }
}
