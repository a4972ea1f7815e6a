//! Built-in activity catalog loaded at startup.

use indexmap::IndexMap;

use crate::activity::Activity;

/// Returns the nine seed activities in catalog order.
pub fn default_activities() -> IndexMap<String, Activity> {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                ["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                ["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                ["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and compete in inter-school basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
                ["james@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Train together and play in the regional soccer league",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                22,
                ["lucas@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and stage the school's theater productions",
                "Wednesdays, 3:30 PM - 5:30 PM",
                20,
                ["ava@mergington.edu"],
            ),
        ),
        (
            "Art Workshop",
            Activity::new(
                "Explore painting, drawing, and sculpture techniques",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                ["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Run experiments and prepare projects for the science fair",
                "Fridays, 2:00 PM - 3:30 PM",
                18,
                ["ethan@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build public speaking and argumentation skills in competitive debate",
                "Tuesdays, 3:30 PM - 5:00 PM",
                12,
                ["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
