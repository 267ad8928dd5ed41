//! Seed catalog of Mergington High School activities.

use crate::domain::foundation::{ActivityName, ParticipantEmail};

use super::{Activity, RosterError};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in local leagues",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

/// Build the activities the service starts with.
///
/// # Errors
///
/// Fails only if the seed table itself is malformed (blank names or
/// emails, duplicate participants).
pub fn mergington_catalog() -> Result<Vec<Activity>, RosterError> {
    SEED.iter()
        .map(|seed| {
            let participants = seed
                .participants
                .iter()
                .map(|email| ParticipantEmail::new(*email))
                .collect::<Result<Vec<_>, _>>()?;

            Activity::new(
                ActivityName::new(seed.name)?,
                seed.description,
                seed.schedule,
                seed.max_participants,
            )
            .with_participants(participants)
        })
        .collect()
}
