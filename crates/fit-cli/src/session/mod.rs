//! Chat-style session: one reply per input line.
//!
//! Records are routed the way the chat bot routes messages. A profile is
//! stored for the session user, a workout becomes the open workout, an
//! exercise joins the open workout, and a nutrition goal is only reported.

mod store;

pub use store::{InMemoryProfileStore, ProfileStore};

use chrono::NaiveDate;
use fit_core::enums::RecordKind;
use fit_core::entities::Workout;
use fit_core::responses::RecordSummary;
use fit_core::DomainRecord;
use fit_parser::AliasTable;
use fit_schema::SchemaRegistry;

use crate::views::{CommandView, KindView, Reply, example_line};

pub const COMMANDS: &[CommandView] = &[
    CommandView {
        name: "/profile",
        about: "show the stored profile",
    },
    CommandView {
        name: "/bmi",
        about: "body mass index of the stored profile",
    },
    CommandView {
        name: "/workout",
        about: "show the open workout and its exercises",
    },
    CommandView {
        name: "/help",
        about: "record kinds, keys and examples",
    },
    CommandView {
        name: "/quit",
        about: "end the session",
    },
];

pub struct Session<S> {
    store: S,
    user_id: String,
    today: NaiveDate,
    show_examples: bool,
    workout: Option<Workout>,
}

impl<S: ProfileStore> Session<S> {
    pub fn new(store: S, user_id: impl Into<String>, today: NaiveDate, show_examples: bool) -> Self {
        Self {
            store,
            user_id: user_id.into(),
            today,
            show_examples,
            workout: None,
        }
    }

    /// React to one input line: a slash command or a record line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if let Some(command) = line.trim().strip_prefix('/') {
            return self.command(command.trim());
        }
        match fit_parser::create_from_text_at(line, self.today) {
            Ok(record) => self.accept(record),
            Err(error) => {
                tracing::debug!(kind = %error.kind(), "session line rejected");
                Reply::rejected(&error, self.show_examples)
            }
        }
    }

    fn accept(&mut self, record: DomainRecord) -> Reply {
        let summary = RecordSummary::from(record.clone());
        let note = match record {
            DomainRecord::UserProfile(profile) => {
                self.store.put(&self.user_id, profile);
                Some(format!("Saved as the profile of '{}'.", self.user_id))
            }
            DomainRecord::Workout(workout) => {
                let note = self.workout.as_ref().map(|previous| {
                    format!(
                        "Closed the workout of {} with {} exercise(s).",
                        previous.date(),
                        previous.exercise_count()
                    )
                });
                self.workout = Some(workout);
                note
            }
            DomainRecord::Exercise(exercise) => Some(match self.workout.as_mut() {
                Some(workout) => {
                    workout.add_exercise(exercise);
                    format!(
                        "Added to the workout of {} ({} exercise(s)).",
                        workout.date(),
                        workout.exercise_count()
                    )
                }
                None => "No open workout; start one with a Workout line to collect exercises."
                    .to_string(),
            }),
            DomainRecord::NutritionGoal(_) => None,
        };
        Reply::Created { summary, note }
    }

    fn command(&self, command: &str) -> Reply {
        match command {
            "profile" => match self.store.get(&self.user_id) {
                Some(profile) => Reply::Stored {
                    summary: DomainRecord::UserProfile(profile.clone()).into(),
                },
                None => self.no_profile(),
            },
            "bmi" => match self.store.get(&self.user_id) {
                Some(profile) => Reply::Bmi {
                    bmi: profile.bmi(),
                    category: profile.bmi_category(),
                },
                None => self.no_profile(),
            },
            "workout" => match &self.workout {
                Some(workout) => Reply::Stored {
                    summary: DomainRecord::Workout(workout.clone()).into(),
                },
                None => Reply::notice(format!(
                    "No open workout. Start one with:\n{}",
                    example_line(RecordKind::Workout)
                )),
            },
            "help" | "start" => Reply::Help {
                kinds: KindView::all(SchemaRegistry::builtin(), AliasTable::standard()),
                commands: COMMANDS.to_vec(),
            },
            "quit" | "exit" => Reply::Quit,
            other => Reply::notice(format!("Unknown command '/{other}'. Try /help.")),
        }
    }

    fn no_profile(&self) -> Reply {
        Reply::notice(format!(
            "No profile yet. Create one with:\n{}",
            example_line(RecordKind::UserProfile)
        ))
    }
}
