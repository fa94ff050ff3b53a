// ABOUTME: Static workout templates keyed by goal, the single source of truth for base plans
// ABOUTME: Borrowed const tables converted into owned WorkoutPlan values on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use physique_core::models::{
    DayOfWeek, Exercise, ExerciseVolume, Goal, Workout, WorkoutPlan, WorkoutType,
};

/// Volume prescription in a template
#[derive(Debug, Clone, Copy)]
pub enum VolumeTemplate {
    /// Sets of repetitions
    Reps {
        /// Number of sets
        sets: u32,
        /// Repetition count or range
        reps: &'static str,
    },
    /// Timed work, optionally repeated
    Timed {
        /// Seconds of work per set
        duration_sec: u32,
        /// Number of rounds
        sets: Option<u32>,
    },
}

/// Exercise entry in a template
#[derive(Debug, Clone, Copy)]
pub struct ExerciseTemplate {
    /// Exercise name
    pub name: &'static str,
    /// Prescribed volume
    pub volume: VolumeTemplate,
    /// Rest between sets (seconds)
    pub rest_sec: Option<u32>,
    /// Form cues
    pub notes: Option<&'static str>,
}

/// Workout entry in a template
#[derive(Debug, Clone, Copy)]
pub struct WorkoutTemplate {
    /// Session name
    pub name: &'static str,
    /// Session modality
    pub workout_type: WorkoutType,
    /// Session length (minutes)
    pub duration_min: u32,
    /// Exercises in order
    pub exercises: &'static [ExerciseTemplate],
    /// General instructions
    pub instructions: &'static str,
}

/// Complete base plan for one goal
#[derive(Debug, Clone, Copy)]
pub struct PlanTemplate {
    /// Plan title
    pub title: &'static str,
    /// Plan summary
    pub description: &'static str,
    /// Program length (weeks)
    pub duration_weeks: u32,
    /// Days without scheduled training
    pub rest_days: &'static [DayOfWeek],
    /// Sessions in rotation order
    pub workouts: &'static [WorkoutTemplate],
}

const fn reps(
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest_sec: u32,
    notes: Option<&'static str>,
) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        volume: VolumeTemplate::Reps { sets, reps },
        rest_sec: Some(rest_sec),
        notes,
    }
}

const fn timed(
    name: &'static str,
    duration_sec: u32,
    sets: Option<u32>,
    rest_sec: Option<u32>,
    notes: Option<&'static str>,
) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        volume: VolumeTemplate::Timed { duration_sec, sets },
        rest_sec,
        notes,
    }
}

/// Fat-loss base plan
pub const FAT_LOSS_TEMPLATE: PlanTemplate = PlanTemplate {
    title: "Fat Loss Program",
    description: "Metabolic resistance training and intervals to maximize energy expenditure while preserving muscle",
    duration_weeks: 8,
    rest_days: &[DayOfWeek::Wednesday, DayOfWeek::Sunday],
    workouts: &[
        WorkoutTemplate {
            name: "Full Body Circuit",
            workout_type: WorkoutType::Strength,
            duration_min: 45,
            exercises: &[
                reps("Goblet Squat", 3, "12-15", 60, Some("Keep chest up and heels down")),
                reps("Push-Up", 3, "10-15", 60, Some("Elevate hands to regress")),
                reps("Dumbbell Romanian Deadlift", 3, "12", 60, None),
                reps("Bent-Over Dumbbell Row", 3, "12", 60, None),
                reps("Walking Lunge", 3, "10 per leg", 60, None),
                timed("Plank", 45, Some(3), Some(30), Some("Brace the core, neutral spine")),
            ],
            instructions: "Perform exercises back to back as a circuit, resting only after each full round",
        },
        WorkoutTemplate {
            name: "HIIT Intervals",
            workout_type: WorkoutType::Hiit,
            duration_min: 30,
            exercises: &[
                timed("Jumping Jacks", 180, None, None, Some("Warm-up pace")),
                timed("Burpees", 30, Some(6), Some(30), None),
                timed("Mountain Climbers", 30, Some(6), Some(30), None),
                timed("Jump Squats", 30, Some(6), Some(30), Some("Land softly")),
                timed("High Knees", 30, Some(6), Some(30), None),
            ],
            instructions: "Work at near-maximal effort during intervals, keep rest periods strict",
        },
        WorkoutTemplate {
            name: "Steady-State Cardio",
            workout_type: WorkoutType::Cardio,
            duration_min: 40,
            exercises: &[
                timed("Brisk Walk or Easy Jog", 2400, None, None, Some("Conversational pace, zone 2")),
            ],
            instructions: "Keep a steady pace where you can still hold a conversation",
        },
    ],
};

/// Muscle-gain base plan
pub const MUSCLE_GAIN_TEMPLATE: PlanTemplate = PlanTemplate {
    title: "Muscle Gain Program",
    description: "Upper/lower hypertrophy split with progressive overload in moderate rep ranges",
    duration_weeks: 12,
    rest_days: &[DayOfWeek::Wednesday, DayOfWeek::Saturday, DayOfWeek::Sunday],
    workouts: &[
        WorkoutTemplate {
            name: "Upper Body Hypertrophy",
            workout_type: WorkoutType::Strength,
            duration_min: 60,
            exercises: &[
                reps("Barbell Bench Press", 4, "8-10", 120, Some("Control the descent")),
                reps("Pull-Up", 4, "6-10", 120, Some("Use assistance if needed")),
                reps("Seated Dumbbell Shoulder Press", 3, "10-12", 90, None),
                reps("Cable Row", 3, "10-12", 90, None),
                reps("Incline Dumbbell Press", 3, "10-12", 90, None),
                reps("Barbell Curl", 3, "12", 60, None),
                reps("Triceps Rope Pushdown", 3, "12", 60, None),
            ],
            instructions: "Add weight or reps each week while keeping 1-2 reps in reserve",
        },
        WorkoutTemplate {
            name: "Lower Body Hypertrophy",
            workout_type: WorkoutType::Strength,
            duration_min: 60,
            exercises: &[
                reps("Back Squat", 4, "6-8", 150, Some("Depth to parallel or below")),
                reps("Romanian Deadlift", 4, "8-10", 120, None),
                reps("Bulgarian Split Squat", 3, "10 per leg", 90, None),
                reps("Leg Curl", 3, "12", 60, None),
                reps("Standing Calf Raise", 4, "15", 60, None),
                timed("Hanging Knee Raise Hold", 30, Some(3), Some(60), None),
            ],
            instructions: "Prioritize the compound lifts while fresh, then accumulate volume",
        },
        WorkoutTemplate {
            name: "Full Body Power",
            workout_type: WorkoutType::Strength,
            duration_min: 50,
            exercises: &[
                reps("Deadlift", 4, "5", 180, Some("Reset between reps")),
                reps("Overhead Press", 4, "6-8", 120, None),
                reps("Weighted Dip", 3, "8-10", 90, None),
                reps("Chest-Supported Row", 3, "10", 90, None),
            ],
            instructions: "Heavier loads, full rest between sets, stop each set with good form",
        },
    ],
};

/// Maintenance base plan
pub const MAINTENANCE_TEMPLATE: PlanTemplate = PlanTemplate {
    title: "Maintenance Program",
    description: "Balanced strength, conditioning, and mobility to sustain fitness and body composition",
    duration_weeks: 6,
    rest_days: &[DayOfWeek::Tuesday, DayOfWeek::Thursday, DayOfWeek::Sunday],
    workouts: &[
        WorkoutTemplate {
            name: "Full Body Strength",
            workout_type: WorkoutType::Strength,
            duration_min: 50,
            exercises: &[
                reps("Barbell Squat", 3, "8-10", 90, None),
                reps("Dumbbell Bench Press", 3, "10", 90, None),
                reps("Lat Pulldown", 3, "10-12", 75, None),
                reps("Hip Thrust", 3, "12", 75, None),
                timed("Side Plank", 30, Some(3), Some(30), Some("Each side")),
            ],
            instructions: "Moderate loads with controlled tempo; keep 2-3 reps in reserve",
        },
        WorkoutTemplate {
            name: "Conditioning and Mobility",
            workout_type: WorkoutType::Flexibility,
            duration_min: 40,
            exercises: &[
                timed("Rowing Machine", 600, None, None, Some("Moderate steady pace")),
                reps("Kettlebell Swing", 3, "15", 60, None),
                timed("World's Greatest Stretch", 60, Some(2), Some(15), Some("Each side")),
                timed("Hip Flexor Stretch", 45, Some(2), Some(15), None),
                timed("Thoracic Rotation", 45, Some(2), Some(15), None),
            ],
            instructions: "Finish the conditioning block, then move through the mobility sequence slowly",
        },
    ],
};

/// Base template for a goal
#[must_use]
pub const fn template_for(goal: Goal) -> &'static PlanTemplate {
    match goal {
        Goal::LoseFat => &FAT_LOSS_TEMPLATE,
        Goal::GainMuscle => &MUSCLE_GAIN_TEMPLATE,
        Goal::Maintain => &MAINTENANCE_TEMPLATE,
    }
}

impl ExerciseTemplate {
    fn to_exercise(self) -> Exercise {
        let volume = match self.volume {
            VolumeTemplate::Reps { sets, reps } => ExerciseVolume::Reps {
                sets,
                reps: reps.to_owned(),
            },
            VolumeTemplate::Timed { duration_sec, sets } => {
                ExerciseVolume::Timed { duration_sec, sets }
            }
        };
        Exercise {
            name: self.name.to_owned(),
            volume,
            rest_sec: self.rest_sec,
            notes: self.notes.map(str::to_owned),
        }
    }
}

impl WorkoutTemplate {
    fn to_workout(self) -> Workout {
        Workout {
            name: self.name.to_owned(),
            workout_type: self.workout_type,
            duration_min: self.duration_min,
            exercises: self
                .exercises
                .iter()
                .map(|exercise| exercise.to_exercise())
                .collect(),
            instructions: self.instructions.to_owned(),
        }
    }
}

impl PlanTemplate {
    /// Owned, unmodified plan built from this template
    #[must_use]
    pub fn to_plan(self) -> WorkoutPlan {
        WorkoutPlan {
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            duration_weeks: self.duration_weeks,
            rest_days: self.rest_days.iter().copied().collect(),
            workouts: self
                .workouts
                .iter()
                .map(|workout| workout.to_workout())
                .collect(),
        }
    }
}
