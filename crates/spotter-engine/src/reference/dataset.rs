//! Built-in glossary tables.
//!
//! Kept as `&'static` value tables so the default index can be built without
//! touching the filesystem. Equipment and muscle-group values refer to entries
//! of [`EQUIPMENT`] and [`BODY_PARTS`] by alias.

use super::glossary::{ExerciseEntry, Glossary, NamedEntry, TermCategory, TermEntry};

struct Term {
    term: &'static str,
    category: TermCategory,
    aliases: &'static [&'static str],
    definition: &'static str,
}

struct Exercise {
    name: &'static str,
    aliases: &'static [&'static str],
    muscle_groups: &'static [&'static str],
    equipment: &'static str,
    units: &'static [&'static str],
}

struct Named {
    name: &'static str,
    aliases: &'static [&'static str],
}

const TERMS: &[Term] = &[
    Term {
        term: "AMRAP",
        category: TermCategory::Format,
        aliases: &["as many reps as possible", "as many rounds as possible", "amrap"],
        definition: "As many reps or rounds as possible within a time window.",
    },
    Term {
        term: "EMOM",
        category: TermCategory::Format,
        aliases: &["every minute on the minute", "e1mom", "emom"],
        definition: "Start the prescribed work each minute; rest the remainder.",
    },
    Term {
        term: "E2MOM",
        category: TermCategory::Format,
        aliases: &["every 2 minutes on the minute", "e2mom"],
        definition: "Start the prescribed work every 2 minutes.",
    },
    Term {
        term: "E3MOM",
        category: TermCategory::Format,
        aliases: &["every 3 minutes on the minute", "e3mom"],
        definition: "Start the prescribed work every 3 minutes.",
    },
    Term {
        term: "E4MOM",
        category: TermCategory::Format,
        aliases: &["every 4 minutes on the minute", "e4mom"],
        definition: "Start the prescribed work every 4 minutes.",
    },
    Term {
        term: "For Time",
        category: TermCategory::Format,
        aliases: &["for time", "ft", "complete for time"],
        definition: "Finish the work as fast as possible; record total time.",
    },
    Term {
        term: "Tabata",
        category: TermCategory::Format,
        aliases: &["tabata protocol"],
        definition: "20s all-out effort, 10s rest, 8 rounds.",
    },
    Term {
        term: "Chipper",
        category: TermCategory::Format,
        aliases: &["chip away", "chipper workout"],
        definition: "A long single-round list of movements completed for time.",
    },
    Term {
        term: "Superset",
        category: TermCategory::Structure,
        aliases: &["supersetting", "super set"],
        definition: "Two exercises back-to-back without rest.",
    },
    Term {
        term: "Circuit",
        category: TermCategory::Structure,
        aliases: &["circuit training", "circuit workout"],
        definition: "Exercises performed one after another with minimal rest.",
    },
    Term {
        term: "Ladder",
        category: TermCategory::Structure,
        aliases: &["rep ladder", "ascending ladder", "descending ladder"],
        definition: "Reps ascend or descend each set in a pattern.",
    },
    Term {
        term: "Drop Set",
        category: TermCategory::Technique,
        aliases: &["strip set", "dropset"],
        definition: "Reduce weight after near-failure and continue.",
    },
    Term {
        term: "Pyramid Set",
        category: TermCategory::Structure,
        aliases: &["pyramid", "pyramid training"],
        definition: "Weight goes up while reps go down each set, or the reverse.",
    },
    Term {
        term: "Complex",
        category: TermCategory::Structure,
        aliases: &["movement complex", "barbell complex", "dumbbell complex"],
        definition: "Several exercises performed consecutively with one implement.",
    },
    Term {
        term: "HIIT",
        category: TermCategory::Intensity,
        aliases: &["high intensity interval training", "interval training"],
        definition: "Short bursts of intense work alternated with rest.",
    },
    Term {
        term: "Metcon",
        category: TermCategory::Intensity,
        aliases: &["metabolic conditioning", "metcon workout"],
        definition: "High-intensity conditioning circuits.",
    },
];

const EXERCISES: &[Exercise] = &[
    // Chest and shoulders
    Exercise {
        name: "Push-Up",
        aliases: &["push up", "pushups", "push-ups"],
        muscle_groups: &["chest", "shoulders", "triceps", "core"],
        equipment: "bodyweight",
        units: &["reps", "time"],
    },
    Exercise {
        name: "Bench Press",
        aliases: &[
            "bench",
            "bb bench press",
            "barbell bench press",
            "db bench press",
            "dumbbell bench press",
        ],
        muscle_groups: &["chest", "shoulders", "triceps"],
        equipment: "barbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Overhead Press",
        aliases: &[
            "shoulder press",
            "military press",
            "strict press",
            "press",
            "db shoulder press",
        ],
        muscle_groups: &["shoulders", "triceps", "core"],
        equipment: "barbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Dumbbell Fly",
        aliases: &["db fly", "chest fly", "dumbbell flye"],
        muscle_groups: &["chest"],
        equipment: "dumbbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Lateral Raise",
        aliases: &["side raise", "db lateral raise", "lateral raises"],
        muscle_groups: &["shoulders"],
        equipment: "dumbbell",
        units: &["sets", "reps", "load"],
    },
    // Back and arms
    Exercise {
        name: "Pull-Up",
        aliases: &["pullup", "pull ups", "pullups"],
        muscle_groups: &["back", "biceps"],
        equipment: "bodyweight",
        units: &["reps", "sets"],
    },
    Exercise {
        name: "Chin-Up",
        aliases: &["chinup", "chin ups", "chinups"],
        muscle_groups: &["back", "biceps"],
        equipment: "bodyweight",
        units: &["reps", "sets"],
    },
    Exercise {
        name: "Bent-Over Row",
        aliases: &["bb row", "barbell row", "db row", "dumbbell row", "bent over row"],
        muscle_groups: &["back", "biceps"],
        equipment: "barbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Deadlift",
        aliases: &["dl", "conventional deadlift", "sumo deadlift"],
        muscle_groups: &["glutes", "hamstrings", "back", "core"],
        equipment: "barbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Romanian Deadlift",
        aliases: &["rdl", "romanian dl", "stiff leg deadlift"],
        muscle_groups: &["hamstrings", "glutes", "back"],
        equipment: "barbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Biceps Curl",
        aliases: &["db curl", "barbell curl", "hammer curl", "curls"],
        muscle_groups: &["biceps"],
        equipment: "dumbbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Triceps Extension",
        aliases: &["tricep extension", "overhead extension", "skull crusher"],
        muscle_groups: &["triceps"],
        equipment: "dumbbell",
        units: &["sets", "reps", "load"],
    },
    // Lower body
    Exercise {
        name: "Squat",
        aliases: &["air squat", "bodyweight squat", "squats"],
        muscle_groups: &["quadriceps", "glutes"],
        equipment: "bodyweight",
        units: &["reps", "time"],
    },
    Exercise {
        name: "Back Squat",
        aliases: &["bb squat", "barbell squat", "back squats"],
        muscle_groups: &["quadriceps", "glutes", "hamstrings"],
        equipment: "barbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Front Squat",
        aliases: &["front squats", "bb front squat"],
        muscle_groups: &["quadriceps", "glutes", "core"],
        equipment: "barbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Goblet Squat",
        aliases: &["goblet squats", "kb goblet squat", "db goblet squat"],
        muscle_groups: &["quadriceps", "glutes", "core"],
        equipment: "kettlebell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Lunge",
        aliases: &["lunges", "forward lunge", "walking lunge"],
        muscle_groups: &["quadriceps", "glutes", "hamstrings"],
        equipment: "bodyweight",
        units: &["reps", "distance"],
    },
    Exercise {
        name: "Reverse Lunge",
        aliases: &["reverse lunges", "backward lunge"],
        muscle_groups: &["quadriceps", "glutes", "hamstrings"],
        equipment: "bodyweight",
        units: &["reps"],
    },
    Exercise {
        name: "Hip Thrust",
        aliases: &["hip thrusts", "glute bridge", "bb hip thrust"],
        muscle_groups: &["glutes", "hamstrings"],
        equipment: "barbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Calf Raise",
        aliases: &["calf raises", "standing calf raise"],
        muscle_groups: &["calves"],
        equipment: "bodyweight",
        units: &["sets", "reps"],
    },
    // Full body
    Exercise {
        name: "Burpee",
        aliases: &["burpees", "burpee to plate"],
        muscle_groups: &["full-body"],
        equipment: "bodyweight",
        units: &["reps", "time"],
    },
    Exercise {
        name: "Burpee Over Box",
        aliases: &["burpee over obstacle", "box burpee"],
        muscle_groups: &["full-body"],
        equipment: "box",
        units: &["reps"],
    },
    Exercise {
        name: "Thruster",
        aliases: &["thrusters", "bb thruster", "db thruster"],
        muscle_groups: &["quadriceps", "glutes", "shoulders", "core"],
        equipment: "barbell",
        units: &["sets", "reps", "load"],
    },
    Exercise {
        name: "Kettlebell Swing",
        aliases: &["kb swing", "russian swing", "american swing", "full kb swings", "kb swings"],
        muscle_groups: &["glutes", "hamstrings", "back", "core"],
        equipment: "kettlebell",
        units: &["reps", "time"],
    },
    Exercise {
        name: "Kettlebell Swing (American)",
        aliases: &["american kb swing", "overhead swing", "full swing"],
        muscle_groups: &["glutes", "hamstrings", "back", "core", "shoulders"],
        equipment: "kettlebell",
        units: &["reps", "time"],
    },
    Exercise {
        name: "Kettlebell Dead Tap Swing",
        aliases: &["dead tap swings", "kb dead swing"],
        muscle_groups: &["glutes", "hamstrings", "back", "core"],
        equipment: "kettlebell",
        units: &["reps"],
    },
    Exercise {
        name: "Kettlebell Clean",
        aliases: &["kb clean", "kettlebell cleans"],
        muscle_groups: &["glutes", "hamstrings", "back", "shoulders"],
        equipment: "kettlebell",
        units: &["reps", "load"],
    },
    Exercise {
        name: "Goblet Clean",
        aliases: &["goblet cleans", "kb goblet clean"],
        muscle_groups: &["glutes", "hamstrings", "back", "shoulders"],
        equipment: "kettlebell",
        units: &["reps", "load"],
    },
    Exercise {
        name: "Kettlebell Gorilla Row",
        aliases: &["kb gorilla row", "gorilla row"],
        muscle_groups: &["back", "biceps", "core"],
        equipment: "kettlebell",
        units: &["reps", "load"],
    },
    Exercise {
        name: "Devil Press",
        aliases: &["devils press", "devil's press", "db devil press"],
        muscle_groups: &["full-body"],
        equipment: "dumbbell",
        units: &["reps", "load"],
    },
    Exercise {
        name: "Farmer Carry",
        aliases: &["farmers carry", "farmer walk", "farmers walk"],
        muscle_groups: &["grip", "traps", "core", "legs"],
        equipment: "dumbbell",
        units: &["distance", "time", "load"],
    },
    Exercise {
        name: "Wall Ball",
        aliases: &["wall balls", "wall ball shot"],
        muscle_groups: &["quadriceps", "glutes", "shoulders", "core"],
        equipment: "medicine ball",
        units: &["reps", "load"],
    },
    Exercise {
        name: "Box Jump",
        aliases: &["box jumps", "jump ups"],
        muscle_groups: &["quadriceps", "glutes", "calves"],
        equipment: "box",
        units: &["reps"],
    },
    Exercise {
        name: "Box Step Up",
        aliases: &["box step ups", "step ups", "step-ups"],
        muscle_groups: &["quadriceps", "glutes"],
        equipment: "box",
        units: &["reps"],
    },
    // Cardio machines and running
    Exercise {
        name: "Row",
        aliases: &["rowing", "erg", "rower", "row erg"],
        muscle_groups: &["back", "legs", "core"],
        equipment: "rower",
        units: &["distance", "time", "calories"],
    },
    Exercise {
        name: "SkiErg",
        aliases: &["ski", "ski erg", "skiing"],
        muscle_groups: &["back", "core", "triceps"],
        equipment: "skierg",
        units: &["distance", "time", "calories"],
    },
    Exercise {
        name: "Bike",
        aliases: &["biking", "assault bike", "echo bike", "air bike"],
        muscle_groups: &["legs", "core"],
        equipment: "bike",
        units: &["distance", "time", "calories"],
    },
    Exercise {
        name: "Run",
        aliases: &["running", "runs", "jog", "jogging"],
        muscle_groups: &["legs", "core"],
        equipment: "bodyweight",
        units: &["distance", "time"],
    },
    // Core
    Exercise {
        name: "Plank",
        aliases: &["planks", "front plank", "plank hold"],
        muscle_groups: &["core", "shoulders"],
        equipment: "bodyweight",
        units: &["time"],
    },
    Exercise {
        name: "Mountain Climbers",
        aliases: &["mountain climber", "mt climbers"],
        muscle_groups: &["core", "shoulders"],
        equipment: "bodyweight",
        units: &["reps", "time"],
    },
    // Sandbag and dumbbell variations
    Exercise {
        name: "Sandbag Lunge",
        aliases: &["sandbag lunges", "sb lunge"],
        muscle_groups: &["quadriceps", "glutes", "hamstrings", "core"],
        equipment: "sandbag",
        units: &["reps", "load"],
    },
    Exercise {
        name: "Dumbbell Back Squat",
        aliases: &["db back squat", "dumbbell squat"],
        muscle_groups: &["quadriceps", "glutes", "hamstrings"],
        equipment: "dumbbell",
        units: &["sets", "reps", "load"],
    },
];

const EQUIPMENT: &[Named] = &[
    Named { name: "Barbell", aliases: &["bb", "barbell"] },
    Named { name: "Dumbbell", aliases: &["db", "dumbbell", "dumbbells"] },
    Named { name: "Kettlebell", aliases: &["kb", "kettlebell", "kettlebells"] },
    Named { name: "Bodyweight", aliases: &["bw", "bodyweight", "body weight"] },
    Named { name: "Medicine Ball", aliases: &["med ball", "medicine ball", "wall ball"] },
    Named { name: "Sandbag", aliases: &["sb", "sandbag", "sand bag"] },
    Named { name: "Box", aliases: &["plyo box", "jump box", "step"] },
    Named { name: "Rower", aliases: &["erg", "row erg", "rowing machine"] },
    Named { name: "SkiErg", aliases: &["ski erg", "ski ergometer"] },
    Named {
        name: "Bike",
        aliases: &["assault bike", "echo bike", "air bike", "stationary bike"],
    },
    Named { name: "Bench", aliases: &["bench", "weight bench"] },
    Named { name: "Cable", aliases: &["cable machine", "cables"] },
    Named { name: "Machine", aliases: &["machine", "weight machine"] },
    Named { name: "Resistance Band", aliases: &["band", "resistance band", "bands"] },
];

const BODY_PARTS: &[Named] = &[
    Named { name: "Chest", aliases: &["chest", "pecs", "pectorals"] },
    Named {
        name: "Back",
        aliases: &["back", "lats", "upper back", "latissimus", "rhomboids", "traps"],
    },
    Named { name: "Shoulders", aliases: &["shoulders", "delts", "deltoids"] },
    Named { name: "Arms", aliases: &["arms", "biceps", "triceps", "forearms", "grip"] },
    Named {
        name: "Legs",
        aliases: &[
            "legs",
            "lower body",
            "leg day",
            "quads",
            "quadriceps",
            "hamstrings",
            "glutes",
            "calves",
        ],
    },
    Named { name: "Core", aliases: &["core", "abs", "abdominals", "trunk"] },
    Named {
        name: "Full Body",
        aliases: &["full body", "full-body", "total body", "compound"],
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The built-in glossary as an owned value, ready to be merged with extensions.
pub fn builtin() -> Glossary {
    Glossary {
        terms: TERMS
            .iter()
            .map(|t| TermEntry {
                term: t.term.to_string(),
                category: t.category,
                aliases: owned(t.aliases),
                definition: Some(t.definition.to_string()),
            })
            .collect(),
        exercises: EXERCISES
            .iter()
            .map(|e| ExerciseEntry {
                name: e.name.to_string(),
                aliases: owned(e.aliases),
                muscle_groups: owned(e.muscle_groups),
                equipment: Some(e.equipment.to_string()),
                units: owned(e.units),
                description: None,
            })
            .collect(),
        equipment: EQUIPMENT
            .iter()
            .map(|n| NamedEntry {
                name: n.name.to_string(),
                aliases: owned(n.aliases),
            })
            .collect(),
        body_parts: BODY_PARTS
            .iter()
            .map(|n| NamedEntry {
                name: n.name.to_string(),
                aliases: owned(n.aliases),
            })
            .collect(),
    }
}
