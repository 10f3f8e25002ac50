// ABOUTME: Built-in rule catalog: base coaching rules plus injury-gated adjustments
// ABOUTME: Pure data construction; matching and validation semantics live in the parent module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Engine Contributors

use super::{InjuryCondition, Rule, RulePattern, StatusCondition};
use crate::models::{
    CompetitionLevel, CompetitionType, DietType, FitnessLevel, InjurySeverity, InjuryType,
    PlanSlot, RecoveryStatus, Sport, SportFormat,
};

/// Assemble the built-in catalog, base rules first
pub(crate) fn build() -> Vec<Rule> {
    let mut rules = Vec::with_capacity(64);
    rules.extend(training_rules());
    rules.extend(nutrition_rules());
    rules.extend(injury_adjustment_rules());
    rules.extend(recovery_rules());
    rules
}

fn rule(id: &str, slot: PlanSlot, pattern: RulePattern, items: &[&str]) -> Rule {
    Rule {
        id: id.to_owned(),
        pattern,
        slot,
        items: items.iter().map(|item| (*item).to_owned()).collect(),
        overrides: Vec::new(),
    }
}

fn override_rule(
    id: &str,
    slot: PlanSlot,
    pattern: RulePattern,
    items: &[&str],
    overrides: &[&str],
) -> Rule {
    Rule {
        overrides: overrides.iter().map(|target| (*target).to_owned()).collect(),
        ..rule(id, slot, pattern, items)
    }
}

fn for_sport(sport: Sport) -> RulePattern {
    RulePattern {
        sport: Some(sport),
        ..RulePattern::default()
    }
}

fn for_level(level: FitnessLevel) -> RulePattern {
    RulePattern {
        level: Some(level),
        ..RulePattern::default()
    }
}

fn for_diet(diet_type: DietType) -> RulePattern {
    RulePattern {
        diet_type: Some(diet_type),
        ..RulePattern::default()
    }
}

fn for_format(format: SportFormat) -> RulePattern {
    RulePattern {
        competition_format: Some(format),
        ..RulePattern::default()
    }
}

fn with_injury(condition: InjuryCondition) -> RulePattern {
    RulePattern {
        injury: Some(condition),
        ..RulePattern::default()
    }
}

fn unhealed(injury_type: InjuryType) -> InjuryCondition {
    InjuryCondition {
        injury_type: Some(injury_type),
        severity: None,
        status: StatusCondition::Unhealed,
    }
}

/// Base training rules: one per sport, one per level, plus competition,
/// format, and achievement-count rules
fn training_rules() -> Vec<Rule> {
    let slot = PlanSlot::Training;
    vec![
        rule(
            "training.sport.cricket",
            slot,
            for_sport(Sport::Cricket),
            &[
                "Alternate skill-heavy net sessions with rotational power work such as medicine ball throws and cable rotations",
                "Add short repeat-sprint blocks between overs to mirror match demands",
            ],
        ),
        rule(
            "training.sport.football",
            slot,
            for_sport(Sport::Football),
            &[
                "Structure the week around small-sided games, repeated sprint work, and one heavy strength session",
                "Finish pitch sessions with change-of-direction drills at full intensity",
            ],
        ),
        rule(
            "training.sport.swimming",
            slot,
            for_sport(Sport::Swimming),
            &[
                "Split pool time between technique drills and threshold sets, keeping drill quality ahead of volume",
                "Add two dryland sessions a week for shoulder stability and core control",
            ],
        ),
        rule(
            "training.sport.running",
            slot,
            for_sport(Sport::Running),
            &[
                "Build the aerobic base with easy volume, keeping most weekly mileage at conversational pace",
                "Rotate one quality session a week between intervals, tempo, and hills",
            ],
        ),
        rule(
            "training.sport.tennis",
            slot,
            for_sport(Sport::Tennis),
            &[
                "Pair on-court pattern drills with footwork ladders and split-step timing work",
                "Strengthen the shoulder and forearm twice a week to protect the serving arm",
            ],
        ),
        rule(
            "training.sport.basketball",
            slot,
            for_sport(Sport::Basketball),
            &[
                "Mix full-court conditioning with jump-landing mechanics and ankle stability work",
                "Reserve one session a week for shooting under fatigue",
            ],
        ),
        rule(
            "training.sport.weightlifting",
            slot,
            for_sport(Sport::Weightlifting),
            &[
                "Periodize the main lifts in four-week blocks, backing off volume every fourth week",
                "Treat hip, ankle, and thoracic mobility as part of the session rather than a warm-up",
            ],
        ),
        rule(
            "training.sport.gymnastics",
            slot,
            for_sport(Sport::Gymnastics),
            &[
                "Favor short daily handstand and line work over occasional long sessions",
                "Condition wrists, shoulders, and core before adding new skills",
            ],
        ),
        rule(
            "training.level.beginner",
            slot,
            for_level(FitnessLevel::Beginner),
            &[
                "Keep every session easy enough to repeat tomorrow; consistency outranks intensity at this stage",
            ],
        ),
        rule(
            "training.level.intermediate",
            slot,
            for_level(FitnessLevel::Intermediate),
            &["Hold three quality sessions a week and keep the remaining days genuinely easy"],
        ),
        rule(
            "training.level.advanced",
            slot,
            for_level(FitnessLevel::Advanced),
            &[
                "Periodize in three-week build, one-week deload cycles with a planned overreach before the deload",
            ],
        ),
        rule(
            "training.level.elite",
            slot,
            for_level(FitnessLevel::Elite),
            &["Split key days into morning and evening sessions to raise total quality volume"],
        ),
        rule(
            "training.level.professional",
            slot,
            for_level(FitnessLevel::Professional),
            &[
                "Coordinate blocks with your support team and track readiness daily; recovery is a scheduled session",
            ],
        ),
        rule(
            "training.competition.olympics",
            slot,
            RulePattern {
                competition_type: Some(CompetitionType::Olympics),
                ..RulePattern::default()
            },
            &["Work backward from the games date and rehearse the full taper six weeks out"],
        ),
        rule(
            "training.competition.world_championship",
            slot,
            RulePattern {
                competition_type: Some(CompetitionType::WorldChampionship),
                ..RulePattern::default()
            },
            &[
                "Plan the season around two peaks at most and protect the championship taper from late fitness chasing",
            ],
        ),
        rule(
            "training.competition.international",
            slot,
            RulePattern {
                competition_level: Some(CompetitionLevel::International),
                ..RulePattern::default()
            },
            &[
                "Rehearse travel, time-zone shifts, and competition-day timing before the trip that matters",
            ],
        ),
        rule(
            "training.format.marathon",
            slot,
            for_format(SportFormat::Marathon),
            &["Extend the long run gradually and hold the longest one three weeks before race day"],
        ),
        rule(
            "training.format.t20",
            slot,
            for_format(SportFormat::T20),
            &["Bias conditioning toward explosive repeat efforts over long steady work"],
        ),
        rule(
            "training.format.open_water",
            slot,
            for_format(SportFormat::OpenWater),
            &["Practice sighting, drafting, and pack starts in open water at least once a week"],
        ),
        rule(
            "training.format.powerlifting",
            slot,
            for_format(SportFormat::Powerlifting),
            &["Run the competition lifts to meet commands and timing through the final block"],
        ),
        rule(
            "training.format.singles",
            slot,
            for_format(SportFormat::Singles),
            &[
                "Condition for point length: repeated twenty to forty second efforts with short recoveries",
            ],
        ),
        rule(
            "training.format.artistic",
            slot,
            for_format(SportFormat::Artistic),
            &[
                "Rehearse full routines under judging conditions once the individual parts are stable",
            ],
        ),
        rule(
            "training.achievements.seasoned",
            slot,
            RulePattern {
                min_achievements: Some(3),
                ..RulePattern::default()
            },
            &[
                "Lean on your competition history: repeat the preparation patterns behind your best results",
            ],
        ),
    ]
}

/// Base nutrition rules: a universal hydration rule, one per diet type,
/// restriction handling, and top-level fueling rules
fn nutrition_rules() -> Vec<Rule> {
    let slot = PlanSlot::Nutrition;
    vec![
        rule(
            "nutrition.base.hydration",
            slot,
            RulePattern::default(),
            &[
                "Drink to a schedule around sessions: half a liter in the two hours before, then small regular amounts throughout",
            ],
        ),
        rule(
            "nutrition.diet.vegetarian",
            slot,
            for_diet(DietType::Vegetarian),
            &[
                "Anchor each meal with a complete vegetarian protein source such as eggs, dairy, soy, or legume-grain pairs",
            ],
        ),
        rule(
            "nutrition.diet.vegan",
            slot,
            for_diet(DietType::Vegan),
            &[
                "Plan B12, iron, and omega-3 sources deliberately, and supplement B12 rather than assuming intake",
            ],
        ),
        rule(
            "nutrition.diet.keto",
            slot,
            for_diet(DietType::Keto),
            &[
                "Time the largest fat-and-protein meal well away from hard sessions and expect reduced top-end output early on",
            ],
        ),
        rule(
            "nutrition.diet.paleo",
            slot,
            for_diet(DietType::Paleo),
            &[
                "Cover carbohydrate needs around training with fruit and starchy vegetables since grains are off the table",
            ],
        ),
        rule(
            "nutrition.diet.balanced",
            slot,
            for_diet(DietType::Balanced),
            &[
                "Scale plates to the training day: more carbohydrate on hard days, more protein and vegetables on easy days",
            ],
        ),
        rule(
            "nutrition.diet.high_protein",
            slot,
            for_diet(DietType::HighProtein),
            &[
                "Spread protein across four feedings of roughly 0.4 grams per kilogram each rather than loading one meal",
            ],
        ),
        rule(
            "nutrition.diet.no_restrictions",
            slot,
            for_diet(DietType::NoRestrictions),
            &["Default to minimally processed foods and let total energy track training load"],
        ),
        rule(
            "nutrition.diet.restricted",
            slot,
            RulePattern {
                has_restrictions: Some(true),
                ..RulePattern::default()
            },
            &[
                "Keep a substitution list for every flagged restriction so training-day meals never improvise",
            ],
        ),
        rule(
            "nutrition.level.elite",
            slot,
            for_level(FitnessLevel::Elite),
            &[
                "Periodize carbohydrate with the plan: high days fuel quality sessions, easy days stay moderate",
            ],
        ),
        rule(
            "nutrition.level.professional",
            slot,
            for_level(FitnessLevel::Professional),
            &[
                "Run fueling as part of the program: weigh-ins, sweat testing, and race-day rehearsal belong on the calendar",
            ],
        ),
    ]
}

/// Injury-gated training and nutrition adjustments.
///
/// These carry the override lists: when one fires it withdraws the named
/// base rules' items and contributes its replacement guidance.
fn injury_adjustment_rules() -> Vec<Rule> {
    vec![
        override_rule(
            "training.injury.knee_active",
            PlanSlot::Training,
            with_injury(unhealed(InjuryType::Knee)),
            &["Replace impact work with pool running or cycling until the knee is cleared"],
            &[
                "training.sport.running",
                "training.sport.basketball",
                "training.sport.football",
            ],
        ),
        override_rule(
            "training.injury.ankle_active",
            PlanSlot::Training,
            with_injury(unhealed(InjuryType::Ankle)),
            &[
                "Train around the ankle: swap cutting and jumping for controlled strength and range work",
            ],
            &[
                "training.sport.basketball",
                "training.sport.football",
                "training.sport.tennis",
            ],
        ),
        override_rule(
            "training.injury.shoulder_active",
            PlanSlot::Training,
            with_injury(unhealed(InjuryType::Shoulder)),
            &[
                "Keep overhead and throwing volume out of the program until the shoulder is cleared; lower body trains normally",
            ],
            &[
                "training.sport.swimming",
                "training.sport.tennis",
                "training.sport.cricket",
            ],
        ),
        override_rule(
            "training.injury.back_active",
            PlanSlot::Training,
            with_injury(unhealed(InjuryType::Back)),
            &[
                "Pull axial loading from the plan; hinge patterns return pain-free and bodyweight-first",
            ],
            &["training.sport.weightlifting", "training.sport.gymnastics"],
        ),
        override_rule(
            "training.injury.hamstring_active",
            PlanSlot::Training,
            with_injury(unhealed(InjuryType::Hamstring)),
            &[
                "No sprinting until eccentric hamstring strength returns; progress through isometrics, then Nordic curls",
            ],
            &["training.sport.running", "training.sport.football"],
        ),
        override_rule(
            "training.injury.severe_active",
            PlanSlot::Training,
            with_injury(InjuryCondition {
                injury_type: None,
                severity: Some(InjurySeverity::Severe),
                status: StatusCondition::Unhealed,
            }),
            &["Suspend structured training until a clinician clears progressive loading"],
            &[
                "training.level.advanced",
                "training.level.elite",
                "training.level.professional",
            ],
        ),
        rule(
            "nutrition.injury.active",
            PlanSlot::Nutrition,
            with_injury(InjuryCondition {
                injury_type: None,
                severity: None,
                status: StatusCondition::Unhealed,
            }),
            &[
                "Hold protein at the high end, around 2 grams per kilogram daily, and resist cutting energy while tissue heals",
            ],
        ),
    ]
}

/// Recovery-slot rules, evaluated once per injury record
fn recovery_rules() -> Vec<Rule> {
    let slot = PlanSlot::InjuryRecovery;
    vec![
        rule(
            "recovery.knee",
            slot,
            with_injury(unhealed(InjuryType::Knee)),
            &[
                "Knee: quad sets and terminal knee extensions daily; add step-downs once they are pain-free",
            ],
        ),
        rule(
            "recovery.ankle",
            slot,
            with_injury(unhealed(InjuryType::Ankle)),
            &[
                "Ankle: restore dorsiflexion range first, then single-leg balance work on a firm surface",
            ],
        ),
        rule(
            "recovery.shoulder",
            slot,
            with_injury(unhealed(InjuryType::Shoulder)),
            &[
                "Shoulder: scapular control and external rotation strength before any overhead loading",
            ],
        ),
        rule(
            "recovery.elbow",
            slot,
            with_injury(unhealed(InjuryType::Elbow)),
            &[
                "Elbow: eccentric wrist extensor work and grip-load management; review racquet or bar technique",
            ],
        ),
        rule(
            "recovery.wrist",
            slot,
            with_injury(unhealed(InjuryType::Wrist)),
            &[
                "Wrist: keep pain-free range moving, avoid provocative positions, and rebuild load gradually",
            ],
        ),
        rule(
            "recovery.back",
            slot,
            with_injury(unhealed(InjuryType::Back)),
            &[
                "Back: walk often, groove a pain-free hinge with a dowel, and build isometric trunk endurance",
            ],
        ),
        rule(
            "recovery.hamstring",
            slot,
            with_injury(unhealed(InjuryType::Hamstring)),
            &[
                "Hamstring: start isometric bridges early and progress to eccentric sliders before any sprinting",
            ],
        ),
        rule(
            "recovery.shin",
            slot,
            with_injury(unhealed(InjuryType::Shin)),
            &[
                "Shin: cut impact volume hard, rebuild calf and foot capacity with raises, and return to running on soft surfaces",
            ],
        ),
        rule(
            "recovery.severe",
            slot,
            with_injury(InjuryCondition {
                injury_type: None,
                severity: Some(InjurySeverity::Severe),
                status: StatusCondition::Unhealed,
            }),
            &[
                "Severe injury on file: progress only under clinical guidance and keep follow-ups on schedule",
            ],
        ),
        rule(
            "recovery.chronic",
            slot,
            with_injury(InjuryCondition {
                injury_type: None,
                severity: None,
                status: StatusCondition::Is(RecoveryStatus::Chronic),
            }),
            &[
                "Chronic condition: set a weekly load ceiling and track symptoms against it; a flare-up means the ceiling dropped",
            ],
        ),
        rule(
            "recovery.cleared",
            slot,
            with_injury(InjuryCondition {
                injury_type: None,
                severity: None,
                status: StatusCondition::Is(RecoveryStatus::Healed),
            }),
            &[
                "Cleared injury: reintroduce the removed patterns one at a time and watch for next-day reactions",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_id_is_unique() {
        let rules = build();
        let mut seen = std::collections::HashSet::new();
        for rule in &rules {
            assert!(seen.insert(rule.id.clone()), "duplicate id {}", rule.id);
        }
    }

    #[test]
    fn base_rules_precede_injury_rules() {
        let rules = build();
        let first_injury = rules
            .iter()
            .position(Rule::is_injury_gated)
            .unwrap_or(rules.len());
        assert!(
            rules[first_injury..].iter().all(Rule::is_injury_gated),
            "base rule found after the injury-gated section"
        );
    }

    #[test]
    fn recovery_slot_rules_are_all_injury_gated() {
        for rule in build() {
            if rule.slot == PlanSlot::InjuryRecovery {
                assert!(rule.is_injury_gated(), "{} is not injury-gated", rule.id);
                assert!(rule.overrides.is_empty(), "{} overrides", rule.id);
            }
        }
    }
}
