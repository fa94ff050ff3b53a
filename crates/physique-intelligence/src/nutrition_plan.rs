// ABOUTME: Nutrition plan generation combining calculated targets with static per-goal tables
// ABOUTME: Meal suggestions and guidelines are constants; calories and macros are rounded once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::NutritionConfig;
use crate::nutrition_calculator::NutritionTargets;
use physique_core::errors::PlanError;
use physique_core::models::{Goal, MealPlan, NutritionPlan, Profile, ProfileInput};
use tracing::{debug, error};

struct NutritionTemplate {
    title: &'static str,
    description: &'static str,
    breakfast: &'static [&'static str],
    lunch: &'static [&'static str],
    dinner: &'static [&'static str],
    snacks: &'static [&'static str],
    guidelines: &'static [&'static str],
}

const FAT_LOSS: NutritionTemplate = NutritionTemplate {
    title: "Fat Loss Nutrition Plan",
    description: "A moderate calorie deficit with high protein to preserve lean mass while losing fat",
    breakfast: &[
        "Egg white omelette with spinach and mushrooms",
        "Greek yogurt with berries and a sprinkle of oats",
        "Protein smoothie with banana and almond milk",
    ],
    lunch: &[
        "Grilled chicken salad with mixed greens and olive oil dressing",
        "Turkey and vegetable wrap on a whole-wheat tortilla",
        "Tuna poke bowl with brown rice and edamame",
    ],
    dinner: &[
        "Baked salmon with roasted broccoli and quinoa",
        "Lean beef stir-fry with peppers and cauliflower rice",
        "Chicken breast with sweet potato and green beans",
    ],
    snacks: &[
        "Cottage cheese with cucumber slices",
        "Apple with a tablespoon of peanut butter",
        "Hard-boiled eggs",
        "Protein bar under 200 kcal",
    ],
    guidelines: &[
        "Keep a consistent daily deficit rather than alternating extreme days",
        "Eat protein at every meal to support satiety and muscle retention",
        "Fill half of each plate with vegetables",
        "Drink at least 2-3 liters of water per day",
        "Limit liquid calories from juice, soda, and alcohol",
        "Reassess intake every 2-3 weeks based on scan trends",
    ],
};

const MUSCLE_GAIN: NutritionTemplate = NutritionTemplate {
    title: "Muscle Gain Nutrition Plan",
    description: "A controlled calorie surplus with ample carbohydrates to fuel training and growth",
    breakfast: &[
        "Oatmeal with whey protein, banana, and walnuts",
        "Whole eggs with whole-grain toast and avocado",
        "Greek yogurt parfait with granola and honey",
    ],
    lunch: &[
        "Chicken burrito bowl with rice, beans, and salsa",
        "Salmon with pasta and pesto vegetables",
        "Lean beef sandwich on whole-grain bread with side salad",
    ],
    dinner: &[
        "Steak with baked potato and asparagus",
        "Turkey meatballs with whole-wheat spaghetti",
        "Chicken thighs with jasmine rice and stir-fried vegetables",
    ],
    snacks: &[
        "Trail mix with nuts and dried fruit",
        "Peanut butter and banana on rice cakes",
        "Chocolate milk after training",
        "Cottage cheese with pineapple",
    ],
    guidelines: &[
        "Aim for a slow weight gain of 0.25-0.5% of body weight per week",
        "Spread protein across 4-5 meals of 25-40 g each",
        "Eat a carbohydrate-rich meal 1-3 hours before training",
        "Have protein and carbohydrates within 2 hours after training",
        "Prioritize 7-9 hours of sleep for recovery",
        "Increase calories by 100-200 kcal if weight stalls for 2 weeks",
    ],
};

const MAINTENANCE: NutritionTemplate = NutritionTemplate {
    title: "Maintenance Nutrition Plan",
    description: "Balanced intake matched to expenditure to sustain current body composition",
    breakfast: &[
        "Scrambled eggs with whole-grain toast and fruit",
        "Overnight oats with chia seeds and berries",
        "Smoothie with spinach, protein powder, and mango",
    ],
    lunch: &[
        "Quinoa bowl with chickpeas, roasted vegetables, and feta",
        "Grilled chicken sandwich with mixed salad",
        "Lentil soup with a whole-grain roll",
    ],
    dinner: &[
        "Grilled fish with brown rice and steamed vegetables",
        "Chicken fajitas with peppers and onions",
        "Tofu stir-fry with noodles and bok choy",
    ],
    snacks: &[
        "Mixed nuts",
        "Hummus with carrot and celery sticks",
        "Greek yogurt with honey",
        "Fresh fruit",
    ],
    guidelines: &[
        "Match intake to activity: eat a little more on training days",
        "Build meals around whole, minimally processed foods",
        "Include a protein source at every meal",
        "Stay hydrated throughout the day",
        "Monitor weight and scan results monthly and adjust if trends drift",
    ],
};

const fn template_for(goal: Goal) -> &'static NutritionTemplate {
    match goal {
        Goal::LoseFat => &FAT_LOSS,
        Goal::GainMuscle => &MUSCLE_GAIN,
        Goal::Maintain => &MAINTENANCE,
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

/// Generate a nutrition plan for a validated profile
///
/// BMR uses Mifflin-St Jeor, TDEE scales it by the activity multiplier, and the
/// goal selects the calorie adjustment and macro split. Numeric outputs are
/// rounded to the nearest integer.
#[must_use]
pub fn generate_nutrition_plan(profile: &Profile, config: &NutritionConfig) -> NutritionPlan {
    let targets = NutritionTargets::for_profile(profile, config);
    let template = template_for(profile.goal);

    debug!(
        goal = %profile.goal,
        bmr = targets.bmr,
        tdee = targets.tdee,
        daily_calories = targets.daily_calories,
        "Calculated nutrition targets"
    );

    NutritionPlan {
        title: template.title.to_owned(),
        description: template.description.to_owned(),
        bmr: targets.rounded_bmr(),
        tdee: targets.rounded_tdee(),
        daily_calories: targets.rounded_calories(),
        macros: targets.macros(),
        meal_plan: MealPlan {
            breakfast: to_owned_list(template.breakfast),
            lunch: to_owned_list(template.lunch),
            dinner: to_owned_list(template.dinner),
            snacks: to_owned_list(template.snacks),
        },
        guidelines: to_owned_list(template.guidelines),
    }
}

/// Generate a nutrition plan from an untrusted request
///
/// # Errors
///
/// Returns `PlanError::InvalidGoal` when the goal is not recognized, or another
/// `PlanError` naming the first invalid field
pub fn generate_nutrition_plan_from_request(
    request: &ProfileInput,
    config: &NutritionConfig,
) -> Result<NutritionPlan, PlanError> {
    let profile = request.resolve_for_plan().map_err(|e| {
        if let PlanError::InvalidGoal(goal) = &e {
            error!(goal = %goal, "Nutrition plan requested with unrecognized goal");
        }
        e
    })?;
    Ok(generate_nutrition_plan(&profile, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use physique_core::models::{ActivityLevel, Sex};

    fn reference_profile() -> Profile {
        Profile {
            height_cm: 170.0,
            weight_kg: 70.0,
            age_years: 30,
            sex: Sex::Male,
            goal: Goal::Maintain,
            activity_level: ActivityLevel::Moderate,
            body_fat_percentage: None,
        }
    }

    #[test]
    fn test_reference_plan() {
        let plan = generate_nutrition_plan(&reference_profile(), &NutritionConfig::default());
        assert_eq!(plan.bmr, 1753);
        assert_eq!(plan.tdee, 2716);
        assert_eq!(plan.daily_calories, 2716);
        assert_eq!(plan.macros.protein_g, 112);
        assert_eq!(plan.title, "Maintenance Nutrition Plan");
    }

    #[test]
    fn test_every_goal_has_complete_tables() {
        for goal in Goal::ALL {
            let mut profile = reference_profile();
            profile.goal = goal;
            let plan = generate_nutrition_plan(&profile, &NutritionConfig::default());
            assert!(!plan.meal_plan.breakfast.is_empty());
            assert!(!plan.meal_plan.lunch.is_empty());
            assert!(!plan.meal_plan.dinner.is_empty());
            assert!(!plan.meal_plan.snacks.is_empty());
            assert!(!plan.guidelines.is_empty());
        }
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let mut request = ProfileInput::from(&reference_profile());
        request.goal = "invalid".to_owned();
        let err =
            generate_nutrition_plan_from_request(&request, &NutritionConfig::default()).unwrap_err();
        assert_eq!(err, PlanError::InvalidGoal("invalid".to_owned()));
    }

    #[test]
    fn test_request_without_activity_level_rejected() {
        let mut request = ProfileInput::from(&reference_profile());
        request.activity_level = None;
        let err =
            generate_nutrition_plan_from_request(&request, &NutritionConfig::default()).unwrap_err();
        assert_eq!(err, PlanError::MissingActivityLevel);
    }
}
