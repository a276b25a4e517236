use crate::models::Totals;

const INSTRUCTIONS: &str = "\
You are a nutrition assistant helping people improve a specific meal based on what is actually in it.

TASK:
Using the meal's nutrient totals and food items below, give 1-3 concrete suggestions that would make the meal healthier, even if it is already reasonable. Prefer 1-2 bullet points.

GUIDELINES:
- Rarely suggest replacing an item outright. At most suggest a smaller portion unless the item ruins the meal.
- Prefer healthier ways to cook or prepare the foods over substitutes. Ignore sodium.
- Stay aware of the foods involved. If the meal is all candy, do not suggest chicken or vegetables; suggest portion control or trading some candy for nuts, dark chocolate or Greek yogurt.
- Be realistic and approachable, not strict.
- Begin with: \"Here are some ideas to improve your meal:\"
- Do not restate nutrient problems (like \"high sugar\").
- Avoid generic advice like \"add more protein\"; name foods.
- Keep the tone friendly, short and actionable.";

/// Build the advice prompt from a meal's totals and item names.
pub fn build_prompt(totals: &Totals, names: &[String]) -> String {
    format!(
        "{INSTRUCTIONS}\n\n\
         NUTRIENT TOTALS:\n\
         Calories: {} kcal\n\
         Protein: {} g\n\
         Carbs: {} g\n\
         Fat: {} g\n\
         Sugar: {} g\n\n\
         FOOD ITEMS:\n\
         {}\n",
        totals.calories,
        totals.protein,
        totals.carbs,
        totals.fat,
        totals.sugar,
        names.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_totals_and_items() {
        let totals = Totals {
            calories: 612.5,
            protein: 22.0,
            carbs: 80.25,
            fat: 18.0,
            sugar: 31.0,
            items: 2,
        };
        let names = vec!["Pancakes (150g)".to_string(), "Maple syrup (40g)".to_string()];
        let prompt = build_prompt(&totals, &names);

        assert!(prompt.contains("Calories: 612.5 kcal"));
        assert!(prompt.contains("Carbs: 80.25 g"));
        assert!(prompt.contains("FOOD ITEMS:\nPancakes (150g), Maple syrup (40g)"));
        assert!(prompt.contains("Here are some ideas to improve your meal:"));
    }
}
