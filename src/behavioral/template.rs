// Pattern: Template Method
// The preparation skeleton is a plain function; only the steps that vary
// between beverages live behind a trait.

pub trait BeverageRecipe {
    fn name(&self) -> &str;
    fn brew(&self) -> String;
    fn add_condiments(&self) -> String;
}

pub struct Tea;

impl BeverageRecipe for Tea {
    fn name(&self) -> &str {
        "tea"
    }

    fn brew(&self) -> String {
        "Steeping the tea leaves...".to_string()
    }

    fn add_condiments(&self) -> String {
        "Adding lemon...".to_string()
    }
}

pub struct Coffee;

impl BeverageRecipe for Coffee {
    fn name(&self) -> &str {
        "coffee"
    }

    fn brew(&self) -> String {
        "Dripping coffee through filter...".to_string()
    }

    fn add_condiments(&self) -> String {
        "Adding sugar and milk...".to_string()
    }
}

fn boil_water() -> String {
    "Boiling water...".to_string()
}

fn pour_in_cup() -> String {
    "Pouring into cup...".to_string()
}

/// Boil, brew, pour, add condiments. The order never changes.
pub fn make_beverage(recipe: &dyn BeverageRecipe) -> Vec<String> {
    vec![
        boil_water(),
        recipe.brew(),
        pour_in_cup(),
        recipe.add_condiments(),
    ]
}

pub fn run_demo() {
    let recipes: [&dyn BeverageRecipe; 2] = [&Tea, &Coffee];
    for recipe in recipes {
        println!("Making {}:", recipe.name());
        for step in make_beverage(recipe) {
            println!("  {step}");
        }
        println!();
    }
}
