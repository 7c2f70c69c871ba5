use std::time::Duration;

use dietlp_optimizer::{
    DietOptimizer, Food, FoodCatalog, MacroNutrients, MacroTargets, NutrientRange, NutritionTargets, OptimizeError, OptimizerConfig,
    Outcome, PriceList, SolutionStatus, SolveOptions, macro_targets,
};

const EPS: f64 = 1e-6;

fn chicken() -> Food {
    Food::new("Chicken, broilers or fryers, breast, meat only, cooked, roasted")
        .with_category("Poultry Products")
        .with_nutrient("Protein", 31.0, "g")
        .with_nutrient("Energy", 165.0, "kcal")
        .with_nutrient("Total lipid (fat)", 3.6, "g")
}

fn rice() -> Food {
    Food::new("Rice, white, long-grain, regular, enriched, cooked")
        .with_category("Cereal Grains and Pasta")
        .with_nutrient("Protein", 2.7, "g")
        .with_nutrient("Energy", 130.0, "kcal")
        .with_nutrient("Carbohydrate, by difference", 28.2, "g")
        .with_nutrient("Total lipid (fat)", 0.3, "g")
}

fn olive_oil() -> Food {
    Food::new("Oil, olive, salad or cooking")
        .with_category("Fats and Oils")
        .with_nutrient("Energy", 884.0, "kcal")
        .with_nutrient("Total lipid (fat)", 100.0, "g")
}

fn chicken_and_rice() -> (FoodCatalog, PriceList) {
    let foods = FoodCatalog::from([("chicken".to_string(), chicken()), ("rice".to_string(), rice())]);
    let prices = PriceList::from([("chicken".to_string(), 5.99), ("rice".to_string(), 2.49)]);
    (foods, prices)
}

fn scenario_a_targets() -> NutritionTargets {
    NutritionTargets::from([
        ("Protein".to_string(), NutrientRange::between(100.0, 120.0)),
        ("Energy".to_string(), NutrientRange::between(1900.0, 2100.0)),
    ])
}

// Under a 1000 g cap the rice runs out: 1000 g rice plus the 300 g of chicken
// the protein ceiling allows only reach 1795 kcal
fn scenario_a_options() -> SolveOptions {
    SolveOptions::default().with_max_quantity_per_food(2000.0)
}

fn assert_invariants(result: &dietlp_optimizer::OptimizationResult, prices: &PriceList, cap: f64) {
    assert!(result.total_cost >= 0.0);
    assert_eq!(result.num_foods, result.selected_foods.len());
    for (key, selected) in &result.selected_foods {
        assert!(selected.quantity_grams > 0.1, "{} below materiality", key);
        assert!(selected.quantity_grams <= cap + EPS, "{} above cap", key);
        let expected = prices.get(key).map(|p| p * selected.quantity_grams / 453.6).unwrap_or(0.0);
        assert!((selected.price - expected).abs() < 1e-9);
    }
    for (nutrient, range) in &result.targets {
        let total = result.total_nutrients[nutrient];
        let slack = EPS * (1.0 + total.abs());
        assert!(range.contains(total, slack), "{} = {} outside {:?}", nutrient, total, range);
    }
    let summed: f64 = result.selected_foods.values().map(|s| s.price).sum();
    assert!((summed - result.total_cost).abs() < 1e-6, "cost {} vs prices {}", result.total_cost, summed);
}

#[test]
fn test_scenario_a_chicken_and_rice() {
    let (foods, prices) = chicken_and_rice();
    let targets = scenario_a_targets();

    let result = DietOptimizer::default()
        .optimize(&foods, &prices, &targets, scenario_a_options())
        .unwrap()
        .expect("feasible diet");

    assert!(result.total_cost > 0.0);
    let protein = result.total_nutrients["Protein"];
    assert!((100.0 - EPS..=120.0 + EPS).contains(&protein), "protein = {}", protein);
    assert_eq!(result.targets, targets);
    assert_invariants(&result, &prices, 2000.0);
    assert!(result.meets_targets(EPS * 1e3));
}

#[test]
fn test_scenario_a_default_cap_is_infeasible() {
    let (foods, prices) = chicken_and_rice();

    let result = DietOptimizer::default()
        .optimize(&foods, &prices, &scenario_a_targets(), SolveOptions::default())
        .unwrap();

    assert!(result.is_none());
}

#[test]
fn test_scenario_b_unreachable_minimum() {
    let foods = FoodCatalog::from([("chicken".to_string(), chicken())]);
    let prices = PriceList::from([("chicken".to_string(), 5.99)]);
    let targets = NutritionTargets::from([("Protein".to_string(), NutrientRange::at_least(500.0))]);
    let optimizer = DietOptimizer::default();

    let result = optimizer
        .optimize(&foods, &prices, &targets, SolveOptions::default())
        .unwrap();
    assert!(result.is_none());

    match optimizer.solve(&foods, &prices, &targets, SolveOptions::default()).unwrap() {
        Outcome::NoSolution { status, violations } => {
            assert_eq!(status, SolutionStatus::Infeasible);
            assert_eq!(violations[0].constraint, "Min_Protein");
        }
        Outcome::Optimal(_) => panic!("500 g protein is out of reach of 1000 g chicken"),
    }
}

#[test]
fn test_scenario_c_macro_targets_echoed() {
    let foods = FoodCatalog::from([
        ("chicken".to_string(), chicken()),
        ("rice".to_string(), rice()),
        ("olive_oil".to_string(), olive_oil()),
    ]);
    let prices = PriceList::from([
        ("chicken".to_string(), 5.99),
        ("rice".to_string(), 2.49),
        ("olive_oil".to_string(), 8.99),
    ]);
    let macros = MacroTargets {
        calories: 2000.0,
        protein_g: 150.0,
        carbs_g: 200.0,
        fat_g: 65.0,
    };
    let optimizer = DietOptimizer::default();

    let result = optimizer
        .optimize_for_macros(&foods, &prices, &macros, 0.1)
        .unwrap()
        .expect("chicken, rice and oil cover every macro");

    assert_eq!(result.targets.len(), 4);
    assert_eq!(result.targets["Protein"], NutrientRange::between(135.0, 165.0));
    assert_eq!(
        result.targets,
        macro_targets(&optimizer.config().macro_nutrients, &macros, 0.1)
    );
    assert_invariants(&result, &prices, 1000.0);
}

#[test]
fn test_scenario_d_empty_catalog() {
    let result = DietOptimizer::default().optimize(
        &FoodCatalog::new(),
        &PriceList::new(),
        &scenario_a_targets(),
        SolveOptions::default(),
    );

    assert_eq!(result, Err(OptimizeError::EmptyCatalog));
}

#[test]
fn test_scenario_e_unpriced_food_is_free() {
    let foods = FoodCatalog::from([
        ("chicken".to_string(), chicken()),
        (
            "tofu".to_string(),
            Food::new("Tofu, raw, firm").with_nutrient("Protein", 8.0, "g"),
        ),
    ]);
    let prices = PriceList::from([("chicken".to_string(), 5.99)]);
    let targets = NutritionTargets::from([("Protein".to_string(), NutrientRange::at_least(50.0))]);

    let result = DietOptimizer::default()
        .optimize(&foods, &prices, &targets, SolveOptions::default())
        .unwrap()
        .unwrap();

    let tofu = &result.selected_foods["tofu"];
    assert_eq!(tofu.price, 0.0);
    assert!((tofu.quantity_grams - 625.0).abs() < 1e-6);
    assert!(result.total_cost.abs() < 1e-12);
    assert!(!result.selected_foods.contains_key("chicken"));
}

#[test]
fn test_idempotent() {
    let (foods, prices) = chicken_and_rice();
    let targets = scenario_a_targets();
    let optimizer = DietOptimizer::default();

    let first = optimizer
        .optimize(&foods, &prices, &targets, scenario_a_options())
        .unwrap()
        .unwrap();
    let second = optimizer
        .optimize(&foods, &prices, &targets, scenario_a_options())
        .unwrap()
        .unwrap();

    assert_eq!(first.total_cost, second.total_cost);
    assert_eq!(first.total_nutrients, second.total_nutrients);
}

#[test]
fn test_widening_never_raises_cost() {
    let (foods, prices) = chicken_and_rice();
    let optimizer = DietOptimizer::default();
    let narrow = scenario_a_targets();
    let wide = NutritionTargets::from([
        ("Protein".to_string(), NutrientRange::between(90.0, 130.0)),
        ("Energy".to_string(), NutrientRange::between(1800.0, 2200.0)),
    ]);
    let open = NutritionTargets::from([
        ("Protein".to_string(), NutrientRange::at_least(90.0)),
        ("Energy".to_string(), NutrientRange::at_least(1800.0)),
    ]);

    let costs: Vec<f64> = [narrow, wide, open]
        .iter()
        .map(|targets| {
            optimizer
                .optimize(&foods, &prices, targets, scenario_a_options())
                .unwrap()
                .unwrap()
                .total_cost
        })
        .collect();

    assert!(costs[1] <= costs[0] + 1e-9, "{:?}", costs);
    assert!(costs[2] <= costs[1] + 1e-9, "{:?}", costs);
}

#[test]
fn test_time_limit_reports_no_solution() {
    let (foods, prices) = chicken_and_rice();
    let options = scenario_a_options().with_time_limit(Duration::ZERO);
    let optimizer = DietOptimizer::default();

    assert_eq!(
        optimizer.optimize(&foods, &prices, &scenario_a_targets(), options),
        Ok(None)
    );
    let outcome = optimizer
        .solve(&foods, &prices, &scenario_a_targets(), options)
        .unwrap();
    assert_eq!(outcome.status(), SolutionStatus::TimeLimit);
}

#[test]
fn test_one_sided_and_empty_ranges() {
    let (foods, prices) = chicken_and_rice();
    let targets = NutritionTargets::from([
        ("Protein".to_string(), NutrientRange::at_least(62.0)),
        ("Energy".to_string(), NutrientRange::at_most(5000.0)),
        ("Fiber, total dietary".to_string(), NutrientRange::default()),
    ]);

    let result = DietOptimizer::default()
        .optimize(&foods, &prices, &targets, SolveOptions::default())
        .unwrap()
        .unwrap();

    // Chicken is the cheaper protein: 200 g
    assert!((result.quantity("chicken") - 200.0).abs() < 1e-6);
    assert_eq!(result.total_nutrients["Fiber, total dietary"], 0.0);
    assert_invariants(&result, &prices, 1000.0);
}

#[test]
fn test_zero_tolerance_collapses_to_points() {
    let (foods, prices) = chicken_and_rice();
    let optimizer = DietOptimizer::default();

    let result = optimizer.optimize_for_macros(&foods, &prices, &MacroTargets::default(), 0.0);
    assert_eq!(result, Ok(None));

    let targets = macro_targets(&MacroNutrients::default(), &MacroTargets::default(), 0.0);
    assert_eq!(targets["Protein"], NutrientRange::between(150.0, 150.0));
    for range in targets.values() {
        assert_eq!(range.min, range.max);
    }

    // Two foods cannot hit four exact totals at once
    match optimizer.solve(&foods, &prices, &targets, SolveOptions::default()).unwrap() {
        Outcome::NoSolution { status, .. } => assert_eq!(status, SolutionStatus::Infeasible),
        Outcome::Optimal(result) => panic!("point targets met exactly: {:?}", result.total_nutrients),
    }
}

#[test]
fn test_wide_tolerance_passes_through() {
    let (foods, prices) = chicken_and_rice();

    let result = DietOptimizer::default()
        .optimize_for_macros(&foods, &prices, &MacroTargets::default(), 1.5)
        .unwrap()
        .unwrap();

    // Every minimum is negative, so buying nothing is optimal
    assert_eq!(result.num_foods, 0);
    assert!(result.total_cost.abs() < 1e-12);
    assert!((result.targets["Protein"].min.unwrap() + 75.0).abs() < 1e-9);
}

#[test]
fn test_custom_macro_names() {
    let names = dietlp_optimizer::MacroNutrients {
        energy: "kcal".to_string(),
        protein: "protein".to_string(),
        carbohydrate: "carbs".to_string(),
        fat: "fat".to_string(),
    };
    let foods = FoodCatalog::from([(
        "shake".to_string(),
        Food::new("Meal replacement shake")
            .with_nutrient("kcal", 200.0, "kcal")
            .with_nutrient("protein", 15.0, "g")
            .with_nutrient("carbs", 20.0, "g")
            .with_nutrient("fat", 6.5, "g"),
    )]);
    let prices = PriceList::from([("shake".to_string(), 4.0)]);
    let optimizer = DietOptimizer::new(OptimizerConfig::default().with_macro_nutrients(names));

    let result = optimizer
        .optimize_for_macros(&foods, &prices, &MacroTargets::default(), 0.1)
        .unwrap()
        .expect("1000 g of shake hits every macro exactly");

    assert!(result.targets.contains_key("protein"));
    assert!(!result.targets.contains_key("Protein"));
    // The cheapest point is the 90% floor: 900 g
    assert!((result.quantity("shake") - 900.0).abs() < 1e-6);
    assert!(result.total_nutrients["kcal"] >= 1800.0 - EPS);
}

#[test]
fn test_concurrent_solves_agree() {
    let (foods, prices) = chicken_and_rice();
    let targets = scenario_a_targets();
    let optimizer = DietOptimizer::default();

    let expected = optimizer
        .optimize(&foods, &prices, &targets, scenario_a_options())
        .unwrap()
        .unwrap()
        .total_cost;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    optimizer
                        .optimize(&foods, &prices, &targets, scenario_a_options())
                        .unwrap()
                        .unwrap()
                        .total_cost
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
