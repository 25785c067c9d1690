use formulix_rs::Evaluator;

fn main() {
    pretty_env_logger::init();

    let formulas = [
        "a = 5^2",
        "a0 = a1 = a2 = sqrt(2)",
        "b + 1",
        "2 * %pi * a",
        "int(-7 / 2)",
        "1/0",
        "asin(1)",
        "(1+2",
    ];

    let mut evaluator = Evaluator::new();
    for formula in formulas {
        let result = evaluator.evaluate(formula);
        match result.error {
            None => println!("{formula:<24} = {}", result.value),
            Some(_) => println!(
                "{formula:<24} ! {} (at {})",
                result.message(),
                result.position
            ),
        }
    }

    let table = evaluator.variables();
    println!("\nVariables ({} of {}):", table.len(), table.capacity());
    let mut index = 0;
    while let Some((name, value)) = evaluator.list_variable(index) {
        println!("  {name} = {value}");
        index += 1;
    }
}
