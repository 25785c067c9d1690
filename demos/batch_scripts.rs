use formulix_rs::batch::evaluate_scripts;
use formulix_rs::EvaluatorConfig;

fn main() {
    pretty_env_logger::init();

    let scripts = vec![
        vec!["r = 2", "area = %pi * r^2"],
        vec!["p = 1000", "loss = p * 0.05", "p - loss"],
        vec!["x = 4", "x / (x - 4)"],
    ];

    let outcomes = evaluate_scripts(&scripts, EvaluatorConfig::default());
    for (i, outcome) in outcomes.iter().enumerate() {
        println!("Script {i}: {:?}", outcome.last_value());
        for (line, evaluation) in outcome.failed_lines() {
            println!("  line {line}: {}", evaluation.message());
        }
        for variable in &outcome.variables {
            println!("  {} = {}", variable.name, variable.value);
        }
    }
}
