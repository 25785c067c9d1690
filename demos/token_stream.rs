use formulix_rs::{Cursor, Evaluator};

fn main() {
    pretty_env_logger::init();

    // e.g. a line of a data file: count, width, height
    let line = "3  w=2.5*4  w/2";

    let mut evaluator = Evaluator::new();
    let mut cursor = Cursor::new(line);

    let count = evaluator.evaluate_leading_token_i32(&mut cursor);
    let width = evaluator.evaluate_leading_token(&mut cursor);
    let height = evaluator.evaluate_leading_token(&mut cursor);

    println!("count = {count}, width = {width}, height = {height}");
    println!("total area = {}", f64::from(count) * width * height);
}
