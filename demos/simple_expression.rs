use log::debug;
use rpn_calc::evaluate_expression;
use rpn_calc::rpn::{PostfixEvaluator, ShuntingYard};

fn main() {
    pretty_env_logger::init();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    match ShuntingYard::convert(expr) {
        Ok(postfix) => {
            debug!("postfix tokens: {:?}", postfix.tokens());
            println!("{} => {}", expr, postfix);
            println!("Result: {:?}", postfix.evaluate());
        }
        Err(e) => println!("Error: {}", e),
    }

    println!("Result: {:?}", PostfixEvaluator::evaluate_str("-3 4 2 * +"));

    for expr in ["3 + 4 * 2", "10 / 0", "(1 + 2", "3 & 4"] {
        match evaluate_expression(expr) {
            Ok(result) => println!("{}: Result: {}", expr, result),
            Err(err) => println!("{}: Error: {}", expr, err),
        }
    }
}
