use rpn_calc::evaluate_batch;

fn main() {
    pretty_env_logger::init();

    let expressions = vec![
        "1 + 2 * 3",
        "(1 + 2) * 3",
        "100 / (5 - 5)",
        "2.5 * 4 - 1",
    ];

    for (i, result) in evaluate_batch(&expressions).iter().enumerate() {
        println!("Result {}: {:?}", i, result);
    }
}
