use wordchain_core::io::read_file;
use wordchain_core::model::frequency_model::FrequencyModel;
use wordchain_core::model::generator::Generator;
use wordchain_core::tokenizer::tokens;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Read the whole corpus; the tokenizer handles newlines itself
    let text = read_file("./data/corpus.txt")?;

    // Depth is the window size: two words of context plus the next word.
    // Depth 1 would degenerate to plain word frequencies
    let mut model = FrequencyModel::new(3)?;

    // The token stream is lazy: the sentinel first, then the words of the
    // text split on spaces only
    model.train(tokens(&text));

    // The total weight of the model equals the number of windows trained
    println!("Trained {} windows", model.total_weight());

    // A generator seeded from the OS produces different text on each run
    let mut generator = Generator::new(&model);
    println!("{}", generator.generate(50)?.join(" "));

    // A fixed seed makes generation reproducible: same model, same seed,
    // same output
    let first = Generator::with_seed(&model, 42).generate(20)?;
    let second = Generator::with_seed(&model, 42).generate(20)?;
    assert_eq!(first, second);
    println!("Seeded: {}", first.join(" "));

    // Generating from an untrained model is an error, not empty output
    let empty = FrequencyModel::new(3)?;
    match Generator::new(&empty).generate(10) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("An empty model cannot generate"),
    }

    Ok(())
}
