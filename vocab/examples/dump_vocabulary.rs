//! Walks the vocabulary class by class and prints the default `@context`.
//!
//! Run with: `cargo run --example dump_vocabulary -p asld-vocab`

use asld_vocab::serializer::jsonld;
use asld_vocab::Vocabulary;

fn main() {
    let vocab = Vocabulary::full();
    println!(
        "vocabulary {}: {} classes, {} properties",
        vocab.version,
        vocab.class_count(),
        vocab.property_count()
    );

    for class in vocab.classes() {
        let own: Vec<&str> = vocab.declared_properties(class).map(|p| p.name).collect();
        let parents = if class.subclass_of.is_empty() {
            String::new()
        } else {
            format!(" < {}", class.subclass_of.join(", "))
        };
        println!("{}{parents}", class.name);
        if !own.is_empty() {
            println!("    {}", own.join(" "));
        }
    }

    match serde_json::to_string_pretty(&jsonld::default_context(vocab)) {
        Ok(context) => println!("\n@context: {context}"),
        Err(e) => eprintln!("cannot render context: {e}"),
    }
}
