use linked_list::LinkedList;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG overrides the default level.
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let mut animals = zoo();
    info!("Built list with {} animals", animals.len());
    println!("{}", animals);

    if let Some(popped) = animals.pop() {
        info!("Popped {}", popped);
    }
    println!("{}", animals);

    Ok(())
}

fn zoo() -> LinkedList<&'static str> {
    let mut animals = LinkedList::new();
    animals.prepend("Monkey");
    animals.prepend("Dog");
    animals.prepend("Cat");
    animals.prepend("Bird");
    animals.append("Penguin");
    animals
}

#[test]
fn test_zoo() {
    let mut animals = zoo();
    assert_eq!(
        animals.to_string(),
        "(Bird) -> (Cat) -> (Dog) -> (Monkey) -> (Penguin) -> null"
    );
    assert_eq!(animals.pop(), Some("Penguin"));
    assert_eq!(
        animals.to_string(),
        "(Bird) -> (Cat) -> (Dog) -> (Monkey) -> null"
    );
}

#[test]
fn test_zoo_edits() {
    let mut animals = zoo();
    animals.insert_at("Zebra", 2).unwrap();
    assert_eq!(animals.remove_at(0), Ok("Bird"));
    assert!(animals.contains(&"Zebra"));
    let after_zebra = animals.find(&"Zebra").and_then(|node| node.next());
    assert_eq!(after_zebra.map(|node| *node.value()), Some("Dog"));
    assert!(animals.insert_at("Yak", 99).is_err());
    assert_eq!(animals.len(), 5);
}
