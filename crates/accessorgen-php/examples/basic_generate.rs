//! Basic example of generating accessors into a PHP class

use accessorgen_api::{Editor, GeneratorConfig, InMemoryEditor, MessageKind, Position};
use accessorgen_php::{Command, Resolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = r#"<?php
namespace App\Models;

class Invoice
{
    /**
     * Amount due, in cents
     *
     * @var int
     */
    private $total = 0;

    private ?Customer $customer = null;

    private bool $paid = false;
}
"#;

    // One cursor on each property, plus one outside of any declaration
    let mut editor = InMemoryEditor::new("php", source).with_selections(vec![
        Position::new(10, 14),
        Position::new(12, 22),
        Position::new(14, 17),
        Position::new(0, 0),
    ]);

    // Settings usually come from the host; tighten the tag spacing here
    let config = GeneratorConfig::from_json(r#"{"spacesAfterParam": 1, "spacesAfterReturn": 1}"#)?;
    let resolver = Resolver::new(&editor, config)?;

    resolver.run(Command::InsertGetterAndSetter, &mut editor)?;

    println!("{}", editor.text());
    for message in editor.messages_of(MessageKind::Error) {
        eprintln!("{message}");
    }
    if let Some(line) = editor.revealed_line() {
        println!("Cursor moved to line {} of {}", line + 1, editor.lines().len());
    }

    Ok(())
}
