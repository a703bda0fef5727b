//! The fixed demo script: build a list, shrink it, remove from the middle,
//! then run lookups.

use std::io::Write;

use anyhow::{Context, Result};
use arraylist::{Contact, DynamicArray};
use log::info;

/// Contacts inserted by [`run`], in order.
pub const DEMO_CONTACTS: [(u64, &str); 8] = [
    (1, "hello"),
    (2, "how"),
    (3, "are"),
    (4, "you"),
    (5, "doing"),
    (6, "on"),
    (7, "this"),
    (8, "fine day"),
];

const POP_COUNT: usize = 4;
const REMOVE_INDEX: usize = 2;

/// Runs the script against a list of the given initial capacity, writing the
/// listing and search results to `out`.
pub fn run<W: Write>(out: &mut W, capacity: usize, searches: &[String]) -> Result<()> {
    let mut list = DynamicArray::with_capacity(capacity).context("Failed to create list")?;

    writeln!(out, "[Inserting into list]")?;
    for (id, name) in DEMO_CONTACTS {
        list.push(Contact::new(id, name))
            .with_context(|| format!("Failed to insert contact {id}"))?;
    }
    info!("inserted {} contacts, capacity {}", list.len(), list.capacity());
    list.print_all(out)?;

    writeln!(out, "[removing {POP_COUNT} items with pop]")?;
    for _ in 0..POP_COUNT {
        list.pop_back().context("Failed to pop")?;
    }
    list.print_all(out)?;

    writeln!(out, "\n[removing idx {REMOVE_INDEX} ]")?;
    list.remove_at(REMOVE_INDEX)
        .with_context(|| format!("Failed to remove index {REMOVE_INDEX}"))?;
    list.print_all(out)?;

    for name in searches {
        let found = match list.search(name) {
            Some(index) => index.to_string(),
            None => "-1".to_string(),
        };
        writeln!(out, "Searching for '{name}' returns: {found}")?;
    }

    list.destroy();
    Ok(())
}
