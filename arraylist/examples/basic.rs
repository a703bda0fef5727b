use arraylist::{Contact, DynamicArray, ListError};

fn main() -> Result<(), ListError> {
    println!("--- Growth and Shrink Example ---");
    let mut list = DynamicArray::with_capacity(1)?;

    for i in 1..=5u64 {
        list.push(Contact::new(i * 10, format!("contact {i}")))?;
        println!("Pushed: {}, len: {}, cap: {}", i * 10, list.len(), list.capacity());
    }

    println!("Contacts: {:?}", list.entries().collect::<Vec<_>>());

    while let Ok(contact) = list.pop_back() {
        println!("Popped: {}, len: {}, cap: {}", contact, list.len(), list.capacity());
    }

    list.destroy();
    Ok(())
}
