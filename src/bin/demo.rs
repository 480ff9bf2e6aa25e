//! Demonstration entry point: exercises insert, search, and delete
//! against the public API. Everything here is an external consumer of the
//! table; the container itself lives in the library crate.

use dh_hashmap::DhHashMap;

fn main() {
    let mut table = DhHashMap::new();
    table.insert("key1", "value1");
    table.insert("key2", "value2");

    println!("Search key1: {:?}", table.get("key1"));
    println!("Search key2: {:?}", table.get("key2"));

    table.remove("key1");
    println!("Search key1 after deletion: {:?}", table.get("key1"));

    // The table and all owned entries are released when it goes out of
    // scope.
}
