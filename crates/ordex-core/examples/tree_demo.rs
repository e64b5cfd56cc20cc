use ordex_core::{BPlusTree, InsertResult};

fn print_tree(tree: &BPlusTree<i32, String>) {
    for (depth, keys) in tree.dump() {
        println!("{}Node(keys={:?})", "  ".repeat(depth), keys);
    }
}

fn main() {
    println!("B+ Tree Demo\n");

    let mut tree = BPlusTree::new(3).expect("order 3 is valid");
    println!("Created tree with order=3");
    println!("Empty: {}, Len: {}\n", tree.is_empty(), tree.len());

    println!("Inserting first wave...");
    for i in [10, 20, 5, 6, 15, 30, 25, 3, 1] {
        tree.insert(i, format!("value_{}", i));
        println!("  Inserted {} => value_{}", i, i);
    }
    print_tree(&tree);
    println!("Length: {}\n", tree.len());

    println!("Search operations:");
    for i in [15, 6, 100] {
        match tree.get(&i) {
            Some(v) => println!("  get({}) = {}", i, v),
            None => println!("  get({}) = None", i),
        }
    }

    println!("\nDuplicate insert:");
    if tree.insert(15, "again".to_string()) == InsertResult::DuplicateIgnored {
        println!("  15 already present, ignored");
    }
    println!("  Length: {}\n", tree.len());

    println!("Inserting second wave...");
    for i in [12, 18, 17, 4, 8] {
        tree.insert(i, format!("value_{}", i));
        println!("  Inserted {} => value_{}", i, i);
    }
    print_tree(&tree);

    println!("\nRange query [6, 18]:");
    let keys: Vec<_> = tree.range(&6, &18).map(|(k, _)| k).collect();
    println!("  Result: {:?}", keys);

    println!("\nRemove operations:");
    for i in [10, 20, 10] {
        match tree.remove(&i) {
            Some(v) => println!("  Removed {} => {}", i, v),
            None => println!("  Key {} not found", i),
        }
    }
    println!("\nFinal tree:");
    print_tree(&tree);
    println!("Length: {}", tree.len());
}
