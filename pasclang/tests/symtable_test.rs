use pasclang::symtable::{OrderedSymbolTable, SymbolTable, TreeSymbolTable};
use rstest::*;

fn distinct_names() -> Vec<String> {
	// 37 is coprime to 200, so this visits every index once, out of order
	(0..200).map(|i| format!("id{:03}", (i * 37) % 200)).collect()
}

fn check_all_found<T: SymbolTable>(mut table: T, names: &[String]) {
	let keys: Vec<_> = names.iter().map(|name| table.insert_if_absent(name)).collect();
	assert_eq!(table.len(), names.len());
	for (name, key) in names.iter().zip(keys) {
		assert_eq!(table.search(name), Some(key), "{} not found", name);
		assert_eq!(table.entry(key).name(), name);
	}
	for missing in ["", "id", "id200", "ID001", "zzz"] {
		assert_eq!(table.search(missing), None, "{} should be absent", missing);
	}
}

#[rstest]
#[case::tree(TreeSymbolTable::new())]
fn inserted_names_are_found_in_tree(#[case] table: TreeSymbolTable) {
	check_all_found(table, &distinct_names());
}

#[rstest]
#[case::ordered(OrderedSymbolTable::new())]
fn inserted_names_are_found_in_ordered_table(#[case] table: OrderedSymbolTable) {
	check_all_found(table, &distinct_names());
}

#[rstest]
#[case::increasing(false)]
#[case::decreasing(true)]
fn sorted_insertion_degenerates_to_chain(#[case] reverse: bool, #[values(1, 2, 17, 64)] count: usize) {
	let mut names: Vec<String> = (0..count).map(|i| format!("n{:04}", i)).collect();
	if reverse {
		names.reverse();
	}
	let mut table = TreeSymbolTable::new();
	for name in &names {
		table.insert_if_absent(name);
	}
	assert_eq!(table.depth(), count);
}

#[test]
fn shuffled_insertion_stays_shallow() {
	let mut table = TreeSymbolTable::new();
	for name in distinct_names() {
		table.insert_if_absent(&name);
	}
	assert!(table.depth() < table.len() / 4, "depth {}", table.depth());
}

#[rstest]
#[case(&["m", "c", "x", "a"])]
#[case(&["same"])]
#[case(&["b", "a", "b", "c", "a"])]
fn in_order_keys_are_sorted(#[case] names: &[&str]) {
	let mut tree = TreeSymbolTable::new();
	let mut ordered = OrderedSymbolTable::new();
	for name in names {
		tree.insert_if_absent(name);
		ordered.insert_if_absent(name);
	}
	let tree_names: Vec<_> = tree.sorted_keys().into_iter().map(|k| tree.entry(k).name().to_string()).collect();
	let ordered_names: Vec<_> = ordered
		.sorted_keys()
		.into_iter()
		.map(|k| ordered.entry(k).name().to_string())
		.collect();

	let mut expected: Vec<String> = names.iter().map(|s| s.to_string()).collect();
	expected.sort();
	expected.dedup();
	assert_eq!(tree_names, expected);
	assert_eq!(ordered_names, expected);
}

// Search before insertion already finds the earlier entry, so a second
// insert of the same name has nothing to create.
#[test]
fn reinsertion_is_found_by_the_same_walk() {
	let mut table = TreeSymbolTable::new();
	for name in ["k", "d", "p", "d"] {
		let found = table.search(name);
		let key = table.insert_if_absent(name);
		if let Some(existing) = found {
			assert_eq!(existing, key);
		}
	}
	assert_eq!(table.len(), 3);
	assert_eq!(table.depth(), 2);
}
