mod helpers;

use diet::cli::{lookup, remember};
use helpers::{capture, test_store};

#[test]
fn lookup_is_case_insensitive() {
    let (_tmp, mut store) = test_store();
    remember(&mut store, "Apple Pie", 296.4, "one slice").unwrap();

    for needle in ["apple", "PIE"] {
        let output = capture(|out| lookup(&store, needle, false, out).unwrap());
        assert!(output.starts_with("Found one match:\n\n"), "{needle}: {output}");
        assert!(output.contains("Apple Pie"));
    }

    let output = capture(|out| lookup(&store, "banana", false, out).unwrap());
    assert_eq!(output, "Found no match.\n");
}

#[test]
fn table_is_sorted_and_aligned() {
    let (_tmp, mut store) = test_store();
    remember(&mut store, "pear", 57.0, "").unwrap();
    remember(&mut store, "apple pie", 296.4, "one slice").unwrap();
    remember(&mut store, "apple", 52.0, "medium").unwrap();

    let output = capture(|out| lookup(&store, "p", false, out).unwrap());
    let expected = "\
Found 3 matches:

name         cal  description
apple         52  medium
apple pie    296  one slice
pear          57  
";
    assert_eq!(output, expected);
}

#[test]
fn exact_lookup_ignores_partial_matches() {
    let (_tmp, mut store) = test_store();
    remember(&mut store, "apple", 52.0, "medium").unwrap();
    remember(&mut store, "apple pie", 296.0, "").unwrap();

    let output = capture(|out| lookup(&store, "apple", true, out).unwrap());
    assert_eq!(output, "Found one match:\n\nname     cal  description\napple     52  medium\n");

    let output = capture(|out| lookup(&store, "Apple", true, out).unwrap());
    assert_eq!(output, "Found no match.\n");
}
