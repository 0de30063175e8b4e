use numerus_kernel::{SAFE_ALPHABET, safe_nanoid};
use std::collections::HashSet;

#[test]
fn default_length_uses_unambiguous_alphabet() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|ch| SAFE_ALPHABET.contains(&ch)), "unexpected character in {id}");
}

#[test]
fn trace_suffix_length() {
    assert_eq!(safe_nanoid!(9).len(), 9);
}

#[test]
fn alphabet_has_no_look_alikes() {
    for ch in ['0', '1', 'I', 'O', 'l'] {
        assert!(!SAFE_ALPHABET.contains(&ch), "{ch} should be excluded");
    }
}

#[test]
fn ids_do_not_repeat() {
    let ids: HashSet<String> = (0..1_000).map(|_| safe_nanoid!()).collect();
    assert_eq!(ids.len(), 1_000);
}
